use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "widget_server=info,widget_application=info,tower_http=info";

/// 初始化 tracing；`RUST_LOG` 优先于默认过滤规则。重复调用不会 panic。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
