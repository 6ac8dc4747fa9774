use std::sync::Arc;
use widget_application::WidgetHandlers;
use widget_domain::persist::WidgetRepository;

/// 路由共享状态
#[derive(Clone)]
pub struct AppState {
    pub handlers: Arc<WidgetHandlers>,
}

impl AppState {
    pub fn new(repo: Arc<dyn WidgetRepository>) -> Self {
        Self {
            handlers: Arc::new(WidgetHandlers::new(repo)),
        }
    }
}
