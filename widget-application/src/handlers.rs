use crate::commands::{CreateWidgetHandler, UpdateWidgetHandler};
use crate::queries::{GetWidgetHandler, ListWidgetsHandler};
use std::sync::Arc;
use widget_domain::persist::WidgetRepository;

/// Widget 资源的全部处理器，共享同一个仓储句柄
///
/// 进程启动时构造一次，之后以引用传入每次请求处理。
pub struct WidgetHandlers {
    pub create: CreateWidgetHandler,
    pub update: UpdateWidgetHandler,
    pub get: GetWidgetHandler,
    pub list: ListWidgetsHandler,
}

impl WidgetHandlers {
    pub fn new(repo: Arc<dyn WidgetRepository>) -> Self {
        Self {
            create: CreateWidgetHandler::new(Arc::clone(&repo)),
            update: UpdateWidgetHandler::new(Arc::clone(&repo)),
            get: GetWidgetHandler::new(Arc::clone(&repo)),
            list: ListWidgetsHandler::new(repo),
        }
    }
}
