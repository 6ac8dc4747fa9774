//! Widget 只读查询：按 id 获取与列出全部
//!
use crate::{
    context::AppContext, dto::WidgetDto, error::AppError, query::Query,
    query_handler::QueryHandler,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use widget_domain::persist::WidgetRepository;
use widget_domain::widget::WidgetId;

#[derive(Debug, Clone, Copy)]
pub struct GetWidget {
    pub id: WidgetId,
}

impl Query for GetWidget {
    const NAME: &'static str = "widget.get";
    type Dto = Option<WidgetDto>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListWidgets;

impl Query for ListWidgets {
    const NAME: &'static str = "widget.list";
    type Dto = Vec<WidgetDto>;
}

pub struct GetWidgetHandler {
    repo: Arc<dyn WidgetRepository>,
}

impl GetWidgetHandler {
    pub fn new(repo: Arc<dyn WidgetRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl QueryHandler<GetWidget> for GetWidgetHandler {
    async fn handle(&self, ctx: &AppContext, q: GetWidget) -> Result<Option<WidgetDto>, AppError> {
        let found = self.repo.find_by_id(q.id).await?;
        debug!(
            query = GetWidget::NAME,
            correlation_id = ctx.correlation_id(),
            widget_id = q.id,
            found = found.is_some(),
            "widget lookup"
        );
        found.map(WidgetDto::try_from).transpose()
    }
}

pub struct ListWidgetsHandler {
    repo: Arc<dyn WidgetRepository>,
}

impl ListWidgetsHandler {
    pub fn new(repo: Arc<dyn WidgetRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl QueryHandler<ListWidgets> for ListWidgetsHandler {
    async fn handle(&self, ctx: &AppContext, _q: ListWidgets) -> Result<Vec<WidgetDto>, AppError> {
        let widgets = self.repo.find_all().await?;
        debug!(
            query = ListWidgets::NAME,
            correlation_id = ctx.correlation_id(),
            count = widgets.len(),
            "widgets listed"
        );
        widgets.into_iter().map(WidgetDto::try_from).collect()
    }
}
