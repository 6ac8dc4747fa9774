use crate::error::DomainResult;
use crate::widget::{Widget, WidgetId};
use async_trait::async_trait;
use std::sync::Arc;

/// Widget 仓储
///
/// 仓储是 id 分配与版本递增的唯一权威：
/// - 未持久化的 Widget 保存时分配下一个 id，版本置为 1；
/// - 已持久化的 Widget 保存时，其版本必须等于存储中的当前版本，
///   否则返回 `DomainError::VersionConflict`；成功后版本恰好加一。
#[async_trait]
pub trait WidgetRepository: Send + Sync {
    /// 按存储的枚举顺序（创建顺序）返回全部 Widget
    async fn find_all(&self) -> DomainResult<Vec<Widget>>;

    async fn find_by_id(&self, id: WidgetId) -> DomainResult<Option<Widget>>;

    async fn save(&self, widget: Widget) -> DomainResult<Widget>;
}

#[async_trait]
impl<T> WidgetRepository for Arc<T>
where
    T: WidgetRepository + ?Sized,
{
    async fn find_all(&self) -> DomainResult<Vec<Widget>> {
        (**self).find_all().await
    }

    async fn find_by_id(&self, id: WidgetId) -> DomainResult<Option<Widget>> {
        (**self).find_by_id(id).await
    }

    async fn save(&self, widget: Widget) -> DomainResult<Widget> {
        (**self).save(widget).await
    }
}
