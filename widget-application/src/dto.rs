use crate::error::AppError;
use serde::{Deserialize, Serialize};
use widget_domain::entity::Entity;
use widget_domain::widget::{Widget, WidgetId};

/// 数据传输对象（DTO）
///
/// - 作为应用层的输出载体，面向接口/外部系统序列化友好；
/// - 与领域模型解耦，避免将领域对象直接暴露到接口层。
pub trait Dto: Serialize + Send + Sync + 'static {}

impl<T: Dto> Dto for Vec<T> {}

impl<T: Dto> Dto for Option<T> {}

/// Widget 的对外表示：`{"id", "name", "description", "version"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetDto {
    pub id: WidgetId,
    pub name: String,
    pub description: String,
    pub version: u64,
}

impl Dto for WidgetDto {}

impl TryFrom<Widget> for WidgetDto {
    type Error = AppError;

    fn try_from(widget: Widget) -> Result<Self, Self::Error> {
        let Some(id) = widget.id().copied() else {
            return Err(AppError::Infra(
                "repository returned a widget without id".to_string(),
            ));
        };
        Ok(Self {
            id,
            name: widget.name().to_string(),
            description: widget.description().to_string(),
            version: widget.version().value(),
        })
    }
}

/// 创建/更新请求体
///
/// 仅读取 `name` 与 `description`；调用方携带的 `id`、`version` 等字段被忽略，
/// 标识与版本始终由仓储决定。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WidgetPayload {
    pub name: String,
    pub description: String,
}
