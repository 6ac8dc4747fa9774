//! Widget 领域层（widget-domain）
//!
//! 提供 Widget 资源的领域模型与仓储抽象：
//! - 实体（`entity`）与值对象（`value_object`），其中 `Version` 作为乐观锁令牌；
//! - `Widget` 实体本身及其字段校验（`widget`）；
//! - 仓储接口与进程内实现（`persist`），仓储是 id 分配与版本递增的唯一权威；
//! - 统一错误类型（`error`）。
//!
//! 本 crate 不感知 HTTP 与序列化格式，接口层通过应用层的 DTO 与之交互。
//!
pub mod entity;
pub mod error;
pub mod persist;
pub mod value_object;
pub mod widget;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use persist::{InMemoryWidgetRepository, WidgetRepository};
pub use value_object::{ValueObject, Version};
pub use widget::{Widget, WidgetId, WidgetName};
