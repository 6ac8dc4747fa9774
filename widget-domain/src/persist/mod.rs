//! 持久化（persist）
//!
//! 定义 Widget 仓储接口及其进程内实现：
//! - `WidgetRepository`：枚举、按 id 查询与保存（创建时分配 id/版本，更新时校验并递增版本）；
//! - `InMemoryWidgetRepository`：基于 `DashMap` 的实现，按 id 串行化写入。
//!
//! 具体存储后端（如数据库）由上层提供实现并注入。
//!
mod inmemory;
mod widget_repository;

pub use inmemory::InMemoryWidgetRepository;
pub use widget_repository::WidgetRepository;
