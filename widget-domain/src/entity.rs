//! 实体（Entity）基础抽象
//!
//! 为实体提供统一的标识（Id）与版本（optimistic locking）能力。
//!
use std::{fmt::Display, str::FromStr};

use crate::value_object::Version;

/// 具备唯一标识与版本的实体抽象
pub trait Entity: Send + Sync {
    /// 实体标识类型，要求可解析、可显示与可克隆
    type Id: FromStr + Clone + Display;

    /// 获取实体标识；尚未持久化的实体没有标识
    fn id(&self) -> Option<&Self::Id>;

    /// 获取当前版本（用于乐观锁与并发控制）
    fn version(&self) -> Version;

    /// 是否已由仓储持久化（已分配标识）
    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}
