//! 领域层统一错误定义
//!
//! 聚焦值校验、仓储访问与版本冲突等最小必要集合，
//! 便于应用层与接口层统一转换。
//!
use thiserror::Error;

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 仓储/持久化 ---
    #[error("repository error: {reason}")]
    Repository { reason: String },
    #[error("version conflict: expected={expected}, actual={actual}")]
    VersionConflict { expected: u64, actual: u64 },

    // --- 领域规则 ---
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },
    #[error("not found: {reason}")]
    NotFound { reason: String },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
