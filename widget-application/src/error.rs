use widget_domain::error::DomainError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("validation: {0}")]
    Validation(String),

    #[error("infra: {0}")]
    Infra(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("precondition required: command={command}")]
    PreconditionRequired { command: &'static str },

    #[error("precondition failed: expected={expected}, actual={actual}")]
    PreconditionFailed { expected: u64, actual: u64 },
}

impl AppError {
    /// 值校验失败归为校验错误，其余领域错误原样包裹
    pub(crate) fn from_validation(err: DomainError) -> Self {
        match err {
            DomainError::InvalidValue { reason } => AppError::Validation(reason),
            other => AppError::Domain(other),
        }
    }
}
