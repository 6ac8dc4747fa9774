//! Widget 实体
//!
//! - `id` 由仓储在创建时分配，此后不可变；
//! - `version` 由仓储维护：创建为 1，每次成功更新恰好加一；
//! - `name` 必填且非空白，`description` 必填（允许为空串）。
//!
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::value_object::{ValueObject, Version};
use std::fmt;

/// Widget 标识类型
pub type WidgetId = u64;

/// 名称最大字符数
pub const MAX_NAME_CHARS: usize = 255;

/// Widget 名称（值对象）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetName(String);

impl WidgetName {
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let name = Self(value.into());
        name.validate()?;
        Ok(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for WidgetName {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.0.trim().is_empty() {
            return Err(DomainError::InvalidValue {
                reason: "name must not be blank".to_string(),
            });
        }
        if self.0.chars().count() > MAX_NAME_CHARS {
            return Err(DomainError::InvalidValue {
                reason: format!("name must be at most {MAX_NAME_CHARS} characters"),
            });
        }
        Ok(())
    }
}

impl fmt::Display for WidgetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    id: Option<WidgetId>,
    name: WidgetName,
    description: String,
    version: Version,
}

impl Widget {
    /// 创建尚未持久化的 Widget（无 id，版本 0）
    pub fn draft(name: impl Into<String>, description: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            id: None,
            name: WidgetName::parse(name)?,
            description: description.into(),
            version: Version::new(),
        })
    }

    /// 从存储中恢复一个已持久化的 Widget
    pub fn restore(
        id: WidgetId,
        name: impl Into<String>,
        description: impl Into<String>,
        version: Version,
    ) -> DomainResult<Self> {
        if version.is_new() {
            return Err(DomainError::InvalidValue {
                reason: format!("persisted widget {id} must have a version above zero"),
            });
        }
        Ok(Self {
            id: Some(id),
            name: WidgetName::parse(name)?,
            description: description.into(),
            version,
        })
    }

    /// 以新字段修订当前 Widget，保持 id 与版本不变（由仓储负责递增）
    pub fn revise(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> DomainResult<Self> {
        Ok(Self {
            id: self.id,
            name: WidgetName::parse(name)?,
            description: description.into(),
            version: self.version,
        })
    }

    /// 仓储写入时打上标识与版本
    pub fn stamped(self, id: WidgetId, version: Version) -> Self {
        Self {
            id: Some(id),
            version,
            ..self
        }
    }

    pub fn name(&self) -> &WidgetName {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Entity for Widget {
    type Id = WidgetId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }

    fn version(&self) -> Version {
        self.version
    }
}
