//! Widget 写操作：创建与带前置条件的更新
//!
use crate::{
    command::Command, command_handler::CommandHandler, context::AppContext, dto::WidgetDto,
    error::AppError,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};
use widget_domain::entity::Entity;
use widget_domain::error::DomainError;
use widget_domain::persist::WidgetRepository;
use widget_domain::value_object::Version;
use widget_domain::widget::{Widget, WidgetId};

#[derive(Debug, Clone)]
pub struct CreateWidget {
    pub name: String,
    pub description: String,
}

impl Command for CreateWidget {
    const NAME: &'static str = "widget.create";
    type Output = WidgetDto;
}

/// 更新的前置条件（来自 `If-Match`）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// `*`：只要资源存在即可
    Any,
    /// 调用方认为的当前版本
    Version(Version),
}

#[derive(Debug, Clone)]
pub struct UpdateWidget {
    pub id: WidgetId,
    pub name: String,
    pub description: String,
    /// 缺失时拒绝更新
    pub precondition: Option<Precondition>,
}

impl Command for UpdateWidget {
    const NAME: &'static str = "widget.update";
    type Output = WidgetDto;
}

pub struct CreateWidgetHandler {
    repo: Arc<dyn WidgetRepository>,
}

impl CreateWidgetHandler {
    pub fn new(repo: Arc<dyn WidgetRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CommandHandler<CreateWidget> for CreateWidgetHandler {
    async fn handle(&self, ctx: &AppContext, cmd: CreateWidget) -> Result<WidgetDto, AppError> {
        let draft = Widget::draft(cmd.name, cmd.description).map_err(AppError::from_validation)?;
        let created = self.repo.save(draft).await?;

        info!(
            command = CreateWidget::NAME,
            correlation_id = ctx.correlation_id(),
            widget_id = ?created.id(),
            version = created.version().value(),
            "widget created"
        );

        WidgetDto::try_from(created)
    }
}

pub struct UpdateWidgetHandler {
    repo: Arc<dyn WidgetRepository>,
}

impl UpdateWidgetHandler {
    pub fn new(repo: Arc<dyn WidgetRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CommandHandler<UpdateWidget> for UpdateWidgetHandler {
    /// 1. 按 id 加载，不存在直接返回 NotFound（与前置条件无关）；
    /// 2. 校验前置条件：缺失拒绝，版本不符拒绝；
    /// 3. 修订字段后交由仓储保存，仓储在写锁内再次比对版本并递增。
    async fn handle(&self, ctx: &AppContext, cmd: UpdateWidget) -> Result<WidgetDto, AppError> {
        let Some(current) = self.repo.find_by_id(cmd.id).await? else {
            debug!(
                command = UpdateWidget::NAME,
                correlation_id = ctx.correlation_id(),
                widget_id = cmd.id,
                "widget not found"
            );
            return Err(AppError::NotFound(format!("widget {}", cmd.id)));
        };

        let Some(precondition) = cmd.precondition else {
            return Err(AppError::PreconditionRequired {
                command: UpdateWidget::NAME,
            });
        };

        let actual = current.version();
        if let Precondition::Version(expected) = precondition {
            if expected != actual {
                warn!(
                    command = UpdateWidget::NAME,
                    correlation_id = ctx.correlation_id(),
                    widget_id = cmd.id,
                    expected = expected.value(),
                    actual = actual.value(),
                    "stale widget version"
                );
                return Err(AppError::PreconditionFailed {
                    expected: expected.value(),
                    actual: actual.value(),
                });
            }
        }

        let revised = current
            .revise(cmd.name, cmd.description)
            .map_err(AppError::from_validation)?;
        let updated = self.repo.save(revised).await.map_err(|err| match err {
            DomainError::VersionConflict { expected, actual } => {
                AppError::PreconditionFailed { expected, actual }
            }
            other => AppError::Domain(other),
        })?;

        info!(
            command = UpdateWidget::NAME,
            correlation_id = ctx.correlation_id(),
            widget_id = cmd.id,
            version = updated.version().value(),
            "widget updated"
        );

        WidgetDto::try_from(updated)
    }
}
