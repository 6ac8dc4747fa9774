use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::persist::WidgetRepository;
use crate::value_object::Version;
use crate::widget::{Widget, WidgetId};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// 基于内存的 WidgetRepository 实现
/// - id 从 1 开始单调分配
/// - 更新在 `DashMap` 条目写锁内完成“比较版本 + 递增”，同一 id 的写入互斥
#[derive(Debug, Default)]
pub struct InMemoryWidgetRepository {
    widgets: DashMap<WidgetId, Widget>,
    sequence: AtomicU64,
}

impl InMemoryWidgetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以已持久化的 Widget 预置仓储，后续分配的 id 从最大 id 之后继续
    pub fn with_widgets(widgets: impl IntoIterator<Item = Widget>) -> DomainResult<Self> {
        let repo = Self::new();
        for widget in widgets {
            let Some(id) = widget.id().copied() else {
                return Err(DomainError::Repository {
                    reason: "cannot seed a widget without id".to_string(),
                });
            };
            repo.sequence.fetch_max(id, Ordering::SeqCst);
            repo.widgets.insert(id, widget);
        }
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

#[async_trait]
impl WidgetRepository for InMemoryWidgetRepository {
    async fn find_all(&self) -> DomainResult<Vec<Widget>> {
        let mut all: Vec<Widget> = self.widgets.iter().map(|e| e.value().clone()).collect();
        // id 单调分配，按 id 排序即创建顺序
        all.sort_by_key(|w| w.id().copied());
        Ok(all)
    }

    async fn find_by_id(&self, id: WidgetId) -> DomainResult<Option<Widget>> {
        Ok(self.widgets.get(&id).map(|e| e.value().clone()))
    }

    async fn save(&self, widget: Widget) -> DomainResult<Widget> {
        let Some(id) = widget.id().copied() else {
            let id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
            let created = widget.stamped(id, Version::new().next());
            self.widgets.insert(id, created.clone());
            return Ok(created);
        };

        let mut entry = self
            .widgets
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound {
                reason: format!("widget {id}"),
            })?;

        let actual = entry.version();
        if actual != widget.version() {
            return Err(DomainError::VersionConflict {
                expected: widget.version().value(),
                actual: actual.value(),
            });
        }

        let next = actual
            .checked_next()
            .ok_or_else(|| DomainError::InvalidValue {
                reason: format!("widget {id} version {} cannot be incremented", actual.value()),
            })?;
        let updated = widget.stamped(id, next);
        *entry = updated.clone();
        Ok(updated)
    }
}
