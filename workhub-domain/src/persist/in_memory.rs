//! 内存仓储实现
//!
//! 基于 `Mutex<HashMap>` 的轻量实现，满足各仓储端口协议。
//! 典型用途：测试环境、示例与本地开发。
//!
use super::{FeedbackRepository, InstallationRepository, SkillRepository};
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::feedback::Feedback;
use crate::installation::Installation;
use crate::skill::Skill;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// 内存版工作区安装仓储
#[derive(Default, Clone)]
pub struct InMemoryInstallationRepo {
    inner: Arc<Mutex<HashMap<String, Installation>>>,
}

#[async_trait]
impl InstallationRepository for InMemoryInstallationRepo {
    async fn find(&self, workspace_id: &str) -> DomainResult<Option<Installation>> {
        let store = self
            .inner
            .lock()
            .map_err(|_| DomainError::repository("installation store poisoned"))?;
        Ok(store.get(workspace_id).cloned())
    }

    async fn save(&self, installation: &Installation) -> DomainResult<()> {
        let mut store = self
            .inner
            .lock()
            .map_err(|_| DomainError::repository("installation store poisoned"))?;
        tracing::debug!(workspace = %installation.id(), "save installation");
        store.insert(installation.id().clone(), installation.clone());
        Ok(())
    }

    async fn remove(&self, workspace_id: &str) -> DomainResult<()> {
        let mut store = self
            .inner
            .lock()
            .map_err(|_| DomainError::repository("installation store poisoned"))?;
        tracing::debug!(workspace = workspace_id, "remove installation");
        store.remove(workspace_id);
        Ok(())
    }
}

/// 内存版技能仓储（`BTreeMap` 保证 `list` 的 slug 排序）
#[derive(Default, Clone)]
pub struct InMemorySkillRepo {
    inner: Arc<Mutex<BTreeMap<String, Skill>>>,
}

impl InMemorySkillRepo {
    /// 当前存量（测试断言用）
    pub fn len(&self) -> usize {
        self.inner.lock().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SkillRepository for InMemorySkillRepo {
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Skill>> {
        let store = self
            .inner
            .lock()
            .map_err(|_| DomainError::repository("skill store poisoned"))?;
        Ok(store.get(slug).cloned())
    }

    async fn save(&self, skill: &Skill) -> DomainResult<()> {
        let mut store = self
            .inner
            .lock()
            .map_err(|_| DomainError::repository("skill store poisoned"))?;
        tracing::debug!(slug = skill.slug(), "save skill");
        store.insert(skill.slug().to_string(), skill.clone());
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<Skill>> {
        let store = self
            .inner
            .lock()
            .map_err(|_| DomainError::repository("skill store poisoned"))?;
        Ok(store.values().cloned().collect())
    }
}

/// 内存版反馈仓储
#[derive(Default, Clone)]
pub struct InMemoryFeedbackRepo {
    inner: Arc<Mutex<HashMap<Uuid, Feedback>>>,
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepo {
    async fn find(&self, id: Uuid) -> DomainResult<Option<Feedback>> {
        let store = self
            .inner
            .lock()
            .map_err(|_| DomainError::repository("feedback store poisoned"))?;
        Ok(store.get(&id).cloned())
    }

    async fn save(&self, feedback: &Feedback) -> DomainResult<()> {
        let mut store = self
            .inner
            .lock()
            .map_err(|_| DomainError::repository("feedback store poisoned"))?;
        tracing::debug!(feedback = %feedback.id(), "save feedback");
        store.insert(*feedback.id(), feedback.clone());
        Ok(())
    }
}
