//! 仓储端口（persist）
//!
//! 定义聚合持久化的最小接口。命令处理器在 `collect_events` 前后调用仓储，
//! 以建立“持久化状态反映事件”的一致性约定；仓储本身不感知事件缓冲。
//!
//! 具体实现由基础设施层提供；`in_memory` 模块内置的内存实现
//! 用于测试环境、示例与本地开发。
//!
pub mod in_memory;

pub use in_memory::{InMemoryFeedbackRepo, InMemoryInstallationRepo, InMemorySkillRepo};

use crate::error::DomainResult;
use crate::feedback::Feedback;
use crate::installation::Installation;
use crate::skill::Skill;
use async_trait::async_trait;
use uuid::Uuid;

/// 工作区安装仓储
#[async_trait]
pub trait InstallationRepository: Send + Sync {
    /// 按工作区标识查找安装记录
    async fn find(&self, workspace_id: &str) -> DomainResult<Option<Installation>>;

    /// 保存安装记录（同一工作区重复保存视为更新，支持令牌轮换）
    async fn save(&self, installation: &Installation) -> DomainResult<()>;

    /// 删除安装记录
    async fn remove(&self, workspace_id: &str) -> DomainResult<()>;
}

/// 技能仓储
#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// 按 slug 查找技能
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Skill>>;

    /// 保存技能（同一 slug 重复保存视为更新）
    async fn save(&self, skill: &Skill) -> DomainResult<()>;

    /// 列出全部技能（按 slug 排序）
    async fn list(&self) -> DomainResult<Vec<Skill>>;
}

/// 反馈仓储
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// 按标识查找反馈
    async fn find(&self, id: Uuid) -> DomainResult<Option<Feedback>>;

    /// 保存一条反馈
    async fn save(&self, feedback: &Feedback) -> DomainResult<()>;
}
