use chrono::{DateTime, Utc};
use serde::Serialize;
use workhub_domain::entity::Entity;
use workhub_domain::installation::Installation;
use workhub_domain::skill::Skill;

/// 数据传输对象（DTO）
///
/// - 作为应用层的输出载体，面向接口/外部系统序列化友好；
/// - 与领域模型解耦，避免将领域对象直接暴露到接口层。
pub trait Dto: Serialize + Send + Sync + 'static {}

impl<T> Dto for Vec<T> where T: Dto {}

/// 工作区安装视图
#[derive(Debug, Clone, Serialize)]
pub struct InstallationDto {
    pub workspace_id: String,
    pub workspace_name: String,
    pub scope: String,
    pub installed_at: DateTime<Utc>,
}

impl Dto for InstallationDto {}

impl From<&Installation> for InstallationDto {
    fn from(installation: &Installation) -> Self {
        Self {
            workspace_id: installation.id().clone(),
            workspace_name: installation.workspace_name().to_string(),
            scope: installation.scope().to_string(),
            installed_at: installation.installed_at(),
        }
    }
}

/// 技能视图
#[derive(Debug, Clone, Serialize)]
pub struct SkillDto {
    pub slug: String,
    pub name: String,
    pub file_key: String,
    pub ingested_at: DateTime<Utc>,
}

impl Dto for SkillDto {}

impl From<&Skill> for SkillDto {
    fn from(skill: &Skill) -> Self {
        Self {
            slug: skill.slug().to_string(),
            name: skill.name().to_string(),
            file_key: skill.file_key().to_string(),
            ingested_at: skill.ingested_at(),
        }
    }
}
