//! 技能聚合（Skill）
//!
//! 一条技能由投递到收件箱的归档文件（如 `inbox/skills/weekly-report.zip`）
//! 摄入而来。slug 由文件名推导，作为聚合标识；同一文件键重复摄入
//! 推导出同一 slug，这是队列至少一次重投递下幂等落库的基础。
//!
use crate::aggregate::Aggregate;
use crate::domain_event::{DomainEvent, EventBuffer, PendingEvent};
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

const ARCHIVE_SUFFIX: &str = ".zip";

/// 技能已摄入
#[derive(Debug, Clone, PartialEq)]
pub struct SkillIngested {
    pub slug: String,
    pub file_key: String,
}

impl DomainEvent for SkillIngested {
    const NAME: &'static str = "skill.ingested";
}

/// 技能聚合
#[derive(Debug, Clone)]
pub struct Skill {
    slug: String,
    name: String,
    file_key: String,
    ingested_at: DateTime<Utc>,
    events: EventBuffer,
}

impl Skill {
    /// 从归档文件键摄入一条技能
    ///
    /// `prefix` 为收件箱前缀（来自配置）。键必须位于该前缀之下、
    /// 以 `.zip` 结尾且文件名非空、不含子目录；校验失败返回 `InvalidValue`。
    pub fn ingest(file_key: &str, prefix: &str) -> DomainResult<Self> {
        let stem = Self::archive_stem(file_key, prefix)?;
        let slug = stem.to_lowercase().replace('_', "-");

        let mut skill = Self {
            slug,
            name: stem.to_string(),
            file_key: file_key.to_string(),
            ingested_at: Utc::now(),
            events: EventBuffer::default(),
        };

        skill.events.record(SkillIngested {
            slug: skill.slug.clone(),
            file_key: skill.file_key.clone(),
        });

        Ok(skill)
    }

    fn archive_stem<'a>(file_key: &'a str, prefix: &str) -> DomainResult<&'a str> {
        let relative = file_key.strip_prefix(prefix).ok_or_else(|| {
            DomainError::invalid_value(format!("file key outside inbox prefix: {file_key}"))
        })?;
        let stem = relative.strip_suffix(ARCHIVE_SUFFIX).ok_or_else(|| {
            DomainError::invalid_value(format!("not a skill archive: {file_key}"))
        })?;

        if stem.is_empty() {
            return Err(DomainError::invalid_value(format!(
                "archive name is empty: {file_key}"
            )));
        }
        if stem.contains('/') {
            return Err(DomainError::invalid_value(format!(
                "nested archive path not allowed: {file_key}"
            )));
        }

        Ok(stem)
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_key(&self) -> &str {
        &self.file_key
    }

    pub fn ingested_at(&self) -> DateTime<Utc> {
        self.ingested_at
    }
}

impl Entity for Skill {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.slug
    }
}

impl Aggregate for Skill {
    const TYPE: &'static str = "skill";

    fn collect_events(&mut self) -> Vec<PendingEvent> {
        self.events.drain()
    }
}
