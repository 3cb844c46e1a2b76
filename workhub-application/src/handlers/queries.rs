//! 只读查询
//!
use crate::{
    context::AppEnv,
    dto::{InstallationDto, SkillDto},
    error::AppError,
    query::Query,
    query_handler::QueryHandler,
};
use async_trait::async_trait;
use workhub_domain::error::DomainError;

/// 查询某工作区的安装记录
#[derive(Debug)]
pub struct GetInstallation {
    pub workspace_id: String,
}

impl Query for GetInstallation {
    const NAME: &'static str = "installation.get";
    type Dto = InstallationDto;
}

pub struct GetInstallationHandler;

#[async_trait]
impl QueryHandler<GetInstallation> for GetInstallationHandler {
    async fn handle(
        &self,
        env: &AppEnv,
        query: GetInstallation,
    ) -> Result<InstallationDto, AppError> {
        let installation = env
            .installations
            .find(&query.workspace_id)
            .await?
            .ok_or_else(|| {
                AppError::Domain(DomainError::not_found(format!(
                    "installation: {}",
                    query.workspace_id
                )))
            })?;

        Ok(InstallationDto::from(&installation))
    }
}

/// 列出全部技能（按 slug 排序）
#[derive(Debug)]
pub struct ListSkills;

impl Query for ListSkills {
    const NAME: &'static str = "skill.list";
    type Dto = Vec<SkillDto>;
}

pub struct ListSkillsHandler;

#[async_trait]
impl QueryHandler<ListSkills> for ListSkillsHandler {
    async fn handle(&self, env: &AppEnv, _query: ListSkills) -> Result<Vec<SkillDto>, AppError> {
        let skills = env.skills.list().await?;
        Ok(skills.iter().map(SkillDto::from).collect())
    }
}
