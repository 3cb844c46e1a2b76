//! 安装/卸载命令
//!
use crate::{
    command::{Command, CommandOutcome},
    command_handler::CommandHandler,
    context::AppEnv,
    dto::InstallationDto,
    error::AppError,
};
use async_trait::async_trait;
use workhub_domain::aggregate::Aggregate;
use workhub_domain::error::DomainError;
use workhub_domain::installation::Installation;

/// 安装应用：用一次性 OAuth 授权码换取令牌并落库
///
/// 同一工作区重复安装视为更新（令牌轮换），不报 `AlreadyExists`。
#[derive(Debug)]
pub struct InstallApp {
    pub code: String,
}

impl Command for InstallApp {
    const NAME: &'static str = "app.install";
    type Result = InstallationDto;
}

pub struct InstallAppHandler;

#[async_trait]
impl CommandHandler<InstallApp> for InstallAppHandler {
    async fn handle(
        &self,
        env: &AppEnv,
        cmd: InstallApp,
    ) -> Result<CommandOutcome<InstallationDto>, AppError> {
        if cmd.code.trim().is_empty() {
            return Err(AppError::Validation("authorization code is empty".into()));
        }

        let grant = env.oauth.exchange_code(&cmd.code).await?;
        let mut installation = Installation::install(grant)?;

        // 先收集事件再保存：落库副本不携带未发出的事件
        let events = installation.collect_events();
        env.installations.save(&installation).await?;

        Ok(CommandOutcome::with_events(
            InstallationDto::from(&installation),
            events,
        ))
    }
}

/// 卸载应用
#[derive(Debug)]
pub struct UninstallApp {
    pub workspace_id: String,
}

impl Command for UninstallApp {
    const NAME: &'static str = "app.uninstall";
    type Result = ();
}

pub struct UninstallAppHandler;

#[async_trait]
impl CommandHandler<UninstallApp> for UninstallAppHandler {
    async fn handle(
        &self,
        env: &AppEnv,
        cmd: UninstallApp,
    ) -> Result<CommandOutcome<()>, AppError> {
        let Some(mut installation) = env.installations.find(&cmd.workspace_id).await? else {
            return Err(AppError::Domain(DomainError::not_found(format!(
                "installation: {}",
                cmd.workspace_id
            ))));
        };

        installation.revoke()?;
        let events = installation.collect_events();
        env.installations.remove(&cmd.workspace_id).await?;

        Ok(CommandOutcome::with_events((), events))
    }
}
