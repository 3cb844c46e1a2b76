//! 事件订阅者：派生通知
//!
//! 这些处理器都位于总线的失败隔离边界之内：报错会被记录并吸收，
//! 绝不影响触发命令的结果。预期内不可重试修复的失败
//! （如安装记录已被删除）直接返回错误交由总线记录即可。
//!
use crate::{context::AppEnv, error::AppError, event_handler::EventHandler};
use async_trait::async_trait;
use workhub_domain::error::DomainError;
use workhub_domain::feedback::FeedbackSubmitted;
use workhub_domain::installation::{AppInstalled, AppUninstalled};
use workhub_domain::skill::SkillIngested;

/// 安装成功后在欢迎频道打招呼
pub struct WelcomeOnInstall;

#[async_trait]
impl EventHandler<AppInstalled> for WelcomeOnInstall {
    fn name(&self) -> &'static str {
        "welcome_on_install"
    }

    async fn handle(&self, env: &AppEnv, event: &AppInstalled) -> Result<(), AppError> {
        env.notifier
            .notify(
                &env.config.welcome_channel,
                &format!("WorkHub is now installed for {}", event.workspace_name),
            )
            .await?;
        Ok(())
    }
}

/// 新技能上线后在运营频道通告
pub struct AnnounceSkill;

#[async_trait]
impl EventHandler<SkillIngested> for AnnounceSkill {
    fn name(&self) -> &'static str {
        "announce_skill"
    }

    async fn handle(&self, env: &AppEnv, event: &SkillIngested) -> Result<(), AppError> {
        env.notifier
            .notify(
                &env.config.ops_channel,
                &format!("skill `{}` is now available", event.slug),
            )
            .await?;
        Ok(())
    }
}

/// 把反馈转发到运营频道
///
/// 需要先回查工作区安装记录以取得显示名；记录缺失属预期内失败，
/// 返回 `NotFound` 由总线记录并吸收。
pub struct ForwardFeedbackToOps;

#[async_trait]
impl EventHandler<FeedbackSubmitted> for ForwardFeedbackToOps {
    fn name(&self) -> &'static str {
        "forward_feedback_to_ops"
    }

    async fn handle(&self, env: &AppEnv, event: &FeedbackSubmitted) -> Result<(), AppError> {
        let Some(installation) = env.installations.find(&event.workspace_id).await? else {
            return Err(AppError::Domain(DomainError::not_found(format!(
                "installation: {}",
                event.workspace_id
            ))));
        };

        env.notifier
            .notify(
                &env.config.ops_channel,
                &format!(
                    "feedback {} from {}: {}",
                    event.feedback_id,
                    installation.workspace_name(),
                    event.body
                ),
            )
            .await?;
        Ok(())
    }
}

/// 卸载后在运营频道通报
pub struct FarewellOnUninstall;

#[async_trait]
impl EventHandler<AppUninstalled> for FarewellOnUninstall {
    fn name(&self) -> &'static str {
        "farewell_on_uninstall"
    }

    async fn handle(&self, env: &AppEnv, event: &AppUninstalled) -> Result<(), AppError> {
        env.notifier
            .notify(
                &env.config.ops_channel,
                &format!("workspace {} uninstalled WorkHub", event.workspace_id),
            )
            .await?;
        Ok(())
    }
}
