//! 反馈提交命令
//!
use crate::{
    command::{Command, CommandOutcome},
    command_handler::CommandHandler,
    context::AppEnv,
    error::AppError,
};
use async_trait::async_trait;
use uuid::Uuid;
use workhub_domain::aggregate::Aggregate;
use workhub_domain::entity::Entity;
use workhub_domain::feedback::Feedback;

/// 提交一条反馈
#[derive(Debug)]
pub struct SubmitFeedback {
    pub workspace_id: String,
    pub body: String,
}

impl Command for SubmitFeedback {
    const NAME: &'static str = "feedback.submit";
    type Result = Uuid;
}

pub struct SubmitFeedbackHandler;

#[async_trait]
impl CommandHandler<SubmitFeedback> for SubmitFeedbackHandler {
    async fn handle(
        &self,
        env: &AppEnv,
        cmd: SubmitFeedback,
    ) -> Result<CommandOutcome<Uuid>, AppError> {
        // 作者取自入口点注入的已认证主体
        let mut feedback =
            Feedback::submit(&cmd.workspace_id, &cmd.body, env.principal.actor_id())?;
        let id = *feedback.id();

        let events = feedback.collect_events();
        env.feedback.save(&feedback).await?;

        Ok(CommandOutcome::with_events(id, events))
    }
}
