use crate::{
    command::{Command, CommandOutcome},
    context::AppEnv,
    error::AppError,
};
use async_trait::async_trait;

/// 命令处理器
///
/// 可以访问 `AppEnv` 中的仓储与出站服务；不得为“本应作为事件发出”的
/// 后续工作递归调用总线——扇出图保持单层，便于审计。
#[async_trait]
pub trait CommandHandler<C>: Send + Sync
where
    C: Command,
{
    async fn handle(&self, env: &AppEnv, cmd: C) -> Result<CommandOutcome<C::Result>, AppError>;
}
