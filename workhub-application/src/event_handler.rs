use crate::{context::AppEnv, error::AppError};
use async_trait::async_trait;
use workhub_domain::domain_event::DomainEvent;

/// 事件处理器：响应一条已发生的领域事件
///
/// 失败对系统非致命：返回的错误在总线扇出边界被记录并吸收，
/// 绝不影响触发命令的结果，也绝不触发命令重试。
/// 确实需要重试语义的后续工作应建模为带幂等键、经总线重新派发的命令，
/// 而不是在事件处理器里抛错。
#[async_trait]
pub trait EventHandler<E>: Send + Sync
where
    E: DomainEvent,
{
    /// 处理器名称（用于失败隔离日志与审计）
    fn name(&self) -> &'static str;

    /// 处理事件
    async fn handle(&self, env: &AppEnv, event: &E) -> Result<(), AppError>;
}
