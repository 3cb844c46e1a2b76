use workhub_domain::domain_event::PendingEvent;

/// 应用层命令（Command）
///
/// 表达“意图”的写操作请求，通常会修改领域状态。
/// - 与 [`Query`](crate::query::Query) 相对，`Command` 应避免读写混用；
/// - 建议保持语义化的“动宾结构”命名，如 `InstallApp`、`IngestSkill`。
///
/// 关联项：
/// - `NAME`：命令的稳定名称，用于日志、追踪与路由。避免依赖 `type_name::<T>()`。
/// - `Result`：命令执行成功后交还给入口点的结果类型。
pub trait Command: Send + Sync + 'static {
    /// 命令的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;

    /// 命令执行结果类型
    type Result: Send + 'static;
}

/// 命令处理结果：业务返回值加零或多条待扇出事件
///
/// `events` 的插入顺序即总线的扇出顺序；事件只在总线内部消费，
/// 不会随结果暴露给入口点。
#[derive(Debug)]
pub struct CommandOutcome<R> {
    pub result: R,
    pub events: Vec<PendingEvent>,
}

impl<R> CommandOutcome<R> {
    /// 无事件的结果
    pub fn new(result: R) -> Self {
        Self {
            result,
            events: Vec::new(),
        }
    }

    /// 携带事件的结果
    pub fn with_events(result: R, events: Vec<PendingEvent>) -> Self {
        Self { result, events }
    }
}
