use std::fmt;

/// 领域事件载荷需要满足的通用能力边界
///
/// 事件描述“已经发生的事实”，命名使用过去式；一经构造不可变。
pub trait DomainEvent: fmt::Debug + Send + Sync + 'static {
    /// 事件的稳定名称（建议常量字符串，不随重构变化）
    ///
    /// 用于日志、失败隔离与审计。避免依赖 `type_name::<T>()`。
    const NAME: &'static str;
}
