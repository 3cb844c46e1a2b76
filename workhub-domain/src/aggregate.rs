//! 聚合（Aggregate）抽象
//!
//! 约束一个聚合的核心行为：
//! - 状态变更操作校验输入，失败返回领域错误，成功则向内嵌缓冲区记录事件；
//! - `collect_events` 将缓冲的事件所有权一次性交还给调用方并清空缓冲区；
//! - 通过 `Entity` 约束聚合具备标识。
//!
//! 命令处理器是 `collect_events` 的唯一预期调用方，且每次聚合生命周期步骤
//! 恰好调用一次——紧邻持久化聚合之前或之后，从而建立
//! “持久化状态反映事件”的先行发生关系，而无需字面意义上的事务。
//!
use crate::domain_event::PendingEvent;
use crate::entity::Entity;

/// 聚合根接口
pub trait Aggregate: Entity {
    /// 聚合类型的稳定名称
    const TYPE: &'static str;

    /// 取出并清空缓冲的领域事件
    fn collect_events(&mut self) -> Vec<PendingEvent>;
}
