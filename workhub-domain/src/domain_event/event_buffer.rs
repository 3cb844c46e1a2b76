use super::domain_event_trait::DomainEvent;
use super::pending_event::PendingEvent;
use std::fmt;

/// 聚合内嵌的事件缓冲区
///
/// 事件只能作为同一聚合上状态变更操作的副作用进入缓冲区；
/// `drain` 原子地取出全部事件并清空缓冲区，任何代码路径都观察不到
/// “半清空”的中间状态。两次 `drain` 之间若无新的状态变更，
/// 第二次返回空序列——这是聚合的至多一次发出契约。
#[derive(Clone, Default)]
pub struct EventBuffer {
    pending: Vec<PendingEvent>,
}

impl EventBuffer {
    /// 记录一条事件（追加到缓冲区末尾，插入顺序即扇出顺序）
    pub fn record<E>(&mut self, event: E)
    where
        E: DomainEvent,
    {
        self.pending.push(PendingEvent::new(event));
    }

    /// 取出全部缓冲事件并清空缓冲区
    pub fn drain(&mut self) -> Vec<PendingEvent> {
        std::mem::take(&mut self.pending)
    }

    /// 当前缓冲的事件数量
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// 判断缓冲区是否为空
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl fmt::Debug for EventBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.pending.iter().map(|e| e.name()))
            .finish()
    }
}
