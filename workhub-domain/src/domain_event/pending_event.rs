use super::domain_event_trait::DomainEvent;
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// 类型擦除的对象接口：在不暴露具体事件类型的前提下保留名称与调试信息
trait ErasedEvent: Send + Sync {
    fn name(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
    fn debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<E> ErasedEvent for E
where
    E: DomainEvent,
{
    fn name(&self) -> &'static str {
        E::NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// 待发事件：聚合缓冲与总线扇出之间的载体
///
/// - 持有事件的所有权（通过 `Arc` 共享给多个订阅者）；
/// - 以 `TypeId` 作为路由键，总线据此查找订阅者；
/// - 保留稳定名称与 `Debug` 信息，供失败隔离时记录诊断上下文。
#[derive(Clone)]
pub struct PendingEvent {
    type_id: TypeId,
    inner: Arc<dyn ErasedEvent>,
}

impl PendingEvent {
    /// 包装一个具体事件
    pub fn new<E>(event: E) -> Self
    where
        E: DomainEvent,
    {
        Self {
            type_id: TypeId::of::<E>(),
            inner: Arc::new(event),
        }
    }

    /// 事件的稳定名称
    pub fn name(&self) -> &'static str {
        self.inner.name()
    }

    /// 路由键：具体事件类型的 `TypeId`
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// 尝试还原为具体事件类型的引用
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: DomainEvent,
    {
        self.inner.as_any().downcast_ref::<E>()
    }
}

impl fmt::Debug for PendingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.inner.name())?;
        self.inner.debug(f)?;
        write!(f, ")")
    }
}
