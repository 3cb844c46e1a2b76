//! 领域事件（Domain Event）
//!
//! 定义事件载荷需要实现的最小接口（`DomainEvent`），以及支撑聚合事件收集
//! 模式的两个构件：
//! - `PendingEvent`：类型擦除后的待发事件载体，总线按具体类型路由；
//! - `EventBuffer`：聚合内嵌的私有事件缓冲区，`drain` 一次性取空。

mod domain_event_trait;
mod event_buffer;
mod pending_event;

pub use domain_event_trait::DomainEvent;
pub use event_buffer::EventBuffer;
pub use pending_event::PendingEvent;
