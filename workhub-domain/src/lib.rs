//! WorkHub 领域层（workhub-domain）
//!
//! 提供应用调度核心所依赖的领域构件：
//! - 实体（`entity`）与聚合（`aggregate`）建模，聚合自带事件缓冲；
//! - 领域事件（`domain_event`）：事件载荷接口、类型擦除的待发事件与缓冲区；
//! - 仓储端口（`persist`）与出站服务端口（`service`）；
//! - 具体聚合：工作区安装（`installation`）、技能（`skill`）、反馈（`feedback`）。
//!
//! 本 crate 不感知消息总线：聚合只负责在状态变更时记录事件，
//! 事件的扇出与失败隔离由应用层（workhub-application）统一处理。
//!
pub mod aggregate;
pub mod domain_event;
pub mod entity;
pub mod error;
pub mod feedback;
pub mod installation;
pub mod persist;
pub mod service;
pub mod skill;
