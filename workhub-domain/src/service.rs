//! 出站服务端口（Domain Service）
//!
//! 封装不属于单个聚合、依赖外部系统的领域操作，以纯接口方式定义，
//! 由基础设施层提供具体实现（OAuth 提供方、聊天平台客户端等）。
//! 端口失败以 `DomainError::Gateway` 表达，由调用方决定是否可重试。
//!
use crate::error::DomainResult;
use crate::installation::TokenGrant;
use async_trait::async_trait;

/// OAuth 授权码交换：用一次性授权码换取工作区访问令牌
#[async_trait]
pub trait OAuthExchange: Send + Sync {
    async fn exchange_code(&self, code: &str) -> DomainResult<TokenGrant>;
}

/// 聊天平台通知：向指定频道发送一条文本消息
#[async_trait]
pub trait ChatNotifier: Send + Sync {
    async fn notify(&self, channel: &str, text: &str) -> DomainResult<()>;
}
