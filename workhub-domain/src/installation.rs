//! 工作区安装聚合（Installation）
//!
//! 记录应用在某个工作区的安装事实：OAuth 授权结果、令牌与安装时间。
//! 状态变更（安装、撤销）在校验通过后向内嵌缓冲区记录对应事件。
//!
use crate::aggregate::Aggregate;
use crate::domain_event::{DomainEvent, EventBuffer, PendingEvent};
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use bon::Builder;
use chrono::{DateTime, Utc};

/// OAuth 授权码换取的结果（由出站网关返回）
#[derive(Builder, Debug, Clone)]
pub struct TokenGrant {
    workspace_id: String,
    workspace_name: String,
    access_token: String,
    scope: String,
}

/// 应用已安装到某工作区
#[derive(Debug, Clone, PartialEq)]
pub struct AppInstalled {
    pub workspace_id: String,
    pub workspace_name: String,
}

impl DomainEvent for AppInstalled {
    const NAME: &'static str = "app.installed";
}

/// 应用已从某工作区卸载
#[derive(Debug, Clone, PartialEq)]
pub struct AppUninstalled {
    pub workspace_id: String,
}

impl DomainEvent for AppUninstalled {
    const NAME: &'static str = "app.uninstalled";
}

/// 工作区安装聚合
#[derive(Debug, Clone)]
pub struct Installation {
    workspace_id: String,
    workspace_name: String,
    access_token: String,
    scope: String,
    installed_at: DateTime<Utc>,
    revoked: bool,
    events: EventBuffer,
}

impl Installation {
    /// 依据授权结果创建安装记录
    ///
    /// 校验失败返回 `InvalidValue`；成功则缓冲一条 `AppInstalled`。
    pub fn install(grant: TokenGrant) -> DomainResult<Self> {
        if grant.workspace_id.trim().is_empty() {
            return Err(DomainError::invalid_value("workspace id is empty"));
        }
        if grant.access_token.trim().is_empty() {
            return Err(DomainError::invalid_value("access token is empty"));
        }

        let mut installation = Self {
            workspace_id: grant.workspace_id,
            workspace_name: grant.workspace_name,
            access_token: grant.access_token,
            scope: grant.scope,
            installed_at: Utc::now(),
            revoked: false,
            events: EventBuffer::default(),
        };

        installation.events.record(AppInstalled {
            workspace_id: installation.workspace_id.clone(),
            workspace_name: installation.workspace_name.clone(),
        });

        Ok(installation)
    }

    /// 撤销安装（卸载）
    ///
    /// 已撤销的安装不可重复撤销；成功则缓冲一条 `AppUninstalled`。
    pub fn revoke(&mut self) -> DomainResult<()> {
        if self.revoked {
            return Err(DomainError::invalid_state(format!(
                "installation already revoked: {}",
                self.workspace_id
            )));
        }

        self.revoked = true;
        self.events.record(AppUninstalled {
            workspace_id: self.workspace_id.clone(),
        });

        Ok(())
    }

    pub fn workspace_name(&self) -> &str {
        &self.workspace_name
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn installed_at(&self) -> DateTime<Utc> {
        self.installed_at
    }

    pub fn is_revoked(&self) -> bool {
        self.revoked
    }
}

impl Entity for Installation {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.workspace_id
    }
}

impl Aggregate for Installation {
    const TYPE: &'static str = "installation";

    fn collect_events(&mut self) -> Vec<PendingEvent> {
        self.events.drain()
    }
}
