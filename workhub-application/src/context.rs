//! 应用层上下文（AppEnv）
//!
//! `AppEnv` 是传给每个处理器的不透明能力包：仓储、出站服务与配置。
//! 每次入口点调用（请求、队列投递、定时触发）构造一次并贯穿传递；
//! 总线从不检视其内容，处理器也不得将其延伸到调用之外——
//! 这是纯粹的依赖注入边界，换上假实现即可测试。
//!
use bon::Builder;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use workhub_domain::persist::{FeedbackRepository, InstallationRepository, SkillRepository};
use workhub_domain::service::{ChatNotifier, OAuthExchange};

/// 应用配置
#[derive(Builder, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 技能归档收件箱前缀
    #[builder(default = "inbox/skills/".to_string())]
    pub skills_prefix: String,
    /// 运营通知频道
    #[builder(default = "#ops".to_string())]
    pub ops_channel: String,
    /// 欢迎消息频道
    #[builder(default = "#general".to_string())]
    pub welcome_channel: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// 已认证主体
///
/// 由外围的 HTTP/OAuth 层完成认证后交给总线；这里只承载审计所需的
/// 最小信息，不参与鉴权决策。
#[derive(Builder, Default, Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    /// 主体类型（如用户、系统）
    actor_type: Option<String>,
    /// 主体ID
    actor_id: Option<String>,
    /// 关联ID（链路追踪）
    correlation_id: Option<String>,
}

impl Principal {
    pub fn actor_type(&self) -> Option<&str> {
        self.actor_type.as_deref()
    }

    pub fn actor_id(&self) -> Option<&str> {
        self.actor_id.as_deref()
    }

    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }
}

/// 能力包：一次执行上下文内处理器可用的全部依赖
#[derive(Builder, Clone)]
pub struct AppEnv {
    pub installations: Arc<dyn InstallationRepository>,
    pub skills: Arc<dyn SkillRepository>,
    pub feedback: Arc<dyn FeedbackRepository>,
    pub oauth: Arc<dyn OAuthExchange>,
    pub notifier: Arc<dyn ChatNotifier>,
    #[builder(default)]
    pub config: AppConfig,
    #[builder(default)]
    pub principal: Principal,
}
