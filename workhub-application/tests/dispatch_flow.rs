//! 端到端派发流程：模拟入口点对总线的调用
//!
//! 覆盖三条具体场景：
//! - A：安装 -> AppInstalled -> 欢迎通知，调用方拿到安装视图；
//! - B：同一技能归档被队列重投递两次，落库与通知都只发生一次；
//! - C：反馈事件订阅者因安装记录缺失而失败，被总线吸收，
//!   后续派发不受影响。
//!
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use workhub_application::bus::MessageBus;
use workhub_application::context::AppEnv;
use workhub_application::error::AppError;
use workhub_application::handlers::feedback::SubmitFeedback;
use workhub_application::handlers::install::{InstallApp, UninstallApp};
use workhub_application::handlers::queries::{GetInstallation, ListSkills};
use workhub_application::handlers::register_all;
use workhub_application::handlers::skills::IngestSkill;
use workhub_domain::error::{DomainError, DomainResult};
use workhub_domain::installation::TokenGrant;
use workhub_domain::persist::{InMemoryFeedbackRepo, InMemoryInstallationRepo, InMemorySkillRepo};
use workhub_domain::service::{ChatNotifier, OAuthExchange};

/// 授权码交换桩：`down` 模拟提供方不可达，其余按约定生成授权结果
struct StubOAuth;

#[async_trait]
impl OAuthExchange for StubOAuth {
    async fn exchange_code(&self, code: &str) -> DomainResult<TokenGrant> {
        if code == "down" {
            return Err(DomainError::gateway("oauth provider unreachable"));
        }
        Ok(TokenGrant::builder()
            .workspace_id(format!("W-{}", code.to_uppercase()))
            .workspace_name(format!("Workspace {code}"))
            .access_token(format!("xoxb-{code}"))
            .scope("chat:write".to_string())
            .build())
    }
}

/// 通知间谍：记录每条 (频道, 文本)
#[derive(Default, Clone)]
struct SpyNotifier {
    sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl SpyNotifier {
    fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatNotifier for SpyNotifier {
    async fn notify(&self, channel: &str, text: &str) -> DomainResult<()> {
        self.sent
            .lock()
            .unwrap()
            .push((channel.to_string(), text.to_string()));
        Ok(())
    }
}

struct Fixture {
    bus: MessageBus,
    env: AppEnv,
    notifier: SpyNotifier,
}

fn fixture() -> Fixture {
    let notifier = SpyNotifier::default();
    let env = AppEnv::builder()
        .installations(Arc::new(InMemoryInstallationRepo::default()))
        .skills(Arc::new(InMemorySkillRepo::default()))
        .feedback(Arc::new(InMemoryFeedbackRepo::default()))
        .oauth(Arc::new(StubOAuth))
        .notifier(Arc::new(notifier.clone()))
        .build();

    let bus = MessageBus::new();
    register_all(&bus).unwrap();

    Fixture { bus, env, notifier }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn scenario_a_install_returns_view_and_sends_welcome() {
    let Fixture { bus, env, notifier } = fixture();

    let installation = bus
        .dispatch(
            &env,
            InstallApp {
                code: "abc".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(installation.workspace_id, "W-ABC");
    assert_eq!(installation.workspace_name, "Workspace abc");
    assert_eq!(installation.scope, "chat:write");

    // AppInstalled 的订阅者恰好被调用一次
    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "#general");
    assert!(sent[0].1.contains("Workspace abc"));

    // 安装记录可查
    let view = bus
        .dispatch_query(
            &env,
            GetInstallation {
                workspace_id: "W-ABC".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(view.workspace_name, "Workspace abc");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn scenario_b_redelivered_ingest_is_idempotent() {
    let Fixture { bus, env, notifier } = fixture();
    let cmd = || IngestSkill {
        file_key: "inbox/skills/weekly-report.zip".to_string(),
    };

    // 两次派发都成功（模拟队列至少一次重投递）
    let first = bus.dispatch(&env, cmd()).await.unwrap();
    let second = bus.dispatch(&env, cmd()).await.unwrap();
    assert_eq!(first.slug, "weekly-report");
    assert_eq!(second.slug, "weekly-report");

    // 落库恰好一条
    let skills = bus.dispatch_query(&env, ListSkills).await.unwrap();
    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0].slug, "weekly-report");

    // 通知副作用也只发生一次（重投递短路，不再发事件）
    let announcements: Vec<_> = notifier
        .sent()
        .into_iter()
        .filter(|(_, text)| text.contains("weekly-report"))
        .collect();
    assert_eq!(announcements.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn scenario_c_feedback_subscriber_failure_is_absorbed() {
    let Fixture { bus, env, notifier } = fixture();

    // 工作区从未安装：订阅者回查失败，但命令本身成功
    let feedback_id = bus
        .dispatch(
            &env,
            SubmitFeedback {
                workspace_id: "W-GHOST".to_string(),
                body: "the bot ate my message".to_string(),
            },
        )
        .await
        .unwrap();
    assert!(!feedback_id.is_nil());

    // 转发订阅者没有发出任何通知
    assert!(notifier.sent().is_empty());

    // 总线保持可用：后续无关派发照常成功
    let skills = bus.dispatch_query(&env, ListSkills).await.unwrap();
    assert!(skills.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn feedback_from_installed_workspace_reaches_ops_channel() {
    let Fixture { bus, env, notifier } = fixture();

    bus.dispatch(
        &env,
        InstallApp {
            code: "abc".to_string(),
        },
    )
    .await
    .unwrap();

    bus.dispatch(
        &env,
        SubmitFeedback {
            workspace_id: "W-ABC".to_string(),
            body: "love the skill catalog".to_string(),
        },
    )
    .await
    .unwrap();

    let ops: Vec<_> = notifier
        .sent()
        .into_iter()
        .filter(|(channel, _)| channel == "#ops")
        .collect();
    assert_eq!(ops.len(), 1);
    assert!(ops[0].1.contains("Workspace abc"));
    assert!(ops[0].1.contains("love the skill catalog"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn oauth_outage_maps_to_retryable_infra_error() {
    let Fixture { bus, env, notifier } = fixture();

    let err = bus
        .dispatch(
            &env,
            InstallApp {
                code: "down".to_string(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Infra(_)));
    assert!(err.is_retryable());

    // 处理器失败：零个事件订阅者被调用，也没有残留状态
    assert!(notifier.sent().is_empty());
    let err = bus
        .dispatch_query(
            &env,
            GetInstallation {
                workspace_id: "W-DOWN".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Domain(_)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn uninstall_removes_record_and_notifies_ops() {
    let Fixture { bus, env, notifier } = fixture();

    bus.dispatch(
        &env,
        InstallApp {
            code: "abc".to_string(),
        },
    )
    .await
    .unwrap();

    bus.dispatch(
        &env,
        UninstallApp {
            workspace_id: "W-ABC".to_string(),
        },
    )
    .await
    .unwrap();

    // 记录已删除
    let err = bus
        .dispatch_query(
            &env,
            GetInstallation {
                workspace_id: "W-ABC".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Domain(DomainError::NotFound { .. })
    ));

    // 告别通报已发出
    assert!(
        notifier
            .sent()
            .iter()
            .any(|(channel, text)| channel == "#ops" && text.contains("W-ABC"))
    );

    // 再次卸载：安装记录已不存在
    let err = bus
        .dispatch(
            &env,
            UninstallApp {
                workspace_id: "W-ABC".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Domain(DomainError::NotFound { .. })
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn malformed_ingest_key_is_rejected_without_side_effects() {
    let Fixture { bus, env, notifier } = fixture();

    let err = bus
        .dispatch(
            &env,
            IngestSkill {
                file_key: "inbox/skills/notes.txt".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(!err.is_retryable());

    assert!(notifier.sent().is_empty());
    let skills = bus.dispatch_query(&env, ListSkills).await.unwrap();
    assert!(skills.is_empty());
}
