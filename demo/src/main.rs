//! 演示：在内存适配器上驱动调度核心
//!
//! 依次模拟三类入口点的调用：HTTP（安装、查询、反馈）、
//! 队列（技能摄入及其重投递）与管理操作（卸载）。
//!
use async_trait::async_trait;
use std::sync::Arc;
use workhub_application::bus::MessageBus;
use workhub_application::context::{AppEnv, Principal};
use workhub_application::handlers::feedback::SubmitFeedback;
use workhub_application::handlers::install::{InstallApp, UninstallApp};
use workhub_application::handlers::queries::{GetInstallation, ListSkills};
use workhub_application::handlers::register_all;
use workhub_application::handlers::skills::IngestSkill;
use workhub_domain::error::DomainResult;
use workhub_domain::installation::TokenGrant;
use workhub_domain::persist::{InMemoryFeedbackRepo, InMemoryInstallationRepo, InMemorySkillRepo};
use workhub_domain::service::{ChatNotifier, OAuthExchange};

/// 演示用授权码交换：按约定从授权码生成工作区信息
struct DemoOAuth;

#[async_trait]
impl OAuthExchange for DemoOAuth {
    async fn exchange_code(&self, code: &str) -> DomainResult<TokenGrant> {
        Ok(TokenGrant::builder()
            .workspace_id(format!("W-{}", code.to_uppercase()))
            .workspace_name(format!("Workspace {code}"))
            .access_token(format!("xoxb-{code}"))
            .scope("chat:write".to_string())
            .build())
    }
}

/// 演示用通知器：把消息打印到控制台
struct ConsoleNotifier;

#[async_trait]
impl ChatNotifier for ConsoleNotifier {
    async fn notify(&self, channel: &str, text: &str) -> DomainResult<()> {
        println!("  [{channel}] {text}");
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let bus = MessageBus::new();
    register_all(&bus)?;
    tracing::info!(
        commands = bus.registered_commands().len(),
        queries = bus.registered_queries().len(),
        "dispatch core wired"
    );

    // 每次入口点调用构造一次能力包；演示里复用同一份
    let env = AppEnv::builder()
        .installations(Arc::new(InMemoryInstallationRepo::default()))
        .skills(Arc::new(InMemorySkillRepo::default()))
        .feedback(Arc::new(InMemoryFeedbackRepo::default()))
        .oauth(Arc::new(DemoOAuth))
        .notifier(Arc::new(ConsoleNotifier))
        .principal(
            Principal::builder()
                .maybe_actor_type(Some("user".into()))
                .maybe_actor_id(Some("u-1".into()))
                .build(),
        )
        .build();

    // 安装（HTTP 入口）
    let installation = bus
        .dispatch(
            &env,
            InstallApp {
                code: "acme".to_string(),
            },
        )
        .await?;
    println!("installed: {} ({})", installation.workspace_id, installation.workspace_name);

    // 技能摄入（队列入口），第二次模拟重投递
    for round in 1..=2 {
        let skill = bus
            .dispatch(
                &env,
                IngestSkill {
                    file_key: "inbox/skills/weekly-report.zip".to_string(),
                },
            )
            .await?;
        println!("ingest round {round}: slug={}", skill.slug);
    }

    let skills = bus.dispatch_query(&env, ListSkills).await?;
    println!("catalog size: {}", skills.len());

    // 反馈（HTTP 入口）；订阅者失败（如工作区缺失）不会影响这里的结果
    let feedback_id = bus
        .dispatch(
            &env,
            SubmitFeedback {
                workspace_id: installation.workspace_id.clone(),
                body: "weekly report saves me an hour".to_string(),
            },
        )
        .await?;
    println!("feedback accepted: {feedback_id}");

    // 查询安装记录
    let view = bus
        .dispatch_query(
            &env,
            GetInstallation {
                workspace_id: installation.workspace_id.clone(),
            },
        )
        .await?;
    println!("installed at: {}", view.installed_at);

    // 卸载（管理操作）
    bus.dispatch(
        &env,
        UninstallApp {
            workspace_id: installation.workspace_id.clone(),
        },
    )
    .await?;
    println!("uninstalled: {}", installation.workspace_id);

    Ok(())
}
