//! 具体处理器与装配
//!
//! 每个子模块对应一块业务：安装（`install`）、技能摄入（`skills`）、
//! 反馈（`feedback`）、只读查询（`queries`）与事件订阅者（`notify`）。
//! `register_all` 是唯一的装配入口，在启动时调用一次；
//! 重复注册会在这里立即失败，而不是拖到派发时。
//!
pub mod feedback;
pub mod install;
pub mod notify;
pub mod queries;
pub mod skills;

use crate::{bus::MessageBus, error::AppError};
use std::sync::Arc;
use workhub_domain::feedback::FeedbackSubmitted;
use workhub_domain::installation::{AppInstalled, AppUninstalled};
use workhub_domain::skill::SkillIngested;

use feedback::{SubmitFeedback, SubmitFeedbackHandler};
use install::{InstallApp, InstallAppHandler, UninstallApp, UninstallAppHandler};
use notify::{AnnounceSkill, FarewellOnUninstall, ForwardFeedbackToOps, WelcomeOnInstall};
use queries::{GetInstallation, GetInstallationHandler, ListSkills, ListSkillsHandler};
use skills::{IngestSkill, IngestSkillHandler};

/// 注册本应用的全部处理器与订阅者
pub fn register_all(bus: &MessageBus) -> Result<(), AppError> {
    bus.register_command::<InstallApp, _>(Arc::new(InstallAppHandler))?;
    bus.register_command::<UninstallApp, _>(Arc::new(UninstallAppHandler))?;
    bus.register_command::<IngestSkill, _>(Arc::new(IngestSkillHandler))?;
    bus.register_command::<SubmitFeedback, _>(Arc::new(SubmitFeedbackHandler))?;

    bus.register_query::<GetInstallation, _>(Arc::new(GetInstallationHandler))?;
    bus.register_query::<ListSkills, _>(Arc::new(ListSkillsHandler))?;

    bus.subscribe::<AppInstalled, _>(Arc::new(WelcomeOnInstall));
    bus.subscribe::<SkillIngested, _>(Arc::new(AnnounceSkill));
    bus.subscribe::<FeedbackSubmitted, _>(Arc::new(ForwardFeedbackToOps));
    bus.subscribe::<AppUninstalled, _>(Arc::new(FarewellOnUninstall));

    Ok(())
}
