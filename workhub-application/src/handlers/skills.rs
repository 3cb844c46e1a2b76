//! 技能摄入命令
//!
use crate::{
    command::{Command, CommandOutcome},
    command_handler::CommandHandler,
    context::AppEnv,
    dto::SkillDto,
    error::AppError,
};
use async_trait::async_trait;
use workhub_domain::aggregate::Aggregate;
use workhub_domain::skill::Skill;

/// 摄入一条技能归档
///
/// 队列可达：消费者对处理器报错会 nack 重投，因此本命令对
/// 至少一次重投递保持幂等——同一文件键推导同一 slug，已入库则
/// 直接返回现有记录，既不重复落库也不重复发事件。
#[derive(Debug)]
pub struct IngestSkill {
    pub file_key: String,
}

impl Command for IngestSkill {
    const NAME: &'static str = "skill.ingest";
    type Result = SkillDto;
}

pub struct IngestSkillHandler;

#[async_trait]
impl CommandHandler<IngestSkill> for IngestSkillHandler {
    async fn handle(
        &self,
        env: &AppEnv,
        cmd: IngestSkill,
    ) -> Result<CommandOutcome<SkillDto>, AppError> {
        let mut skill = Skill::ingest(&cmd.file_key, &env.config.skills_prefix)?;

        // 重投递短路：已存在则返回现有记录，不再发事件
        if let Some(existing) = env.skills.find_by_slug(skill.slug()).await? {
            return Ok(CommandOutcome::new(SkillDto::from(&existing)));
        }

        let events = skill.collect_events();
        env.skills.save(&skill).await?;

        Ok(CommandOutcome::with_events(SkillDto::from(&skill), events))
    }
}
