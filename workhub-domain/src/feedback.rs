//! 反馈聚合（Feedback）
//!
//! 用户从某个已安装的工作区提交的一条反馈。
//!
use crate::aggregate::Aggregate;
use crate::domain_event::{DomainEvent, EventBuffer, PendingEvent};
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 反馈已提交
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackSubmitted {
    pub feedback_id: Uuid,
    pub workspace_id: String,
    pub body: String,
}

impl DomainEvent for FeedbackSubmitted {
    const NAME: &'static str = "feedback.submitted";
}

/// 反馈聚合
#[derive(Debug, Clone)]
pub struct Feedback {
    id: Uuid,
    workspace_id: String,
    body: String,
    author: Option<String>,
    submitted_at: DateTime<Utc>,
    events: EventBuffer,
}

impl Feedback {
    /// 提交一条反馈
    ///
    /// `author` 来自已认证主体，仅用于审计，可缺省。
    /// 正文与工作区标识不可为空；成功则缓冲一条 `FeedbackSubmitted`。
    pub fn submit(workspace_id: &str, body: &str, author: Option<&str>) -> DomainResult<Self> {
        if workspace_id.trim().is_empty() {
            return Err(DomainError::invalid_value("workspace id is empty"));
        }
        let body = body.trim();
        if body.is_empty() {
            return Err(DomainError::invalid_value("feedback body is empty"));
        }

        let mut feedback = Self {
            id: Uuid::new_v4(),
            workspace_id: workspace_id.to_string(),
            body: body.to_string(),
            author: author.map(str::to_string),
            submitted_at: Utc::now(),
            events: EventBuffer::default(),
        };

        feedback.events.record(FeedbackSubmitted {
            feedback_id: feedback.id,
            workspace_id: feedback.workspace_id.clone(),
            body: feedback.body.clone(),
        });

        Ok(feedback)
    }

    pub fn workspace_id(&self) -> &str {
        &self.workspace_id
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}

impl Entity for Feedback {
    type Id = Uuid;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Aggregate for Feedback {
    const TYPE: &'static str = "feedback";

    fn collect_events(&mut self) -> Vec<PendingEvent> {
        self.events.drain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_buffers_feedback_submitted() {
        let mut feedback = Feedback::submit("W001", "  great bot!  ", Some("u-1")).unwrap();
        assert_eq!(feedback.body(), "great bot!");
        assert_eq!(feedback.author(), Some("u-1"));

        let events = feedback.collect_events();
        assert_eq!(events.len(), 1);
        let submitted = events[0].downcast_ref::<FeedbackSubmitted>().unwrap();
        assert_eq!(submitted.feedback_id, *feedback.id());
        assert_eq!(submitted.workspace_id, "W001");
    }

    #[test]
    fn submit_rejects_blank_input() {
        assert!(matches!(
            Feedback::submit("", "hello", None).unwrap_err(),
            DomainError::InvalidValue { .. }
        ));
        assert!(matches!(
            Feedback::submit("W001", "   ", None).unwrap_err(),
            DomainError::InvalidValue { .. }
        ));
    }
}
