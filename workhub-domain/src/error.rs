//! 领域层统一错误定义
//!
//! 聚焦命令与状态校验、查找冲突以及端口（仓储/网关）失败的最小必要集合，
//! 便于在各实现层统一转换为 `DomainError`。
//!
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 领域规则/命令与状态 ---
    #[error("invalid command: {reason}")]
    InvalidCommand { reason: String },
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },
    #[error("not found: {reason}")]
    NotFound { reason: String },
    #[error("already exists: {reason}")]
    AlreadyExists { reason: String },

    // --- 端口失败（由调用方决定是否可重试） ---
    #[error("repository error: {reason}")]
    Repository { reason: String },
    #[error("gateway error: {reason}")]
    Gateway { reason: String },
}

impl DomainError {
    pub fn invalid_command(reason: impl Into<String>) -> Self {
        Self::InvalidCommand {
            reason: reason.into(),
        }
    }

    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }

    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    pub fn not_found(reason: impl Into<String>) -> Self {
        Self::NotFound {
            reason: reason.into(),
        }
    }

    pub fn already_exists(reason: impl Into<String>) -> Self {
        Self::AlreadyExists {
            reason: reason.into(),
        }
    }

    pub fn repository(reason: impl Into<String>) -> Self {
        Self::Repository {
            reason: reason.into(),
        }
    }

    pub fn gateway(reason: impl Into<String>) -> Self {
        Self::Gateway {
            reason: reason.into(),
        }
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
