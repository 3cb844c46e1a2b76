use workhub_domain::error::DomainError;

/// 应用层错误
///
/// 传播策略：命令/查询的错误原样上抛给入口点（由其映射响应状态或
/// 决定队列 nack）；事件处理器的错误在总线扇出边界被吸收，
/// 永远不会以该类型出现在调用方——这是调度核心的中心安全不变量。
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// 派发了未注册处理器的消息类型（程序装配缺陷，绝不重试）
    #[error("unregistered handler: {0}")]
    UnregisteredHandler(&'static str),

    /// 输入不合法（同一输入重试不会成功）
    #[error("validation: {0}")]
    Validation(String),

    /// 领域规则拒绝（不存在、已存在、状态不允许等）
    #[error("domain: {0}")]
    Domain(DomainError),

    /// 外部依赖失败（网络、存储）；队列入口可据此重投
    #[error("infra: {0}")]
    Infra(String),

    #[error("handler already registered: command={command}")]
    AlreadyRegisteredCommand { command: &'static str },

    #[error("handler already registered: query={query}")]
    AlreadyRegisteredQuery { query: &'static str },

    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl AppError {
    /// 队列消费者可据此决定是否 nack 重投
    ///
    /// 只有外部依赖失败值得重试；可达队列的命令处理器因此必须对
    /// 至少一次重投递保持幂等。
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Infra(_))
    }
}

// 领域错误按语义归入应用层分类：
// 输入类 -> Validation；端口失败 -> Infra；其余保持领域错误原样。
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidCommand { reason } | DomainError::InvalidValue { reason } => {
                AppError::Validation(reason)
            }
            DomainError::Repository { reason } | DomainError::Gateway { reason } => {
                AppError::Infra(reason)
            }
            other => AppError::Domain(other),
        }
    }
}
