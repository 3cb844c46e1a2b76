use crate::{context::AppEnv, error::AppError, query::Query};
use async_trait::async_trait;

#[async_trait]
pub trait QueryHandler<Q>: Send + Sync
where
    Q: Query,
{
    async fn handle(&self, env: &AppEnv, query: Q) -> Result<Q::Dto, AppError>;
}
