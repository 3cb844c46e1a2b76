//! 消息总线（MessageBus）
//!
//! 单进程内的应用调度核心，路由三类消息：
//! - 命令：恰好一个处理器；成功后由总线将其发出的事件按序扇出；
//! - 查询：恰好一个处理器；无扇出；
//! - 事件：零或多个订阅者；订阅者失败在此被记录并吸收。
//!
//! 注册采用 TypeId 键的静态登记（启动时一次写入，此后只读），
//! 运行时以类型擦除（Any）方式调度；重复注册在装配时即被拒绝。
//!
//! 失败隔离是本总线的中心安全不变量：命令/查询错误原样上抛，
//! 事件订阅者错误绝不越过总线边界——触发命令已经成功提交，
//! 因通知失败而重试它只会造成主效果重复。
//!
//! 总线不提供跨处理器的事务语义：每个处理器自行负责其写入的原子性，
//! “主效果已发生、派生处理失败”是预期内、不重试的正常结局。
//!
use crate::{
    command::{Command, CommandOutcome},
    command_handler::CommandHandler,
    context::AppEnv,
    error::AppError,
    event_handler::EventHandler,
    query::Query,
    query_handler::QueryHandler,
};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::any::{Any, TypeId};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use workhub_domain::domain_event::{DomainEvent, PendingEvent};

type BoxAnySend = Box<dyn Any + Send>;

/// 类型擦除后的命令处理结果：业务返回值装箱，事件保持原样
struct ErasedOutcome {
    result: BoxAnySend,
    events: Vec<PendingEvent>,
}

type CmdHandlerFuture<'a> = Pin<Box<dyn Future<Output = Result<ErasedOutcome, AppError>> + Send + 'a>>;

type CmdHandlerFn =
    Arc<dyn for<'a> Fn(BoxAnySend, &'a AppEnv) -> CmdHandlerFuture<'a> + Send + Sync>;

type QueryHandlerFuture<'a> = Pin<Box<dyn Future<Output = Result<BoxAnySend, AppError>> + Send + 'a>>;

type QueryHandlerFn =
    Arc<dyn for<'a> Fn(BoxAnySend, &'a AppEnv) -> QueryHandlerFuture<'a> + Send + Sync>;

type EventHandlerFuture<'a> = Pin<Box<dyn Future<Output = Result<(), AppError>> + Send + 'a>>;

type EventHandlerFn =
    Arc<dyn for<'a> Fn(&'a PendingEvent, &'a AppEnv) -> EventHandlerFuture<'a> + Send + Sync>;

/// 应用消息总线
pub struct MessageBus {
    commands: DashMap<TypeId, (&'static str, CmdHandlerFn)>,
    queries: DashMap<TypeId, (&'static str, QueryHandlerFn)>,
    subscribers: DashMap<TypeId, Vec<(&'static str, EventHandlerFn)>>,
}

impl Default for MessageBus {
    fn default() -> Self {
        Self {
            commands: DashMap::new(),
            queries: DashMap::new(),
            subscribers: DashMap::new(),
        }
    }
}

impl MessageBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册命令处理器（每个命令类型恰好一个，重复注册在装配时被拒绝）
    pub fn register_command<C, H>(&self, handler: Arc<H>) -> Result<(), AppError>
    where
        C: Command,
        H: CommandHandler<C> + 'static,
    {
        let f: CmdHandlerFn = Arc::new(move |boxed_cmd, env| {
            let handler = handler.clone();

            Box::pin(async move {
                // 正常情况下这里的 downcast 永远不会失败（键与闭包同一泛型 C）
                match boxed_cmd.downcast::<C>() {
                    Ok(cmd) => {
                        let CommandOutcome { result, events } = handler.handle(env, *cmd).await?;
                        Ok(ErasedOutcome {
                            result: Box::new(result) as BoxAnySend,
                            events,
                        })
                    }
                    Err(_) => Err(AppError::TypeMismatch {
                        expected: C::NAME,
                        found: "unknown",
                    }),
                }
            })
        });

        match self.commands.entry(TypeId::of::<C>()) {
            Entry::Occupied(_) => Err(AppError::AlreadyRegisteredCommand { command: C::NAME }),
            Entry::Vacant(vacant) => {
                vacant.insert((C::NAME, f));
                Ok(())
            }
        }
    }

    /// 注册查询处理器（每个查询类型恰好一个，重复注册在装配时被拒绝）
    pub fn register_query<Q, H>(&self, handler: Arc<H>) -> Result<(), AppError>
    where
        Q: Query,
        H: QueryHandler<Q> + 'static,
    {
        let f: QueryHandlerFn = Arc::new(move |boxed_query, env| {
            let handler = handler.clone();

            Box::pin(async move {
                match boxed_query.downcast::<Q>() {
                    Ok(query) => {
                        let dto = handler.handle(env, *query).await?;
                        Ok(Box::new(dto) as BoxAnySend)
                    }
                    Err(_) => Err(AppError::TypeMismatch {
                        expected: Q::NAME,
                        found: "unknown",
                    }),
                }
            })
        });

        match self.queries.entry(TypeId::of::<Q>()) {
            Entry::Occupied(_) => Err(AppError::AlreadyRegisteredQuery { query: Q::NAME }),
            Entry::Vacant(vacant) => {
                vacant.insert((Q::NAME, f));
                Ok(())
            }
        }
    }

    /// 订阅某类事件（零或多个订阅者，按订阅顺序调用）
    pub fn subscribe<E, H>(&self, handler: Arc<H>)
    where
        E: DomainEvent,
        H: EventHandler<E> + 'static,
    {
        let name = handler.name();
        let f: EventHandlerFn = Arc::new(move |pending, env| {
            let handler = handler.clone();

            Box::pin(async move {
                match pending.downcast_ref::<E>() {
                    Some(event) => handler.handle(env, event).await,
                    None => Err(AppError::TypeMismatch {
                        expected: E::NAME,
                        found: pending.name(),
                    }),
                }
            })
        });

        self.subscribers
            .entry(TypeId::of::<E>())
            .or_default()
            .push((name, f));
    }

    /// 派发命令
    ///
    /// 1. 按消息类型解析处理器，未注册立即失败；
    /// 2. 处理器失败：错误原样上抛，不进行事件扇出；
    /// 3. 处理器成功：先按发出顺序扇出事件（见 [`Self::fan_out`]），
    ///    再将业务结果交还调用方——事件对调用方不可见。
    pub async fn dispatch<C>(&self, env: &AppEnv, cmd: C) -> Result<C::Result, AppError>
    where
        C: Command,
    {
        let Some(f) = self
            .commands
            .get(&TypeId::of::<C>())
            .map(|entry| entry.value().1.clone())
        else {
            return Err(AppError::UnregisteredHandler(C::NAME));
        };

        let outcome = (f)(Box::new(cmd), env).await?;

        self.fan_out(env, &outcome.events).await;

        match outcome.result.downcast::<C::Result>() {
            Ok(result) => Ok(*result),
            Err(_) => Err(AppError::TypeMismatch {
                expected: C::NAME,
                found: "unknown",
            }),
        }
    }

    /// 派发查询：解析、调用、返回，无事件扇出
    pub async fn dispatch_query<Q>(&self, env: &AppEnv, query: Q) -> Result<Q::Dto, AppError>
    where
        Q: Query,
    {
        let Some(f) = self
            .queries
            .get(&TypeId::of::<Q>())
            .map(|entry| entry.value().1.clone())
        else {
            return Err(AppError::UnregisteredHandler(Q::NAME));
        };

        let out = (f)(Box::new(query), env).await?;

        match out.downcast::<Q::Dto>() {
            Ok(dto) => Ok(*dto),
            Err(_) => Err(AppError::TypeMismatch {
                expected: Q::NAME,
                found: "unknown",
            }),
        }
    }

    /// 事件扇出：严格按发出顺序逐条处理，同一事件按订阅顺序逐个调用
    ///
    /// 订阅者失败在此被吸收：记录事件名、载荷与处理器名后继续。
    /// 无订阅者的事件按契约视为空扇出，不构成错误。
    async fn fan_out(&self, env: &AppEnv, events: &[PendingEvent]) {
        for event in events {
            // 先克隆出订阅者列表，避免跨 await 持有分片锁
            let handlers = self
                .subscribers
                .get(&event.type_id())
                .map(|entry| entry.value().clone())
                .unwrap_or_default();

            if handlers.is_empty() {
                tracing::debug!(event = event.name(), "no subscriber registered");
                continue;
            }

            for (name, f) in &handlers {
                if let Err(err) = (f)(event, env).await {
                    tracing::error!(
                        event = event.name(),
                        payload = ?event,
                        handler = name,
                        error = %err,
                        "event handler failed; absorbed at fan-out boundary",
                    );
                }
            }
        }
    }

    /// 已注册的命令名列表（只读视图）
    pub fn registered_commands(&self) -> Vec<&'static str> {
        self.commands.iter().map(|entry| entry.value().0).collect()
    }

    /// 已注册的查询名列表（只读视图）
    pub fn registered_queries(&self) -> Vec<&'static str> {
        self.queries.iter().map(|entry| entry.value().0).collect()
    }
}
