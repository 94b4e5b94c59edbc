//! 解析客户端生命周期管理
//!
//! 全进程共享一个解析客户端，按需懒加载：
//!
//! ```text
//!                 get()                  构建成功
//!  Uninitialized ──────▶ Initializing ──────────▶ Ready
//!        ▲                    │
//!        │ retry()/reset()    │ 构建失败
//!        └──────────────── Failed ◀┘
//! ```
//!
//! - 同一时刻最多只有一次构建在进行，并发调用方等待同一个 `Shared` future
//! - 状态锁只保护状态标签，从不跨 `.await` 持有
//! - `retry()` 会推进 generation，之前的构建结果到达时直接丢弃

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::{BoxFuture, FutureExt, Shared};

use crate::error::{CoreError, CoreResult};
use crate::traits::{PacketResolver, ResolverFactory};
use crate::types::LifecycleSnapshot;

/// 构建失败后展示给用户的信息
pub const INITIALIZATION_FAILED: &str = "Pkarr client failed to initialize. Press Alt+r to retry.";

type PendingClient = Shared<BoxFuture<'static, CoreResult<Arc<dyn PacketResolver>>>>;

/// 生命周期阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientPhase {
    Uninitialized,
    Initializing,
    Ready,
    Failed,
}

enum LifecycleState {
    Uninitialized,
    Initializing {
        generation: u64,
        pending: PendingClient,
    },
    Ready(Arc<dyn PacketResolver>),
    Failed(String),
}

struct Inner {
    state: LifecycleState,
    generation: u64,
}

/// 解析客户端生命周期管理器
///
/// 由应用根创建，通过 `Arc` 传给所有需要客户端的地方。
pub struct ClientLifecycle {
    factory: Arc<dyn ResolverFactory>,
    inner: Mutex<Inner>,
}

impl ClientLifecycle {
    #[must_use]
    pub fn new(factory: Arc<dyn ResolverFactory>) -> Self {
        Self {
            factory,
            inner: Mutex::new(Inner {
                state: LifecycleState::Uninitialized,
                generation: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 获取共享客户端
    ///
    /// - `Ready`: 直接返回
    /// - `Failed`: 返回初始化失败错误，不会重新构建
    /// - `Initializing`: 等待正在进行的构建
    /// - `Uninitialized`: 启动一次构建（需要 Tokio 运行时）
    pub async fn get(&self) -> CoreResult<Arc<dyn PacketResolver>> {
        let (generation, pending) = {
            let mut inner = self.lock();
            match &inner.state {
                LifecycleState::Ready(client) => return Ok(Arc::clone(client)),
                LifecycleState::Failed(message) => {
                    return Err(CoreError::ClientInitialization(message.clone()));
                }
                LifecycleState::Initializing {
                    generation,
                    pending,
                } => (*generation, pending.clone()),
                LifecycleState::Uninitialized => {
                    if tokio::runtime::Handle::try_current().is_err() {
                        log::warn!("Refusing to build the resolution client outside a Tokio runtime");
                        return Err(CoreError::UnsupportedEnvironment);
                    }

                    let generation = inner.generation;
                    let factory = Arc::clone(&self.factory);
                    let pending = async move { factory.build().await }.boxed().shared();
                    inner.state = LifecycleState::Initializing {
                        generation,
                        pending: pending.clone(),
                    };
                    log::debug!("Resolution client construction started (generation {generation})");
                    (generation, pending)
                }
            }
        };

        let result = pending.await;
        self.settle(generation, &result);
        result.map_err(|_| CoreError::ClientInitialization(INITIALIZATION_FAILED.to_string()))
    }

    /// 构建完成后落定状态，generation 不匹配时丢弃
    fn settle(&self, generation: u64, result: &CoreResult<Arc<dyn PacketResolver>>) {
        let mut inner = self.lock();
        let in_flight = matches!(
            inner.state,
            LifecycleState::Initializing { generation: g, .. } if g == generation
        );
        if !in_flight || inner.generation != generation {
            return;
        }

        inner.state = match result {
            Ok(client) => {
                log::info!("Resolution client ready");
                LifecycleState::Ready(Arc::clone(client))
            }
            Err(e) => {
                log::error!("Failed to initialize resolution client: {e}");
                LifecycleState::Failed(INITIALIZATION_FAILED.to_string())
            }
        };
    }

    /// 重置所有状态（不触发构建）
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.state = LifecycleState::Uninitialized;
    }

    /// 重置后重新构建
    pub async fn retry(&self) -> CoreResult<Arc<dyn PacketResolver>> {
        log::info!("Retrying resolution client initialization");
        self.reset();
        self.get().await
    }

    /// 当前状态快照
    #[must_use]
    pub fn snapshot(&self) -> LifecycleSnapshot {
        let inner = self.lock();
        match &inner.state {
            LifecycleState::Uninitialized => LifecycleSnapshot::default(),
            LifecycleState::Initializing { .. } => LifecycleSnapshot {
                loading: true,
                ..LifecycleSnapshot::default()
            },
            LifecycleState::Ready(client) => LifecycleSnapshot {
                client: Some(Arc::clone(client)),
                ..LifecycleSnapshot::default()
            },
            LifecycleState::Failed(message) => LifecycleSnapshot {
                error: Some(message.clone()),
                ..LifecycleSnapshot::default()
            },
        }
    }

    #[must_use]
    pub fn phase(&self) -> ClientPhase {
        match self.lock().state {
            LifecycleState::Uninitialized => ClientPhase::Uninitialized,
            LifecycleState::Initializing { .. } => ClientPhase::Initializing,
            LifecycleState::Ready(_) => ClientPhase::Ready,
            LifecycleState::Failed(_) => ClientPhase::Failed,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::test_utils::MockResolverFactory;

    #[tokio::test]
    async fn test_get_builds_once_and_reuses() {
        let factory = Arc::new(MockResolverFactory::new());
        let lifecycle = ClientLifecycle::new(factory.clone());

        let first = lifecycle.get().await.unwrap();
        let second = lifecycle.get().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(factory.builds.load(Ordering::SeqCst), 1);
        assert_eq!(lifecycle.phase(), ClientPhase::Ready);
        assert!(lifecycle.snapshot().client.is_some());
    }

    #[tokio::test]
    async fn test_failure_is_sticky_until_retry() {
        let factory = Arc::new(MockResolverFactory::new().failing(1));
        let lifecycle = ClientLifecycle::new(factory.clone());

        let err = lifecycle.get().await.err().unwrap();
        assert_eq!(err.to_string(), INITIALIZATION_FAILED);
        assert_eq!(lifecycle.phase(), ClientPhase::Failed);

        // 失败后再次 get 不会重新构建
        assert!(lifecycle.get().await.is_err());
        assert_eq!(factory.builds.load(Ordering::SeqCst), 1);

        let snapshot = lifecycle.snapshot();
        assert_eq!(snapshot.error.as_deref(), Some(INITIALIZATION_FAILED));
        assert!(!snapshot.loading);
        assert!(snapshot.client.is_none());

        assert!(lifecycle.retry().await.is_ok());
        assert_eq!(factory.builds.load(Ordering::SeqCst), 2);
        assert_eq!(lifecycle.phase(), ClientPhase::Ready);
    }

    #[test]
    fn test_unsupported_without_runtime() {
        let factory = Arc::new(MockResolverFactory::new());
        let lifecycle = ClientLifecycle::new(factory.clone());

        let result = futures::executor::block_on(lifecycle.get());
        assert!(matches!(result, Err(CoreError::UnsupportedEnvironment)));
        assert_eq!(lifecycle.phase(), ClientPhase::Uninitialized);
        assert_eq!(factory.builds.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_snapshot_reports_loading_while_in_flight() {
        let factory = Arc::new(MockResolverFactory::new().gated());
        let lifecycle = Arc::new(ClientLifecycle::new(factory.clone()));

        let task = tokio::spawn({
            let lifecycle = Arc::clone(&lifecycle);
            async move { lifecycle.get().await }
        });
        factory.wait_for_builds(1).await;

        assert!(lifecycle.snapshot().loading);
        assert_eq!(lifecycle.phase(), ClientPhase::Initializing);

        factory.release();
        assert!(task.await.unwrap().is_ok());
        assert!(!lifecycle.snapshot().loading);
    }

    #[tokio::test]
    async fn test_reset_mid_flight_discards_stale_result() {
        let factory = Arc::new(MockResolverFactory::new().gated());
        let lifecycle = Arc::new(ClientLifecycle::new(factory.clone()));

        let task = tokio::spawn({
            let lifecycle = Arc::clone(&lifecycle);
            async move { lifecycle.get().await }
        });
        factory.wait_for_builds(1).await;

        lifecycle.reset();
        factory.release();

        assert!(task.await.unwrap().is_ok());
        assert_eq!(lifecycle.phase(), ClientPhase::Uninitialized);
    }
}
