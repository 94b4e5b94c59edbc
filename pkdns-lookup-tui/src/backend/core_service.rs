//! 核心服务
//!
//! 封装 pkdns-lookup-core 的服务，
//! 提供给 TUI 层使用的统一接口

use std::sync::Arc;

use pkdns_lookup_core::adapters::{
    default_storage_path, JsonFileStore, NullStore, PkarrClientFactory,
};
use pkdns_lookup_core::services::{ClientPhase, HistoryService, ServiceContext};
use pkdns_lookup_core::traits::KeyValueStore;
use pkdns_lookup_core::types::LifecycleSnapshot;
use pkdns_lookup_core::CoreResult;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use super::clipboard::{ArboardClipboard, Clipboard};
use super::config_service::AppConfig;
use crate::message::{AppMessage, RecordsMessage};

/// TUI 核心服务
///
/// 持有服务上下文、剪贴板和运行时句柄。
/// 查询在运行时上以后台任务执行，结果通过通道回传给主循环。
pub struct CoreService {
    /// 服务上下文（共享客户端 + 公钥历史）
    ctx: Arc<ServiceContext>,
    /// 存储是否可用
    history_available: bool,
    clipboard: Arc<dyn Clipboard>,
    runtime: Handle,
    sender: UnboundedSender<AppMessage>,
}

impl CoreService {
    /// 创建核心服务实例
    pub fn new(
        ctx: ServiceContext,
        history_available: bool,
        clipboard: Arc<dyn Clipboard>,
        runtime: Handle,
        sender: UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            ctx: Arc::new(ctx),
            history_available,
            clipboard,
            runtime,
            sender,
        }
    }

    /// 按配置组装：JSON 文件存储 + pkarr 客户端 + 系统剪贴板
    pub fn from_config(
        config: &AppConfig,
        runtime: Handle,
        sender: UnboundedSender<AppMessage>,
    ) -> Self {
        // 1. 创建存储（无配置目录时历史不可用）
        let store: Arc<dyn KeyValueStore> =
            match config.storage_path.clone().or_else(default_storage_path) {
                Some(path) => {
                    log::info!("Key history stored at {}", path.display());
                    Arc::new(JsonFileStore::new(path))
                }
                None => {
                    log::warn!("No config directory available, key history is disabled");
                    Arc::new(NullStore)
                }
            };
        let history_available = store.is_available();

        // 2. 创建 ServiceContext
        let ctx = ServiceContext::new(Arc::new(PkarrClientFactory), store);

        Self::new(
            ctx,
            history_available,
            Arc::new(ArboardClipboard::new()),
            runtime,
            sender,
        )
    }

    // ========== 公钥历史 ==========

    /// 获取历史服务
    pub fn history(&self) -> &HistoryService {
        &self.ctx.history
    }

    pub fn history_available(&self) -> bool {
        self.history_available
    }

    // ========== 共享客户端 ==========

    /// 客户端生命周期快照
    pub fn client_snapshot(&self) -> LifecycleSnapshot {
        self.ctx.lifecycle.snapshot()
    }

    /// 客户端是否处于构建失败状态
    pub fn client_failed(&self) -> bool {
        self.ctx.lifecycle.phase() == ClientPhase::Failed
    }

    // ========== 查询 ==========

    /// 在后台查询公钥
    pub fn spawn_lookup(&self, key: String) {
        self.spawn_resolve(key, false);
    }

    /// 重建客户端后查询公钥
    pub fn spawn_retry(&self, key: String) {
        self.spawn_resolve(key, true);
    }

    fn spawn_resolve(&self, key: String, rebuild: bool) {
        let ctx = Arc::clone(&self.ctx);
        let sender = self.sender.clone();

        self.runtime.spawn(async move {
            let started = {
                let sender = sender.clone();
                let key = key.clone();
                move || deliver(&sender, RecordsMessage::LookupStarted { key })
            };

            match ctx.lookup(&key, rebuild, started).await {
                Ok(state) => deliver(&sender, RecordsMessage::LookupFinished { key, state }),
                Err(e) => {
                    log::debug!("Lookup for {key} not started: {e}");
                    deliver(&sender, RecordsMessage::ClientFailed { key });
                }
            }
        });
    }

    // ========== 剪贴板 ==========

    pub fn read_clipboard(&self) -> CoreResult<String> {
        self.clipboard.read_text()
    }

    pub fn write_clipboard(&self, text: &str) -> CoreResult<()> {
        self.clipboard.write_text(text)
    }
}

/// 回传结果给主循环（界面已退出时丢弃）
fn deliver(sender: &UnboundedSender<AppMessage>, message: RecordsMessage) {
    if sender.send(AppMessage::Records(message)).is_err() {
        log::debug!("UI channel closed, dropping lookup result");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::test_utils::{create_backend, sample_packet, MockResolverFactory, SAMPLE_KEY};

    async fn next_records_message(
        rx: &mut tokio::sync::mpsc::UnboundedReceiver<AppMessage>,
    ) -> RecordsMessage {
        match rx.recv().await.unwrap() {
            AppMessage::Records(message) => message,
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_lookup_reports_start_and_result() {
        let factory = MockResolverFactory::new().with_packet(sample_packet());
        let (backend, mut rx) = create_backend(factory);
        backend.spawn_lookup(SAMPLE_KEY.to_string());

        assert!(matches!(
            next_records_message(&mut rx).await,
            RecordsMessage::LookupStarted { key } if key == SAMPLE_KEY
        ));
        match next_records_message(&mut rx).await {
            RecordsMessage::LookupFinished { key, state } => {
                assert_eq!(key, SAMPLE_KEY);
                let rows = state.packet().and_then(|p| p.records.as_ref());
                assert_eq!(rows.map(Vec::len), Some(2));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_client_failure_is_reported_then_retry_recovers() {
        let factory = MockResolverFactory::new()
            .with_packet(sample_packet())
            .failing(1);
        let (backend, mut rx) = create_backend(factory);
        backend.spawn_lookup(SAMPLE_KEY.to_string());

        assert!(matches!(
            next_records_message(&mut rx).await,
            RecordsMessage::ClientFailed { .. }
        ));
        assert!(backend.client_failed());
        assert!(backend.client_snapshot().error.is_some());

        backend.spawn_retry(SAMPLE_KEY.to_string());
        assert!(matches!(
            next_records_message(&mut rx).await,
            RecordsMessage::LookupStarted { .. }
        ));
        assert!(!backend.client_failed());
    }
}
