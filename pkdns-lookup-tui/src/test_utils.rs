//! 测试工具
//!
//! 解析相关的 mock 来自 core 的 `test-utils`，这里只补充剪贴板和 App 构建。

use std::sync::{Arc, Mutex, PoisonError};

use pkdns_lookup_core::adapters::MemoryStore;
use pkdns_lookup_core::services::ServiceContext;
use pkdns_lookup_core::{CoreError, CoreResult};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::backend::{Clipboard, CoreService};
use crate::message::AppMessage;
use crate::model::App;

pub use pkdns_lookup_core::test_utils::{
    sample_packet, MockResolverFactory, OTHER_KEY, SAMPLE_KEY,
};

// ===== Mock Clipboard =====

/// 内存剪贴板
#[derive(Default)]
pub struct MemoryClipboard {
    text: Mutex<Option<String>>,
    broken: bool,
}

impl MemoryClipboard {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: Mutex::new(Some(text.to_string())),
            broken: false,
        }
    }

    /// 所有操作都失败
    pub fn broken() -> Self {
        Self {
            text: Mutex::default(),
            broken: true,
        }
    }

    pub fn text(&self) -> Option<String> {
        self.text
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn read_text(&self) -> CoreResult<String> {
        if self.broken {
            return Err(CoreError::Clipboard("no clipboard".into()));
        }
        self.text().ok_or_else(|| CoreError::Clipboard("empty".into()))
    }

    fn write_text(&self, text: &str) -> CoreResult<()> {
        if self.broken {
            return Err(CoreError::Clipboard("no clipboard".into()));
        }
        *self.text.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_string());
        Ok(())
    }
}

// ===== Builders =====

/// 创建使用内存存储的后端（需在 Tokio 运行时中调用）
pub fn create_backend(
    factory: MockResolverFactory,
) -> (Arc<CoreService>, UnboundedReceiver<AppMessage>) {
    create_backend_with_clipboard(factory, Arc::new(MemoryClipboard::default()))
}

pub fn create_backend_with_clipboard(
    factory: MockResolverFactory,
    clipboard: Arc<dyn Clipboard>,
) -> (Arc<CoreService>, UnboundedReceiver<AppMessage>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let ctx = ServiceContext::new(Arc::new(factory), Arc::new(MemoryStore::new()));
    let backend = CoreService::new(ctx, true, clipboard, Handle::current(), tx);
    (Arc::new(backend), rx)
}

/// 创建测试用 App
pub fn create_app(factory: MockResolverFactory) -> (App, UnboundedReceiver<AppMessage>) {
    let (backend, rx) = create_backend(factory);
    (App::new(backend, "https://pkdns.net"), rx)
}

/// 创建使用指定剪贴板的测试用 App
pub fn create_app_with_clipboard(
    factory: MockResolverFactory,
    clipboard: Arc<dyn Clipboard>,
) -> (App, UnboundedReceiver<AppMessage>) {
    let (backend, rx) = create_backend_with_clipboard(factory, clipboard);
    (App::new(backend, "https://pkdns.net"), rx)
}
