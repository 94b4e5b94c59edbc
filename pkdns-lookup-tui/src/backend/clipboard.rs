//! 系统剪贴板

use std::sync::{Mutex, PoisonError};

use pkdns_lookup_core::{CoreError, CoreResult};

/// 剪贴板 trait
pub trait Clipboard: Send + Sync {
    /// 读取文本
    fn read_text(&self) -> CoreResult<String>;

    /// 写入文本
    fn write_text(&self, text: &str) -> CoreResult<()>;
}

/// 基于 arboard 的系统剪贴板
///
/// 首次使用时才连接系统剪贴板，之后复用同一个连接。
/// 在 X11/Wayland 上写入的内容由该连接持有，所以不能每次用完就丢弃。
#[derive(Default)]
pub struct ArboardClipboard {
    inner: Mutex<Option<arboard::Clipboard>>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_clipboard<T>(
        &self,
        f: impl FnOnce(&mut arboard::Clipboard) -> Result<T, arboard::Error>,
    ) -> CoreResult<T> {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let clipboard = match &mut *guard {
            Some(clipboard) => clipboard,
            slot @ None => slot.insert(arboard::Clipboard::new().map_err(clipboard_error)?),
        };
        f(clipboard).map_err(clipboard_error)
    }
}

impl Clipboard for ArboardClipboard {
    fn read_text(&self) -> CoreResult<String> {
        self.with_clipboard(arboard::Clipboard::get_text)
    }

    fn write_text(&self, text: &str) -> CoreResult<()> {
        self.with_clipboard(|clipboard| clipboard.set_text(text))
    }
}

fn clipboard_error(err: arboard::Error) -> CoreError {
    CoreError::Clipboard(err.to_string())
}
