//! 应用主状态结构

use std::sync::Arc;

use super::{FocusPanel, HistoryState, ModalState, Page, RecordsState, SearchState};
use crate::backend::CoreService;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 搜索页焦点面板
    pub focus: FocusPanel,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 分享链接的基础地址
    pub share_base_url: String,

    // === 各页面状态 ===
    /// 搜索页状态
    pub search: SearchState,
    /// 公钥历史面板状态
    pub history: HistoryState,
    /// 记录结果页状态
    pub records: RecordsState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 后端服务
    pub backend: Arc<CoreService>,
}

impl App {
    /// 创建新的应用实例，并从存储加载公钥历史
    pub fn new(backend: Arc<CoreService>, share_base_url: impl Into<String>) -> Self {
        let mut history = HistoryState::new();
        history.available = backend.history_available();
        history.load(backend.history().list());

        Self {
            should_quit: false,
            focus: FocusPanel::default(),
            current_page: Page::Search,
            status_message: None,
            share_base_url: share_base_url.into(),
            search: SearchState::new(),
            history,
            records: RecordsState::new(),
            modal: ModalState::new(),
            backend,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 从存储重新加载公钥历史
    pub fn reload_history(&mut self) {
        let history = self.backend.history().list();
        self.history.load(history);
    }
}
