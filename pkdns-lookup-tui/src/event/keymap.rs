//! 快捷键配置
//!
//! 定义可配置的快捷键映射（未来可支持用户自定义）

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const SWITCH_PANEL: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 搜索
    pub const FOCUS_SEARCH: KeyBinding = KeyBinding::ctrl(KeyCode::Char('k'));
    pub const PASTE: KeyBinding = KeyBinding::alt(KeyCode::Char('v'));
    pub const SUBMIT: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const DISMISS_ALERT: KeyBinding = KeyBinding::key(KeyCode::Char('x'));

    // 历史
    pub const NAV_UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const NAV_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const NAV_CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const EDIT_TAG: KeyBinding = KeyBinding::alt(KeyCode::Char('t'));
    pub const REMOVE: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));

    // 结果页
    pub const COPY_LINK: KeyBinding = KeyBinding::alt(KeyCode::Char('c'));
    pub const RETRY: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
}
