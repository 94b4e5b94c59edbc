//! 焦点状态定义

/// 焦点面板枚举（搜索页）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 公钥输入框
    #[default]
    Input,
    /// 历史面板
    History,
}

impl FocusPanel {
    /// 切换到另一个面板
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Input => FocusPanel::History,
            FocusPanel::History => FocusPanel::Input,
        }
    }

    /// 是否是输入框
    pub fn is_input(self) -> bool {
        matches!(self, FocusPanel::Input)
    }

    /// 是否是历史面板
    pub fn is_history(self) -> bool {
        matches!(self, FocusPanel::History)
    }
}
