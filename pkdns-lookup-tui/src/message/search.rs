//! 搜索页消息

/// 搜索页消息
#[derive(Debug, Clone)]
pub enum SearchMessage {
    /// 聚焦输入框（Ctrl+K）
    Focus,
    /// 离开输入框并清除错误
    Blur,
    /// 输入字符
    Input(char),
    /// 删除字符
    Backspace,
    /// 提交并解析
    Submit,
    /// 终端粘贴（bracketed paste）
    Paste(String),
    /// 从系统剪贴板粘贴
    PasteFromClipboard,
    /// 关闭校验提示
    DismissAlert,
}
