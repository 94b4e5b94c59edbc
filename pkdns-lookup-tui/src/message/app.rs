//! 应用主消息枚举

use std::time::Instant;

use super::{HistoryMessage, RecordsMessage, SearchMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换搜索页焦点面板（输入框 / 历史）
    ToggleFocus,

    /// 搜索页消息
    Search(SearchMessage),

    /// 历史面板消息
    History(HistoryMessage),

    /// 结果页消息（含后台任务回传的结果）
    Records(RecordsMessage),

    /// 返回上一页
    GoBack,

    /// 显示帮助
    ShowHelp,

    /// 关闭弹窗
    CloseModal,

    /// 主循环定时器，携带当前时间
    Tick(Instant),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
