//! 历史面板消息

/// 历史面板消息
#[derive(Debug, Clone)]
pub enum HistoryMessage {
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 打开选中的公钥
    Open,
    /// 编辑选中条目的标签
    EditTag,
    /// 标签输入字符
    TagInput(char),
    /// 标签粘贴
    TagPaste(String),
    /// 标签删除字符
    TagBackspace,
    /// 保存标签
    SaveTag,
    /// 取消编辑
    CancelEdit,
    /// 从历史中移除选中条目
    Remove,
}
