//! 结果页消息

use pkdns_lookup_core::types::LookupState;

/// 结果页消息
///
/// 后台任务回传的消息都带上公钥，页面已切换时据此丢弃过期结果。
#[derive(Debug, Clone)]
pub enum RecordsMessage {
    /// 选择上一行
    SelectPrevious,
    /// 选择下一行
    SelectNext,
    /// 复制分享链接
    CopyShareLink,
    /// 重试（客户端失败时重建客户端，否则重新查询）
    Retry,

    /// 客户端就绪，开始查询
    LookupStarted { key: String },
    /// 查询完成
    LookupFinished { key: String, state: LookupState },
    /// 客户端构建失败
    ClientFailed { key: String },
}
