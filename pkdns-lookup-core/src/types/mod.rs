//! 类型定义模块

mod history;
mod packet;
mod record;
mod view;

pub use history::{HistoryEntry, KeyHistory, HISTORY_STORAGE_KEY, RECENT_KEYS_MAX_LENGTH};
pub use packet::{LookupPacket, LookupState, ResolvedPacket};
pub use record::{
    DisplayRecord, RawRData, RawRecord, RecordType, RecordTypeConfig, SvcbData,
    DEFAULT_BADGE_COLOR, DNS_RECORD_CONFIGS,
};
pub use view::{LifecycleSnapshot, PageView};
