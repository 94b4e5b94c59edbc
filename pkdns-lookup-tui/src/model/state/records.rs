//! 记录结果页状态

use std::time::{Duration, Instant};

use pkdns_lookup_core::types::{LifecycleSnapshot, LookupState, PageView};

/// 复制成功的 ✓ 显示时长
pub const COPIED_TIMEOUT: Duration = Duration::from_secs(2);

/// 加载时显示的骨架行数
pub const SKELETON_ROWS: usize = 8;

/// 记录结果页状态
///
/// 页面对应的公钥保存在 `Page::Records { key }` 中，这里只存数据。
#[derive(Debug, Default)]
pub struct RecordsState {
    /// 本次查询状态
    pub lookup: LookupState,
    /// 共享客户端快照（每个 tick 刷新）
    pub client: LifecycleSnapshot,
    /// 当前选中的行
    pub selected: usize,
    /// 最近一次复制分享链接的时间
    pub copied_at: Option<Instant>,
}

impl RecordsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 推导当前展示状态
    pub fn view(&self) -> PageView {
        PageView::derive(&self.client, &self.lookup)
    }

    fn row_count(&self) -> usize {
        self.lookup
            .packet()
            .and_then(|packet| packet.records.as_ref())
            .map_or(0, Vec::len)
    }

    /// 选择上一行
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一行
    pub fn select_next(&mut self) {
        let len = self.row_count();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// 写入查询结果
    pub fn finish(&mut self, state: LookupState) {
        self.lookup = state;
        self.selected = 0;
    }

    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// ✓ 是否仍在显示
    pub fn show_copied(&self) -> bool {
        self.copied_at.is_some()
    }

    /// 清除超时的 ✓
    pub fn expire_copied(&mut self, now: Instant) {
        if self
            .copied_at
            .is_some_and(|at| now.saturating_duration_since(at) >= COPIED_TIMEOUT)
        {
            self.copied_at = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkdns_lookup_core::types::{DisplayRecord, LookupPacket, RecordType};

    fn row(name: &str) -> DisplayRecord {
        DisplayRecord {
            name: name.to_string(),
            record_type: RecordType::Txt,
            value: "v".to_string(),
            ttl: 300,
        }
    }

    #[test]
    fn test_selection_bounded_by_rows() {
        let mut state = RecordsState::new();
        state.select_next();
        assert_eq!(state.selected, 0);

        state.finish(LookupState::Finished {
            packet: Some(LookupPacket {
                records: Some(vec![row("@"), row("_foo")]),
                last_updated: None,
                compressed_size: Some(64),
            }),
            diagnostic: None,
        });
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 1);
        state.select_previous();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_copied_marker_expires() {
        let mut state = RecordsState::new();
        let now = Instant::now();
        state.mark_copied(now);

        state.expire_copied(now + Duration::from_secs(1));
        assert!(state.show_copied());

        state.expire_copied(now + COPIED_TIMEOUT);
        assert!(!state.show_copied());
    }

    #[test]
    fn test_fresh_state_without_client_is_initializing() {
        assert_eq!(RecordsState::new().view(), PageView::ClientInitializing);
    }
}
