//! 公钥历史面板状态

use pkdns_lookup_core::types::{HistoryEntry, KeyHistory};

/// 行内标签编辑器
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEditor {
    /// 正在编辑的公钥
    pub key: String,
    /// 编辑中的标签
    pub buffer: String,
}

/// 公钥历史面板状态
#[derive(Debug, Default)]
pub struct HistoryState {
    /// 历史条目（最近的在前）
    pub entries: Vec<HistoryEntry>,
    /// 当前选中的索引
    pub selected: usize,
    /// 标签编辑器（None 表示未在编辑）
    pub editor: Option<TagEditor>,
    /// 存储是否可用
    pub available: bool,
}

impl HistoryState {
    pub fn new() -> Self {
        Self {
            available: true,
            ..Self::default()
        }
    }

    /// 用最新的历史替换列表，保持选中项在范围内
    pub fn load(&mut self, history: KeyHistory) {
        self.entries = history.into_iter().collect();
        if self.selected >= self.entries.len() {
            self.selected = self.entries.len().saturating_sub(1);
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.entries.is_empty() && self.selected < self.entries.len() - 1 {
            self.selected += 1;
        }
    }

    /// 获取当前选中的条目
    pub fn selected_entry(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.selected)
    }

    /// 为选中条目打开标签编辑器
    pub fn begin_edit(&mut self) {
        self.editor = self.selected_entry().map(|entry| TagEditor {
            key: entry.key.clone(),
            buffer: entry.tag.clone(),
        });
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(keys: &[&str]) -> KeyHistory {
        let mut history = KeyHistory::new();
        for key in keys.iter().rev() {
            history.touch(key);
        }
        history
    }

    #[test]
    fn test_load_clamps_selection() {
        let mut state = HistoryState::new();
        state.load(history(&["a", "b", "c"]));
        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 2);

        state.load(history(&["a"]));
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_entry().map(|e| e.key.as_str()), Some("a"));

        state.load(KeyHistory::new());
        assert_eq!(state.selected, 0);
        assert!(state.selected_entry().is_none());
    }

    #[test]
    fn test_begin_edit_prefills_tag() {
        let mut state = HistoryState::new();
        let mut h = history(&["a"]);
        h.upsert_tag("a", "home");
        state.load(h);

        state.begin_edit();
        assert_eq!(
            state.editor,
            Some(TagEditor {
                key: "a".to_string(),
                buffer: "home".to_string()
            })
        );
    }

    #[test]
    fn test_begin_edit_without_entries_is_noop() {
        let mut state = HistoryState::new();
        state.begin_edit();
        assert!(!state.is_editing());
    }
}
