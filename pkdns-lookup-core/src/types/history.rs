//! 公钥历史记录类型定义

use serde::{Deserialize, Serialize};

/// 历史记录最大条数
pub const RECENT_KEYS_MAX_LENGTH: usize = 10;

/// 历史记录在存储中的命名空间键
pub const HISTORY_STORAGE_KEY: &str = "pkarr-keys";

/// 单条历史记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub key: String,
    /// 用户自定义标签，未设置时为空串
    #[serde(default)]
    pub tag: String,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(key: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            tag: tag.into(),
        }
    }
}

/// 公钥历史（最近访问在前，key 唯一）
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyHistory {
    entries: Vec<HistoryEntry>,
}

impl KeyHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 从存储的 JSON 对象构建（插入顺序即访问顺序）
    #[must_use]
    pub fn from_map(map: &serde_json::Map<String, serde_json::Value>) -> Self {
        let entries = map
            .iter()
            .map(|(key, tag)| HistoryEntry {
                key: key.clone(),
                tag: tag.as_str().unwrap_or_default().to_string(),
            })
            .collect();
        Self { entries }
    }

    /// 转换为存储用的 JSON 对象
    #[must_use]
    pub fn to_map(&self) -> serde_json::Map<String, serde_json::Value> {
        self.entries
            .iter()
            .map(|e| (e.key.clone(), serde_json::Value::String(e.tag.clone())))
            .collect()
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// 移到最前（不存在则插入），保留已有标签，超出上限时淘汰最旧的
    pub fn touch(&mut self, key: &str) {
        let tag = self.take(key).map(|e| e.tag).unwrap_or_default();
        self.entries.insert(0, HistoryEntry::new(key, tag));
        self.entries.truncate(RECENT_KEYS_MAX_LENGTH);
    }

    /// 更新标签，不改变顺序
    ///
    /// 新 key 追加到末尾；若因此超出上限，淘汰除它之外最旧的一条。
    pub fn upsert_tag(&mut self, key: &str, tag: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.tag = tag.to_string();
            return;
        }
        self.entries.truncate(RECENT_KEYS_MAX_LENGTH - 1);
        self.entries.push(HistoryEntry::new(key, tag));
    }

    /// 删除并返回条目
    pub fn take(&mut self, key: &str) -> Option<HistoryEntry> {
        let index = self.entries.iter().position(|e| e.key == key)?;
        Some(self.entries.remove(index))
    }
}

impl IntoIterator for KeyHistory {
    type Item = HistoryEntry;
    type IntoIter = std::vec::IntoIter<HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a KeyHistory {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(i: usize) -> String {
        format!("key-{i}")
    }

    #[test]
    fn test_touch_moves_to_front_and_keeps_tag() {
        let mut history = KeyHistory::new();
        history.touch("a");
        history.touch("b");
        history.upsert_tag("a", "alice");
        history.touch("a");

        let keys: Vec<_> = history.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(history.get("a").map(|e| e.tag.as_str()), Some("alice"));
    }

    #[test]
    fn test_touch_caps_and_evicts_oldest() {
        let mut history = KeyHistory::new();
        for i in 0..=RECENT_KEYS_MAX_LENGTH {
            history.touch(&key(i));
        }
        assert_eq!(history.len(), RECENT_KEYS_MAX_LENGTH);
        assert!(!history.contains(&key(0)));
        assert_eq!(history.entries()[0].key, key(RECENT_KEYS_MAX_LENGTH));
    }

    #[test]
    fn test_upsert_tag_on_full_history_keeps_new_key() {
        let mut history = KeyHistory::new();
        for i in 0..RECENT_KEYS_MAX_LENGTH {
            history.touch(&key(i));
        }
        // 当前顺序: key-9 ... key-0，key-0 最旧
        history.upsert_tag("fresh", "tagged");

        assert_eq!(history.len(), RECENT_KEYS_MAX_LENGTH);
        assert!(!history.contains(&key(0)));
        assert_eq!(history.entries().last().map(|e| e.key.as_str()), Some("fresh"));
    }

    #[test]
    fn test_map_round_trip_preserves_order() {
        let mut history = KeyHistory::new();
        history.touch("z");
        history.touch("a");
        history.touch("m");
        let restored = KeyHistory::from_map(&history.to_map());
        assert_eq!(restored, history);
    }
}
