//! 公钥历史记录服务
//!
//! 整个历史作为一个 JSON 对象存放在 [`HISTORY_STORAGE_KEY`] 下，
//! 每次操作都读出整份、修改、再整份写回。存储不可用时所有操作都是空操作。

use std::sync::Arc;

use crate::error::CoreResult;
use crate::traits::KeyValueStore;
use crate::types::{KeyHistory, HISTORY_STORAGE_KEY};

/// 公钥历史记录服务
pub struct HistoryService {
    store: Arc<dyn KeyValueStore>,
}

impl HistoryService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// 获取历史（最近访问在前）
    ///
    /// 读取失败或内容损坏时返回空历史。
    #[must_use]
    pub fn list(&self) -> KeyHistory {
        if !self.store.is_available() {
            return KeyHistory::new();
        }
        match self.load() {
            Ok(history) => history,
            Err(e) => {
                log::warn!("Failed to read key history, treating as empty: {e}");
                KeyHistory::new()
            }
        }
    }

    /// 记录一次访问：移到最前，保留标签
    pub fn record_visit(&self, key: &str) {
        self.modify(|history| history.touch(key));
    }

    /// 设置标签，不改变顺序
    pub fn set_tag(&self, key: &str, tag: &str) {
        self.modify(|history| history.upsert_tag(key, tag));
    }

    /// 获取标签
    #[must_use]
    pub fn get_tag(&self, key: &str) -> Option<String> {
        self.list().get(key).map(|e| e.tag.clone())
    }

    /// 删除条目，不存在时什么也不做
    pub fn remove(&self, key: &str) {
        self.modify(|history| {
            history.take(key);
        });
    }

    fn load(&self) -> CoreResult<KeyHistory> {
        let Some(raw) = self.store.get(HISTORY_STORAGE_KEY)? else {
            return Ok(KeyHistory::new());
        };
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&raw)?;
        Ok(KeyHistory::from_map(&map))
    }

    fn save(&self, history: &KeyHistory) -> CoreResult<()> {
        let raw = serde_json::to_string(&history.to_map())?;
        self.store.set(HISTORY_STORAGE_KEY, &raw)
    }

    fn modify(&self, f: impl FnOnce(&mut KeyHistory)) {
        if !self.store.is_available() {
            return;
        }
        let mut history = self.list();
        f(&mut history);
        if let Err(e) = self.save(&history) {
            log::error!("Failed to persist key history: {e}");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::adapters::{MemoryStore, NullStore};
    use crate::types::RECENT_KEYS_MAX_LENGTH;

    fn service() -> (HistoryService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (HistoryService::new(store.clone()), store)
    }

    fn keys(history: &KeyHistory) -> Vec<String> {
        history.entries().iter().map(|e| e.key.clone()).collect()
    }

    #[test]
    fn test_eleven_visits_keep_ten_most_recent() {
        let (service, _) = service();
        for i in 0..=RECENT_KEYS_MAX_LENGTH {
            service.record_visit(&format!("k{i}"));
        }
        let history = service.list();
        assert_eq!(history.len(), RECENT_KEYS_MAX_LENGTH);
        let expected: Vec<String> = (1..=RECENT_KEYS_MAX_LENGTH)
            .rev()
            .map(|i| format!("k{i}"))
            .collect();
        assert_eq!(keys(&history), expected);
    }

    #[test]
    fn test_set_tag_on_unvisited_key_keeps_order() {
        let (service, _) = service();
        service.record_visit("a");
        service.record_visit("b");
        service.set_tag("c", "charlie");

        assert_eq!(keys(&service.list()), ["b", "a", "c"]);
        assert_eq!(service.get_tag("c").as_deref(), Some("charlie"));
        assert_eq!(service.get_tag("a").as_deref(), Some(""));
        assert_eq!(service.get_tag("zzz"), None);
    }

    #[test]
    fn test_revisit_preserves_tag() {
        let (service, _) = service();
        service.record_visit("a");
        service.set_tag("a", "mine");
        service.record_visit("b");
        service.record_visit("a");

        assert_eq!(keys(&service.list()), ["a", "b"]);
        assert_eq!(service.get_tag("a").as_deref(), Some("mine"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (service, _) = service();
        service.record_visit("a");
        service.remove("a");
        service.remove("a");
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_stored_as_ordered_json_object() {
        let (service, store) = service();
        service.record_visit("a");
        service.record_visit("b");
        service.set_tag("a", "x");

        let raw = store.get(HISTORY_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"{"b":"","a":"x"}"#);
    }

    #[test]
    fn test_corrupt_json_reads_as_empty() {
        let (service, store) = service();
        store.set(HISTORY_STORAGE_KEY, "not json").unwrap();
        assert!(service.list().is_empty());

        // 下一次写入覆盖损坏内容
        service.record_visit("a");
        assert_eq!(keys(&service.list()), ["a"]);
    }

    #[test]
    fn test_null_store_is_noop() {
        let service = HistoryService::new(Arc::new(NullStore));
        service.record_visit("a");
        service.set_tag("a", "x");
        service.remove("a");
        assert!(service.list().is_empty());
        assert_eq!(service.get_tag("a"), None);
    }
}
