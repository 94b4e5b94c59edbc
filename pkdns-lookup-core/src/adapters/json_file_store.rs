//! JSON 文件键值存储
//!
//! 整个存储是一个 JSON 对象（命名空间 → 字符串值），
//! 写入时先写临时文件再重命名，避免半写入的文件。

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::{CoreError, CoreResult};
use crate::traits::KeyValueStore;

/// 应用目录名
pub const APP_DIR_NAME: &str = "pkdns-lookup";

/// 存储文件名
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// 默认存储文件路径：`<config_dir>/pkdns-lookup/storage.json`
#[must_use]
pub fn default_storage_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(STORAGE_FILE_NAME))
}

/// 基于 JSON 文件的键值存储
pub struct JsonFileStore {
    path: PathBuf,
    /// 串行化同一进程内的读改写
    lock: Mutex<()>,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> CoreResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, data: &BTreeMap<String, String>) -> CoreResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = serde_json::to_string_pretty(data)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            CoreError::Storage(format!("Failed to replace {}: {e}", self.path.display()))
        })
    }

    fn update(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) -> CoreResult<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut data = match self.load() {
            Ok(data) => data,
            Err(CoreError::Serialization(e)) => {
                log::warn!(
                    "Storage file {} is corrupt, starting over: {e}",
                    self.path.display()
                );
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        f(&mut data);
        self.save(&data)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.update(|data| {
            data.insert(key.to_string(), value.to_string());
        })
    }

    fn delete(&self, key: &str) -> CoreResult<()> {
        self.update(|data| {
            data.remove(key);
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join(STORAGE_FILE_NAME));
        assert_eq!(store.get("pkarr-keys").unwrap(), None);
        assert!(store.is_available());
    }

    #[test]
    fn test_set_get_delete_persist_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(STORAGE_FILE_NAME);

        let store = JsonFileStore::new(&path);
        store.set("a", "1").unwrap();
        store.set("b", r#"{"x":"y"}"#).unwrap();
        store.delete("a").unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get("a").unwrap(), None);
        assert_eq!(reopened.get("b").unwrap().as_deref(), Some(r#"{"x":"y"}"#));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORAGE_FILE_NAME);
        fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.get("a"), Err(CoreError::Serialization(_))));

        // 写入会覆盖损坏的文件
        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
    }
}
