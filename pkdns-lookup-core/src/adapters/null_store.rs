//! 不可用存储

use crate::error::CoreResult;
use crate::traits::KeyValueStore;

/// 没有可用持久化存储时使用（例如找不到配置目录）
///
/// 读取总是为空，写入直接丢弃。
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl KeyValueStore for NullStore {
    fn get(&self, _key: &str) -> CoreResult<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> CoreResult<()> {
        Ok(())
    }

    fn delete(&self, _key: &str) -> CoreResult<()> {
        Ok(())
    }

    fn is_available(&self) -> bool {
        false
    }
}
