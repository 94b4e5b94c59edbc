//! 键值存储抽象 Trait

use crate::error::CoreResult;

/// 键值存储 Trait
///
/// 历史记录等少量本地状态通过此接口持久化，值统一为字符串（通常是 JSON）。
///
/// 平台实现:
/// - TUI: `JsonFileStore`（用户配置目录下的单个 JSON 文件）
/// - 测试: `MemoryStore`
/// - 无可用存储: `NullStore`
pub trait KeyValueStore: Send + Sync {
    /// 读取值
    ///
    /// # Returns
    /// * `Ok(Some(value))` - 键存在
    /// * `Ok(None)` - 键不存在
    fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// 写入值（覆盖）
    fn set(&self, key: &str, value: &str) -> CoreResult<()>;

    /// 删除键，不存在时不报错
    fn delete(&self, key: &str) -> CoreResult<()>;

    /// 存储当前是否可用
    ///
    /// 返回 `false` 时调用方应跳过所有读写。
    fn is_available(&self) -> bool {
        true
    }
}
