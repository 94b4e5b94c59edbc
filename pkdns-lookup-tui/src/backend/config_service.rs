//! 配置服务

use std::fs;
use std::io::{self, ErrorKind};
use std::path::PathBuf;

use pkdns_lookup_core::adapters::APP_DIR_NAME;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::view::theme::Theme;

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "config.json";

/// 默认分享链接地址
pub const DEFAULT_SHARE_BASE_URL: &str = "https://pkdns.net";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: Theme,
    pub language: String,
    /// 分享链接的基础地址
    pub share_base_url: String,
    /// 覆盖默认的存储文件位置
    pub storage_path: Option<PathBuf>,
    /// 日志级别（`RUST_LOG` 优先）
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: "en-US".to_string(),
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
            storage_path: None,
            log_level: "info".to_string(),
        }
    }
}

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed config file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    ///
    /// 配置文件不存在时返回默认配置；文件损坏时返回错误，由调用方决定回退。
    fn load(&self) -> Result<AppConfig, ConfigError>;
}

/// 本地配置服务
///
/// 配置文件位于 `<config_dir>/pkdns-lookup/config.json`
pub struct LocalConfigService {
    path: Option<PathBuf>,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self {
            path: dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME)),
        }
    }

    /// 使用指定的配置文件路径
    #[cfg(test)]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        let Some(path) = &self.path else {
            return Ok(AppConfig::default());
        };

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AppConfig::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.clone(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        serde_json::from_str(&content).map_err(|source| ConfigError::Malformed {
            path: path.clone(),
            source,
        })
    }
}
