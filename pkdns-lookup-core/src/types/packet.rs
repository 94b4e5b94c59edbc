//! 解析结果包类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{DisplayRecord, RawRecord};

/// 解析客户端返回的签名包投影
///
/// 签名校验与解压都在外部客户端内完成，这里只保留展示需要的字段。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPacket {
    /// 全部资源记录
    pub records: Vec<RawRecord>,
    /// 签名时间戳（自 Unix 纪元起的微秒数）
    pub timestamp_micros: u64,
    /// 编码后的包长度（字节）
    pub encoded_size: usize,
}

/// 一次查询得到的结果包
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupPacket {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<DisplayRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compressed_size: Option<usize>,
}

impl LookupPacket {
    /// 是否包含至少一条记录
    #[must_use]
    pub fn has_records(&self) -> bool {
        self.records.as_ref().is_some_and(|r| !r.is_empty())
    }
}

/// 查询状态
///
/// `Idle` 表示尚未开始，`Finished { packet: None }` 表示未找到，两者不可混淆。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum LookupState {
    #[default]
    Idle,
    Loading,
    Finished {
        packet: Option<LookupPacket>,
        /// 解析失败时的诊断信息（非阻塞展示）
        diagnostic: Option<String>,
    },
}

impl LookupState {
    /// 未找到结果
    #[must_use]
    pub fn not_found() -> Self {
        Self::Finished {
            packet: None,
            diagnostic: None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// 获取结果包（仅完成状态）
    #[must_use]
    pub fn packet(&self) -> Option<&LookupPacket> {
        match self {
            Self::Finished { packet, .. } => packet.as_ref(),
            _ => None,
        }
    }

    /// 获取诊断信息
    #[must_use]
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Finished { diagnostic, .. } => diagnostic.as_deref(),
            _ => None,
        }
    }
}
