//! DNS 记录类型定义
//!
//! `RawRecord` 是外部解析客户端返回记录的本地投影，
//! `DisplayRecord` 是经过 record mapper 处理后用于表格展示的行。

use std::fmt;

use serde::{Deserialize, Serialize};

/// DNS 记录类型
///
/// 未知类型保留其原始名称，保证映射是全函数。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    A,
    #[serde(rename = "AAAA")]
    Aaaa,
    #[serde(rename = "CNAME")]
    Cname,
    #[serde(rename = "TXT")]
    Txt,
    #[serde(rename = "HTTPS")]
    Https,
    #[serde(rename = "SVCB")]
    Svcb,
    #[serde(rename = "NS")]
    Ns,
    /// 其他记录类型（如 MX、SOA）
    Other(String),
}

impl RecordType {
    /// 已知的记录类型
    pub const KNOWN: [RecordType; 7] = [
        RecordType::A,
        RecordType::Aaaa,
        RecordType::Cname,
        RecordType::Txt,
        RecordType::Https,
        RecordType::Svcb,
        RecordType::Ns,
    ];

    /// 获取记录类型名称（大写形式，用于显示）
    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Txt => "TXT",
            Self::Https => "HTTPS",
            Self::Svcb => "SVCB",
            Self::Ns => "NS",
            Self::Other(name) => name,
        }
    }

    /// 从名称解析（大小写不敏感）
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "A" => Self::A,
            "AAAA" => Self::Aaaa,
            "CNAME" => Self::Cname,
            "TXT" => Self::Txt,
            "HTTPS" => Self::Https,
            "SVCB" => Self::Svcb,
            "NS" => Self::Ns,
            other => Self::Other(other.to_string()),
        }
    }

    /// 获取类型的展示配置，未知类型返回 `None`
    pub fn config(&self) -> Option<&'static RecordTypeConfig> {
        let index = match self {
            Self::A => 0,
            Self::Aaaa => 1,
            Self::Cname => 2,
            Self::Txt => 3,
            Self::Https => 4,
            Self::Svcb => 5,
            Self::Ns => 6,
            Self::Other(_) => return None,
        };
        DNS_RECORD_CONFIGS.get(index)
    }

    /// 徽章颜色 (RGB)，未知类型为灰色
    pub fn badge_color(&self) -> (u8, u8, u8) {
        self.config().map_or(DEFAULT_BADGE_COLOR, |c| c.badge_color)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 记录类型展示配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordTypeConfig {
    pub name: &'static str,
    pub badge_color: (u8, u8, u8),
    pub description: &'static str,
}

/// 未知记录类型的徽章颜色
pub const DEFAULT_BADGE_COLOR: (u8, u8, u8) = (107, 114, 128);

/// 各记录类型的徽章配置，与 [`RecordType::KNOWN`] 顺序一致
pub const DNS_RECORD_CONFIGS: [RecordTypeConfig; 7] = [
    RecordTypeConfig {
        name: "A",
        badge_color: (91, 64, 234),
        description: "IPv4 address record",
    },
    RecordTypeConfig {
        name: "AAAA",
        badge_color: (31, 0, 185),
        description: "IPv6 address record",
    },
    RecordTypeConfig {
        name: "CNAME",
        badge_color: (76, 48, 220),
        description: "Canonical name record",
    },
    RecordTypeConfig {
        name: "TXT",
        badge_color: (46, 16, 192),
        description: "Text record",
    },
    RecordTypeConfig {
        name: "HTTPS",
        badge_color: (61, 32, 206),
        description: "HTTPS service binding",
    },
    RecordTypeConfig {
        name: "SVCB",
        badge_color: (55, 20, 200),
        description: "Service binding record",
    },
    RecordTypeConfig {
        name: "NS",
        badge_color: (40, 12, 178),
        description: "Name server record",
    },
];

/// SVCB / HTTPS 记录数据
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SvcbData {
    pub priority: u16,
    /// 目标名称，根用空串或 `.` 表示
    pub target: String,
    /// `key=value` 参数，保持客户端给出的顺序
    pub params: Vec<(String, String)>,
    /// 客户端库提供的通用格式化文本
    pub generic: Option<String>,
}

/// 原始记录数据
///
/// 每个字段都可能缺失，缺失时由 mapper 回退为 `"-"`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawRData {
    A { address: Option<String> },
    Aaaa { address: Option<String> },
    Cname { target: Option<String> },
    Txt { value: Option<String> },
    Ns { nsdname: Option<String> },
    Https(SvcbData),
    Svcb(SvcbData),
    /// 其他类型：保留类型名与通用文本
    Other {
        type_name: String,
        generic: Option<String>,
    },
}

impl RawRData {
    /// 获取记录类型
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::A { .. } => RecordType::A,
            Self::Aaaa { .. } => RecordType::Aaaa,
            Self::Cname { .. } => RecordType::Cname,
            Self::Txt { .. } => RecordType::Txt,
            Self::Ns { .. } => RecordType::Ns,
            Self::Https(_) => RecordType::Https,
            Self::Svcb(_) => RecordType::Svcb,
            Self::Other { type_name, .. } => RecordType::from_name(type_name),
        }
    }
}

/// 外部客户端返回的原始资源记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// 完整的点分名称，最后一个标签是公钥
    pub name: String,
    pub ttl: u32,
    pub rdata: RawRData,
}

/// 表格展示用的记录行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    /// 去掉公钥后的名称，区域根为 `@`
    pub name: String,
    pub record_type: RecordType,
    pub value: String,
    pub ttl: u32,
}
