//! 结果页视图状态
//!
//! 由客户端生命周期快照与查询状态推导出唯一的展示状态，
//! 前端只需要根据 [`PageView`] 渲染，不再自行组合判断。

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::packet::LookupState;
use super::record::DisplayRecord;
use crate::traits::PacketResolver;

/// 客户端生命周期快照
#[derive(Clone, Default)]
pub struct LifecycleSnapshot {
    pub client: Option<Arc<dyn PacketResolver>>,
    pub loading: bool,
    pub error: Option<String>,
}

impl fmt::Debug for LifecycleSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleSnapshot")
            .field("client", &self.client.as_ref().map(|_| "<resolver>"))
            .field("loading", &self.loading)
            .field("error", &self.error)
            .finish()
    }
}

/// 结果页展示状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    /// 客户端尚未开始构建
    ClientInitializing,
    /// 客户端构建失败（阻塞，需要重试）
    ClientError { message: String },
    /// 客户端构建中或查询进行中
    Loading,
    /// 未找到记录
    Empty,
    Populated {
        rows: Vec<DisplayRecord>,
        last_updated: Option<DateTime<Utc>>,
        compressed_size: Option<usize>,
    },
}

impl PageView {
    /// 推导展示状态
    ///
    /// 优先级：客户端错误 > 加载中 > 有记录 > 空。
    #[must_use]
    pub fn derive(client: &LifecycleSnapshot, lookup: &LookupState) -> Self {
        if let Some(message) = &client.error {
            return Self::ClientError {
                message: message.clone(),
            };
        }
        if client.loading || lookup.is_loading() {
            return Self::Loading;
        }
        match lookup {
            LookupState::Idle if client.client.is_none() => Self::ClientInitializing,
            LookupState::Idle | LookupState::Loading => Self::Loading,
            LookupState::Finished { packet, .. } => match packet {
                Some(packet) if packet.has_records() => Self::Populated {
                    rows: packet.records.clone().unwrap_or_default(),
                    last_updated: packet.last_updated,
                    compressed_size: packet.compressed_size,
                },
                _ => Self::Empty,
            },
        }
    }

    /// 是否应显示骨架行
    #[must_use]
    pub fn shows_skeleton(&self) -> bool {
        matches!(self, Self::Loading | Self::ClientInitializing)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_display_record, StaticResolver};
    use crate::types::{LookupPacket, RecordType};

    fn ready() -> LifecycleSnapshot {
        LifecycleSnapshot {
            client: Some(Arc::new(StaticResolver::empty())),
            loading: false,
            error: None,
        }
    }

    fn finished(records: Option<Vec<DisplayRecord>>) -> LookupState {
        LookupState::Finished {
            packet: Some(LookupPacket {
                records,
                last_updated: None,
                compressed_size: Some(120),
            }),
            diagnostic: None,
        }
    }

    #[test]
    fn test_client_error_wins_over_everything() {
        let snapshot = LifecycleSnapshot {
            client: None,
            loading: true,
            error: Some("boom".to_string()),
        };
        let view = PageView::derive(&snapshot, &LookupState::Loading);
        assert_eq!(
            view,
            PageView::ClientError {
                message: "boom".to_string()
            }
        );
    }

    #[test]
    fn test_loading_when_client_or_lookup_loading() {
        let snapshot = LifecycleSnapshot {
            loading: true,
            ..LifecycleSnapshot::default()
        };
        assert_eq!(
            PageView::derive(&snapshot, &LookupState::Idle),
            PageView::Loading
        );
        assert_eq!(
            PageView::derive(&ready(), &LookupState::Loading),
            PageView::Loading
        );
    }

    #[test]
    fn test_uninitialized_client_shows_initializing() {
        let view = PageView::derive(&LifecycleSnapshot::default(), &LookupState::Idle);
        assert_eq!(view, PageView::ClientInitializing);
        assert!(view.shows_skeleton());
    }

    #[test]
    fn test_populated_and_empty() {
        let rows = vec![sample_display_record("@", RecordType::A, "1.2.3.4")];
        match PageView::derive(&ready(), &finished(Some(rows.clone()))) {
            PageView::Populated {
                rows: got,
                compressed_size,
                ..
            } => {
                assert_eq!(got, rows);
                assert_eq!(compressed_size, Some(120));
            }
            other => panic!("unexpected view: {other:?}"),
        }

        assert_eq!(
            PageView::derive(&ready(), &finished(Some(Vec::new()))),
            PageView::Empty
        );
        assert_eq!(
            PageView::derive(&ready(), &LookupState::not_found()),
            PageView::Empty
        );
    }

    #[test]
    fn test_resolution_error_is_empty_with_diagnostic() {
        let lookup = LookupState::Finished {
            packet: None,
            diagnostic: Some("Resolution error: timeout".to_string()),
        };
        assert_eq!(PageView::derive(&ready(), &lookup), PageView::Empty);
        assert_eq!(lookup.diagnostic(), Some("Resolution error: timeout"));
    }
}
