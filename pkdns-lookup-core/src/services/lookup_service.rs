//! 记录查询服务

use chrono::{DateTime, Utc};

use crate::error::CoreError;
use crate::services::record_mapper::map_records;
use crate::traits::PacketResolver;
use crate::types::{LookupPacket, LookupState, ResolvedPacket};

/// 记录查询服务
///
/// 一次查询只调用一次解析，不做超时与重试。解析失败按"未找到"处理，
/// 错误信息保留在 `diagnostic` 中。
pub struct LookupService;

impl LookupService {
    /// 查询公钥下发布的记录
    pub async fn lookup(resolver: &dyn PacketResolver, public_key: &str) -> LookupState {
        match resolver.resolve(public_key).await {
            Ok(Some(packet)) => LookupState::Finished {
                packet: Some(Self::to_lookup_packet(&packet, public_key)),
                diagnostic: None,
            },
            Ok(None) => {
                log::info!("No packet published under {public_key}");
                LookupState::not_found()
            }
            Err(e) => {
                Self::log_error(public_key, &e);
                LookupState::Finished {
                    packet: None,
                    diagnostic: Some(e.to_string()),
                }
            }
        }
    }

    /// 转换为展示用结果包
    #[must_use]
    pub fn to_lookup_packet(packet: &ResolvedPacket, public_key: &str) -> LookupPacket {
        LookupPacket {
            records: Some(map_records(&packet.records, public_key)),
            last_updated: timestamp_to_datetime(packet.timestamp_micros),
            compressed_size: Some(packet.encoded_size),
        }
    }

    fn log_error(public_key: &str, e: &CoreError) {
        if e.is_expected() {
            log::warn!("Lookup for {public_key} failed: {e}");
        } else {
            log::error!("Lookup for {public_key} failed: {e}");
        }
    }
}

/// 微秒时间戳转换为 UTC 时间，超出范围返回 `None`
#[must_use]
pub fn timestamp_to_datetime(micros: u64) -> Option<DateTime<Utc>> {
    i64::try_from(micros)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_micros)
}
