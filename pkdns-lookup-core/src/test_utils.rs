//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::error::{CoreError, CoreResult};
use crate::traits::{PacketResolver, ResolverFactory};
use crate::types::{DisplayRecord, RawRData, RawRecord, RecordType, ResolvedPacket};

/// 合法的示例公钥
pub const SAMPLE_KEY: &str = "c6en34wj5dk3zi834ff494jf3wk59nnk3kke393jx6bf6j5kbjwp";

/// 另一个合法的示例公钥
pub const OTHER_KEY: &str = "13456789abcdefghijkmnpqrstwxyz13456789abcdefghijkmnp";

pub fn raw_record(name: &str, ttl: u32, rdata: RawRData) -> RawRecord {
    RawRecord {
        name: name.to_string(),
        ttl,
        rdata,
    }
}

pub fn sample_display_record(name: &str, record_type: RecordType, value: &str) -> DisplayRecord {
    DisplayRecord {
        name: name.to_string(),
        record_type,
        value: value.to_string(),
        ttl: 300,
    }
}

/// 包含一条 A 记录和一条 TXT 记录的示例包
pub fn sample_packet() -> ResolvedPacket {
    ResolvedPacket {
        records: vec![
            raw_record(
                SAMPLE_KEY,
                300,
                RawRData::A {
                    address: Some("192.0.2.1".to_string()),
                },
            ),
            raw_record(
                &format!("_foo.{SAMPLE_KEY}"),
                60,
                RawRData::Txt {
                    value: Some("bar".to_string()),
                },
            ),
        ],
        timestamp_micros: 1_700_000_000_000_000,
        encoded_size: 187,
    }
}

// ===== StaticResolver =====

/// 返回固定结果的解析器
pub struct StaticResolver {
    result: CoreResult<Option<ResolvedPacket>>,
    pub calls: AtomicUsize,
}

impl StaticResolver {
    pub fn empty() -> Self {
        Self::with_result(Ok(None))
    }

    pub fn with_packet(packet: ResolvedPacket) -> Self {
        Self::with_result(Ok(Some(packet)))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_result(Err(CoreError::Resolution(message.to_string())))
    }

    fn with_result(result: CoreResult<Option<ResolvedPacket>>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl PacketResolver for StaticResolver {
    async fn resolve(&self, _public_key: &str) -> CoreResult<Option<ResolvedPacket>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

// ===== MockResolverFactory =====

/// 可计数、可阻塞、可注入失败的解析器工厂
pub struct MockResolverFactory {
    pub builds: AtomicUsize,
    failures_remaining: AtomicUsize,
    gate: Option<Semaphore>,
    packet: Option<ResolvedPacket>,
}

impl Default for MockResolverFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl MockResolverFactory {
    /// 构建出的解析器返回空结果
    pub fn new() -> Self {
        Self {
            builds: AtomicUsize::new(0),
            failures_remaining: AtomicUsize::new(0),
            gate: None,
            packet: None,
        }
    }

    /// 构建出的解析器返回 `packet`
    pub fn with_packet(mut self, packet: ResolvedPacket) -> Self {
        self.packet = Some(packet);
        self
    }

    /// 前 `n` 次构建失败
    pub fn failing(self, n: usize) -> Self {
        self.failures_remaining.store(n, Ordering::SeqCst);
        self
    }

    /// 构建阻塞直到 [`Self::release`]
    pub fn gated(mut self) -> Self {
        self.gate = Some(Semaphore::new(0));
        self
    }

    /// 放行一次阻塞中的构建
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    /// 等待构建次数达到 `n`
    pub async fn wait_for_builds(&self, n: usize) {
        while self.builds.load(Ordering::SeqCst) < n {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl ResolverFactory for MockResolverFactory {
    async fn build(&self) -> CoreResult<Arc<dyn PacketResolver>> {
        self.builds.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            let permit = gate
                .acquire()
                .await
                .map_err(|e| CoreError::ClientInitialization(e.to_string()))?;
            permit.forget();
        }

        let failed = self
            .failures_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failed {
            return Err(CoreError::ClientInitialization(
                "mock build failure".to_string(),
            ));
        }

        Ok(Arc::new(match &self.packet {
            Some(packet) => StaticResolver::with_packet(packet.clone()),
            None => StaticResolver::empty(),
        }))
    }
}
