//! Resolution client abstract Trait

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::ResolvedPacket;

/// Signed packet resolver
///
/// Wraps the external resolution client. Lookup, verification and
/// decompression all happen behind this seam.
#[async_trait]
pub trait PacketResolver: Send + Sync {
    /// Resolve the packet published under `public_key`
    ///
    /// # Returns
    /// * `Ok(Some(packet))` - a packet was found
    /// * `Ok(None)` - nothing is published under this key
    async fn resolve(&self, public_key: &str) -> CoreResult<Option<ResolvedPacket>>;
}

/// Resolver factory
///
/// Construction may fail and may take a while (network bootstrap), so it is async.
#[async_trait]
pub trait ResolverFactory: Send + Sync {
    async fn build(&self) -> CoreResult<Arc<dyn PacketResolver>>;
}
