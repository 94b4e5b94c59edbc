//! 业务逻辑服务层

mod client_lifecycle;
mod history_service;
mod key_validator;
mod lookup_service;
mod record_mapper;
mod route;

pub use client_lifecycle::{ClientLifecycle, ClientPhase, INITIALIZATION_FAILED};
pub use history_service::HistoryService;
pub use key_validator::{
    is_valid_public_key, validate_public_key, PUBLIC_KEY_LENGTH, Z_BASE_32_ALPHABET,
};
pub use lookup_service::{timestamp_to_datetime, LookupService};
pub use record_mapper::{format_pkarr_svcb, map_record, map_records, PLACEHOLDER, ZONE_ROOT};
pub use route::{share_link, Route};

use std::sync::Arc;

use crate::traits::{KeyValueStore, ResolverFactory};
use crate::types::LookupState;

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入解析客户端工厂与存储实现。
pub struct ServiceContext {
    /// 共享解析客户端
    pub lifecycle: Arc<ClientLifecycle>,
    /// 公钥历史
    pub history: Arc<HistoryService>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(factory: Arc<dyn ResolverFactory>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            lifecycle: Arc::new(ClientLifecycle::new(factory)),
            history: Arc::new(HistoryService::new(store)),
        }
    }

    /// 等待共享客户端后查询一次
    ///
    /// `rebuild` 为真时先重建客户端。客户端就绪后调用 `on_client_ready`，
    /// 之后才发起查询。客户端不可用时返回错误，由调用方展示为阻塞错误。
    pub async fn lookup(
        &self,
        public_key: &str,
        rebuild: bool,
        on_client_ready: impl FnOnce() + Send,
    ) -> crate::error::CoreResult<LookupState> {
        let resolver = if rebuild {
            self.lifecycle.retry().await?
        } else {
            self.lifecycle.get().await?
        };
        on_client_ready();
        Ok(LookupService::lookup(resolver.as_ref(), public_key).await)
    }
}
