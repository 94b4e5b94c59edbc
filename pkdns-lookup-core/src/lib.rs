//! PKDNS Lookup Core Library
//!
//! Provides the platform-independent logic of the PKDNS lookup tool, including:
//! - Public key validation
//! - Shared pkarr client lifecycle (lazy, single in-flight construction, retry)
//! - Record mapping into display rows
//! - Recently looked-up key history
//!
//! Storage and the resolution client are abstracted through traits, so the
//! terminal front end and tests can inject their own implementations.

pub mod adapters;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult, KeyValidationError};
pub use services::ServiceContext;
pub use traits::{KeyValueStore, PacketResolver, ResolverFactory};
