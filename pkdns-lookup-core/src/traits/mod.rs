//! Storage and resolution abstraction trait definitions

mod key_value_store;
mod resolver;

pub use key_value_store::KeyValueStore;
pub use resolver::{PacketResolver, ResolverFactory};
