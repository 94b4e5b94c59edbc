//! Storage and resolution client implementations

mod json_file_store;
mod memory_store;
mod null_store;
#[cfg(feature = "pkarr")]
mod pkarr_resolver;

pub use json_file_store::{default_storage_path, JsonFileStore, APP_DIR_NAME, STORAGE_FILE_NAME};
pub use memory_store::MemoryStore;
pub use null_store::NullStore;
#[cfg(feature = "pkarr")]
pub use pkarr_resolver::{PkarrClientFactory, PkarrResolver};
