//! Record Store
//!
//! Collections are persisted as JSON documents under string keys of a [`KeyValueStore`].

use std::{fmt, io};

use mockall::automock;
use thiserror::Error;

mod file;
mod memory;
mod records;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use records::{Record, RecordStore};

/// Errors raised by a key-value backend or while encoding collections.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access storage")]
    Io(#[from] io::Error),

    #[error("failed to encode or decode stored data")]
    Json(#[from] serde_json::Error),

    #[error("storage lock poisoned")]
    Poisoned,

    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// Keys under which the collections are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Reports,
    Products,
    Settings,
}

impl Collection {
    /// Storage key of the collection.
    pub fn key(self) -> &'static str {
        match self {
            Collection::Reports => "damageReports",
            Collection::Products => "products",
            Collection::Settings => "settings",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// String key-value persistence.
#[automock]
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, or `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
