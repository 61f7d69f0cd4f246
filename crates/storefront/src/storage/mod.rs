//! Durable key-value storage for client state.
//!
//! The cart store never decides for itself whether persistence is available.
//! Instead a [`KeyValueStore`] is chosen once, from the [`ExecutionContext`],
//! when the store is built:
//!
//! - [`FileStore`] - one JSON file per key under a data directory (client)
//! - [`MemoryStore`] - process-local map, for tests and throwaway sessions
//! - [`NoopStore`] - reads nothing, writes nothing (server)
//!
//! All operations are synchronous.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur when reading or writing storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("I/O error on {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Key contains characters that cannot be mapped to storage.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// The in-memory store's lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,

    /// A value could not be serialized before writing.
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A synchronous string key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if nothing was written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Storage that is never available. Used outside the client context.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStore;

impl KeyValueStore for NoopStore {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

/// Where the code is running. Durable storage only exists on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionContext {
    /// Interactive session with durable local storage.
    #[default]
    Client,
    /// Server-side rendering or any other non-interactive context.
    Server,
}

impl ExecutionContext {
    #[must_use]
    pub const fn is_client(self) -> bool {
        matches!(self, Self::Client)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Server => "server",
        }
    }
}

impl fmt::Display for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecutionContext {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "client" => Ok(Self::Client),
            "server" => Ok(Self::Server),
            other => Err(format!("unknown execution context '{other}' (expected client or server)")),
        }
    }
}

/// Pick the storage backend for a context.
///
/// The client gets a [`FileStore`] rooted at `data_dir`; every other context
/// gets a [`NoopStore`].
#[must_use]
pub fn for_context(context: ExecutionContext, data_dir: &Path) -> Box<dyn KeyValueStore> {
    match context {
        ExecutionContext::Client => Box::new(FileStore::new(data_dir)),
        ExecutionContext::Server => Box::new(NoopStore),
    }
}

/// Serialize `value` as JSON and store it under `key`.
///
/// Nothing is written if serialization fails.
///
/// # Errors
///
/// Returns `StorageError::Serialize` if `value` has no JSON form, or the
/// store's own error if the write fails.
pub fn write_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)?;
    store.write(key, &json)
}
