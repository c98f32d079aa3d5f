//! Durable key-value storage for store snapshots.
//!
//! Each store serializes its whole collection to one [`Slot`] after every
//! mutation and reads it back once when it is opened. Gateways only move
//! text; decoding happens in [`load_snapshot`], which folds every failure
//! into [`Absent`] so stores can always fall back to an empty collection.

mod file;
mod memory;
mod slot;

use std::io;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub use file::FileGateway;
pub use memory::MemoryGateway;
pub use slot::{Slot, SLOT_EXTENSION};

/// Errors raised by a gateway.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error for {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] io::Error),
    #[error("Stored data in {} is not text: {}", .0.display(), .1)]
    Corrupt(PathBuf, String),
    #[error("Failed to encode snapshot for {0}: {1}")]
    Encode(Slot, String),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Why a slot yielded no usable snapshot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Absent {
    #[error("nothing stored")]
    Missing,
    #[error("malformed data: {0}")]
    Malformed(String),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A string-keyed text store that survives process restarts.
pub trait PersistenceGateway: Send + Sync {
    /// Returns the text last saved to `slot`, or `None` if it was never written.
    fn load(&self, slot: Slot) -> Result<Option<String>, StorageError>;

    /// Replaces the text held for `slot`.
    fn save(&self, slot: Slot, value: &str) -> Result<(), StorageError>;
}

/// Loads and decodes the snapshot held in `slot`.
pub fn load_snapshot<T: DeserializeOwned>(
    gateway: &dyn PersistenceGateway,
    slot: Slot,
) -> Result<T, Absent> {
    let text = match gateway.load(slot) {
        Ok(Some(text)) => text,
        Ok(None) => return Err(Absent::Missing),
        Err(StorageError::Corrupt(_, e)) => return Err(Absent::Malformed(e)),
        Err(e) => return Err(Absent::Unavailable(e.to_string())),
    };
    if text.trim().is_empty() {
        return Err(Absent::Missing);
    }
    serde_json::from_str(&text).map_err(|e| Absent::Malformed(e.to_string()))
}

/// Loads `slot`, falling back to `T::default()` when nothing usable is stored.
pub fn load_or_default<T: DeserializeOwned + Default>(
    gateway: &dyn PersistenceGateway,
    slot: Slot,
) -> T {
    match load_snapshot(gateway, slot) {
        Ok(value) => {
            tracing::debug!("Loaded {}", slot);
            value
        }
        Err(Absent::Missing) => {
            tracing::debug!("No data in {}, starting empty", slot);
            T::default()
        }
        Err(e) => {
            tracing::warn!("Discarding {}: {}", slot, e);
            T::default()
        }
    }
}

/// Encodes `value` and writes it to `slot`.
pub fn save_snapshot<T: Serialize + ?Sized>(
    gateway: &dyn PersistenceGateway,
    slot: Slot,
    value: &T,
) -> Result<(), StorageError> {
    let text = serde_json::to_string(value).map_err(|e| StorageError::Encode(slot, e.to_string()))?;
    gateway.save(slot, &text)?;
    tracing::debug!("Wrote {} ({} bytes)", slot, text.len());
    Ok(())
}

/// Writes a snapshot, logging instead of returning a failure.
///
/// Stores call this right after each in-memory mutation; a failed write
/// leaves the store working from memory.
pub fn write_through<T: Serialize + ?Sized>(
    gateway: &dyn PersistenceGateway,
    slot: Slot,
    value: &T,
) {
    if let Err(e) = save_snapshot(gateway, slot, value) {
        tracing::warn!("Failed to persist {}: {}", slot, e);
    }
}
