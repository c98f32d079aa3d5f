//! In-memory gateway.
//!
//! Used when no durable storage is configured, and by tests to inspect
//! exactly what a store wrote.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{PersistenceGateway, Slot, StorageError};

#[derive(Debug, Default)]
pub struct MemoryGateway {
    slots: Mutex<HashMap<Slot, String>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a slot with raw text.
    pub fn with_value(self, slot: Slot, value: impl Into<String>) -> Self {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(slot, value.into());
        }
        self
    }

    /// Raw text currently held for a slot.
    pub fn get(&self, slot: Slot) -> Option<String> {
        self.slots.lock().ok()?.get(&slot).cloned()
    }
}

impl PersistenceGateway for MemoryGateway {
    fn load(&self, slot: Slot) -> Result<Option<String>, StorageError> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| StorageError::Unavailable("memory gateway lock poisoned".into()))?;
        Ok(slots.get(&slot).cloned())
    }

    fn save(&self, slot: Slot, value: &str) -> Result<(), StorageError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| StorageError::Unavailable("memory gateway lock poisoned".into()))?;
        slots.insert(slot, value.to_string());
        Ok(())
    }
}
