//! The rolling shopping list.
//!
//! Items are kept newest-first. They are only ever removed in bulk by
//! [`ShoppingListStore::clear_done`].

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use rand::distr::{Alphanumeric, SampleString};

use crate::models::ShoppingItem;
use crate::persistence::{load_or_default, write_through, PersistenceGateway, Slot};

const ID_RANDOM_LEN: usize = 6;

/// Store owning the shopping list and its slot.
pub struct ShoppingListStore {
    items: Vec<ShoppingItem>,
    /// Every id issued or loaded in this session, removed items included.
    issued: HashSet<String>,
    gateway: Arc<dyn PersistenceGateway>,
}

impl ShoppingListStore {
    /// Loads the list from the gateway, starting empty if nothing usable is
    /// stored. Stored items with blank text or a repeated id are dropped.
    pub fn open(gateway: Arc<dyn PersistenceGateway>) -> Self {
        let stored: Vec<ShoppingItem> = load_or_default(gateway.as_ref(), Slot::ShoppingList);
        let total = stored.len();

        let mut issued = HashSet::new();
        let items: Vec<ShoppingItem> = stored
            .into_iter()
            .filter_map(|mut item| {
                item.text = item.text.trim().to_string();
                if item.text.is_empty() || !issued.insert(item.id.clone()) {
                    tracing::warn!("Dropping invalid shopping item '{}'", item.id);
                    return None;
                }
                Some(item)
            })
            .collect();

        tracing::info!("Loaded {} shopping item(s) ({} stored)", items.len(), total);
        Self {
            items,
            issued,
            gateway,
        }
    }

    /// Items, newest first.
    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&ShoppingItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Adds an item at the top of the list.
    ///
    /// Returns the new item's id, or `None` if `text` is blank.
    pub fn add_item(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.next_id();
        self.items.insert(0, ShoppingItem::new(id.clone(), text));
        self.persist();
        Some(id)
    }

    /// Flips the done flag of the item with `id`. Returns whether an item
    /// matched.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.toggle();
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Removes every done item, keeping the order of the rest. Returns the
    /// number of items removed.
    pub fn clear_done(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|i| !i.done);
        let removed = before - self.items.len();
        if removed > 0 {
            self.persist();
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A fresh `<unix millis>-<random alphanumeric>` id never issued before
    /// in this session.
    fn next_id(&mut self) -> String {
        let mut rng = rand::rng();
        loop {
            let suffix = Alphanumeric.sample_string(&mut rng, ID_RANDOM_LEN);
            let id = format!("{}-{}", Utc::now().timestamp_millis(), suffix);
            if self.issued.insert(id.clone()) {
                return id;
            }
            tracing::debug!("Shopping item id collision on {}, regenerating", id);
        }
    }

    fn persist(&self) {
        write_through(self.gateway.as_ref(), Slot::ShoppingList, &self.items);
    }
}
