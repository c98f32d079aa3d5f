//! Shopping list items.
//!
//! Items are free text that can be checked off once bought. Checked items
//! stay on the list until they are cleared.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of the shopping list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShoppingItem {
    /// Opaque identifier, unique for the lifetime of the list
    pub id: String,
    /// Item text (never empty)
    pub text: String,
    /// Whether the item has been bought
    pub done: bool,
}

impl ShoppingItem {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            done: false,
        }
    }

    /// Flips the done flag.
    pub fn toggle(&mut self) {
        self.done = !self.done;
    }
}

impl fmt::Display for ShoppingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = if self.done { "[x]" } else { "[ ]" };
        write!(f, "{} {}", check, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shopping_item_new() {
        let item = ShoppingItem::new("1-abc", "milk");
        assert_eq!(item.id, "1-abc");
        assert_eq!(item.text, "milk");
        assert!(!item.done);
    }

    #[test]
    fn test_shopping_item_toggle_and_display() {
        let mut item = ShoppingItem::new("1-abc", "milk");
        assert_eq!(format!("{}", item), "[ ] milk");
        item.toggle();
        assert!(item.done);
        assert_eq!(format!("{}", item), "[x] milk");
    }

    #[test]
    fn test_shopping_item_json() {
        let item = ShoppingItem::new("1-abc", "milk");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":"1-abc","text":"milk","done":false}"#);
    }
}
