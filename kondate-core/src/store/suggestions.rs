//! Autocomplete candidates learned from saved entries.
//!
//! Every non-blank value saved into a category is remembered in that
//! category's pool. Pools are insertion-ordered, never hold duplicates and
//! keep at most [`SUGGESTION_CAP`] values; once full, the oldest value is
//! evicted to make room for a new one.

use std::sync::Arc;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::models::{Category, PlanEntry};
use crate::persistence::{load_or_default, write_through, PersistenceGateway, Slot};

/// Maximum number of values remembered per category.
pub const SUGGESTION_CAP: usize = 200;

/// An insertion-ordered set of distinct strings with a size bound.
///
/// Equality compares membership only, not order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct BoundedSet {
    values: IndexSet<String>,
    capacity: usize,
}

impl BoundedSet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: IndexSet::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `value` unless it is already present, evicting the oldest
    /// values beyond the capacity. Returns whether the set changed.
    pub fn insert(&mut self, value: &str) -> bool {
        if self.values.contains(value) {
            return false;
        }
        self.values.insert(value.to_string());
        while self.values.len() > self.capacity {
            self.values.shift_remove_index(0);
        }
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    /// Values from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for BoundedSet {
    fn default() -> Self {
        Self::with_capacity(SUGGESTION_CAP)
    }
}

/// Rebuilds a set from stored values: blanks and repeats are dropped and
/// only the newest `SUGGESTION_CAP` values are kept.
impl From<Vec<String>> for BoundedSet {
    fn from(values: Vec<String>) -> Self {
        let mut set = BoundedSet::default();
        for value in values {
            let value = value.trim();
            if !value.is_empty() {
                set.insert(value);
            }
        }
        set
    }
}

impl From<BoundedSet> for Vec<String> {
    fn from(set: BoundedSet) -> Self {
        set.values.into_iter().collect()
    }
}

/// One pool per category, in the stored JSON shape
/// `{"staple": [...], "main": [...], "side": [...], "other": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionSet {
    pub staple: BoundedSet,
    pub main: BoundedSet,
    pub side: BoundedSet,
    pub other: BoundedSet,
}

impl SuggestionSet {
    pub fn get(&self, category: Category) -> &BoundedSet {
        match category {
            Category::Staple => &self.staple,
            Category::Main => &self.main,
            Category::Side => &self.side,
            Category::Other => &self.other,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut BoundedSet {
        match category {
            Category::Staple => &mut self.staple,
            Category::Main => &mut self.main,
            Category::Side => &mut self.side,
            Category::Other => &mut self.other,
        }
    }
}

/// Store owning the suggestion pools and their persistence slot.
pub struct SuggestionIndex {
    set: SuggestionSet,
    gateway: Arc<dyn PersistenceGateway>,
}

impl SuggestionIndex {
    /// Loads the pools from the gateway, starting empty if nothing usable is
    /// stored.
    pub fn open(gateway: Arc<dyn PersistenceGateway>) -> Self {
        let set: SuggestionSet = load_or_default(gateway.as_ref(), Slot::Suggestions);
        tracing::info!(
            "Loaded suggestions: {}",
            Category::ALL
                .iter()
                .map(|c| format!("{}={}", c, set.get(*c).len()))
                .collect::<Vec<_>>()
                .join(", ")
        );
        Self { set, gateway }
    }

    /// Remembers one value. Blank values are ignored.
    pub fn record(&mut self, category: Category, value: &str) {
        if self.insert(category, value) {
            self.persist();
        }
    }

    /// Remembers every value of an entry, writing the slot at most once.
    pub fn record_entry(&mut self, entry: &PlanEntry) {
        let mut changed = false;
        for (category, value) in entry.iter() {
            changed |= self.insert(category, value);
        }
        if changed {
            self.persist();
        }
    }

    /// All remembered values for a category, oldest first.
    pub fn lookup(&self, category: Category) -> Vec<&str> {
        self.set.get(category).iter().collect()
    }

    /// Remembered values containing `query`, ignoring case. An empty query
    /// matches everything.
    pub fn matching(&self, category: Category, query: &str) -> Vec<&str> {
        let query = query.trim().to_lowercase();
        self.set
            .get(category)
            .iter()
            .filter(|v| query.is_empty() || v.to_lowercase().contains(&query))
            .collect()
    }

    pub fn snapshot(&self) -> &SuggestionSet {
        &self.set
    }

    fn insert(&mut self, category: Category, value: &str) -> bool {
        let value = value.trim();
        !value.is_empty() && self.set.get_mut(category).insert(value)
    }

    fn persist(&self) {
        write_through(self.gateway.as_ref(), Slot::Suggestions, &self.set);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryGateway;

    fn index() -> (SuggestionIndex, Arc<MemoryGateway>) {
        let gateway = Arc::new(MemoryGateway::new());
        (SuggestionIndex::open(gateway.clone()), gateway)
    }

    #[test]
    fn test_bounded_set_dedups() {
        let mut set = BoundedSet::with_capacity(3);
        assert!(set.insert("rice"));
        assert!(!set.insert("rice"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_bounded_set_evicts_oldest() {
        let mut set = BoundedSet::with_capacity(3);
        for v in ["a", "b", "c", "d"] {
            set.insert(v);
        }
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_bounded_set_keeps_position_on_repeat() {
        let mut set = BoundedSet::with_capacity(3);
        for v in ["a", "b", "c"] {
            set.insert(v);
        }
        assert!(!set.insert("a"));
        set.insert("d");

        assert!(set.contains("b"));
        assert!(!set.contains("a"));
        assert_eq!(Vec::<String>::from(set), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_bounded_set_from_stored_values() {
        let stored: Vec<String> = (0..230)
            .map(|i| format!("v{}", i))
            .chain([" ".to_string(), "v100".to_string()])
            .collect();
        let set = BoundedSet::from(stored);

        assert_eq!(set.len(), SUGGESTION_CAP);
        assert_eq!(set.iter().next(), Some("v30"));
        assert_eq!(set.iter().last(), Some("v229"));
    }

    #[test]
    fn test_record_and_lookup() {
        let (mut index, _gateway) = index();
        index.record(Category::Main, "egg");
        index.record(Category::Main, " egg ");
        index.record(Category::Main, "fish");
        index.record(Category::Side, "egg");

        assert_eq!(index.lookup(Category::Main), vec!["egg", "fish"]);
        assert_eq!(index.lookup(Category::Side), vec!["egg"]);
        assert!(index.lookup(Category::Staple).is_empty());
    }

    #[test]
    fn test_record_never_exceeds_cap() {
        let (mut index, _gateway) = index();
        for i in 0..(SUGGESTION_CAP + 25) {
            index.record(Category::Other, &format!("item {}", i));
        }
        let values = index.lookup(Category::Other);
        assert_eq!(values.len(), SUGGESTION_CAP);
        assert_eq!(values[0], "item 25");
        assert_eq!(values[SUGGESTION_CAP - 1], format!("item {}", SUGGESTION_CAP + 24));
    }

    #[test]
    fn test_record_blank_is_ignored() {
        let (mut index, gateway) = index();
        index.record(Category::Staple, "   ");
        assert!(index.lookup(Category::Staple).is_empty());
        assert_eq!(gateway.get(Slot::Suggestions), None);
    }

    #[test]
    fn test_record_writes_through() {
        let (mut index, gateway) = index();
        index.record(Category::Staple, "rice");

        let stored = gateway.get(Slot::Suggestions).unwrap();
        assert_eq!(
            stored,
            r#"{"staple":["rice"],"main":[],"side":[],"other":[]}"#
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let (mut index, _gateway) = index();
        for v in ["Curry Rice", "fried rice", "Udon"] {
            index.record(Category::Staple, v);
        }
        assert_eq!(
            index.matching(Category::Staple, "RICE"),
            vec!["Curry Rice", "fried rice"]
        );
        assert_eq!(index.matching(Category::Staple, "").len(), 3);
    }

    #[test]
    fn test_open_reads_partial_snapshot() {
        let gateway = Arc::new(
            MemoryGateway::new().with_value(Slot::Suggestions, r#"{"main":["egg","egg"," "]}"#),
        );
        let index = SuggestionIndex::open(gateway);
        assert_eq!(index.lookup(Category::Main), vec!["egg"]);
        assert!(index.lookup(Category::Staple).is_empty());
    }

    #[test]
    fn test_open_discards_malformed_snapshot() {
        let gateway =
            Arc::new(MemoryGateway::new().with_value(Slot::Suggestions, r#"{"main":"egg"}"#));
        let index = SuggestionIndex::open(gateway);
        assert_eq!(index.snapshot(), &SuggestionSet::default());
    }
}
