//! The three stores opened together over one gateway.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::models::{MealSlot, PlanEntry};
use crate::persistence::{MemoryGateway, PersistenceGateway};
use crate::store::{MealPlanStore, ShoppingListStore, SuggestionIndex};

/// Application state handed to the rendering layer.
pub struct Planner {
    pub plans: MealPlanStore,
    pub suggestions: SuggestionIndex,
    pub shopping: ShoppingListStore,
}

impl Planner {
    /// Opens every store from `gateway`. A slot that cannot be read leaves
    /// only its own store empty.
    pub fn open(gateway: Arc<dyn PersistenceGateway>) -> Self {
        Self {
            plans: MealPlanStore::open(gateway.clone()),
            suggestions: SuggestionIndex::open(gateway.clone()),
            shopping: ShoppingListStore::open(gateway),
        }
    }

    /// A planner that keeps everything in memory.
    pub fn in_memory() -> Self {
        Self::open(Arc::new(MemoryGateway::new()))
    }

    /// Saves an entry and records its values as suggestions.
    pub fn save_entry(&mut self, date: NaiveDate, slot: MealSlot, entry: &PlanEntry) -> PlanEntry {
        self.plans
            .save_entry(date, slot, entry, &mut self.suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::persistence::Slot;

    #[test]
    fn test_open_falls_back_per_slot() {
        let gateway = Arc::new(
            MemoryGateway::new()
                .with_value(Slot::MealPlans, "garbage")
                .with_value(Slot::ShoppingList, r#"[{"id":"1-a","text":"milk","done":false}]"#),
        );
        let planner = Planner::open(gateway);

        assert!(planner.plans.is_empty());
        assert_eq!(planner.shopping.len(), 1);
    }

    #[test]
    fn test_save_entry_updates_suggestions() {
        let mut planner = Planner::in_memory();
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        planner.save_entry(
            date,
            MealSlot::Lunch,
            &PlanEntry::new().with(Category::Side, " pickles "),
        );

        assert_eq!(planner.suggestions.lookup(Category::Side), vec!["pickles"]);
        assert_eq!(
            planner.plans.get_entry(date, MealSlot::Lunch).get(Category::Side),
            Some("pickles")
        );
    }
}
