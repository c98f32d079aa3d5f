//! Named persistence slots.

use std::fmt;

/// File extension used by the file gateway.
pub const SLOT_EXTENSION: &str = "json";

/// One independently persisted snapshot. Each store owns exactly one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    MealPlans,
    Suggestions,
    ShoppingList,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::MealPlans, Slot::Suggestions, Slot::ShoppingList];

    /// Storage key for this slot.
    pub fn key(&self) -> &'static str {
        match self {
            Slot::MealPlans => "mealPlans.v1",
            Slot::Suggestions => "mealSuggestions.v1",
            Slot::ShoppingList => "shoppingList.v1",
        }
    }

    /// Filename used by the file gateway.
    pub fn filename(&self) -> String {
        format!("{}.{}", self.key(), SLOT_EXTENSION)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
