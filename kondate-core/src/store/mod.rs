//! Stateful stores. Each store is the only mutator of its collection and
//! writes its slot through the gateway right after every mutation.

mod meal_plan;
mod shopping;
mod suggestions;

pub use meal_plan::{DayPlan, MealPlanStore};
pub use shopping::ShoppingListStore;
pub use suggestions::{BoundedSet, SuggestionIndex, SuggestionSet, SUGGESTION_CAP};
