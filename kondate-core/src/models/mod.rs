mod category;
mod meal_slot;
mod plan_entry;
mod shopping_item;

pub use category::Category;
pub use meal_slot::MealSlot;
pub use plan_entry::{PlanEntry, SUMMARY_SEPARATOR};
pub use shopping_item::ShoppingItem;
