//! Kondate Core Library
//!
//! Date-indexed meal planning: calendar layout, the meal plan, suggestion and
//! shopping list stores, and the persistence contract they write through.

pub mod calendar;
pub mod date_key;
pub mod models;
pub mod persistence;
pub mod planner;
pub mod store;

pub use calendar::{
    build_month_grid, build_month_grid_at, build_week, page_week, week_monday, Cell,
    HolidayCalendar, MonthGrid, Week, WeekPager,
};
pub use date_key::{parse_key, to_key, DateKey};
pub use models::{Category, MealSlot, PlanEntry, ShoppingItem};
pub use persistence::{
    Absent, FileGateway, MemoryGateway, PersistenceGateway, Slot, StorageError,
};
pub use planner::Planner;
pub use store::{MealPlanStore, ShoppingListStore, SuggestionIndex, SUGGESTION_CAP};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
