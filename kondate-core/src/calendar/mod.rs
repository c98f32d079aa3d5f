//! Calendar layout for the month and week views.
//!
//! Both builders are pure functions of the date they are given and of
//! "today"; neither reads or writes any store.

mod holidays;
mod month_grid;
mod week;

pub use holidays::HolidayCalendar;
pub use month_grid::{
    add_months, build_month_grid, build_month_grid_at, days_in_month, first_of_month,
    month_title, Cell, DayKind, MonthGrid, GRID_COLUMNS,
};
pub use week::{
    build_week, day_label, page_week, week_monday, week_range_label, weekday_label, Week,
    WeekPager, WEEKDAY_LABELS,
};
