//! Month calendar view.

use chrono::Local;
use clap::Args;

use kondate_core::calendar::{
    add_months, build_month_grid, day_label, Cell, DayKind, MonthGrid, WEEKDAY_LABELS,
};
use kondate_core::{HolidayCalendar, MealPlanStore};

use super::parse_month;

#[derive(Args)]
pub struct CalendarCommand {
    /// Month to show (YYYY-MM), defaults to the current month
    #[arg(long, short)]
    month: Option<String>,

    /// Months to move from the shown month (e.g. -1 for the previous month)
    #[arg(long, allow_hyphen_values = true, default_value_t = 0)]
    offset: i32,
}

impl CalendarCommand {
    pub fn run(
        &self,
        plans: &MealPlanStore,
        holidays: &HolidayCalendar,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let view = match &self.month {
            Some(m) => parse_month(m)?,
            None => Local::now().date_naive(),
        };
        let grid = build_month_grid(add_months(view, self.offset)).with_holidays(holidays);
        print!("{}", render_month(&grid, plans));
        Ok(())
    }
}

/// Renders the grid, then one line per planned day with its meal badges.
///
/// Each cell is five columns wide: the day, a day mark and a planned mark
/// (`+`). The day mark is `*` for today, `!` for a holiday or Sunday and `~`
/// for a Saturday.
fn render_month(grid: &MonthGrid, plans: &MealPlanStore) -> String {
    let mut out = String::new();
    out.push_str(&grid.title());
    out.push('\n');
    for label in WEEKDAY_LABELS {
        out.push_str(&format!(" {}  ", label));
    }
    out.push('\n');

    let mut planned = Vec::new();
    for week in grid.weeks() {
        let mut line = String::new();
        for (column, cell) in week.iter().enumerate() {
            match (cell.day, cell.date) {
                (Some(day), Some(date)) => {
                    let mark = day_mark(cell, DayKind::for_index(column));
                    let slots = plans.planned_slots(date);
                    let plan_mark = if slots.is_empty() { ' ' } else { '+' };
                    if !slots.is_empty() {
                        planned.push((date, slots));
                    }
                    line.push_str(&format!("{:>2}{}{} ", day, mark, plan_mark));
                }
                _ => line.push_str("     "),
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    if !planned.is_empty() {
        out.push('\n');
        for (date, slots) in planned {
            let badges: Vec<_> = slots.iter().map(|s| s.badge()).collect();
            out.push_str(&format!("{}  {}\n", day_label(date), badges.join(" ")));
        }
    }
    out
}

fn day_mark(cell: &Cell, kind: DayKind) -> char {
    if cell.is_today {
        '*'
    } else if cell.is_holiday || kind == DayKind::Sunday {
        '!'
    } else if kind == DayKind::Saturday {
        '~'
    } else {
        ' '
    }
}
