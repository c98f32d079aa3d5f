//! Month grid for the calendar view.
//!
//! The grid always starts on Monday and always renders as whole weeks: the
//! days of the month are preceded by filler cells up to the weekday of the
//! 1st and followed by filler cells up to the next multiple of seven.

use chrono::{Datelike, Local, NaiveDate};

use super::holidays::HolidayCalendar;

/// Number of columns in the grid (Monday through Sunday).
pub const GRID_COLUMNS: usize = 7;

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Day of the month, `None` for filler cells.
    pub day: Option<u32>,
    /// The calendar day this cell stands for, `None` for filler cells.
    pub date: Option<NaiveDate>,
    pub is_today: bool,
    pub is_holiday: bool,
}

impl Cell {
    fn filler() -> Self {
        Self {
            day: None,
            date: None,
            is_today: false,
            is_holiday: false,
        }
    }

    fn day(date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            day: Some(date.day()),
            date: Some(date),
            is_today: date == today,
            is_holiday: false,
        }
    }

    pub fn is_filler(&self) -> bool {
        self.day.is_none()
    }
}

/// How a grid column is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Weekday,
    Saturday,
    Sunday,
}

impl DayKind {
    /// Kind of the column a cell index falls into (column 0 is Monday).
    pub fn for_index(index: usize) -> Self {
        match index % GRID_COLUMNS {
            5 => DayKind::Saturday,
            6 => DayKind::Sunday,
            _ => DayKind::Weekday,
        }
    }
}

/// The cells of one month, laid out Monday-first.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub year: i32,
    /// Month number, 1-based.
    pub month: u32,
    pub cells: Vec<Cell>,
}

impl MonthGrid {
    /// Marks every in-month cell whose date is a holiday.
    pub fn with_holidays(mut self, holidays: &HolidayCalendar) -> Self {
        for cell in &mut self.cells {
            if let Some(date) = cell.date {
                cell.is_holiday = holidays.contains(date);
            }
        }
        self
    }

    /// The grid split into rows of seven cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(GRID_COLUMNS)
    }

    /// Number of non-filler cells.
    pub fn day_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_filler()).count()
    }

    pub fn title(&self) -> String {
        format!("{}年 {}月", self.year, self.month)
    }
}

/// Builds the grid for the month containing `view`, marking today's cell
/// according to the local clock.
pub fn build_month_grid(view: NaiveDate) -> MonthGrid {
    build_month_grid_at(view, Local::now().date_naive())
}

/// Builds the grid for the month containing `view` with an explicit "today".
pub fn build_month_grid_at(view: NaiveDate, today: NaiveDate) -> MonthGrid {
    let first = first_of_month(view);
    let leading = first.weekday().num_days_from_monday() as usize;
    let days = days_in_month(view.year(), view.month()) as usize;

    let mut cells = Vec::with_capacity(leading + days + GRID_COLUMNS);
    cells.extend((0..leading).map(|_| Cell::filler()));
    cells.extend(
        first
            .iter_days()
            .take(days)
            .map(|date| Cell::day(date, today)),
    );
    let trailing = (GRID_COLUMNS - cells.len() % GRID_COLUMNS) % GRID_COLUMNS;
    cells.extend((0..trailing).map(|_| Cell::filler()));

    MonthGrid {
        year: view.year(),
        month: view.month(),
        cells,
    }
}

/// Number of days in a month (1-based), accounting for leap years.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        2 => 28,
        _ => 31,
    }
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month `delta` months away from the month of `view`.
///
/// Dates outside chrono's supported range leave the view unchanged.
pub fn add_months(view: NaiveDate, delta: i32) -> NaiveDate {
    let index = view.year() as i64 * 12 + view.month0() as i64 + delta as i64;
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    i32::try_from(year)
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, month, 1))
        .unwrap_or_else(|| first_of_month(view))
}

/// Heading shown above a month grid, e.g. `2024年 3月`.
pub fn month_title(view: NaiveDate) -> String {
    format!("{}年 {}月", view.year(), view.month())
}
