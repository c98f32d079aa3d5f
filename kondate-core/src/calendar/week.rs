//! Monday-start weeks for the week view.
//!
//! Weeks are paged statelessly: the page shown for offset `n` is always
//! recomputed from a fixed anchor date, never from the previously shown
//! page, so paging back and forth cannot drift.

use chrono::{Datelike, Days, Local, NaiveDate, TimeDelta};

/// Weekday labels, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["月", "火", "水", "木", "金", "土", "日"];

/// Seven consecutive days starting on a Monday.
pub type Week = [NaiveDate; 7];

/// The Monday on or before `date`.
pub fn week_monday(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(offset))
        .unwrap_or(NaiveDate::MIN)
}

/// The Monday-start week containing `date`.
pub fn build_week(date: NaiveDate) -> Week {
    let monday = week_monday(date);
    std::array::from_fn(|i| {
        monday
            .checked_add_days(Days::new(i as u64))
            .unwrap_or(NaiveDate::MAX)
    })
}

/// The week `offset_weeks` whole weeks away from the week of `reference`.
///
/// Offsets that leave chrono's supported range clamp to its first or last
/// representable week.
pub fn page_week(reference: NaiveDate, offset_weeks: i64) -> Week {
    let target = TimeDelta::try_weeks(offset_weeks)
        .and_then(|delta| reference.checked_add_signed(delta))
        .unwrap_or(if offset_weeks < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        });
    build_week(target)
}

/// Label of a week's range, e.g. `2/26 - 3/3`.
pub fn week_range_label(week: &Week) -> String {
    let (start, end) = (week[0], week[6]);
    format!(
        "{}/{} - {}/{}",
        start.month(),
        start.day(),
        end.month(),
        end.day()
    )
}

/// Short weekday label for a date.
pub fn weekday_label(date: NaiveDate) -> &'static str {
    WEEKDAY_LABELS[date.weekday().num_days_from_monday() as usize]
}

/// Label of one day in the week list, e.g. `3/1 (金)`.
pub fn day_label(date: NaiveDate) -> String {
    format!("{}/{} ({})", date.month(), date.day(), weekday_label(date))
}

/// Caller-held week offset anchored at the day the view was opened.
///
/// The anchor is fixed at construction and is not re-read from the clock
/// while paging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekPager {
    anchor: NaiveDate,
    offset: i64,
}

impl WeekPager {
    pub fn new(anchor: NaiveDate) -> Self {
        Self { anchor, offset: 0 }
    }

    /// A pager anchored at today's local date.
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn next(&mut self) {
        self.offset = self.offset.saturating_add(1);
    }

    pub fn previous(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    /// The days of the page currently selected.
    pub fn week(&self) -> Week {
        page_week(self.anchor, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_monday_for_every_weekday() {
        // 2024-03-04 is a Monday
        let monday = ymd(2024, 3, 4);
        for i in 0..7 {
            let date = monday + TimeDelta::days(i);
            assert_eq!(week_monday(date), monday);
        }
        assert_eq!(week_monday(ymd(2024, 3, 3)), ymd(2024, 2, 26));
    }

    #[test]
    fn test_week_monday_idempotent() {
        let mut date = ymd(2023, 12, 20);
        for _ in 0..30 {
            let monday = week_monday(date);
            assert_eq!(week_monday(monday), monday);
            assert_eq!(monday.weekday(), Weekday::Mon);
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_build_week_consecutive_across_month_end() {
        let week = build_week(ymd(2024, 2, 29));
        assert_eq!(week[0], ymd(2024, 2, 26));
        assert_eq!(week[6], ymd(2024, 3, 3));
        for pair in week.windows(2) {
            assert_eq!(pair[0].succ_opt().unwrap(), pair[1]);
        }
    }

    #[test]
    fn test_page_week_forward_and_back() {
        let reference = ymd(2024, 3, 1);
        let next = page_week(reference, 1);
        assert_eq!(next[0], ymd(2024, 3, 4));
        assert_eq!(page_week(next[0], -1), build_week(reference));
    }

    #[test]
    fn test_page_week_does_not_drift() {
        let reference = ymd(2024, 1, 10);
        let far = page_week(reference, 52);
        let mut stepped = build_week(reference);
        for _ in 0..52 {
            stepped = page_week(stepped[0], 1);
        }
        assert_eq!(far, stepped);
        assert_eq!(page_week(reference, -52)[0], ymd(2023, 1, 9));
    }

    #[test]
    fn test_page_week_extreme_offset_clamps() {
        let week = page_week(ymd(2024, 1, 1), i64::MAX);
        assert!(week[0] <= NaiveDate::MAX);
        let week = page_week(ymd(2024, 1, 1), i64::MIN);
        assert_eq!(week[0], week_monday(NaiveDate::MIN));
    }

    #[test]
    fn test_pager_anchor_stays_fixed() {
        let mut pager = WeekPager::new(ymd(2024, 3, 1));
        pager.next();
        pager.next();
        pager.previous();
        assert_eq!(pager.offset(), 1);
        assert_eq!(pager.anchor(), ymd(2024, 3, 1));
        assert_eq!(pager.week(), page_week(ymd(2024, 3, 1), 1));
        assert_eq!(pager.with_offset(0).week(), build_week(ymd(2024, 3, 1)));
    }

    #[test]
    fn test_labels() {
        let week = build_week(ymd(2024, 3, 1));
        assert_eq!(week_range_label(&week), "2/26 - 3/3");
        assert_eq!(day_label(ymd(2024, 3, 1)), "3/1 (金)");
        assert_eq!(weekday_label(ymd(2024, 3, 3)), "日");
    }
}
