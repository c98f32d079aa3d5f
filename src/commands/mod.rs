mod calendar;
mod config_cmd;
mod plan;
mod shopping;
mod suggest;
mod week;

pub use calendar::CalendarCommand;
pub use config_cmd::ConfigCommand;
pub use plan::PlanCommand;
pub use shopping::ShoppingCommand;
pub use suggest::SuggestCommand;
pub use week::WeekCommand;

use chrono::NaiveDate;
use clap::ValueEnum;
use kondate_core::parse_key;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parses a `YYYY-MM-DD` argument.
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    parse_key(s.trim()).ok_or_else(|| format!("Invalid date format '{}'. Use YYYY-MM-DD.", s))
}

/// Parses a `YYYY-MM` argument into the first day of that month.
fn parse_month(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| format!("Invalid month format '{}'. Use YYYY-MM.", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert!(parse_date("2024/03/01").is_err());
        assert!(parse_date("2024-3-1").is_err());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(
            parse_month("2024-02").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
        );
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("Feb").is_err());
    }
}
