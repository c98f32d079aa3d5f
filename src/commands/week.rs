//! Week list view.

use clap::Args;
use serde::Serialize;

use kondate_core::calendar::{day_label, week_range_label, Week};
use kondate_core::{to_key, MealPlanStore, MealSlot, PlanEntry, WeekPager};

use super::OutputFormat;

#[derive(Args)]
pub struct WeekCommand {
    /// Weeks to move from the current week (negative for past weeks)
    #[arg(long, short, allow_hyphen_values = true, default_value_t = 0)]
    offset: i64,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Serialize)]
struct DayView {
    date: String,
    label: String,
    meals: Vec<MealView>,
}

#[derive(Serialize)]
struct MealView {
    slot: MealSlot,
    summary: String,
    entry: PlanEntry,
}

impl WeekCommand {
    pub fn run(&self, plans: &MealPlanStore) -> Result<(), Box<dyn std::error::Error>> {
        let week = WeekPager::today().with_offset(self.offset).week();

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&week_view(&week, plans))?);
            }
            OutputFormat::Text => print!("{}", render_week(&week, plans)),
        }
        Ok(())
    }
}

fn week_view(week: &Week, plans: &MealPlanStore) -> Vec<DayView> {
    week.iter()
        .map(|date| DayView {
            date: to_key(*date),
            label: day_label(*date),
            meals: MealSlot::ALL
                .into_iter()
                .map(|slot| {
                    let entry = plans.get_entry(*date, slot);
                    MealView {
                        slot,
                        summary: MealPlanStore::summarize(&entry),
                        entry,
                    }
                })
                .collect(),
        })
        .collect()
}

fn render_week(week: &Week, plans: &MealPlanStore) -> String {
    let mut out = format!("{}\n", week_range_label(week));
    for date in week {
        out.push('\n');
        out.push_str(&day_label(*date));
        out.push('\n');
        for (slot, summary) in plans.day_summaries(*date) {
            let text = if summary.is_empty() { "—" } else { summary.as_str() };
            out.push_str(&format!("  {}  {}\n", slot.label(), text));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use kondate_core::{build_week, Category, Planner};

    #[test]
    fn test_render_week() {
        let mut planner = Planner::in_memory();
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        planner.save_entry(
            date,
            MealSlot::Breakfast,
            &PlanEntry::new()
                .with(Category::Staple, "rice")
                .with(Category::Main, "egg"),
        );

        let out = render_week(&build_week(date), &planner.plans);
        assert!(out.starts_with("2/26 - 3/3\n"));
        assert!(out.contains("3/1 (金)\n  朝食  rice、egg\n  昼食  —\n  夕食  —\n"));
        assert_eq!(out.matches("朝食").count(), 7);
    }

    #[test]
    fn test_week_view_json() {
        let planner = Planner::in_memory();
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let view = week_view(&build_week(date), &planner.plans);

        assert_eq!(view.len(), 7);
        assert_eq!(view[0].date, "2024-02-26");
        let json = serde_json::to_value(&view[0]).unwrap();
        assert_eq!(json["meals"][0]["slot"], "breakfast");
        assert_eq!(json["meals"][0]["summary"], "");
    }
}
