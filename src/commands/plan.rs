use clap::{Args, Subcommand};

use kondate_core::{Category, MealPlanStore, MealSlot, PlanEntry, Planner};

use super::{parse_date, OutputFormat};

#[derive(Args)]
pub struct PlanCommand {
    #[command(subcommand)]
    pub command: PlanSubcommand,
}

#[derive(Subcommand)]
pub enum PlanSubcommand {
    /// Show what is planned for a date
    Show {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Only this meal (breakfast, lunch, dinner)
        #[arg(long, short)]
        slot: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Save a meal, replacing what was planned for that date and meal
    Set {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Meal (breakfast, lunch, dinner)
        #[arg(long, short)]
        slot: String,

        /// Staple (主食)
        #[arg(long)]
        staple: Option<String>,

        /// Main dish (主菜)
        #[arg(long)]
        main: Option<String>,

        /// Side dish (副菜)
        #[arg(long)]
        side: Option<String>,

        /// Anything else (その他)
        #[arg(long)]
        other: Option<String>,
    },
}

impl PlanCommand {
    pub fn run(&self, planner: &mut Planner) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            PlanSubcommand::Show { date, slot, format } => {
                let date = parse_date(date)?;
                let slots: Vec<MealSlot> = match slot {
                    Some(s) => vec![s.parse::<MealSlot>()?],
                    None => MealSlot::ALL.to_vec(),
                };

                let entries: Vec<(MealSlot, PlanEntry)> = slots
                    .into_iter()
                    .map(|s| (s, planner.plans.get_entry(date, s)))
                    .collect();

                match format {
                    OutputFormat::Json => {
                        let mut output = serde_json::Map::new();
                        for (s, entry) in &entries {
                            output.insert(s.to_string(), serde_json::to_value(entry)?);
                        }
                        println!("{}", serde_json::to_string_pretty(&output)?);
                    }
                    OutputFormat::Text => {
                        println!("{}", date);
                        println!("{}", "-".repeat(10));
                        for (s, entry) in &entries {
                            if entry.is_empty() {
                                println!("{}  —", s.label());
                            } else {
                                println!("{}  {}", s.label(), MealPlanStore::summarize(entry));
                                print!("{}", entry);
                            }
                        }
                    }
                }
                Ok(())
            }

            PlanSubcommand::Set {
                date,
                slot,
                staple,
                main,
                side,
                other,
            } => {
                let date = parse_date(date)?;
                let slot: MealSlot = slot.parse()?;

                let entry = entry_from_args([
                    (Category::Staple, staple),
                    (Category::Main, main),
                    (Category::Side, side),
                    (Category::Other, other),
                ]);
                let saved = planner.save_entry(date, slot, &entry);

                if saved.is_empty() {
                    println!("Cleared {} on {}", slot, date);
                } else {
                    println!("Saved {} on {}: {}", slot, date, MealPlanStore::summarize(&saved));
                }
                Ok(())
            }
        }
    }
}

/// Builds an entry from the category options that were given.
fn entry_from_args(values: [(Category, &Option<String>); 4]) -> PlanEntry {
    values
        .into_iter()
        .filter_map(|(c, v)| v.clone().map(|v| (c, v)))
        .collect()
}
