use clap::{Args, Subcommand};
use serde::Serialize;

use kondate_core::{ShoppingItem, ShoppingListStore};

use super::OutputFormat;

#[derive(Args)]
pub struct ShoppingCommand {
    #[command(subcommand)]
    pub command: ShoppingSubcommand,
}

#[derive(Subcommand)]
pub enum ShoppingSubcommand {
    /// List items, newest first
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Add an item to the top of the list
    Add {
        /// Item text
        text: String,
    },

    /// Check or uncheck an item
    Toggle {
        /// Item ID
        id: String,
    },

    /// Remove all checked items
    ClearDone,
}

#[derive(Serialize)]
struct ListView<'a> {
    items: &'a [ShoppingItem],
    remaining: usize,
}

impl ShoppingCommand {
    pub fn run(&self, shopping: &mut ShoppingListStore) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ShoppingSubcommand::List { format } => {
                match format {
                    OutputFormat::Json => {
                        let view = ListView {
                            items: shopping.items(),
                            remaining: remaining(shopping.items()),
                        };
                        println!("{}", serde_json::to_string_pretty(&view)?);
                    }
                    OutputFormat::Text => print!("{}", render_list(shopping.items())),
                }
                Ok(())
            }

            ShoppingSubcommand::Add { text } => {
                match shopping.add_item(text) {
                    Some(id) => println!("Added: {} ({})", text.trim(), id),
                    None => return Err("Item text cannot be empty".into()),
                }
                Ok(())
            }

            ShoppingSubcommand::Toggle { id } => {
                if !shopping.toggle(id) {
                    return Err(format!("Item not found: {}", id).into());
                }
                if let Some(item) = shopping.get(id) {
                    println!("{}", item);
                }
                Ok(())
            }

            ShoppingSubcommand::ClearDone => {
                let removed = shopping.clear_done();
                println!("Removed {} item(s)", removed);
                Ok(())
            }
        }
    }
}

fn remaining(items: &[ShoppingItem]) -> usize {
    items.iter().filter(|i| !i.done).count()
}

fn render_list(items: &[ShoppingItem]) -> String {
    if items.is_empty() {
        return "Shopping list is empty.\n".to_string();
    }

    let mut out = String::new();
    for item in items {
        out.push_str(&format!("{}  ({})\n", item, item.id));
    }
    out.push_str(&format!("\n{} of {} left\n", remaining(items), items.len()));
    out
}
