use clap::Args;

use kondate_core::{Category, SuggestionIndex};

use super::OutputFormat;

#[derive(Args)]
pub struct SuggestCommand {
    /// Category (staple, main, side, other)
    category: String,

    /// Only values containing this text
    query: Option<String>,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl SuggestCommand {
    pub fn run(&self, suggestions: &SuggestionIndex) -> Result<(), Box<dyn std::error::Error>> {
        let category: Category = self.category.parse()?;
        let values = suggestions.matching(category, self.query.as_deref().unwrap_or(""));

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&values)?),
            OutputFormat::Text => {
                if values.is_empty() {
                    println!("No suggestions for {}.", category.label());
                } else {
                    for value in values {
                        println!("{}", value);
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kondate_core::{MemoryGateway, PersistenceGateway};
    use std::sync::Arc;

    fn index() -> SuggestionIndex {
        let gateway: Arc<dyn PersistenceGateway> = Arc::new(MemoryGateway::new());
        let mut index = SuggestionIndex::open(gateway);
        index.record(Category::Main, "Grilled salmon");
        index.record(Category::Main, "miso soup");
        index
    }

    #[test]
    fn test_suggest_runs() {
        let cmd = SuggestCommand {
            category: "main".into(),
            query: Some("SALMON".into()),
            format: OutputFormat::Text,
        };
        assert!(cmd.run(&index()).is_ok());
    }

    #[test]
    fn test_suggest_rejects_unknown_category() {
        let cmd = SuggestCommand {
            category: "dessert".into(),
            query: None,
            format: OutputFormat::Json,
        };
        let err = cmd.run(&index()).unwrap_err();
        assert!(err.to_string().contains("Invalid category"));
    }
}
