use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::Config;

use super::OutputFormat;

const DEFAULT_CONFIG: &str = "\
# kondate configuration

# Directory holding mealPlans.v1.json, mealSuggestions.v1.json and
# shoppingList.v1.json. Relative paths resolve against this file.
# data_dir: ~/.local/share/kondate

# Dates highlighted as holidays in the calendar (YYYY-MM-DD)
holidays: []
";

#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show current configuration values
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl ConfigCommand {
    pub fn run(
        &self,
        config: &Config,
        config_path: Option<PathBuf>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ConfigSubcommand::Show { format } => {
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(config)?);
                    }
                    OutputFormat::Text => print!("{}", render_config(config)),
                }
                Ok(())
            }

            ConfigSubcommand::Init { force } => {
                let path = config_path.unwrap_or_else(Config::default_config_path);
                write_default_config(&path, *force)?;
                println!("Wrote {}", path.display());
                Ok(())
            }
        }
    }
}

fn render_config(config: &Config) -> String {
    let mut out = String::from("Configuration\n=============\n\n");

    match &config.config_file {
        Some(path) => out.push_str(&format!("Config file: {}\n", path.display())),
        None => out.push_str(&format!(
            "Config file: {} (not found)\n",
            Config::default_config_path().display()
        )),
    }
    out.push('\n');

    out.push_str(&format!("data_dir: {}\n", config.data_dir.value.display()));
    out.push_str(&format!("  source: {}\n\n", config.data_dir.source));

    let holidays = if config.holidays.value.is_empty() {
        "(none)".to_string()
    } else {
        config.holidays.value.join(", ")
    };
    out.push_str(&format!("holidays: {}\n", holidays));
    out.push_str(&format!("  source: {}\n", config.holidays.source));
    out
}

fn write_default_config(path: &Path, force: bool) -> Result<(), String> {
    if path.exists() && !force {
        return Err(format!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        ));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create '{}': {}", parent.display(), e))?;
    }
    std::fs::write(path, DEFAULT_CONFIG)
        .map_err(|e| format!("Failed to write '{}': {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigSource;
    use tempfile::tempdir;

    #[test]
    fn test_init_writes_loadable_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.yaml");

        write_default_config(&path, false).unwrap();
        let config = Config::load(Some(path.clone())).unwrap();
        assert_eq!(config.config_file, Some(path));
        assert_eq!(config.holidays.source, ConfigSource::File);
        assert!(config.holidays.value.is_empty());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "holidays: [2024-01-01]\n").unwrap();

        let err = write_default_config(&path, false).unwrap_err();
        assert!(err.contains("already exists"));
        write_default_config(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }

    #[test]
    fn test_render_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "data_dir: /srv/kondate\nholidays: [2024-05-03]\n").unwrap();

        let out = render_config(&Config::load(Some(path)).unwrap());
        assert!(out.contains("data_dir: /srv/kondate\n  source: file\n"));
        assert!(out.contains("holidays: 2024-05-03\n  source: file\n"));
    }
}
