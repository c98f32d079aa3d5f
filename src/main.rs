use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::{
    CalendarCommand, ConfigCommand, PlanCommand, ShoppingCommand, SuggestCommand, WeekCommand,
};
use config::Config;
use kondate_core::{FileGateway, Planner};

#[derive(Parser)]
#[command(name = "kondate")]
#[command(version)]
#[command(about = "Plan the week's meals and keep a shopping list", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month calendar with planned days
    Calendar(CalendarCommand),

    /// Show the meals of one week
    Week(WeekCommand),

    /// Show or edit the plan for a date
    Plan(PlanCommand),

    /// List remembered dish names for a category
    Suggest(SuggestCommand),

    /// Manage the shopping list
    Shopping(ShoppingCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kondate=warn,kondate_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.clone())?;
    tracing::debug!(data_dir = %config.data_dir.value.display(), "loaded configuration");

    let open_planner = || Planner::open(Arc::new(FileGateway::new(config.data_dir.value.clone())));

    match cli.command {
        Some(Commands::Calendar(cmd)) => {
            let planner = open_planner();
            cmd.run(&planner.plans, &config.holiday_calendar()?)?;
        }
        Some(Commands::Week(cmd)) => {
            let planner = open_planner();
            cmd.run(&planner.plans)?;
        }
        Some(Commands::Plan(cmd)) => {
            let mut planner = open_planner();
            cmd.run(&mut planner)?;
        }
        Some(Commands::Suggest(cmd)) => {
            let planner = open_planner();
            cmd.run(&planner.suggestions)?;
        }
        Some(Commands::Shopping(cmd)) => {
            let mut planner = open_planner();
            cmd.run(&mut planner.shopping)?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(&config, cli.config)?;
        }
        None => {
            println!("kondate - weekly meal planner");
            println!("Run 'kondate --help' for usage information");
        }
    }

    Ok(())
}
