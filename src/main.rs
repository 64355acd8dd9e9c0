use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use seapay::cli::{handle_budget_command, handle_pay_command, BudgetCommands, PayCommands};
use seapay::config::{paths::SeapayPaths, settings::Settings};
use seapay::engine::PayEngine;
use seapay::storage::{PayConfigStore, Storage};

#[derive(Parser)]
#[command(
    name = "seapay",
    version,
    about = "Terminal-based military pay and budget calculator",
    long_about = "seapay derives a detailed monthly pay breakdown from your \
                  pay grade, years of service, allowances, withholding, \
                  insurance, and allotments, and tracks a needs/wants/savings \
                  budget against that income."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pay configuration and breakdown commands
    #[command(subcommand)]
    Pay(PayCommands),

    /// Budget ledger commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Initialize the data directory and default configuration
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SeapayPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage and the pay engine
    let storage = Storage::new(paths.clone())?;
    let engine = PayEngine::year_2025();

    match cli.command {
        Some(Commands::Pay(cmd)) => {
            handle_pay_command(&storage, &settings, &engine, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, &engine, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing seapay at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            let config = storage.pay_config.load()?;
            storage.pay_config.save(&config)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  seapay pay set --grade E5 --yos 4    configure your pay");
            println!("  seapay pay localities                pick a BAH locality");
            println!("  seapay pay show                      see the breakdown");
            println!("  seapay budget summary                track your budget");
        }
        Some(Commands::Config) => {
            println!("seapay Configuration");
            println!("====================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
        None => {
            println!("seapay - Terminal-based military pay and budget calculator");
            println!();
            println!("Run 'seapay --help' for usage information.");
            println!("Run 'seapay init' to get started.");
        }
    }

    Ok(())
}
