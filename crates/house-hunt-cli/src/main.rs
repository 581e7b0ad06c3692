mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::appreciation::AppreciateArgs;
use commands::comparison::CompareArgs;
use commands::listings::{ListingsArgs, PriceHistoryArgs};
use commands::mortgage::{AmortizeArgs, PaymentArgs};

/// Mortgage, equity and appreciation projections for property listings
#[derive(Parser)]
#[command(
    name = "hh",
    version,
    about = "Mortgage, equity and appreciation projections for property listings",
    long_about = "Compare property listings side by side with decimal precision. \
                  Computes level mortgage payments, amortization schedules, \
                  monthly-compounded appreciation and total equity over a \
                  projection horizon."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Level monthly payment on a fixed-rate loan
    Payment(PaymentArgs),
    /// Month-by-month amortization schedule
    Amortize(AmortizeArgs),
    /// Monthly-compounded appreciation projection
    Appreciate(AppreciateArgs),
    /// Compare every listing in a catalog under shared parameters
    Compare(CompareArgs),
    /// Show the listings in a catalog
    Listings(ListingsArgs),
    /// Dated price history for catalog listings
    PriceHistory(PriceHistoryArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payment(args) => commands::mortgage::run_payment(args),
        Commands::Amortize(args) => commands::mortgage::run_amortize(args),
        Commands::Appreciate(args) => commands::appreciation::run_appreciate(args),
        Commands::Compare(args) => commands::comparison::run_compare(args),
        Commands::Listings(args) => commands::listings::run_listings(args),
        Commands::PriceHistory(args) => commands::listings::run_price_history(args),
        Commands::Version => {
            println!("hh {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
