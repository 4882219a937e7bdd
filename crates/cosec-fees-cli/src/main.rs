mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::estimate::EstimateArgs;
use commands::schedule::ScheduleArgs;
use commands::services::ServicesArgs;

/// Compliance fee estimation for Malaysian corporate secretarial services
#[derive(Parser)]
#[command(
    name = "cosec",
    version,
    about = "Compliance fee estimation for Malaysian corporate secretarial services",
    long_about = "Estimate annual audit, tax agent, and monthly accounting fees from a \
                  company's headline financials, browse the firm's fee schedules and \
                  ad-hoc service rate card, and inspect fixed-price packages. All \
                  amounts are RM with decimal precision."
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
    /// Estimate audit, tax, and accounting fees from company financials
    Estimate(EstimateArgs),
    /// Print a fee schedule table (audit, tax, or surcharge)
    Schedule(ScheduleArgs),
    /// Browse the ad-hoc secretarial service rate card
    Services(ServicesArgs),
    /// Incorporation package and retainer plans
    Packages,
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
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Estimate(args) => commands::estimate::run_estimate(args),
        Commands::Schedule(args) => commands::schedule::run_schedule(args),
        Commands::Services(args) => commands::services::run_services(args),
        Commands::Packages => commands::services::run_packages(),
        Commands::Version => {
            println!("cosec {}", env!("CARGO_PKG_VERSION"));
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
