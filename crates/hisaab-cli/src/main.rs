mod commands;
mod input;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::calculator::{EvalArgs, KeysArgs, PercentArgs};
use commands::emi::EmiArgs;
use commands::format::FormatArgs;
use commands::percentage::PctDiffArgs;

/// Calculator core with Indian number formatting
#[derive(Parser)]
#[command(
    name = "hisaab",
    version,
    about = "Calculator, percentage, EMI and Indian number formatting tools",
    long_about = "Evaluate keypad expressions, resolve percentage-key operations, \
                  compute loan EMIs with full amortization schedules, measure \
                  percentage change, and render numbers in lakh/crore grouping or words."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log engine decisions to stderr (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an arithmetic expression (+ - × ÷)
    Eval(EvalArgs),
    /// Resolve a percentage-key press against a running expression
    Percent(PercentArgs),
    /// Compute an EMI and its amortization schedule
    Emi(EmiArgs),
    /// Percentage change between two amounts
    PctDiff(PctDiffArgs),
    /// Format a number with lakh/crore grouping and in words
    Format(FormatArgs),
    /// Replay keypad presses through a calculator session
    Keys(KeysArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Yaml,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Eval(args) => commands::calculator::run_eval(args),
        Commands::Percent(args) => commands::calculator::run_percent(args),
        Commands::Emi(args) => commands::emi::run_emi(args),
        Commands::PctDiff(args) => commands::percentage::run_pct_diff(args),
        Commands::Format(args) => commands::format::run_format(args),
        Commands::Keys(args) => commands::calculator::run_keys(args),
        Commands::Version => {
            println!("hisaab {}", env!("CARGO_PKG_VERSION"));
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
