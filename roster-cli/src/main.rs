//! Roster CLI - Employee directory in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{browse, config, demo, list, logs, show};

/// Roster - employee directory in your terminal
#[derive(Parser)]
#[command(name = "roster", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the directory interactively
    Browse,

    /// Fetch the directory and print the cards
    List {
        /// Only show employees whose name matches
        #[arg(short, long)]
        search: Option<String>,
        /// Match the search text literally instead of as a pattern
        #[arg(long)]
        literal: bool,
        /// Output format (table, json, csv)
        #[arg(long, default_value = "table")]
        format: String,
        /// Output as JSON (shorthand for --format json)
        #[arg(long)]
        json: bool,
    },

    /// Show the detail view for one employee
    Show {
        /// Employee email
        email: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage demo mode
    Demo {
        #[command(subcommand)]
        command: Option<demo::DemoCommands>,
    },

    /// View and manage the event log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },

    /// Show the effective configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Browse => browse::run(),
        Commands::List { search, literal, format, json } => {
            let fmt = if json { "json".to_string() } else { format };
            list::run(search, literal, &fmt)
        }
        Commands::Show { email, json } => show::run(&email, json),
        Commands::Demo { command } => demo::run(command),
        Commands::Logs { command } => logs::run(command),
        Commands::Config { json } => config::run(json),
    }
}
