// src/cli/mod.rs — CLI definition (clap derive)

pub mod account;
pub mod console;
pub mod dashboard;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chemviz", about = "Chemical Equipment Visualizer client", version)]
pub struct Cli {
    /// Config file path
    #[arg(long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the API token
    Login {
        username: String,
        /// Password (prompted interactively when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Create a new account
    Register {
        username: String,
        email: String,
        /// Password (prompted interactively when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Drop the stored API token
    Logout,
    /// Show session state
    Status,
    /// Upload an equipment CSV and refresh the dashboard
    Upload { file: PathBuf },
    /// Show the current summary, charts data and upload history
    Dashboard {
        /// Load a history entry instead of the latest summary
        /// (1-based, most recent first)
        #[arg(long)]
        select: Option<usize>,
    },
    /// Download the PDF report for the latest dataset
    Report,
}
