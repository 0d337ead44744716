//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use es_core::Locality;

#[derive(Debug, Parser)]
#[command(name = "ecoscan", version, about = "Score products, get disposal guidance and track your scan history")]
pub struct Cli {
    /// Configuration file (defaults to ecoscan.toml in the data directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// SQLite database file, overriding the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List supported localities
    Localities,

    /// Look a barcode up and show its impact and disposal guidance without saving
    Analyze {
        barcode: String,
        /// Locality id or label, e.g. `chicago` or "San Francisco"
        #[arg(long, short)]
        locality: Option<Locality>,
    },

    /// Analyze a barcode and save the result to the history
    Scan {
        barcode: String,
        #[arg(long, short)]
        locality: Option<Locality>,
    },

    /// Show saved scans, newest first
    History {
        /// Number of scans to show (1 to 1000)
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=1000))]
        limit: u32,
    },

    /// Weekly series, impact counts, streak, score and trend
    Analytics,

    /// Monthly report rows and totals (defaults to the current month)
    Report {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },

    /// Write every scan of a month to a CSV file (defaults to the current month)
    Export {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        /// Output file or directory (defaults to ecoscan_report_YYYY_MM.csv in the current directory)
        #[arg(long, short, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Delete every saved scan
    Reset {
        /// Required confirmation
        #[arg(long)]
        yes: bool,
    },
}
