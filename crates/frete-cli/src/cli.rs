//! CLI definition using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use frete_types::{LogFormat, OutputFormat};

#[derive(Parser)]
#[command(name = "frete-preco")]
#[command(version)]
#[command(about = "Canonical freight price labels (per ton, per km, per vehicle)")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Pricing fields shared by `price`
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RecordArgs {
    /// Pricing type token (e.g. PER_TON, POR_KM, FIXO)
    #[arg(long = "type", short = 't')]
    pub pricing_type: Option<String>,

    /// Total price (used as the rate for per-vehicle pricing)
    #[arg(long)]
    pub price: Option<f64>,

    /// Explicit rate per ton
    #[arg(long)]
    pub per_ton: Option<f64>,

    /// Explicit rate per km
    #[arg(long)]
    pub per_km: Option<f64>,

    /// Number of trucks required
    #[arg(long)]
    pub trucks: Option<i64>,

    /// Cargo weight in kg
    #[arg(long)]
    pub weight: Option<f64>,

    /// Route distance in km
    #[arg(long)]
    pub distance: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Price a single record
    Price {
        #[command(flatten)]
        record: RecordArgs,
    },

    /// Price from a total amount, deriving the unit rate from weight or distance
    FromTotal {
        /// Total amount
        total: f64,

        /// Pricing type token
        #[arg(long = "type", short = 't')]
        pricing_type: String,

        /// Cargo weight in kg
        #[arg(long)]
        weight: Option<f64>,

        /// Route distance in km
        #[arg(long)]
        distance: Option<f64>,

        /// Number of trucks required
        #[arg(long)]
        trucks: Option<i64>,
    },

    /// Show the canonical pricing type for a token
    Normalize {
        /// Pricing type token
        token: String,
    },

    /// Price every record in a CSV/JSON file or directory
    Batch {
        /// File or folder with record files
        path: PathBuf,

        /// Write results as JSON to this file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Show only records without a price
        #[arg(long)]
        unavailable_only: bool,
    },

    /// Print a pricing report for a record file or directory
    Report {
        /// File or folder with record files
        path: PathBuf,
    },

    /// Export priced records to Excel
    Export {
        /// File or folder with record files
        path: PathBuf,

        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default log level (e.g. warn, info, debug)
        #[arg(long)]
        set_log_level: Option<String>,

        /// Set log line format
        #[arg(long)]
        set_log_format: Option<LogFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
