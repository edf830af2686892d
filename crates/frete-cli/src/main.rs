//! Frete Preco - canonical freight price labels
//!
//! A CLI over the freight pricing contract: price single records, back-solve
//! totals, and batch-price record files.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
