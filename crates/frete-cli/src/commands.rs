//! Command handlers

use std::path::{Path, PathBuf};

use frete_app::app::{generate_pricing_report, PricingService};
use frete_app::config::Config;
use frete_app::export::export_to_excel;
use frete_app::logging::{init_logging, LoggingConfig};
use frete_app::repository::open_record_repo;
use frete_app::scanner::collect_record_files;
use frete_domain::{
    get_canonical_freight_price, get_canonical_price_from_total, normalize_pricing_type,
    PricedRecord, PricingContext, RawPricingRecord,
};
use frete_types::{LogFormat, OutputFormat, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::{Cli, Commands, RecordArgs};
use crate::output::{output_display, output_normalized, output_results};

pub fn execute(cli: Cli) -> Result<()> {
    let config_path = Config::config_path()?;

    match &cli.command {
        // Dispatched before loading so `--reset` works on an unreadable file
        Commands::Config {
            show,
            set_output,
            set_log_level,
            set_log_format,
            reset,
        } => cmd_config(
            &config_path,
            *show,
            *set_output,
            set_log_level.clone(),
            *set_log_format,
            *reset,
        ),
        command => {
            let config = Config::load_from(&config_path)?;

            init_logging(&LoggingConfig {
                level: if cli.verbose {
                    "debug".to_string()
                } else {
                    config.log_level.clone()
                },
                format: config.log_format,
            });

            run_pricing_command(command, cli.format.unwrap_or(config.output_format))
        }
    }
}

fn run_pricing_command(command: &Commands, output_format: OutputFormat) -> Result<()> {
    match command {
        Commands::Price { record } => cmd_price(record, output_format),

        Commands::FromTotal {
            total,
            pricing_type,
            weight,
            distance,
            trucks,
        } => {
            let context = PricingContext {
                pricing_type: Some(pricing_type.clone()),
                weight: *weight,
                distance_km: *distance,
                required_trucks: *trucks,
            };
            cmd_from_total(*total, &context, output_format)
        }

        Commands::Normalize { token } => {
            output_normalized(output_format, token, normalize_pricing_type(Some(token.as_str())))
        }

        Commands::Batch {
            path,
            output,
            unavailable_only,
        } => cmd_batch(path, output.clone(), *unavailable_only, output_format),

        Commands::Report { path } => cmd_report(path),

        Commands::Export { path, output } => cmd_export(path, output.clone()),

        Commands::Config { .. } => Ok(()),
    }
}

fn record_from_args(args: &RecordArgs) -> RawPricingRecord {
    RawPricingRecord {
        pricing_type: args.pricing_type.clone(),
        price: args.price,
        price_per_ton: args.per_ton,
        price_per_km: args.per_km,
        required_trucks: args.trucks,
        weight: args.weight,
        distance_km: args.distance,
    }
    .sanitized()
}

fn cmd_price(args: &RecordArgs, output_format: OutputFormat) -> Result<()> {
    let record = record_from_args(args);
    let display = get_canonical_freight_price(&record);
    output_display(output_format, &display)
}

fn cmd_from_total(total: f64, context: &PricingContext, output_format: OutputFormat) -> Result<()> {
    let display = get_canonical_price_from_total(total, context);
    output_display(output_format, &display)
}

/// Price every record file under `path`, showing progress for multi-file runs
fn price_path(path: &Path) -> Result<Vec<PricedRecord>> {
    let files = collect_record_files(path)?;
    tracing::debug!(files = files.len(), path = %path.display(), "collected record files");

    let progress = if files.len() > 1 {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut results = Vec::new();
    for file in &files {
        if let Some(ref pb) = progress {
            pb.set_message(
                file.file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default(),
            );
        }
        let repo = open_record_repo(file)?;
        results.extend(PricingService::new(repo.as_ref()).price_all()?);
        if let Some(ref pb) = progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_with_message("done");
    }
    Ok(results)
}

fn cmd_batch(
    path: &Path,
    output: Option<PathBuf>,
    unavailable_only: bool,
    output_format: OutputFormat,
) -> Result<()> {
    let mut results = price_path(path)?;
    if unavailable_only {
        results.retain(|r| !r.display.ok);
    }

    if let Some(output_path) = output {
        let content = serde_json::to_string_pretty(&results)?;
        std::fs::write(&output_path, content)?;
        eprintln!("Results saved to: {}", output_path.display());
        return Ok(());
    }

    output_results(output_format, &results)
}

fn cmd_report(path: &Path) -> Result<()> {
    let results = price_path(path)?;
    print!("{}", generate_pricing_report(&results));
    Ok(())
}

fn cmd_export(path: &Path, output: Option<PathBuf>) -> Result<()> {
    let results = price_path(path)?;
    let output_path = output.unwrap_or_else(|| PathBuf::from("fretes.xlsx"));
    export_to_excel(&results, &output_path)?;
    println!("Exported {} records to: {}", results.len(), output_path.display());
    Ok(())
}

fn cmd_config(
    config_path: &Path,
    show: bool,
    set_output: Option<OutputFormat>,
    set_log_level: Option<String>,
    set_log_format: Option<LogFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save_to(config_path)?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load_from(config_path)?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(level) = set_log_level {
        config.log_level = level;
        modified = true;
    }

    if let Some(format) = set_log_format {
        config.log_format = format;
        modified = true;
    }

    if modified {
        config.save_to(config_path)?;
        println!("Configuration saved");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_reset_recovers_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "output_format = [not toml").unwrap();
        assert!(Config::load_from(&path).is_err());

        cmd_config(&path, false, None, None, None, true).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output_format, Config::default().output_format);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_config_set_updates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        cmd_config(&path, false, Some(OutputFormat::Json), Some("debug".to_string()), None, false)
            .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");
    }
}
