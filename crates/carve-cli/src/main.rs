//! Carveout CLI
//!
//! Command-line interface for the Carveout non-core asset analyzer.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};

mod config;
mod validator;

use config::AppConfig;
use validator::ConfigValidator;

use carve_core::{AnalysisEngine, RuleBasedAugmenter};
use carve_extractors::testing::sample_dataset;
use carve_extractors::{extract_all, CompanyDataset};
use carve_report::{AssetReport, ReportFormat};

#[derive(Parser)]
#[command(name = "carveout")]
#[command(version)]
#[command(about = "Non-core asset identification for divestiture analysis", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a company dataset for non-core assets
    Analyze {
        /// Dataset file (JSON)
        dataset: PathBuf,

        /// Confidence cutoff in [0, 1], overriding the configured default
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Report format (text, json, csv)
        #[arg(short, long)]
        format: Option<ReportFormat>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum number of candidates to list
        #[arg(long)]
        max_assets: Option<usize>,
    },

    /// Analyze the bundled sample dataset
    Sample {
        /// Confidence cutoff in [0, 1], overriding the configured default
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Report format (text, json, csv)
        #[arg(short, long)]
        format: Option<ReportFormat>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum number of candidates to list
        #[arg(long)]
        max_assets: Option<usize>,
    },

    /// Validate configuration
    Validate {
        /// Configuration file to validate
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = AppConfig::load(&config_path).unwrap_or_else(|_| {
        if cli.verbose {
            eprintln!("Using default configuration (no config file found)");
        }
        AppConfig::default()
    });

    // Initialize logging
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        config.logging.tracing_level()
    };

    carve_observability::logging::init_logging_with_config(
        carve_observability::logging::LoggingConfig {
            level: log_level,
            json_format: config.logging.json_format,
            ..Default::default()
        },
    );

    // Execute command
    match cli.command {
        Commands::Analyze {
            dataset,
            threshold,
            format,
            output,
            max_assets,
        } => cmd_analyze(
            &config,
            &dataset,
            threshold,
            format,
            output.as_deref(),
            max_assets,
        ),
        Commands::Sample {
            threshold,
            format,
            output,
            max_assets,
        } => run_analysis(
            &config,
            &sample_dataset(),
            threshold,
            format,
            output.as_deref(),
            max_assets,
        ),
        Commands::Validate { config: cfg_path } => cmd_validate(&cfg_path.unwrap_or(config_path)),
        Commands::Config => cmd_config(&config),
    }
}

fn default_config_path() -> PathBuf {
    if let Some(dirs) = directories::ProjectDirs::from("com", "carveout", "carveout") {
        dirs.config_dir().join("config.yaml")
    } else {
        PathBuf::from("config/default.yaml")
    }
}

fn cmd_analyze(
    config: &AppConfig,
    dataset_path: &Path,
    threshold: Option<f64>,
    format: Option<ReportFormat>,
    output: Option<&Path>,
    max_assets: Option<usize>,
) -> Result<()> {
    let contents = std::fs::read_to_string(dataset_path)
        .with_context(|| format!("Failed to read dataset file: {}", dataset_path.display()))?;
    let dataset = CompanyDataset::from_json(&contents)
        .with_context(|| format!("Failed to parse dataset file: {}", dataset_path.display()))?;

    run_analysis(config, &dataset, threshold, format, output, max_assets)
}

fn run_analysis(
    config: &AppConfig,
    dataset: &CompanyDataset,
    threshold: Option<f64>,
    format: Option<ReportFormat>,
    output: Option<&Path>,
    max_assets: Option<usize>,
) -> Result<()> {
    // Refuse to run with a broken configuration
    let validation_result = ConfigValidator::validate(config);
    if validation_result.has_errors() {
        validation_result.print();
        println!();
        println!(
            "{}",
            "Analysis aborted due to configuration errors. Fix the errors above and try again."
                .red()
                .bold()
        );
        std::process::exit(1);
    }

    let span = carve_observability::analysis_span!(&dataset.company_name);
    let _guard = span.enter();

    let mut engine = AnalysisEngine::new(config.analysis.clone())
        .context("Invalid analysis configuration")?
        .with_augmenter(Box::new(RuleBasedAugmenter));
    let cutoff = threshold.unwrap_or(config.analysis.default_cutoff);

    let batches = extract_all(dataset, engine.config()).context("Signal extraction failed")?;
    for batch in batches {
        engine.ingest(batch);
    }

    let run = engine.run(cutoff).context("Analysis run failed")?;

    let mut report = AssetReport::from_run(&run, config.effective_max_assets(max_assets));
    if !dataset.company_name.is_empty() {
        report = report.with_title(dataset.company_name.clone());
    }

    let format = format.unwrap_or_else(|| config.report.resolved_format());
    let rendered = report.render(format).context("Report rendering failed")?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!(
                "{} Report written to {}",
                "✓".green(),
                path.display().to_string().cyan()
            );
        }
        None => println!("{}", rendered.trim_end()),
    }

    Ok(())
}

fn cmd_validate(config_path: &Path) -> Result<()> {
    println!(
        "Validating configuration: {}",
        config_path.display().to_string().cyan()
    );

    let config = if config_path.exists() {
        match AppConfig::load(config_path) {
            Ok(config) => config,
            Err(e) => {
                println!("{}: {}", "Configuration file error".red().bold(), e);
                std::process::exit(1);
            }
        }
    } else {
        println!("No file found, validating built-in defaults");
        AppConfig::default()
    };

    let validation_result = ConfigValidator::validate(&config);
    validation_result.print();

    // Summary
    println!();
    println!("{}", "Configuration Summary".bold());
    println!("─────────────────────");
    println!("  Default cutoff: {:.2}", config.analysis.default_cutoff);
    println!(
        "  Tier floors:    high {:.2}, medium {:.2}, low {:.2}",
        config.analysis.tiers.high, config.analysis.tiers.medium, config.analysis.tiers.low
    );
    println!(
        "  Weights:        financial {}, operational {}, industry {}, historical {}",
        config.analysis.weights.financial,
        config.analysis.weights.operational,
        config.analysis.weights.industry,
        config.analysis.weights.historical
    );
    println!("  Report format:  {}", config.report.format);
    println!("  Max assets:     {}", config.effective_max_assets(None));

    if validation_result.has_errors() {
        println!();
        println!(
            "{}",
            "Configuration validation failed. Fix the errors above."
                .red()
                .bold()
        );
        std::process::exit(1);
    } else if validation_result.has_warnings() {
        println!();
        println!(
            "{}",
            "Configuration is valid with warnings. Review the warnings above."
                .yellow()
                .bold()
        );
    } else {
        println!();
        println!("{}", "Configuration is valid.".green().bold());
    }

    Ok(())
}

fn cmd_config(config: &AppConfig) -> Result<()> {
    print!("{}", serde_yaml::to_string(config)?);
    Ok(())
}
