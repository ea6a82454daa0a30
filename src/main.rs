//! @ai:module:intent CLI for G-Mean experiment reports
//! @ai:module:layer presentation

use anyhow::Result;
use clap::{Parser, Subcommand};
use gmean_report::{config::ReportConfig, pipeline::ReportPipeline, RunSummary};
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = "gmean-report.toml";

#[derive(Parser)]
#[command(name = "gmean-report")]
#[command(about = "Summarise classification experiment results by G-Mean")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(clap::Args, Default)]
struct RunArgs {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding one results CSV per dataset
    #[arg(long)]
    results_dir: Option<PathBuf>,

    /// Directory the reports are written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also write summary.json
    #[arg(long)]
    json: bool,

    /// Skip the best/worst chart
    #[arg(long)]
    no_chart: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize default configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gmean_report=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { output }) => init_config(output),
        None => run_report(cli.run),
    }
}

/// @ai:intent Analyze every results file and write the reports
/// @ai:effects fs:read, fs:write
fn run_report(args: RunArgs) -> Result<()> {
    let mut config = load_or_default_config(args.config.clone())?;
    apply_overrides(&mut config, &args);

    tracing::info!(
        "Reading results from {}",
        config.paths.results_dir.display()
    );

    let summary = ReportPipeline::new().run(&config)?;
    print_summary(&summary);
    Ok(())
}

/// @ai:intent Let CLI flags take precedence over the config file
/// @ai:effects pure
fn apply_overrides(config: &mut ReportConfig, args: &RunArgs) {
    if let Some(dir) = &args.results_dir {
        config.paths.results_dir = dir.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.paths.output_dir = dir.clone();
    }
    if args.json {
        config.output.write_json = true;
    }
    if args.no_chart {
        config.chart.enabled = false;
    }
}

/// @ai:intent Print best and worst score per dataset
/// @ai:effects io:stdout
fn print_summary(summary: &RunSummary) {
    println!();
    println!("{:<30} {:>8} {:>8} {:>8}", "Dataset", "Best", "Median", "Worst");
    println!("{}", "-".repeat(57));

    for analysis in &summary.analyses {
        println!(
            "{:<30} {:>8.4} {:>8.4} {:>8.4}",
            analysis.dataset, analysis.best.score, analysis.summary.median, analysis.worst.score
        );
    }

    println!();
    for path in &summary.outputs {
        println!("  - {}", path.display());
    }
}

/// @ai:intent Initialize default configuration file
/// @ai:effects fs:write
fn init_config(output: PathBuf) -> Result<()> {
    let config = ReportConfig::default();
    config.save(&output)?;
    println!("Configuration saved to {}", output.display());
    Ok(())
}

/// @ai:intent Load configuration or use defaults
/// @ai:effects fs:read
fn load_or_default_config(path: Option<PathBuf>) -> Result<ReportConfig> {
    match path {
        Some(p) => ReportConfig::load(&p),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);

            if default_path.exists() {
                ReportConfig::load(&default_path)
            } else {
                Ok(ReportConfig::default())
            }
        }
    }
}
