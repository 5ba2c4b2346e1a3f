use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use occuviz_chart::{max_for_metric, ChartConfig, ChartKind, Dashboard};
use occuviz_data::{Dataset, Metric};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Occuviz CLI for validating occupation datasets and emitting chart specs
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a dataset and report how many records it holds
    Validate {
        /// Path to the dataset (.json)
        input: PathBuf,
    },

    /// Emit the chart specification for one chart kind as JSON
    Render {
        /// Path to the dataset (.json)
        input: PathBuf,

        /// Chart to render: grouped-bar, filterable-bar or packing
        #[arg(short, long, default_value = "grouped-bar", value_parser = ChartKind::parse)]
        chart: ChartKind,

        /// Metric for the filterable bar chart: hourly_wage or annual_wage
        #[arg(short, long, value_parser = Metric::parse)]
        metric: Option<Metric>,

        /// Narrow the filterable bar range to MIN MAX
        #[arg(long, num_args = 2, value_names = ["MIN", "MAX"])]
        range: Option<Vec<f64>>,

        /// JSON file overriding chart labels and palette
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output path for the spec (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },

    /// Print the headline employment figure and per-metric maxima
    Summary {
        /// Path to the dataset (.json)
        input: PathBuf,
    },
}

#[derive(Serialize)]
struct Summary {
    records: usize,
    headline: String,
    caption: String,
    hourly_wage_max: f64,
    annual_wage_max: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Validate { input } => {
            let dataset = load_dataset(&input)?;
            println!("{}: {} valid records", input.display(), dataset.len());
        }
        Commands::Render {
            input,
            chart,
            metric,
            range,
            config,
            output,
            pretty,
        } => {
            let config = match config {
                Some(path) => ChartConfig::from_path(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => ChartConfig::default(),
            };
            let mut dashboard = Dashboard::new(load_dataset(&input)?, config)?;

            if let Some(metric) = metric {
                dashboard.select_metric(metric);
            }
            if let Some([min, max]) = range.as_deref() {
                dashboard.narrow_range(*min, *max)?;
            }

            let json = dashboard.render(chart).to_json_string(pretty)?;
            match output {
                Some(path) => {
                    fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Saved {chart} spec to {}", path.display());
                }
                None => println!("{json}"),
            }
        }
        Commands::Summary { input } => {
            let dashboard = Dashboard::new(load_dataset(&input)?, ChartConfig::default())?;
            let indicator = dashboard.employment_indicator();
            let wages = dashboard.filter().wages();
            let summary = Summary {
                records: dashboard.dataset().len(),
                headline: indicator.headline,
                caption: indicator.caption,
                hourly_wage_max: max_for_metric(wages, Metric::HourlyWage),
                annual_wage_max: max_for_metric(wages, Metric::AnnualWage),
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

fn load_dataset(path: &Path) -> Result<Dataset> {
    let dataset = Dataset::from_path(path)
        .with_context(|| format!("Failed to load dataset {}", path.display()))?;
    info!("Loaded {} records from {}", dataset.len(), path.display());
    Ok(dataset)
}
