//! Growth Projector — traffic, order, and revenue projections for new
//! business launches, blending paid acquisition with an organic growth
//! model.
//!
//! Main entry point that loads benchmarks, runs the projection engine,
//! prints the monthly table, and persists the report artifacts.

use clap::Parser;
use growth_benchmarks::BenchmarkSource;
use growth_core::config::AppConfig;
use growth_projection::ProjectionInput;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "growth-projector")]
#[command(about = "Generate growth projections for a new business launch")]
#[command(version)]
struct Cli {
    /// Monthly ad spend in dollars (overrides config)
    #[arg(long, env = "GROWTH_PROJECTOR__PROJECTIONS__MONTHLY_AD_SPEND")]
    spend: Option<f64>,

    /// Average order value in dollars (overrides config)
    #[arg(long, env = "GROWTH_PROJECTOR__PROJECTIONS__AOV")]
    aov: Option<f64>,

    /// Cost per click; falls back to the benchmark average
    #[arg(long, env = "GROWTH_PROJECTOR__PROJECTIONS__CPC")]
    cpc: Option<f64>,

    /// Starting conversion rate in percent; benchmark default if omitted
    #[arg(long, env = "GROWTH_PROJECTOR__PROJECTIONS__CONVERSION_RATE")]
    conversion_rate: Option<f64>,

    /// Number of months to project (overrides config)
    #[arg(long, env = "GROWTH_PROJECTOR__PROJECTIONS__MONTHS")]
    months: Option<u32>,

    /// Directory for report artifacts (overrides config)
    #[arg(long, env = "GROWTH_PROJECTOR__OUTPUT_DIR")]
    output_dir: Option<String>,

    /// Path to a measured paid-media benchmark file (overrides config)
    #[arg(long, env = "GROWTH_PROJECTOR__BENCHMARK_PATH")]
    benchmarks: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "growth_projector=info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(spend) = cli.spend {
        config.projections.monthly_ad_spend = spend;
    }
    if let Some(aov) = cli.aov {
        config.projections.aov = aov;
    }
    if cli.cpc.is_some() {
        config.projections.cpc = cli.cpc;
    }
    if cli.conversion_rate.is_some() {
        config.projections.conversion_rate = cli.conversion_rate;
    }
    if let Some(months) = cli.months {
        config.projections.months = months;
    }
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    if let Some(path) = cli.benchmarks {
        config.benchmark_path = path;
    }

    // Load benchmarks (degrades to industry defaults, never fails)
    let loaded = growth_benchmarks::load(&config.benchmark_path);
    if loaded.source == BenchmarkSource::IndustryDefaults {
        warn!("Projecting from industry default benchmarks");
    }

    let input = ProjectionInput {
        monthly_ad_spend: config.projections.monthly_ad_spend,
        aov: config.projections.aov,
        base_cpc: config.projections.cpc.unwrap_or(loaded.curves.avg_cpc),
        base_conversion_rate: config
            .projections
            .conversion_rate
            .unwrap_or(loaded.curves.conversion_rate_month_1_3),
        months: config.projections.months,
    };

    info!(
        target = %config.target_name,
        monthly_ad_spend = input.monthly_ad_spend,
        aov = input.aov,
        base_cpc = input.base_cpc,
        base_conversion_rate = input.base_conversion_rate,
        months = input.months,
        "Generating growth projections"
    );

    let report = growth_projection::generate_series(&input, &loaded.curves)?;

    println!("{}", growth_reporting::render_projection_table(&report));

    let artifacts = growth_reporting::persist_report(
        &report,
        &config.output_dir,
        "growth_projection",
        &config.target_name,
    )?;

    info!(
        json = %artifacts.json_path.display(),
        csv = %artifacts.csv_path.display(),
        report = %artifacts.report_path.display(),
        "Projection complete"
    );

    Ok(())
}
