//! Persisted projection artifacts: the JSON bundle, the CSV row table, and
//! the narrative text report. Any write failure is surfaced as a hard
//! persistence error; the in-memory report stays valid either way.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use growth_core::{GrowthError, GrowthResult};
use growth_projection::{ProjectionReport, WindowSummary};
use tracing::info;

/// Paths of the three artifacts written for one report.
#[derive(Debug, Clone)]
pub struct PersistedArtifacts {
    pub json_path: PathBuf,
    pub csv_path: PathBuf,
    pub report_path: PathBuf,
}

/// CSV header, matching the monthly record fields in order.
const CSV_HEADER: [&str; 16] = [
    "Month",
    "Ad Spend",
    "Effective CPC",
    "Conversion Rate",
    "Paid Traffic",
    "Paid Orders",
    "Paid Revenue",
    "Organic %",
    "Organic Traffic",
    "Organic Orders",
    "Organic Revenue",
    "Total Traffic",
    "Total Orders",
    "Total Revenue",
    "ROAS",
    "CAC",
];

fn persistence_err(path: &Path, err: impl std::fmt::Display) -> GrowthError {
    GrowthError::Persistence(format!("failed to write {}: {}", path.display(), err))
}

/// Write all three artifacts under `dir`, named `{prefix}_{timestamp}`.
pub fn persist_report(
    report: &ProjectionReport,
    dir: impl AsRef<Path>,
    prefix: &str,
    target_name: &str,
) -> GrowthResult<PersistedArtifacts> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| persistence_err(dir, e))?;

    let timestamp = report.generated_at.format("%Y%m%d_%H%M%S");

    let json_path = dir.join(format!("{prefix}_{timestamp}.json"));
    write_json(report, &json_path)?;

    let csv_path = dir.join(format!("{prefix}_{timestamp}.csv"));
    write_csv(report, &csv_path)?;

    let report_path = dir.join(format!("{prefix}_report_{timestamp}.txt"));
    write_narrative(report, target_name, &report_path)?;

    info!(
        json = %json_path.display(),
        csv = %csv_path.display(),
        report = %report_path.display(),
        "Projection artifacts written"
    );

    Ok(PersistedArtifacts {
        json_path,
        csv_path,
        report_path,
    })
}

/// Full bundle: inputs, monthly series, summary, timestamp.
fn write_json(report: &ProjectionReport, path: &Path) -> GrowthResult<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).map_err(|e| persistence_err(path, e))
}

/// Row-oriented table, one row per month.
fn write_csv(report: &ProjectionReport, path: &Path) -> GrowthResult<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| persistence_err(path, e))?;

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| persistence_err(path, e))?;

    for m in &report.monthly {
        writer
            .write_record([
                m.month.to_string(),
                m.ad_spend.to_string(),
                m.effective_cpc.to_string(),
                m.effective_conversion_rate.to_string(),
                m.paid_traffic.to_string(),
                m.paid_orders.to_string(),
                m.paid_revenue.to_string(),
                m.organic_pct.to_string(),
                m.organic_traffic.to_string(),
                m.organic_orders.to_string(),
                m.organic_revenue.to_string(),
                m.total_traffic.to_string(),
                m.total_orders.to_string(),
                m.total_revenue.to_string(),
                m.roas.to_string(),
                m.cac.to_string(),
            ])
            .map_err(|e| persistence_err(path, e))?;
    }

    writer.flush().map_err(|e| persistence_err(path, e))
}

fn narrative_window(out: &mut String, title: &str, summary: &WindowSummary) {
    let _ = writeln!(out, "\n\n{title}:");
    let _ = writeln!(out, "{}", "-".repeat(40));
    let _ = writeln!(out, "Total Marketing Spend: ${:.2}", summary.total_spend);
    let _ = writeln!(out, "Projected Revenue: ${:.2}", summary.total_revenue);
    let _ = writeln!(out, "Projected Orders: {:.0}", summary.total_orders);
    let _ = writeln!(out, "Return on Ad Spend (ROAS): {}x", summary.roas);
    let _ = writeln!(
        out,
        "Traffic Split: {}% Paid / {}% Organic",
        summary.paid_traffic_pct, summary.organic_traffic_pct
    );
}

/// Narrative text report: inputs, window summaries, the fixed modeling
/// assumptions, and validation caveats.
fn write_narrative(report: &ProjectionReport, target_name: &str, path: &Path) -> GrowthResult<()> {
    let mut out = String::new();
    let rule = "=".repeat(70);

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "GROWTH PROJECTION REPORT: {target_name}");
    let _ = writeln!(
        out,
        "Generated: {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(out, "{rule}\n");

    let _ = writeln!(out, "PROJECTION INPUTS:");
    let _ = writeln!(out, "{}", "-".repeat(40));
    let inputs = &report.inputs;
    let _ = writeln!(out, "Monthly Ad Spend: ${:.2}", inputs.monthly_ad_spend);
    let _ = writeln!(out, "Average Order Value (AOV): ${:.2}", inputs.aov);
    let _ = writeln!(out, "Base Cost Per Click (CPC): ${:.2}", inputs.base_cpc);
    let _ = writeln!(
        out,
        "Base Conversion Rate: {}%",
        inputs.base_conversion_rate
    );
    let _ = writeln!(out, "Projection Period: {} months", inputs.months);

    narrative_window(&mut out, "3-MONTH PROJECTION", &report.summary.three_month);
    narrative_window(&mut out, "6-MONTH PROJECTION", &report.summary.six_month);
    if let Some(full) = &report.summary.full_horizon {
        narrative_window(
            &mut out,
            &format!("{}-MONTH PROJECTION", inputs.months),
            full,
        );
    }
    let _ = writeln!(
        out,
        "Average Customer Acquisition Cost: ${:.2}",
        report.summary.avg_cac
    );

    let _ = writeln!(out, "\n\nKEY ASSUMPTIONS:");
    let _ = writeln!(out, "{}", "-".repeat(40));
    let _ = writeln!(out, "1. CPC optimizes 5-10% per month as algorithms learn");
    let _ = writeln!(
        out,
        "2. Conversion rate improves 50% by month 6 (reviews, retargeting)"
    );
    let _ = writeln!(out, "3. Organic traffic grows from ~5% to ~18% over 6 months");
    let _ = writeln!(
        out,
        "4. Organic traffic converts 30% higher than paid (warmer)"
    );
    let _ = writeln!(out, "5. New domain SEO takes 2-3 months to show results");

    let _ = writeln!(out, "\n\nVALIDATION NOTES:");
    let _ = writeln!(out, "{}", "-".repeat(40));
    let _ = writeln!(out, "- These projections are based on industry benchmarks");
    let _ = writeln!(out, "- Actual results will vary based on creative quality,");
    let _ = writeln!(out, "  targeting precision, and market conditions");
    let _ = writeln!(out, "- Review and adjust monthly based on actual performance");
    let _ = writeln!(out, "- The 90% paid / 10% organic split in month 1 is typical");
    let _ = writeln!(out, "- The ~80% paid / 20% organic split by month 6 requires");
    let _ = writeln!(out, "  consistent SEO and content investment");

    fs::write(path, out).map_err(|e| persistence_err(path, e))
}
