//! Fixed-column console view of a projection report.

use growth_projection::{ProjectionReport, WindowSummary};
use std::fmt::Write;

/// Format a whole-dollar amount with thousands separators, e.g. `12,500`.
fn group_thousands(value: f64) -> String {
    let negative = value < 0.0;
    let whole = value.abs().round() as u64;
    let digits = whole.to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn write_summary_block(out: &mut String, title: &str, summary: &WindowSummary) {
    let _ = writeln!(out, "\n{title}:");
    let _ = writeln!(out, "  Total Spend: ${}", group_thousands(summary.total_spend));
    let _ = writeln!(out, "  Total Revenue: ${}", group_thousands(summary.total_revenue));
    let _ = writeln!(out, "  Total Orders: {}", group_thousands(summary.total_orders));
    let _ = writeln!(out, "  ROAS: {:.2}x", summary.roas);
    let _ = writeln!(
        out,
        "  Traffic Split: {}% Paid / {}% Organic",
        summary.paid_traffic_pct, summary.organic_traffic_pct
    );
}

/// Render the month-by-month table plus the 3-/6-month summary blocks.
/// One row per month, fixed columns.
pub fn render_projection_table(report: &ProjectionReport) -> String {
    let mut out = String::new();
    let rule = "=".repeat(100);
    let dash = "-".repeat(100);

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "MONTHLY PROJECTIONS");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{:>6} {:>12} {:>8} {:>14} {:>10} {:>10} {:>14} {:>8} {:>10}",
        "Month", "Ad Spend", "CPC", "Paid Traffic", "Organic %", "Orders", "Revenue", "ROAS", "CAC"
    );
    let _ = writeln!(out, "{dash}");

    for m in &report.monthly {
        let _ = writeln!(
            out,
            "{:>6} {:>12} {:>8} {:>14} {:>9.1}% {:>10} {:>14} {:>7.2}x {:>10}",
            m.month,
            format!("${}", group_thousands(m.ad_spend)),
            format!("${:.2}", m.effective_cpc),
            group_thousands(m.paid_traffic),
            m.organic_pct,
            group_thousands(m.total_orders),
            format!("${}", group_thousands(m.total_revenue)),
            m.roas,
            format!("${}", group_thousands(m.cac)),
        );
    }
    let _ = writeln!(out, "{dash}");

    write_summary_block(&mut out, "3-MONTH SUMMARY", &report.summary.three_month);
    write_summary_block(&mut out, "6-MONTH SUMMARY", &report.summary.six_month);
    if let Some(full) = &report.summary.full_horizon {
        write_summary_block(
            &mut out,
            &format!("{}-MONTH SUMMARY", report.inputs.months),
            full,
        );
    }
    let _ = writeln!(out, "  Average CAC: ${:.2}", report.summary.avg_cac);

    out
}
