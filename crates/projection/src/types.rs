//! Projection records. Everything here is built fresh per run and immutable
//! after construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scalar inputs to a projection run. CPC and conversion rate default to
/// the benchmark curve set's scalars when the caller does not override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub monthly_ad_spend: f64,
    pub aov: f64,
    pub base_cpc: f64,
    /// Starting conversion rate, in percent.
    pub base_conversion_rate: f64,
    pub months: u32,
}

/// One projected month. Each month is derived independently from the input
/// and the curves for that month index — the model is not autoregressive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProjection {
    pub month: u32,
    pub ad_spend: f64,
    pub effective_cpc: f64,
    /// Percent, after the tiered maturity step is applied.
    pub effective_conversion_rate: f64,
    pub paid_traffic: f64,
    pub paid_orders: f64,
    pub paid_revenue: f64,
    /// Organic share of total traffic, in percent.
    pub organic_pct: f64,
    pub organic_traffic: f64,
    pub organic_orders: f64,
    pub organic_revenue: f64,
    pub total_traffic: f64,
    pub total_orders: f64,
    pub total_revenue: f64,
    pub roas: f64,
    pub cac: f64,
}

/// Rollup over a prefix window of the monthly series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSummary {
    pub total_spend: f64,
    pub total_revenue: f64,
    pub total_orders: f64,
    /// `Σrevenue / Σspend` (0.0 when spend is zero).
    pub roas: f64,
    /// Organic share from the last month in the window, not an average.
    pub organic_traffic_pct: f64,
    pub paid_traffic_pct: f64,
}

/// Summary rollups. The 6-month window is the headline projection; a
/// separate full-horizon rollup appears only for horizons past 6 months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    #[serde(rename = "3_month")]
    pub three_month: WindowSummary,
    #[serde(rename = "6_month")]
    pub six_month: WindowSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_horizon: Option<WindowSummary>,
    /// `Σspend / Σorders` over the full horizon (0.0 when orders is zero).
    pub avg_cac: f64,
}

/// The full projection bundle: the unit persisted and returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionReport {
    pub inputs: ProjectionInput,
    pub monthly: Vec<MonthlyProjection>,
    pub summary: ProjectionSummary,
    pub generated_at: DateTime<Utc>,
}
