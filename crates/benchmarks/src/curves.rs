//! Month-indexed benchmark curves modelling how CPC efficiency and organic
//! traffic share evolve over the first year of a new business.

use serde::{Deserialize, Serialize};

/// Number of tabulated months. Lookups past this clamp flat.
const CURVE_MONTHS: usize = 12;

/// Immutable benchmark curve set, keyed by 1-based month index.
///
/// Built once (from the industry default or a measured benchmark file) and
/// passed by reference into the projection engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkCurveSet {
    /// Fraction applied to the base CPC per month. Non-increasing.
    cpc_multiplier: [f64; CURVE_MONTHS],
    /// Flat value used for months beyond the table.
    cpc_multiplier_floor: f64,
    /// Percent of total traffic that is organic per month. Non-decreasing.
    organic_share_pct: [f64; CURVE_MONTHS],
    /// Flat value used for months beyond the table.
    organic_share_ceiling_pct: f64,
    /// Scalar default CPC in dollars.
    pub avg_cpc: f64,
    /// Baseline conversion rate (percent) for a brand with no social proof.
    pub conversion_rate_month_1_3: f64,
}

impl BenchmarkCurveSet {
    /// Build a curve set from explicit tables. Callers are responsible for
    /// keeping percentages in [0,100] and multipliers positive.
    pub fn new(
        cpc_multiplier: [f64; CURVE_MONTHS],
        cpc_multiplier_floor: f64,
        organic_share_pct: [f64; CURVE_MONTHS],
        organic_share_ceiling_pct: f64,
        avg_cpc: f64,
        conversion_rate_month_1_3: f64,
    ) -> Self {
        Self {
            cpc_multiplier,
            cpc_multiplier_floor,
            organic_share_pct,
            organic_share_ceiling_pct,
            avg_cpc,
            conversion_rate_month_1_3,
        }
    }

    /// Industry default curve set for a new e-commerce launch: CPC improves
    /// as ad platforms optimize, organic share grows as SEO matures.
    pub fn industry_default() -> Self {
        Self {
            cpc_multiplier: [
                1.0, 0.95, 0.90, 0.85, 0.82, 0.80, 0.78, 0.76, 0.75, 0.74, 0.73, 0.72,
            ],
            cpc_multiplier_floor: 0.75,
            organic_share_pct: [
                5.0, 7.0, 10.0, 12.0, 15.0, 18.0, 22.0, 25.0, 28.0, 30.0, 32.0, 35.0,
            ],
            organic_share_ceiling_pct: 35.0,
            avg_cpc: 2.50,
            conversion_rate_month_1_3: 1.5,
        }
    }

    /// CPC multiplier for a 1-based month, clamped to the floor past the
    /// tabulated range. No trend extrapolation.
    pub fn cpc_multiplier(&self, month: u32) -> f64 {
        let idx = month.saturating_sub(1) as usize;
        if idx < CURVE_MONTHS {
            self.cpc_multiplier[idx]
        } else {
            self.cpc_multiplier_floor
        }
    }

    /// Organic traffic share (percent) for a 1-based month, clamped to the
    /// ceiling past the tabulated range.
    pub fn organic_share_pct(&self, month: u32) -> f64 {
        let idx = month.saturating_sub(1) as usize;
        if idx < CURVE_MONTHS {
            self.organic_share_pct[idx]
        } else {
            self.organic_share_ceiling_pct
        }
    }

    /// Replace the scalar CPC default with a measured value.
    pub fn with_avg_cpc(mut self, avg_cpc: f64) -> Self {
        self.avg_cpc = avg_cpc;
        self
    }
}

impl Default for BenchmarkCurveSet {
    fn default() -> Self {
        Self::industry_default()
    }
}
