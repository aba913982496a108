//! The projection engine proper: one pure function per month, then a fold
//! over the resulting series. No I/O, no state across calls.

use chrono::Utc;
use growth_benchmarks::BenchmarkCurveSet;
use growth_core::{GrowthError, GrowthResult};
use tracing::debug;

use crate::types::{
    MonthlyProjection, ProjectionInput, ProjectionReport, ProjectionSummary, WindowSummary,
};

/// Conversion-rate maturity steps. Months 1-3 run at the base rate (no
/// social proof), months 4-6 at 1.5x (reviews and retargeting kick in),
/// months 7+ at 2.0x (established brand). A deliberate step function with
/// discontinuous jumps at the 3->4 and 6->7 boundaries.
fn conversion_maturity_multiplier(month: u32) -> f64 {
    if month <= 3 {
        1.0
    } else if month <= 6 {
        1.5
    } else {
        2.0
    }
}

/// Organic traffic converts 30% better than paid (warmer intent). Fixed.
const ORGANIC_CONVERSION_UPLIFT: f64 = 1.3;

// Rounding policy: currency and rates to 2 decimals, traffic to whole
// units, order counts to 1 decimal.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Project a single month from the inputs and the curves for that month
/// index. Independent of every other month.
pub fn calculate_monthly_projection(
    month: u32,
    monthly_ad_spend: f64,
    aov: f64,
    base_cpc: f64,
    base_conversion_rate: f64,
    curves: &BenchmarkCurveSet,
) -> MonthlyProjection {
    let effective_cpc = base_cpc * curves.cpc_multiplier(month);
    let effective_cr = base_conversion_rate * conversion_maturity_multiplier(month);

    let paid_clicks = monthly_ad_spend / effective_cpc;
    let paid_orders = paid_clicks * (effective_cr / 100.0);
    let paid_revenue = paid_orders * aov;

    // Organic share is a fraction of *total* traffic, so total traffic is
    // recovered from paid clicks. At a 100% organic share the formula
    // degenerates; paid clicks become the traffic floor.
    let organic_pct = curves.organic_share_pct(month) / 100.0;
    let total_traffic = if organic_pct < 1.0 {
        paid_clicks / (1.0 - organic_pct)
    } else {
        paid_clicks
    };
    let organic_traffic = total_traffic * organic_pct;

    let organic_cr = effective_cr * ORGANIC_CONVERSION_UPLIFT;
    let organic_orders = organic_traffic * (organic_cr / 100.0);
    let organic_revenue = organic_orders * aov;

    let total_orders = paid_orders + organic_orders;
    let total_revenue = paid_revenue + organic_revenue;

    let roas = if monthly_ad_spend > 0.0 {
        total_revenue / monthly_ad_spend
    } else {
        0.0
    };
    let cac = if total_orders > 0.0 {
        monthly_ad_spend / total_orders
    } else {
        0.0
    };

    MonthlyProjection {
        month,
        ad_spend: round2(monthly_ad_spend),
        effective_cpc: round2(effective_cpc),
        effective_conversion_rate: round2(effective_cr),
        paid_traffic: paid_clicks.round(),
        paid_orders: round1(paid_orders),
        paid_revenue: round2(paid_revenue),
        organic_pct: round1(organic_pct * 100.0),
        organic_traffic: organic_traffic.round(),
        organic_orders: round1(organic_orders),
        organic_revenue: round2(organic_revenue),
        total_traffic: total_traffic.round(),
        total_orders: round1(total_orders),
        total_revenue: round2(total_revenue),
        roas: round2(roas),
        cac: round2(cac),
    }
}

fn validate(input: &ProjectionInput) -> GrowthResult<()> {
    if input.monthly_ad_spend < 0.0 {
        return Err(GrowthError::Validation(format!(
            "monthly_ad_spend must be >= 0, got {}",
            input.monthly_ad_spend
        )));
    }
    if input.aov <= 0.0 {
        return Err(GrowthError::Validation(format!(
            "aov must be > 0, got {}",
            input.aov
        )));
    }
    if input.base_cpc <= 0.0 {
        return Err(GrowthError::Validation(format!(
            "base_cpc must be > 0, got {}",
            input.base_cpc
        )));
    }
    if input.base_conversion_rate <= 0.0 || input.base_conversion_rate > 100.0 {
        return Err(GrowthError::Validation(format!(
            "base_conversion_rate must be in (0, 100], got {}",
            input.base_conversion_rate
        )));
    }
    if input.months < 1 {
        return Err(GrowthError::Validation(format!(
            "months must be >= 1, got {}",
            input.months
        )));
    }
    Ok(())
}

/// Rollup over `monthly[..window]`. The organic/paid split is read from the
/// last month of the window, not averaged across it.
fn summarize_window(monthly: &[MonthlyProjection], window: usize) -> WindowSummary {
    let window = &monthly[..window.min(monthly.len())];

    let total_spend: f64 = window.iter().map(|m| m.ad_spend).sum();
    let total_revenue: f64 = window.iter().map(|m| m.total_revenue).sum();
    let total_orders: f64 = window.iter().map(|m| m.total_orders).sum();
    let organic_pct = window.last().map(|m| m.organic_pct).unwrap_or(0.0);

    let roas = if total_spend > 0.0 {
        total_revenue / total_spend
    } else {
        0.0
    };

    WindowSummary {
        total_spend: round2(total_spend),
        total_revenue: round2(total_revenue),
        total_orders: round1(total_orders),
        roas: round2(roas),
        organic_traffic_pct: organic_pct,
        paid_traffic_pct: round1(100.0 - organic_pct),
    }
}

/// Build the full projection: validate, project each month independently,
/// then fold the 3-month, 6-month, and (for long horizons) full rollups.
pub fn generate_series(
    input: &ProjectionInput,
    curves: &BenchmarkCurveSet,
) -> GrowthResult<ProjectionReport> {
    validate(input)?;

    debug!(
        monthly_ad_spend = input.monthly_ad_spend,
        aov = input.aov,
        base_cpc = input.base_cpc,
        base_conversion_rate = input.base_conversion_rate,
        months = input.months,
        "Generating growth projection"
    );

    let monthly: Vec<MonthlyProjection> = (1..=input.months)
        .map(|month| {
            calculate_monthly_projection(
                month,
                input.monthly_ad_spend,
                input.aov,
                input.base_cpc,
                input.base_conversion_rate,
                curves,
            )
        })
        .collect();

    let three_month = summarize_window(&monthly, 3);
    let six_month = summarize_window(&monthly, 6);
    let full_horizon = if input.months > 6 {
        Some(summarize_window(&monthly, monthly.len()))
    } else {
        None
    };

    let whole = full_horizon.as_ref().unwrap_or(&six_month);
    let avg_cac = if whole.total_orders > 0.0 {
        round2(whole.total_spend / whole.total_orders)
    } else {
        0.0
    };

    Ok(ProjectionReport {
        inputs: input.clone(),
        monthly,
        summary: ProjectionSummary {
            three_month,
            six_month,
            full_horizon,
            avg_cac,
        },
        generated_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_curves() -> BenchmarkCurveSet {
        BenchmarkCurveSet::industry_default()
    }

    fn sample_input(months: u32) -> ProjectionInput {
        ProjectionInput {
            monthly_ad_spend: 5000.0,
            aov: 65.0,
            base_cpc: 2.50,
            base_conversion_rate: 1.5,
            months,
        }
    }

    // 1. Single-month golden scenario ----------------------------------------

    #[test]
    fn test_month_one_golden_values() {
        let m = calculate_monthly_projection(1, 5000.0, 65.0, 2.50, 1.5, &default_curves());

        assert_eq!(m.month, 1);
        assert!((m.effective_cpc - 2.50).abs() < f64::EPSILON);
        assert!((m.effective_conversion_rate - 1.5).abs() < f64::EPSILON);
        assert!((m.paid_traffic - 2000.0).abs() < f64::EPSILON);
        assert!((m.paid_orders - 30.0).abs() < f64::EPSILON);
        assert!((m.paid_revenue - 1950.0).abs() < f64::EPSILON);
        assert!((m.organic_pct - 5.0).abs() < f64::EPSILON);
        assert!((m.organic_traffic - 105.0).abs() < f64::EPSILON);
        assert!((m.organic_orders - 2.1).abs() < f64::EPSILON);
        assert!((m.organic_revenue - 133.42).abs() < f64::EPSILON);
        assert!((m.total_traffic - 2105.0).abs() < f64::EPSILON);
        assert!((m.total_orders - 32.1).abs() < f64::EPSILON);
        assert!((m.total_revenue - 2083.42).abs() < f64::EPSILON);
        assert!((m.roas - 0.42).abs() < f64::EPSILON);
        assert!((m.cac - 155.99).abs() < f64::EPSILON);
    }

    // 2. Tiered conversion steps ---------------------------------------------

    #[test]
    fn test_conversion_step_at_month_four() {
        let curves = default_curves();
        let m3 = calculate_monthly_projection(3, 5000.0, 65.0, 2.50, 1.5, &curves);
        let m4 = calculate_monthly_projection(4, 5000.0, 65.0, 2.50, 1.5, &curves);

        // Exact 1.5x jump, no interpolation.
        assert!((m3.effective_conversion_rate - 1.5).abs() < f64::EPSILON);
        assert!((m4.effective_conversion_rate - 2.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_conversion_step_at_month_seven() {
        let curves = default_curves();
        let m6 = calculate_monthly_projection(6, 5000.0, 65.0, 2.50, 1.5, &curves);
        let m7 = calculate_monthly_projection(7, 5000.0, 65.0, 2.50, 1.5, &curves);

        assert!((m6.effective_conversion_rate - 2.25).abs() < f64::EPSILON);
        assert!((m7.effective_conversion_rate - 3.0).abs() < f64::EPSILON);
    }

    // 3. Derived-metric laws -------------------------------------------------

    #[test]
    fn test_roas_zero_when_spend_is_zero() {
        let m = calculate_monthly_projection(1, 0.0, 65.0, 2.50, 1.5, &default_curves());
        assert!((m.roas).abs() < f64::EPSILON);
        // Zero spend also means zero orders, so CAC collapses to zero.
        assert!((m.cac).abs() < f64::EPSILON);
    }

    #[test]
    fn test_roas_law_holds_every_month() {
        let curves = default_curves();
        for month in 1..=12 {
            let m = calculate_monthly_projection(month, 7500.0, 80.0, 3.00, 2.0, &curves);
            // Rounded fields, so allow a cent of slack per side.
            let expected = m.total_revenue / m.ad_spend;
            assert!(
                (m.roas - expected).abs() < 0.01,
                "month {}: roas {} vs revenue/spend {}",
                month,
                m.roas,
                expected
            );
        }
    }

    #[test]
    fn test_cac_law_holds_every_month() {
        let curves = default_curves();
        for month in 1..=12 {
            let m = calculate_monthly_projection(month, 7500.0, 80.0, 3.00, 2.0, &curves);
            let expected = m.ad_spend / m.total_orders;
            // total_orders is rounded to 1dp, so tolerance scales with CAC.
            assert!(
                (m.cac - expected).abs() < 1.0,
                "month {}: cac {} vs spend/orders {}",
                month,
                m.cac,
                expected
            );
        }
    }

    // 4. Traffic conservation ------------------------------------------------

    #[test]
    fn test_traffic_conservation_within_rounding() {
        let curves = default_curves();
        for month in 1..=12 {
            let m = calculate_monthly_projection(month, 5000.0, 65.0, 2.50, 1.5, &curves);
            let diff = (m.organic_traffic + m.paid_traffic - m.total_traffic).abs();
            assert!(diff <= 1.0, "month {}: traffic off by {}", month, diff);
        }
    }

    // 5. Degenerate all-organic share ----------------------------------------

    #[test]
    fn test_full_organic_share_uses_paid_clicks_as_floor() {
        let curves = BenchmarkCurveSet::new(
            [1.0; 12],
            1.0,
            [100.0; 12],
            100.0,
            2.50,
            1.5,
        );
        let m = calculate_monthly_projection(1, 5000.0, 65.0, 2.50, 1.5, &curves);

        // No divide-by-zero, no infinite traffic: paid clicks is the floor.
        assert!((m.total_traffic - 2000.0).abs() < f64::EPSILON);
        assert!((m.organic_traffic - 2000.0).abs() < f64::EPSILON);
        assert!(m.total_traffic.is_finite());
    }

    // 6. Series generation and summaries -------------------------------------

    #[test]
    fn test_generate_series_is_deterministic() {
        let curves = default_curves();
        let input = sample_input(6);

        let a = generate_series(&input, &curves).unwrap();
        let b = generate_series(&input, &curves).unwrap();

        assert_eq!(a.monthly, b.monthly);
        assert_eq!(a.summary, b.summary);
    }

    #[test]
    fn test_series_months_are_independent() {
        let curves = default_curves();
        let report = generate_series(&sample_input(6), &curves).unwrap();

        // Month 4 in the series equals month 4 computed standalone.
        let standalone = calculate_monthly_projection(4, 5000.0, 65.0, 2.50, 1.5, &curves);
        assert_eq!(report.monthly[3], standalone);
    }

    #[test]
    fn test_three_month_summary_rollup() {
        let curves = default_curves();
        let report = generate_series(&sample_input(3), &curves).unwrap();
        let s3 = &report.summary.three_month;

        let spend: f64 = report.monthly.iter().map(|m| m.ad_spend).sum();
        let revenue: f64 = report.monthly.iter().map(|m| m.total_revenue).sum();
        assert!((s3.total_spend - spend).abs() < 0.01);
        assert!((s3.total_revenue - revenue).abs() < 0.01);
        // Split comes from month 3, the last month in the window.
        assert!((s3.organic_traffic_pct - 10.0).abs() < f64::EPSILON);
        assert!((s3.paid_traffic_pct - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_six_month_summary_split_from_month_six() {
        let curves = default_curves();
        let report = generate_series(&sample_input(6), &curves).unwrap();

        assert!((report.summary.six_month.organic_traffic_pct - 18.0).abs() < f64::EPSILON);
        assert!((report.summary.six_month.paid_traffic_pct - 82.0).abs() < f64::EPSILON);
        assert!(report.summary.full_horizon.is_none());
    }

    #[test]
    fn test_short_horizon_windows_shrink() {
        let curves = default_curves();
        let report = generate_series(&sample_input(2), &curves).unwrap();

        // Both windows cover the whole 2-month series.
        assert_eq!(report.summary.three_month, report.summary.six_month);
        assert!((report.summary.three_month.organic_traffic_pct - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_long_horizon_emits_full_rollup() {
        let curves = default_curves();
        let report = generate_series(&sample_input(12), &curves).unwrap();

        let full = report.summary.full_horizon.as_ref().unwrap();
        let six = &report.summary.six_month;
        assert!(full.total_spend > six.total_spend);
        assert!((full.total_spend - 60_000.0).abs() < 0.01);
        // avg_cac covers the full horizon.
        assert!(
            (report.summary.avg_cac - round2(full.total_spend / full.total_orders)).abs() < 0.01
        );
    }

    #[test]
    fn test_avg_cac_over_default_horizon() {
        let curves = default_curves();
        let report = generate_series(&sample_input(6), &curves).unwrap();
        let six = &report.summary.six_month;

        assert!(
            (report.summary.avg_cac - round2(six.total_spend / six.total_orders)).abs() < 0.01
        );
    }

    #[test]
    fn test_zero_spend_series_has_zero_roas_and_cac() {
        let curves = default_curves();
        let mut input = sample_input(6);
        input.monthly_ad_spend = 0.0;

        let report = generate_series(&input, &curves).unwrap();
        assert!((report.summary.six_month.roas).abs() < f64::EPSILON);
        assert!((report.summary.avg_cac).abs() < f64::EPSILON);
    }

    // 7. Validation ----------------------------------------------------------

    #[test]
    fn test_rejects_negative_spend() {
        let mut input = sample_input(3);
        input.monthly_ad_spend = -1.0;

        let err = generate_series(&input, &default_curves()).unwrap_err();
        assert!(matches!(err, GrowthError::Validation(_)));
    }

    #[test]
    fn test_rejects_non_positive_aov() {
        let mut input = sample_input(3);
        input.aov = 0.0;

        let err = generate_series(&input, &default_curves()).unwrap_err();
        assert!(matches!(err, GrowthError::Validation(_)));
    }

    #[test]
    fn test_rejects_zero_months() {
        let input = sample_input(0);
        let err = generate_series(&input, &default_curves()).unwrap_err();
        assert!(matches!(err, GrowthError::Validation(_)));
    }

    #[test]
    fn test_rejects_out_of_range_conversion_rate() {
        let mut input = sample_input(3);
        input.base_conversion_rate = 150.0;

        let err = generate_series(&input, &default_curves()).unwrap_err();
        assert!(matches!(err, GrowthError::Validation(_)));
    }
}
