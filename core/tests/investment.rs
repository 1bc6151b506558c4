//! Investment scaling tests — curve shape and the schedule invariant.

use ecorater_core::{
    error::ModelError,
    investment::{scaled_investment, InvestmentSchedule, BASE_INVESTMENT, CEILING_MULTIPLE},
    model::RoiModel,
    profile::CompanyProfile,
};

fn rel_diff(a: f64, b: f64) -> f64 {
    (a - b).abs() / b.abs().max(1.0)
}

/// Small companies pay the flat base investment.
#[test]
fn small_revenue_uses_base_investment() {
    assert_eq!(scaled_investment(1_000_000.0), BASE_INVESTMENT);
    assert_eq!(scaled_investment(50_000_000.0), BASE_INVESTMENT);
    assert_eq!(scaled_investment(100_000_000.0), BASE_INVESTMENT);
}

/// The curve never decreases as revenue grows.
#[test]
fn curve_is_monotonically_non_decreasing() {
    let revenues = [
        1e4, 1e6, 5e7, 1e8, 1.5e8, 5e8, 1e9, 3e9, 1e10, 5e10, 1e11, 5e11, 1e12,
    ];
    for pair in revenues.windows(2) {
        let (lo, hi) = (scaled_investment(pair[0]), scaled_investment(pair[1]));
        assert!(
            lo <= hi,
            "curve decreased between {} and {}: {lo} > {hi}",
            pair[0],
            pair[1]
        );
    }
}

/// Left and right limits agree at every tier boundary.
#[test]
fn curve_is_continuous_at_tier_boundaries() {
    for boundary in [1e8, 1e9, 1e10, 1e11] {
        let left = scaled_investment(boundary * (1.0 - 1e-9));
        let right = scaled_investment(boundary * (1.0 + 1e-9));
        assert!(
            rel_diff(left, right) < 1e-6,
            "discontinuity at {boundary}: left={left}, right={right}"
        );
    }
}

/// The ceiling multiple holds for arbitrarily large revenue.
#[test]
fn curve_is_capped_at_ceiling_multiple() {
    let ceiling = BASE_INVESTMENT * CEILING_MULTIPLE;
    assert!(rel_diff(scaled_investment(1e11), ceiling) < 1e-9);
    assert_eq!(scaled_investment(1e13), ceiling);
    for revenue in [1e9, 1e10, 1e12, 1e15] {
        assert!(scaled_investment(revenue) <= ceiling);
    }
}

/// Tier seams land on the documented multiples of the base.
#[test]
fn curve_hits_documented_tier_values() {
    assert!(rel_diff(scaled_investment(1e9), BASE_INVESTMENT * 4.0) < 1e-9);
    assert!(rel_diff(scaled_investment(1e10), BASE_INVESTMENT * 10.0) < 1e-9);
}

/// year2 = 1.10 x year1 and year3 = 1.16 x year1, for computed year-1
/// values across the whole revenue range.
#[test]
fn schedule_growth_law_holds_for_computed_year1() {
    for revenue in [1e6, 1e8, 7.5e8, 1e9, 4e9, 1e10, 1e12] {
        let schedule = InvestmentSchedule::from_year1(scaled_investment(revenue));
        assert!(rel_diff(schedule.year2, schedule.year1 * 1.10) < 1e-9);
        assert!(rel_diff(schedule.year3, schedule.year1 * 1.16) < 1e-9);
    }
}

/// A caller override replaces the curve but still gets the escalation.
#[test]
fn custom_investment_override_supersedes_curve() {
    let mut profile = CompanyProfile::new(5e9, "sector31", "developing", 65.0);
    profile.custom_investment_year1 = Some(400_000.0);

    let schedule = InvestmentSchedule::for_profile(&profile);
    assert_eq!(schedule.year1, 400_000.0);
    assert!(rel_diff(schedule.year2, 440_000.0) < 1e-9);
    assert!(rel_diff(schedule.year3, 464_000.0) < 1e-9);
}

/// Non-positive revenue is rejected before any schedule is built.
#[test]
fn non_positive_revenue_fails_with_invalid_input() {
    let model = RoiModel::builtin();
    for revenue in [0.0, -1_000_000.0] {
        let profile = CompanyProfile::new(revenue, "sector31", "developing", 65.0);
        let err = model.evaluate(&profile).unwrap_err();
        assert!(
            matches!(err, ModelError::InvalidInput { field: "revenue", .. }),
            "expected InvalidInput for revenue {revenue}, got {err}"
        );
    }
}
