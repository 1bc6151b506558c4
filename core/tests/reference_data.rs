//! Reference data tests — table integrity and unknown-key handling.

use ecorater_core::{
    error::ModelError,
    model::RoiModel,
    profile::CompanyProfile,
    reference::{ReferenceData, RiskLevel},
};

#[test]
fn builtin_covers_all_23_sectors() {
    let data = ReferenceData::builtin();
    assert_eq!(data.industries.len(), 23);

    for code in [
        "sector11", "sector21", "sector22", "sector23", "sector31", "sector32", "sector33",
        "sector42", "sector44", "sector45", "sector48", "sector49", "sector51", "sector52",
        "sector53", "sector54", "sector55", "sector56", "sector61", "sector62", "sector71",
        "sector72", "sector81",
    ] {
        assert!(data.industry(code).is_ok(), "missing industry {code}");
    }
}

#[test]
fn unknown_industry_code_fails() {
    let data = ReferenceData::builtin();
    let err = data.industry("sector99").unwrap_err();
    assert!(matches!(
        err,
        ModelError::UnknownReferenceKey { kind: "industry", .. }
    ));
}

#[test]
fn unknown_maturity_code_fails_evaluation() {
    let model = RoiModel::builtin();
    let profile = CompanyProfile::new(5e7, "sector11", "world-class", 50.0);
    let err = model.evaluate(&profile).unwrap_err();
    assert!(matches!(
        err,
        ModelError::UnknownReferenceKey { kind: "maturity", .. }
    ));
}

/// Maturity multipliers fall as the program matures — a mature program
/// has already captured more of the available benefit.
#[test]
fn maturity_multipliers_decrease_with_maturity() {
    let data = ReferenceData::builtin();
    let order = ["beginning", "developing", "established", "advanced", "leading"];

    let multipliers: Vec<f64> = order
        .iter()
        .map(|code| data.maturity(code).unwrap().savings_multiplier)
        .collect();

    assert_eq!(multipliers, vec![1.0, 0.8, 0.6, 0.4, 0.3]);
    for pair in multipliers.windows(2) {
        assert!(pair[0] > pair[1], "multipliers must strictly decrease");
    }
}

#[test]
fn fixed_schedules_match_reference_values() {
    let data = ReferenceData::builtin();

    assert_eq!(data.carbon_reduction_by_year, [0.15, 0.195, 0.254]);
    assert_eq!(data.brand_value_increase_by_year, [0.001, 0.0015, 0.002]);

    assert_eq!(data.risk_baseline(RiskLevel::High), 250_000.0);
    assert_eq!(data.risk_baseline(RiskLevel::Medium), 150_000.0);
    assert_eq!(data.risk_baseline(RiskLevel::Low), 100_000.0);
}

#[test]
fn sector_profile_values_spot_check() {
    let data = ReferenceData::builtin();

    let agriculture = data.industry("sector11").unwrap();
    assert_eq!(agriculture.procurement_percent, 0.60);
    assert_eq!(agriculture.emission_factor, 1.12);
    assert_eq!(agriculture.average_savings_percent, 0.015);
    assert_eq!(agriculture.risk_level, RiskLevel::High);

    let information = data.industry("sector51").unwrap();
    assert_eq!(information.procurement_percent, 0.35);
    assert_eq!(information.risk_level, RiskLevel::Medium);
}
