//! Benefit composition — the four per-year benefit components.
//!
//! Each component is a product of reference-table factors, the maturity
//! multipliers and a 3%/year growth factor. Three damping curves shrink
//! the revenue-linked components for very large companies; all three are
//! continuous at the $1B threshold and floored so no component collapses
//! toward zero.

use crate::{
    reference::{IndustryProfile, MaturityProfile, ReferenceData},
    types::{Money, Year},
};
use serde::{Deserialize, Serialize};

/// Year-over-year benefit growth applied in years 2 and 3.
pub const ANNUAL_GROWTH: f64 = 1.03;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct YearlyBenefit {
    pub procurement_savings: Money,
    pub carbon_value_impact: Money,
    pub risk_mitigation_value: Money,
    pub brand_value_impact: Money,
    pub total: Money,
}

/// Compose the benefit components for one projection year.
///
/// `supply_chain_emissions` is in kg CO2e; the carbon component converts
/// to metric tons before applying the per-ton carbon price.
#[allow(clippy::too_many_arguments)]
pub fn yearly_benefit(
    year: Year,
    industry: &IndustryProfile,
    maturity: &MaturityProfile,
    revenue: Money,
    procurement_spend: Money,
    supply_chain_emissions: f64,
    carbon_price: Money,
    reference: &ReferenceData,
) -> YearlyBenefit {
    let growth = ANNUAL_GROWTH.powi(year as i32 - 1);

    let procurement_savings = procurement_spend
        * industry.average_savings_percent
        * procurement_scale(revenue)
        * maturity.savings_multiplier
        * growth;

    // Emission factors are kg CO2e; carbon prices quote per metric ton.
    let emissions_tons = supply_chain_emissions / 1000.0;
    let carbon_value_impact = emissions_tons * carbon_price * reference.carbon_reduction(year);

    let baseline_component = reference.risk_baseline(industry.risk_level)
        * revenue_risk_scale(revenue)
        * maturity.risk_reduction_multiplier
        * growth;
    let revenue_component = revenue
        * risk_percent_factor(revenue)
        * industry.risk_level.weight()
        * maturity.risk_reduction_multiplier
        * growth;
    let risk_mitigation_value = baseline_component + revenue_component;

    let brand_value_impact =
        revenue * effective_brand_percent(revenue, reference.brand_value_increase(year));

    let total =
        procurement_savings + carbon_value_impact + risk_mitigation_value + brand_value_impact;

    YearlyBenefit {
        procurement_savings,
        carbon_value_impact,
        risk_mitigation_value,
        brand_value_impact,
        total,
    }
}

/// Damping on procurement savings above $1B revenue, floored at 0.5.
pub fn procurement_scale(revenue: Money) -> f64 {
    if revenue <= 1e9 {
        1.0
    } else {
        (1.0 - (revenue / 1e9).log10() * 0.1).max(0.5)
    }
}

/// Tiered log scale applied to the baseline risk value. Rises from 0.5
/// for the smallest companies through 1.0 / 1.75 / 2.5 at the $100M /
/// $1B / $10B boundaries, capped at 3.5 (reached at $1T).
pub fn revenue_risk_scale(revenue: Money) -> f64 {
    if revenue <= 1e8 {
        (revenue / 1e8).max(0.5)
    } else if revenue <= 1e9 {
        1.0 + (revenue / 1e8).log10() * 0.75
    } else if revenue <= 1e10 {
        1.75 + (revenue / 1e9).log10() * 0.75
    } else {
        (2.5 + (revenue / 1e10).log10() * 0.5).min(3.5)
    }
}

/// Fraction of revenue counted toward the risk component: 2bp flat up to
/// $1B, then damped, floored at 0.5bp.
pub fn risk_percent_factor(revenue: Money) -> f64 {
    if revenue <= 1e9 {
        0.0002
    } else {
        (0.0002 * (1.0 - (revenue / 1e9).log10() * 0.12)).max(0.00005)
    }
}

/// Brand uplift percentage after size damping. Never drops below a
/// quarter of the nominal year percentage.
pub fn effective_brand_percent(revenue: Money, nominal: f64) -> f64 {
    if revenue <= 1e9 {
        nominal
    } else {
        (nominal * (1.0 - (revenue / 1e9).log10() * 0.07)).max(nominal * 0.25)
    }
}
