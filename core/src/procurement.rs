//! Procurement-budget view — a derived aggregation over `RoiResult`.
//!
//! Frames the business case for the procurement department: what share
//! of the savings flows back into its budget, and what the service does
//! to team productivity. Nothing here is recomputed from raw inputs; the
//! view only reaggregates the benefit stream already in the result.

use crate::{
    error::{ModelError, ModelResult},
    financials::RoiResult,
    types::Money,
};
use serde::{Deserialize, Serialize};

/// Procurement department budget as a fraction of procurement spend.
pub const DEFAULT_BUDGET_PERCENT: f64 = 0.015;

/// Share of realized savings allocated back to the procurement budget.
pub const DEFAULT_SAVINGS_ALLOCATION_PERCENT: f64 = 0.15;

/// Fully loaded staff cost per hour.
pub const DEFAULT_HOURLY_RATE: Money = 75.0;

/// Hours each specialist gains per month from automated supplier
/// assessment.
pub const HOURS_SAVED_PER_STAFF_PER_MONTH: f64 = 5.0;

/// Caller overrides; every `None` falls back to the documented default.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProcurementParams {
    #[serde(default)]
    pub team_size: Option<u32>,
    #[serde(default)]
    pub budget_percent: Option<f64>,
    #[serde(default)]
    pub savings_allocation_percent: Option<f64>,
    #[serde(default)]
    pub hourly_rate: Option<Money>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct YearlyTotals {
    pub year1: Money,
    pub year2: Money,
    pub year3: Money,
    pub total: Money,
}

impl YearlyTotals {
    fn new(year1: Money, year2: Money, year3: Money) -> Self {
        Self {
            year1,
            year2,
            year3,
            total: year1 + year2 + year3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcurementView {
    pub team_size: u32,
    pub budget_percent: f64,
    pub savings_allocation_percent: f64,
    /// The department's annual budget at `budget_percent` of spend.
    pub annual_budget: Money,
    pub direct_savings: YearlyTotals,
    pub budget_enhancement: YearlyTotals,
    pub productivity_savings: YearlyTotals,
    pub total_benefits: YearlyTotals,
    pub investment: YearlyTotals,
    pub roi_ratio: f64,
    /// 3-year budget enhancement as a percentage of the 3-year budget.
    pub budget_impact_percent: f64,
}

/// Derive the procurement view from an already-computed result.
pub fn procurement_view(
    result: &RoiResult,
    params: &ProcurementParams,
) -> ModelResult<ProcurementView> {
    let team_size = params
        .team_size
        .unwrap_or_else(|| estimate_team_size(result.revenue));
    let budget_percent = params.budget_percent.unwrap_or(DEFAULT_BUDGET_PERCENT);
    let allocation = params
        .savings_allocation_percent
        .unwrap_or(DEFAULT_SAVINGS_ALLOCATION_PERCENT);
    let hourly_rate = params.hourly_rate.unwrap_or(DEFAULT_HOURLY_RATE);

    let annual_budget = result.procurement_spend * budget_percent;

    let direct_savings = YearlyTotals::new(
        result.benefits[0].procurement_savings,
        result.benefits[1].procurement_savings,
        result.benefits[2].procurement_savings,
    );

    let budget_enhancement = YearlyTotals::new(
        direct_savings.year1 * allocation,
        direct_savings.year2 * allocation,
        direct_savings.year3 * allocation,
    );

    let annual_productivity =
        team_size as f64 * HOURS_SAVED_PER_STAFF_PER_MONTH * 12.0 * hourly_rate;
    let productivity_savings = YearlyTotals::new(
        annual_productivity,
        annual_productivity * 1.2,
        annual_productivity * 1.3,
    );

    let total_benefits = YearlyTotals::new(
        budget_enhancement.year1 + productivity_savings.year1,
        budget_enhancement.year2 + productivity_savings.year2,
        budget_enhancement.year3 + productivity_savings.year3,
    );

    let investment = YearlyTotals::new(
        result.service_investment.year1,
        result.service_investment.year2,
        result.service_investment.year3,
    );

    if investment.total <= 0.0 {
        return Err(ModelError::DivisionByZero {
            context: "procurement_roi_ratio",
        });
    }
    let roi_ratio = total_benefits.total / investment.total;

    let three_year_budget = annual_budget * 3.0;
    let budget_impact_percent = if three_year_budget > 0.0 {
        budget_enhancement.total / three_year_budget * 100.0
    } else {
        0.0
    };

    Ok(ProcurementView {
        team_size,
        budget_percent,
        savings_allocation_percent: allocation,
        annual_budget,
        direct_savings,
        budget_enhancement,
        productivity_savings,
        total_benefits,
        investment,
        roi_ratio,
        budget_impact_percent,
    })
}

/// Rough headcount estimate from revenue: one specialist per $50M at the
/// small end, thinning out to one per $500M for the largest companies.
pub fn estimate_team_size(revenue: Money) -> u32 {
    let rm = revenue / 1e6;
    let estimate = if rm <= 100.0 {
        (rm / 50.0).ceil().max(1.0)
    } else if rm <= 500.0 {
        (2.0 + (rm - 100.0) / 100.0).ceil()
    } else if rm <= 5000.0 {
        (6.0 + (rm - 500.0) / 250.0).ceil()
    } else {
        (24.0 + (rm - 5000.0) / 500.0).ceil()
    };
    estimate as u32
}
