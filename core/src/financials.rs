//! Financial aggregation — totals, ROI ratio, NPV and the payback walk.

use crate::{
    benefits::YearlyBenefit,
    error::{ModelError, ModelResult},
    investment::InvestmentSchedule,
    reference::{IndustryProfile, MaturityProfile},
    types::Money,
};
use serde::{Deserialize, Serialize};

/// Fixed annual discount rate for NPV.
pub const DISCOUNT_RATE: f64 = 0.10;

/// Payback simulation horizon.
pub const PAYBACK_HORIZON_MONTHS: u32 = 36;

/// The sole output of the core. Immutable once produced; presentation
/// collaborators consume it read-only and never recompute a figure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiResult {
    pub industry: IndustryProfile,
    pub maturity: MaturityProfile,
    pub revenue: Money,
    pub procurement_spend: Money,
    /// kg CO2e across the supply chain per year.
    pub supply_chain_emissions: f64,
    pub benefits: [YearlyBenefit; 3],
    pub service_investment: InvestmentSchedule,
    pub total_investment: Money,
    pub total_benefits: Money,
    pub net_benefits: Money,
    pub roi_ratio: f64,
    /// First month (1..=36) with non-negative cumulative cash flow,
    /// saturating at the horizon.
    pub payback_months: u32,
    /// False when cumulative flow never reaches zero within the horizon;
    /// disambiguates a true month-36 payback from the saturated value.
    pub recovered_within_horizon: bool,
    pub npv: Money,
}

/// Fold the yearly benefits and the investment schedule into the headline
/// metrics. The only error path is the zero-investment ratio guard —
/// unreachable in practice given the positive investment floor, but
/// checked rather than producing NaN.
#[allow(clippy::too_many_arguments)]
pub fn aggregate(
    industry: IndustryProfile,
    maturity: MaturityProfile,
    revenue: Money,
    procurement_spend: Money,
    supply_chain_emissions: f64,
    benefits: [YearlyBenefit; 3],
    service_investment: InvestmentSchedule,
) -> ModelResult<RoiResult> {
    let total_investment = service_investment.total();
    let total_benefits: Money = benefits.iter().map(|b| b.total).sum();
    let net_benefits = total_benefits - total_investment;

    if total_investment <= 0.0 {
        return Err(ModelError::DivisionByZero { context: "roi_ratio" });
    }
    let roi_ratio = total_benefits / total_investment;

    let npv = npv(&benefits, &service_investment);
    let (payback_months, recovered_within_horizon) = payback(&benefits, &service_investment);

    Ok(RoiResult {
        industry,
        maturity,
        revenue,
        procurement_spend,
        supply_chain_emissions,
        benefits,
        service_investment,
        total_investment,
        total_benefits,
        net_benefits,
        roi_ratio,
        payback_months,
        recovered_within_horizon,
        npv,
    })
}

/// Net present value of the three yearly net cash flows at `DISCOUNT_RATE`.
pub fn npv(benefits: &[YearlyBenefit; 3], investment: &InvestmentSchedule) -> Money {
    let flows = [
        benefits[0].total - investment.year1,
        benefits[1].total - investment.year2,
        benefits[2].total - investment.year3,
    ];
    flows
        .iter()
        .enumerate()
        .map(|(i, flow)| flow / (1.0 + DISCOUNT_RATE).powi(i as i32 + 1))
        .sum()
}

/// Month-by-month payback walk.
///
/// Cash out is the full year-1 investment at month zero; benefits arrive
/// in equal monthly twelfths of the relevant year. Returns the FIRST
/// month with cumulative flow >= 0, saturating at the horizon, plus
/// whether recovery actually happened.
pub fn payback(benefits: &[YearlyBenefit; 3], investment: &InvestmentSchedule) -> (u32, bool) {
    let mut cumulative = -investment.year1;
    for month in 1..=PAYBACK_HORIZON_MONTHS {
        let year_index = ((month - 1) / 12) as usize;
        cumulative += benefits[year_index].total / 12.0;
        if cumulative >= 0.0 {
            return (month, true);
        }
    }
    (PAYBACK_HORIZON_MONTHS, false)
}
