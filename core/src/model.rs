//! The evaluation pipeline — one profile in, one `RoiResult` out.
//!
//! PIPELINE ORDER (fixed):
//!   1. validate the profile
//!   2. resolve the industry and maturity reference profiles
//!   3. derive procurement spend and supply-chain emissions
//!   4. investment schedule (override or revenue curve)
//!   5. yearly benefits for years 1..=3
//!   6. financial aggregation
//!
//! Every evaluation is a pure function of the profile and the reference
//! tables. Evaluations share no state and may run in parallel.

use crate::{
    benefits::{self, YearlyBenefit},
    error::ModelResult,
    financials::{self, RoiResult},
    investment::InvestmentSchedule,
    profile::CompanyProfile,
    reference::ReferenceData,
};

pub struct RoiModel {
    reference: ReferenceData,
}

impl RoiModel {
    pub fn new(reference: ReferenceData) -> Self {
        Self { reference }
    }

    /// A model backed by the built-in reference tables.
    pub fn builtin() -> Self {
        Self::new(ReferenceData::builtin())
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn evaluate(&self, profile: &CompanyProfile) -> ModelResult<RoiResult> {
        if let Err(err) = profile.validate() {
            log::warn!("evaluation rejected: {err}");
            return Err(err);
        }

        let industry = self.reference.industry(&profile.industry_code)?;
        let maturity = self.reference.maturity(&profile.maturity_code)?;

        let procurement_spend = profile
            .procurement_spend_override
            .unwrap_or(profile.revenue * industry.procurement_percent);
        let supply_chain_emissions = procurement_spend * industry.emission_factor;

        let service_investment = InvestmentSchedule::for_profile(profile);

        let benefits: [YearlyBenefit; 3] = [1u32, 2, 3].map(|year| {
            benefits::yearly_benefit(
                year,
                industry,
                maturity,
                profile.revenue,
                procurement_spend,
                supply_chain_emissions,
                profile.carbon_price,
                &self.reference,
            )
        });

        let result = financials::aggregate(
            industry.clone(),
            maturity.clone(),
            profile.revenue,
            procurement_spend,
            supply_chain_emissions,
            benefits,
            service_investment,
        )?;

        log::info!(
            "{}: ROI {:.2}x, NPV ${:.0}, payback {} months, net ${:.0}",
            result.industry.name,
            result.roi_ratio,
            result.npv,
            result.payback_months,
            result.net_benefits,
        );

        Ok(result)
    }
}
