//! Company profile — the single input to one evaluation.
//!
//! A profile is immutable for the duration of an evaluation and carries
//! no state between evaluations.

use crate::{
    error::{ModelError, ModelResult},
    types::Money,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Annual revenue, must be positive.
    pub revenue: Money,
    /// Key into the industry reference table (e.g. "sector31").
    pub industry_code: String,
    /// Key into the maturity reference table (e.g. "developing").
    pub maturity_code: String,
    /// Currency per metric ton CO2e, must be positive.
    pub carbon_price: Money,
    /// Informational only; feeds no formula.
    #[serde(default)]
    pub supplier_count: Option<u32>,
    /// Supersedes `revenue * procurement_percent` when present.
    #[serde(default)]
    pub procurement_spend_override: Option<Money>,
    /// Supersedes the revenue-to-investment curve when present.
    #[serde(default)]
    pub custom_investment_year1: Option<Money>,
}

impl CompanyProfile {
    pub fn new(revenue: Money, industry_code: &str, maturity_code: &str, carbon_price: Money) -> Self {
        Self {
            revenue,
            industry_code: industry_code.to_string(),
            maturity_code: maturity_code.to_string(),
            carbon_price,
            supplier_count: None,
            procurement_spend_override: None,
            custom_investment_year1: None,
        }
    }

    /// Reject missing or non-positive fields before any computation runs.
    /// Evaluation either fully succeeds or fails here — no partial result.
    pub fn validate(&self) -> ModelResult<()> {
        positive("revenue", self.revenue)?;
        positive("carbon_price", self.carbon_price)?;

        if self.industry_code.is_empty() {
            return Err(ModelError::InvalidInput {
                field: "industry_code",
                reason: "must not be empty".to_string(),
            });
        }
        if self.maturity_code.is_empty() {
            return Err(ModelError::InvalidInput {
                field: "maturity_code",
                reason: "must not be empty".to_string(),
            });
        }

        if let Some(spend) = self.procurement_spend_override {
            positive("procurement_spend_override", spend)?;
        }
        if let Some(investment) = self.custom_investment_year1 {
            positive("custom_investment_year1", investment)?;
        }
        if let Some(count) = self.supplier_count {
            if count == 0 {
                return Err(ModelError::InvalidInput {
                    field: "supplier_count",
                    reason: "must be a positive integer".to_string(),
                });
            }
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> ModelResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ModelError::InvalidInput {
            field,
            reason: format!("must be a positive number, got {value}"),
        })
    }
}
