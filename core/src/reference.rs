//! Reference data store — the static lookup tables behind every evaluation.
//!
//! Industry parameters derive from the EPA USEEIO supply-chain GHG
//! emission factors (v1.3.0), keyed by two-digit NAICS sector. Maturity
//! multipliers dampen achievable savings as a program matures — a more
//! mature organization has already captured more of the available benefit.
//!
//! RULE: tables are built (or loaded) once at startup and never mutated.

use crate::{
    error::{ModelError, ModelResult},
    types::{Money, Year},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-industry categorical risk baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Weight applied to the revenue-based risk component.
    pub fn weight(self) -> f64 {
        match self {
            RiskLevel::High => 1.0,
            RiskLevel::Medium => 0.6,
            RiskLevel::Low => 0.3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryProfile {
    pub name: String,
    /// Fraction of revenue assumed spent on procurement.
    pub procurement_percent: f64,
    /// kg CO2e per currency unit of procurement spend.
    pub emission_factor: f64,
    pub average_savings_percent: f64,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaturityProfile {
    pub description: String,
    pub savings_multiplier: f64,
    pub risk_reduction_multiplier: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskBaselines {
    pub high: Money,
    pub medium: Money,
    pub low: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceData {
    pub industries: HashMap<String, IndustryProfile>,
    pub maturities: HashMap<String, MaturityProfile>,
    pub risk_baselines: RiskBaselines,
    pub carbon_reduction_by_year: [f64; 3],
    pub brand_value_increase_by_year: [f64; 3],
}

impl ReferenceData {
    pub fn industry(&self, code: &str) -> ModelResult<&IndustryProfile> {
        self.industries
            .get(code)
            .ok_or_else(|| ModelError::UnknownReferenceKey {
                kind: "industry",
                code: code.to_string(),
            })
    }

    pub fn maturity(&self, code: &str) -> ModelResult<&MaturityProfile> {
        self.maturities
            .get(code)
            .ok_or_else(|| ModelError::UnknownReferenceKey {
                kind: "maturity",
                code: code.to_string(),
            })
    }

    pub fn risk_baseline(&self, level: RiskLevel) -> Money {
        match level {
            RiskLevel::High => self.risk_baselines.high,
            RiskLevel::Medium => self.risk_baselines.medium,
            RiskLevel::Low => self.risk_baselines.low,
        }
    }

    pub fn carbon_reduction(&self, year: Year) -> f64 {
        assert!((1..=3).contains(&year), "projection year out of range: {year}");
        self.carbon_reduction_by_year[(year - 1) as usize]
    }

    pub fn brand_value_increase(&self, year: Year) -> f64 {
        assert!((1..=3).contains(&year), "projection year out of range: {year}");
        self.brand_value_increase_by_year[(year - 1) as usize]
    }

    /// Load reference tables from a JSON file.
    ///
    /// Used when a deployment ships adjusted sector tables; everything
    /// else runs on `builtin()`.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let data: ReferenceData = serde_json::from_str(&raw)?;
        Ok(data)
    }

    /// The built-in tables: 23 NAICS sectors, 5 maturity levels, and the
    /// fixed year schedules.
    pub fn builtin() -> Self {
        let mut industries = HashMap::new();
        let mut add = |code: &str, profile: IndustryProfile| {
            industries.insert(code.to_string(), profile);
        };

        add("sector11", sector("Agriculture, Forestry, Fishing and Hunting (NAICS 11)", 0.60, 1.12, 0.015, RiskLevel::High));
        add("sector21", sector("Mining, Quarrying, and Oil and Gas Extraction (NAICS 21)", 0.55, 1.25, 0.015, RiskLevel::High));
        add("sector22", sector("Utilities (NAICS 22)", 0.50, 0.85, 0.015, RiskLevel::High));
        add("sector23", sector("Construction (NAICS 23)", 0.65, 0.72, 0.015, RiskLevel::High));
        add("sector31", sector("Manufacturing (Part 1) (NAICS 31)", 0.58, 0.95, 0.015, RiskLevel::High));
        add("sector32", sector("Manufacturing (Part 2) (NAICS 32)", 0.68, 1.35, 0.015, RiskLevel::High));
        add("sector33", sector("Manufacturing (Part 3) (NAICS 33)", 0.65, 1.05, 0.015, RiskLevel::High));
        add("sector42", sector("Wholesale Trade (NAICS 42)", 0.45, 0.79, 0.015, RiskLevel::High));
        add("sector44", sector("Retail Trade (Part 1) (NAICS 44)", 0.70, 0.65, 0.015, RiskLevel::High));
        add("sector45", sector("Retail Trade (Part 2) (NAICS 45)", 0.70, 0.38, 0.012, RiskLevel::Medium));
        add("sector48", sector("Transportation and Warehousing (Part 1) (NAICS 48)", 0.42, 1.32, 0.015, RiskLevel::High));
        add("sector49", sector("Transportation and Warehousing (Part 2) (NAICS 49)", 0.40, 0.39, 0.012, RiskLevel::Medium));
        add("sector51", sector("Information (NAICS 51)", 0.35, 0.32, 0.012, RiskLevel::Medium));
        add("sector52", sector("Finance and Insurance (NAICS 52)", 0.30, 0.47, 0.015, RiskLevel::High));
        add("sector53", sector("Real Estate and Rental and Leasing (NAICS 53)", 0.25, 0.65, 0.015, RiskLevel::High));
        add("sector54", sector("Professional, Scientific, and Technical Services (NAICS 54)", 0.40, 0.68, 0.015, RiskLevel::High));
        add("sector55", sector("Management of Companies and Enterprises (NAICS 55)", 0.35, 0.25, 0.010, RiskLevel::Medium));
        add("sector56", sector("Administrative and Support Services (NAICS 56)", 0.45, 1.42, 0.015, RiskLevel::High));
        add("sector61", sector("Educational Services (NAICS 61)", 0.30, 0.42, 0.015, RiskLevel::High));
        add("sector62", sector("Health Care and Social Assistance (NAICS 62)", 0.35, 0.82, 0.015, RiskLevel::High));
        add("sector71", sector("Arts, Entertainment, and Recreation (NAICS 71)", 0.40, 0.72, 0.015, RiskLevel::High));
        add("sector72", sector("Accommodation and Food Services (NAICS 72)", 0.55, 0.63, 0.015, RiskLevel::High));
        add("sector81", sector("Other Services (NAICS 81)", 0.40, 0.72, 0.015, RiskLevel::High));

        let mut maturities = HashMap::new();
        let mut add_level = |code: &str, description: &str, multiplier: f64| {
            maturities.insert(
                code.to_string(),
                MaturityProfile {
                    description: description.to_string(),
                    savings_multiplier: multiplier,
                    risk_reduction_multiplier: multiplier,
                },
            );
        };

        add_level("beginning", "Just starting sustainability initiatives, minimal supplier engagement", 1.0);
        add_level("developing", "Some processes in place, early supplier assessment", 0.8);
        add_level("established", "Formal program established, regular supplier assessment", 0.6);
        add_level("advanced", "Comprehensive program, deep supplier engagement", 0.4);
        add_level("leading", "Industry-leading program, full supply chain visibility", 0.3);

        ReferenceData {
            industries,
            maturities,
            risk_baselines: RiskBaselines {
                high: 250_000.0,
                medium: 150_000.0,
                low: 100_000.0,
            },
            carbon_reduction_by_year: [0.15, 0.195, 0.254],
            brand_value_increase_by_year: [0.001, 0.0015, 0.002],
        }
    }
}

fn sector(
    name: &str,
    procurement_percent: f64,
    emission_factor: f64,
    average_savings_percent: f64,
    risk_level: RiskLevel,
) -> IndustryProfile {
    IndustryProfile {
        name: name.to_string(),
        procurement_percent,
        emission_factor,
        average_savings_percent,
        risk_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_internally_consistent() {
        let data = ReferenceData::builtin();
        for (code, industry) in &data.industries {
            assert!(!industry.name.is_empty(), "{code} has an empty name");
            assert!(
                industry.procurement_percent > 0.0 && industry.procurement_percent <= 1.0,
                "{code} procurement percent out of range"
            );
            assert!(industry.emission_factor > 0.0, "{code} emission factor not positive");
        }
        for (code, maturity) in &data.maturities {
            assert!(
                maturity.savings_multiplier > 0.0 && maturity.savings_multiplier <= 1.0,
                "{code} savings multiplier out of range"
            );
        }
    }

    #[test]
    fn builtin_round_trips_through_json() {
        let data = ReferenceData::builtin();
        let json = serde_json::to_string(&data).unwrap();
        let back: ReferenceData = serde_json::from_str(&json).unwrap();
        assert_eq!(back.industries.len(), data.industries.len());
        assert_eq!(back.carbon_reduction_by_year, data.carbon_reduction_by_year);
    }
}
