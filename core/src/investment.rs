//! Investment scaling — turns revenue into a 3-year investment schedule.
//!
//! Year 1 comes from a single canonical revenue curve (or a caller
//! override); years 2 and 3 are fixed escalations of year 1. The curve
//! is flat at the base amount below $100M, grows with log10 of revenue
//! across two mid tiers, and is capped at 20x the base above $100B.
//! It is continuous and non-decreasing everywhere.

use crate::{profile::CompanyProfile, types::Money};
use serde::{Deserialize, Serialize};

/// Year-1 investment for the smallest engagements.
pub const BASE_INVESTMENT: Money = 250_000.0;

/// No engagement is priced above this multiple of the base.
pub const CEILING_MULTIPLE: f64 = 20.0;

/// Escalation of years 2 and 3 over year 1. These hold regardless of
/// whether year 1 came from the curve or from a caller override.
pub const YEAR2_GROWTH: f64 = 1.10;
pub const YEAR3_GROWTH: f64 = 1.16;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InvestmentSchedule {
    pub year1: Money,
    pub year2: Money,
    pub year3: Money,
}

impl InvestmentSchedule {
    /// Build the schedule from a fixed year-1 amount.
    pub fn from_year1(year1: Money) -> Self {
        Self {
            year1,
            year2: year1 * YEAR2_GROWTH,
            year3: year1 * YEAR3_GROWTH,
        }
    }

    /// Schedule for a profile: the caller override wins, otherwise the
    /// revenue curve. The profile is validated upstream.
    pub fn for_profile(profile: &CompanyProfile) -> Self {
        match profile.custom_investment_year1 {
            Some(year1) => Self::from_year1(year1),
            None => Self::from_year1(scaled_investment(profile.revenue)),
        }
    }

    pub fn total(&self) -> Money {
        self.year1 + self.year2 + self.year3
    }
}

/// Revenue-to-investment scaling curve.
///
/// Tier boundaries sit at $100M, $1B and $10B; the tiers meet at 1x, 4x
/// and 10x the base, and the cap (20x) is reached at $100B and holds
/// above it.
pub fn scaled_investment(revenue: Money) -> Money {
    let multiple = if revenue <= 1e8 {
        1.0
    } else if revenue <= 1e9 {
        1.0 + (revenue / 1e8).log10() * 3.0
    } else if revenue <= 1e10 {
        4.0 + (revenue / 1e9).log10() * 6.0
    } else {
        (10.0 + (revenue / 1e10).log10() * 10.0).min(CEILING_MULTIPLE)
    };
    BASE_INVESTMENT * multiple
}
