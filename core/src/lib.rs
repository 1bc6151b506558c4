//! ecorater-core — the ROI model behind the EcoRater advisory calculator.
//!
//! Everything here is a pure function of one `CompanyProfile` and the
//! static reference tables: no I/O during evaluation, no shared mutable
//! state, no randomness. The only filesystem touch point is the optional
//! reference-table loader in `reference`.

pub mod benefits;
pub mod error;
pub mod financials;
pub mod investment;
pub mod model;
pub mod procurement;
pub mod profile;
pub mod reference;
pub mod scenario;
pub mod types;
