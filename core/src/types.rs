//! Shared primitive types used across the entire model.

/// A monetary amount in the caller's currency unit (USD in practice).
pub type Money = f64;

/// A projection year, 1-based. The model covers years 1..=3.
pub type Year = u32;

/// The stable identifier of a saved scenario.
pub type ScenarioId = String;
