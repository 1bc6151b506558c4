//! Saved scenarios — a caller-owned, session-scoped collection.
//!
//! RULE: the store is plain owned state. There is no module-level list
//! and nothing is persisted; a store lives exactly as long as the
//! session that created it.

use crate::{profile::CompanyProfile, types::ScenarioId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedScenario {
    pub id: ScenarioId,
    pub name: String,
    pub profile: CompanyProfile,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct ScenarioStore {
    scenarios: HashMap<ScenarioId, SavedScenario>,
}

impl ScenarioStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a profile under a display name; returns the generated id.
    pub fn save(&mut self, name: &str, profile: CompanyProfile) -> ScenarioId {
        let id = Uuid::new_v4().to_string();
        let scenario = SavedScenario {
            id: id.clone(),
            name: name.to_string(),
            profile,
            created_at: Utc::now(),
        };
        log::debug!("scenario saved: '{}' ({id})", scenario.name);
        self.scenarios.insert(id.clone(), scenario);
        id
    }

    pub fn get(&self, id: &str) -> Option<&SavedScenario> {
        self.scenarios.get(id)
    }

    /// All scenarios, oldest first.
    pub fn list(&self) -> Vec<&SavedScenario> {
        let mut all: Vec<&SavedScenario> = self.scenarios.values().collect();
        all.sort_by_key(|s| s.created_at);
        all
    }

    /// Remove a scenario. Returns whether it existed.
    pub fn delete(&mut self, id: &str) -> bool {
        self.scenarios.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
