//! Scenario store tests — explicit create/list/delete semantics.

use ecorater_core::{profile::CompanyProfile, scenario::ScenarioStore};

fn profile(revenue: f64) -> CompanyProfile {
    CompanyProfile::new(revenue, "sector31", "developing", 65.0)
}

#[test]
fn save_assigns_unique_ids() {
    let mut store = ScenarioStore::new();

    let a = store.save("Manufacturing baseline", profile(2.5e8));
    let b = store.save("Manufacturing baseline", profile(2.5e8));

    assert_ne!(a, b, "two saves of the same profile must get distinct ids");
    assert_eq!(store.len(), 2);
}

#[test]
fn get_returns_the_saved_profile() {
    let mut store = ScenarioStore::new();
    let id = store.save("Big retail", profile(5e9));

    let saved = store.get(&id).expect("saved scenario should be retrievable");
    assert_eq!(saved.name, "Big retail");
    assert_eq!(saved.profile.revenue, 5e9);
    assert_eq!(saved.profile.industry_code, "sector31");
    assert_eq!(saved.id, id);
}

#[test]
fn list_is_ordered_by_creation_time() {
    let mut store = ScenarioStore::new();
    store.save("first", profile(1e8));
    store.save("second", profile(2e8));
    store.save("third", profile(3e8));

    let listed = store.list();
    assert_eq!(listed.len(), 3);
    for pair in listed.windows(2) {
        assert!(
            pair[0].created_at <= pair[1].created_at,
            "list must be oldest first"
        );
    }
}

#[test]
fn delete_removes_exactly_one_scenario() {
    let mut store = ScenarioStore::new();
    let keep = store.save("keep", profile(1e8));
    let drop = store.save("drop", profile(2e8));

    assert!(store.delete(&drop));
    assert!(!store.delete(&drop), "second delete of the same id is a no-op");
    assert_eq!(store.len(), 1);
    assert!(store.get(&keep).is_some());
    assert!(store.get(&drop).is_none());
}

#[test]
fn fresh_store_is_empty() {
    let store = ScenarioStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.list().is_empty());
}
