use super::*;
use portal::seed::{DemoRecords, JsonRecords};
use portal::{Collection, MatchMode};

#[test]
fn load_workspace_from_demo_records() {
    let data = load_workspace(&DemoRecords, &PortalConfig::default()).unwrap();
    assert_eq!(data.catalog.len(Collection::Patients), 4);
    assert_eq!(data.training.rotations.len(), 5);
}

#[test]
fn load_workspace_applies_match_mode() {
    let config = PortalConfig { search: MatchMode::Passthrough, ..PortalConfig::default() };
    let data = load_workspace(&DemoRecords, &config).unwrap();
    assert_eq!(data.catalog.match_mode(), MatchMode::Passthrough);
}

#[test]
fn load_workspace_propagates_duplicate_ids() {
    let raw = r#"{"cases": [
        {"id": "CC-1", "title": "A", "presentation": "p", "date": "2024-01-01",
         "complexity": "low", "learning_objectives": "o", "reflection_status": "pending"},
        {"id": "CC-1", "title": "B", "presentation": "p", "date": "2024-01-02",
         "complexity": "low", "learning_objectives": "o", "reflection_status": "pending"}
    ]}"#;
    let err = load_workspace(&JsonRecords::new(raw), &PortalConfig::default()).unwrap_err();
    assert!(matches!(err, SeedError::DuplicateId { .. }));
}

#[test]
fn load_workspace_or_empty_falls_back_on_parse_error() {
    let config = PortalConfig { search: MatchMode::CaseSensitive, ..PortalConfig::default() };
    let data = load_workspace_or_empty(&JsonRecords::new("not json"), &config);
    assert!(data.catalog.is_empty());
    assert_eq!(data.catalog.match_mode(), MatchMode::CaseSensitive);
    assert!(data.training.goals.is_empty());
}
