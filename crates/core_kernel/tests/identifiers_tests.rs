//! Tests for the identifier newtypes used by the workflow

use core_kernel::{ClaimId, PartyId, PolicyId, ReprocessId};
use uuid::Uuid;

#[test]
fn test_new_v7_generates_time_ordered_ids() {
    let id1 = ClaimId::new_v7();
    std::thread::sleep(std::time::Duration::from_millis(1));
    let id2 = ClaimId::new_v7();
    let uuid1: Uuid = id1.into();
    let uuid2: Uuid = id2.into();
    assert!(uuid1 < uuid2);
}

#[test]
fn test_prefixes_are_unique() {
    let mut prefixes = vec![
        ClaimId::prefix(),
        PolicyId::prefix(),
        PartyId::prefix(),
        ReprocessId::prefix(),
    ];
    let count = prefixes.len();
    prefixes.sort();
    prefixes.dedup();
    assert_eq!(prefixes.len(), count);
}

#[test]
fn test_parse_accepts_bare_uuid() {
    let uuid = Uuid::new_v4();
    let parsed: PolicyId = uuid.to_string().parse().unwrap();
    assert_eq!(*parsed.as_uuid(), uuid);
}

#[test]
fn test_reprocess_id_roundtrip_through_display() {
    let original = ReprocessId::new();
    let display = original.to_string();
    assert!(display.starts_with("RPR-"));
    let parsed: ReprocessId = display.parse().unwrap();
    assert_eq!(original, parsed);
}

#[test]
fn test_serializes_as_bare_uuid() {
    let uuid = Uuid::new_v4();
    let id = ClaimId::from_uuid(uuid);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{}\"", uuid));
}
