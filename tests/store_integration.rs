//! Integration tests for profile persistence
//!
//! These go through the JSON file on disk rather than constructing profile
//! sets in memory.

use pap::{DeviceRef, PapError, Profile, ProfileStore};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn setup_temp_store() -> (TempDir, ProfileStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = ProfileStore::new(temp_dir.path().join("pap").join("profiles.json"));
    (temp_dir, store)
}

fn profile(title: &str, source: Option<(&str, &str)>, sink: (&str, &str)) -> Profile {
    Profile {
        title: title.to_string(),
        source: source.map(|(name, desc)| DeviceRef::new(name, desc)),
        sink: DeviceRef::new(sink.0, sink.1),
    }
}

#[test]
fn test_round_trip_sorts_by_title() {
    let (_temp, store) = setup_temp_store();
    let set = vec![
        profile("zeta", None, ("hdmi", "HDMI Output")),
        profile("Alpha", Some(("mic0", "Built-in Mic")), ("speakers", "Speakers")),
        profile("Mid", Some(("usb-mic", "USB Mic")), ("headset", "Headset")),
    ];

    store.save(&set).unwrap();
    let loaded = store.load().unwrap();

    let mut expected = set.clone();
    expected.sort_by(|a, b| a.title.cmp(&b.title));
    assert_eq!(loaded, expected);
}

#[test]
fn test_file_format_uses_nullable_source() {
    let (_temp, store) = setup_temp_store();
    store
        .save(&[profile("Music", None, ("speakers", "Speakers"))])
        .unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
    let entry = &raw.as_array().unwrap()[0];

    assert_eq!(entry["title"], "Music");
    assert!(entry["source"].is_null());
    assert_eq!(entry["sink"]["name"], "speakers");
    assert_eq!(entry["sink"]["description"], "Speakers");
}

#[test]
fn test_reads_file_written_by_older_versions() {
    let (_temp, store) = setup_temp_store();
    fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    fs::write(
        store.path(),
        r#"[{
            "Title": "Desk",
            "Source": {"Name": "mic0", "Description": "Mic", "Index": 1},
            "Sink": {"Name": "speakers", "Description": "Speakers", "Index": 2}
        }]"#,
    )
    .unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(
        loaded,
        vec![profile("Desk", Some(("mic0", "Mic")), ("speakers", "Speakers"))]
    );
}

#[test]
fn test_add_then_remove_lifecycle() {
    let (_temp, store) = setup_temp_store();

    store
        .add(profile("Call", Some(("mic0", "Mic")), ("headset", "Headset")))
        .unwrap();
    store
        .add(profile("Desk", Some(("mic0", "Mic")), ("speakers", "Speakers")))
        .unwrap();

    let dup = store
        .add(profile("Copy", Some(("mic0", "Mic")), ("speakers", "Speakers")))
        .unwrap_err();
    assert!(matches!(dup, PapError::DuplicateProfile { ref title } if title == "Desk"));

    store.remove("Call").unwrap();
    let titles: Vec<_> = store.load().unwrap().into_iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["Desk"]);

    assert!(matches!(
        store.remove("Call").unwrap_err(),
        PapError::ProfileNotFound { .. }
    ));
}

#[test]
fn test_empty_array_file() {
    let (_temp, store) = setup_temp_store();
    store.save(&[]).unwrap();
    assert!(store.load().unwrap().is_empty());
}
