//! Tests for the snapshot data model
//!
//! These tests verify the document shape contract with the external report
//! generator: field names, optional defaults, and counter consistency.

use serde_json::json;

use meshreport_backend::models::Snapshot;
use meshreport_backend::report::Report;

fn worked_example() -> serde_json::Value {
    json!({
        "externalIP": "198.51.100.7",
        "peersTotal": 2,
        "peersOnline": 1,
        "peers": [
            {
                "hostname": "a",
                "ip": "10.10.0.2",
                "owner": "ops",
                "description": "gateway",
                "online": true,
                "lastHandshakeTime": "2024-06-01T12:00:00Z",
                "receiveBytesSI": "1.2 MB",
                "transmitBytesSI": "340 kB"
            },
            {
                "hostname": "b",
                "ip": "10.10.0.3",
                "owner": "dev",
                "description": "laptop",
                "online": false,
                "lastHandshakeTime": "2024-01-01T00:00:00Z",
                "receiveBytesSI": "0 B",
                "transmitBytesSI": "0 B"
            }
        ]
    })
}

#[test]
fn test_worked_example_parses() {
    let snapshot: Snapshot = serde_json::from_value(worked_example()).unwrap();

    assert_eq!(snapshot.external_ip, "198.51.100.7");
    assert_eq!(snapshot.peers_total, 2);
    assert_eq!(snapshot.peers_online, 1);
    assert_eq!(snapshot.peers.len(), 2);
    assert!(snapshot.domain.is_none());
    assert!(!snapshot.peers[0].dormant);
}

#[test]
fn test_counters_consistent_with_peer_flags() {
    // The generator owns peersOnline; well-formed documents agree with a
    // recount of the online flags
    let snapshot: Snapshot = serde_json::from_value(worked_example()).unwrap();
    let recount = snapshot.peers.iter().filter(|p| p.online).count() as u32;
    assert_eq!(recount, snapshot.peers_online);
}

#[test]
fn test_worked_example_renders() {
    let snapshot: Snapshot = serde_json::from_value(worked_example()).unwrap();
    let report = Report::from_snapshot(&snapshot);

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].hostname, "a");
    assert_eq!(report.rows[0].status_label, "online");
    assert_eq!(report.rows[1].hostname, "b");
    assert_eq!(report.rows[1].status_label, "offline");
    assert!(report.rows[1].status_tooltip.contains("2024-01-01"));
    assert_eq!(report.summary, "1 of 2 devices connected");
}

#[test]
fn test_missing_required_field_rejected() {
    let doc = json!({
        "externalIP": "198.51.100.7",
        "peersOnline": 0,
        "peers": []
    });

    assert!(serde_json::from_value::<Snapshot>(doc).is_err());
}

#[test]
fn test_wrong_typed_field_rejected() {
    let doc = json!({
        "externalIP": "198.51.100.7",
        "peersTotal": "two",
        "peersOnline": 0,
        "peers": []
    });

    assert!(serde_json::from_value::<Snapshot>(doc).is_err());
}

#[test]
fn test_negative_counters_rejected() {
    let doc = json!({
        "externalIP": "198.51.100.7",
        "peersTotal": -1,
        "peersOnline": 0,
        "peers": []
    });

    assert!(serde_json::from_value::<Snapshot>(doc).is_err());
}

#[test]
fn test_generator_extra_fields_ignored() {
    let mut doc = worked_example();
    doc["interfaceName"] = json!("wg0");
    doc["listenPort"] = json!(51820);
    doc["peers"][0]["publicKey"] = json!("AAAA...");

    assert!(serde_json::from_value::<Snapshot>(doc).is_ok());
}
