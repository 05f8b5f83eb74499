//! Report renderer
//!
//! Assembles header, ordered rows, and summary into one renderable
//! structure. No I/O happens here; delivery adapters decide how the
//! structure reaches a display surface.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::builder::{build_rows, PeerRow};
use crate::models::Snapshot;

/// Fixed column headers, in display order
pub const REPORT_HEADERS: [&str; 7] = [
    "Hostname",
    "Status",
    "IP",
    "Owner",
    "Description",
    "Up",
    "Down",
];

/// The complete renderable report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Report {
    pub external_ip: String,
    pub headers: Vec<String>,
    /// Rows in snapshot order, one per peer
    pub rows: Vec<PeerRow>,
    /// Exactly "<peersOnline> of <peersTotal> devices connected"
    pub summary: String,
}

impl Report {
    /// Render a snapshot. Zero peers is a valid state and produces a
    /// header-only report.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Report {
            external_ip: snapshot.external_ip.clone(),
            headers: REPORT_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: build_rows(snapshot),
            // The supplied counters are authoritative; they are not
            // recomputed from the rows
            summary: summary_line(snapshot.peers_online, snapshot.peers_total),
        }
    }

    /// The defined empty state used when a cycle fails terminally
    pub fn empty() -> Self {
        Report {
            external_ip: String::new(),
            headers: REPORT_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            summary: summary_line(0, 0),
        }
    }
}

fn summary_line(online: u32, total: u32) -> String {
    format!("{} of {} devices connected", online, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Peer;

    fn snapshot() -> Snapshot {
        Snapshot {
            external_ip: "198.51.100.7".to_string(),
            peers_total: 2,
            peers_online: 1,
            peers: vec![
                Peer {
                    hostname: "alpha".to_string(),
                    ip: "10.10.0.2".to_string(),
                    owner: "ops".to_string(),
                    description: "gateway".to_string(),
                    online: true,
                    dormant: false,
                    last_handshake_time: "2024-06-01T12:00:00Z".to_string(),
                    receive_bytes_si: "1.2 MB".to_string(),
                    transmit_bytes_si: "340 kB".to_string(),
                },
                Peer {
                    hostname: "beta".to_string(),
                    ip: "10.10.0.3".to_string(),
                    owner: "dev".to_string(),
                    description: "laptop".to_string(),
                    online: false,
                    dormant: true,
                    last_handshake_time: "2024-01-01T00:00:00Z".to_string(),
                    receive_bytes_si: "0 B".to_string(),
                    transmit_bytes_si: "0 B".to_string(),
                },
            ],
            domain: None,
        }
    }

    #[test]
    fn test_report_shape() {
        let report = Report::from_snapshot(&snapshot());
        assert_eq!(report.headers, REPORT_HEADERS.to_vec());
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.summary, "1 of 2 devices connected");
    }

    #[test]
    fn test_summary_uses_supplied_counters() {
        // The summary follows the document counters even when they disagree
        // with a recount of the rows
        let mut snap = snapshot();
        snap.peers_online = 0;
        let report = Report::from_snapshot(&snap);
        assert_eq!(report.summary, "0 of 2 devices connected");
        assert_eq!(
            report.rows.iter().filter(|r| r.status_label == "online").count(),
            1
        );
    }

    #[test]
    fn test_supplied_counters_agree_with_recount_on_wellformed_input() {
        let snap = snapshot();
        let recount = snap.peers.iter().filter(|p| p.online).count() as u32;
        assert_eq!(recount, snap.peers_online);

        let report = Report::from_snapshot(&snap);
        let rendered = report
            .rows
            .iter()
            .filter(|r| r.status_label == "online")
            .count() as u32;
        assert_eq!(rendered, snap.peers_online);
    }

    #[test]
    fn test_order_never_changes() {
        let report = Report::from_snapshot(&snapshot());
        assert_eq!(report.rows[0].hostname, "alpha");
        assert_eq!(report.rows[1].hostname, "beta");
    }

    #[test]
    fn test_empty_report() {
        let report = Report::empty();
        assert_eq!(report.headers.len(), 7);
        assert!(report.rows.is_empty());
        assert_eq!(report.summary, "0 of 0 devices connected");
    }

    #[test]
    fn test_zero_peer_snapshot() {
        let snap = Snapshot {
            external_ip: "203.0.113.1".to_string(),
            peers_total: 0,
            peers_online: 0,
            peers: vec![],
            domain: None,
        };
        let report = Report::from_snapshot(&snap);
        assert!(report.rows.is_empty());
        assert_eq!(report.summary, "0 of 0 devices connected");
    }
}
