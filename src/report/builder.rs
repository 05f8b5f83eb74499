//! Peer view builder
//!
//! Maps each [`Peer`] into a [`PeerRow`] with derived, display-only fields.
//! Pure and deterministic: the same snapshot always yields the same rows.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::models::{Peer, Snapshot};

/// Tooltip shown for online peers. The freshness threshold itself is owned
/// by the report generator, so no concrete figure is restated here.
pub const ONLINE_TOOLTIP: &str = "Handshake within the freshness window";

/// One renderable table row, derived from a single peer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PeerRow {
    pub hostname: String,
    /// Fully-qualified hostname when the snapshot carries a domain
    pub hostname_tooltip: String,
    /// "online" or "offline"
    pub status_label: String,
    pub status_tooltip: String,
    /// Formatted last-handshake time, falling back to the raw value when
    /// the timestamp cannot be parsed
    pub last_handshake: String,
    /// Styling classification only, never affects counts
    pub dormant: bool,
    pub ip: String,
    pub owner: String,
    pub description: String,
    pub receive_bytes_si: String,
    pub transmit_bytes_si: String,
}

/// Build one row per peer, preserving snapshot order
pub fn build_rows(snapshot: &Snapshot) -> Vec<PeerRow> {
    snapshot
        .peers
        .iter()
        .map(|peer| build_row(peer, snapshot.domain.as_deref()))
        .collect()
}

fn build_row(peer: &Peer, domain: Option<&str>) -> PeerRow {
    let hostname_tooltip = match domain {
        Some(domain) => format!("{}.{}", peer.hostname, domain),
        None => peer.hostname.clone(),
    };

    let last_handshake = format_handshake_time(&peer.last_handshake_time);

    let (status_label, status_tooltip) = if peer.online {
        ("online".to_string(), ONLINE_TOOLTIP.to_string())
    } else {
        (
            "offline".to_string(),
            format!("No handshake since {}", last_handshake),
        )
    };

    PeerRow {
        hostname: peer.hostname.clone(),
        hostname_tooltip,
        status_label,
        status_tooltip,
        last_handshake,
        dormant: peer.dormant,
        ip: peer.ip.clone(),
        owner: peer.owner.clone(),
        description: peer.description.clone(),
        receive_bytes_si: peer.receive_bytes_si.clone(),
        transmit_bytes_si: peer.transmit_bytes_si.clone(),
    }
}

/// Format an ISO-8601-like timestamp for display. A value that cannot be
/// parsed degrades to the raw string for this row only; it never aborts
/// the render cycle.
fn format_handshake_time(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => {
            warn!("unparseable lastHandshakeTime {:?}, using raw value", raw);
            raw.to_string()
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    // Generators that omit the zone designator write plain local-less
    // timestamps with second precision
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}
