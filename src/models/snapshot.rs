use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One complete, generator-produced state document covering all peers at a
/// point in time. Replaced wholesale on each generation cycle.
///
/// Field names are a compatibility contract with the external report
/// generator and must not change.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// The network's public-facing address
    #[serde(rename = "externalIP")]
    pub external_ip: String,
    /// Number of configured peers
    pub peers_total: u32,
    /// Number of peers the generator considered online
    pub peers_online: u32,
    /// Peers in display order (source order is meaningful)
    pub peers: Vec<Peer>,
    /// Optional DNS suffix used to build fully-qualified hostnames
    #[serde(default)]
    pub domain: Option<String>,
}

/// One configured member of the private network
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Peer {
    /// Unique within a snapshot, used as display key
    pub hostname: String,
    pub ip: String,
    pub owner: String,
    pub description: String,
    /// Pre-computed by the generator from handshake recency
    pub online: bool,
    /// Administrative flag, affects styling only
    #[serde(default)]
    pub dormant: bool,
    /// ISO-8601-like timestamp of the last handshake
    pub last_handshake_time: String,
    /// Pre-formatted byte counts, passed through verbatim
    #[serde(rename = "receiveBytesSI")]
    pub receive_bytes_si: String,
    #[serde(rename = "transmitBytesSI")]
    pub transmit_bytes_si: String,
}
