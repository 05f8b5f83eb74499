//! Snapshot loader
//!
//! Acquires the raw snapshot document from a configured source (filesystem
//! path or HTTP(S) URL) and parses it into a typed [`Snapshot`]. This is the
//! only component with an I/O boundary; everything downstream is pure.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::models::Snapshot;

/// Where the snapshot document lives
#[derive(Debug, Clone)]
pub enum SnapshotSource {
    File(PathBuf),
    Url(String),
}

impl SnapshotSource {
    /// Classify a configured locator. Anything that does not look like an
    /// HTTP(S) URL is treated as a filesystem path. URL schemes are
    /// case-insensitive.
    pub fn parse(locator: &str) -> Self {
        let prefix: String = locator.chars().take(8).collect::<String>().to_ascii_lowercase();
        if prefix.starts_with("http://") || prefix.starts_with("https://") {
            SnapshotSource::Url(locator.to_string())
        } else {
            SnapshotSource::File(PathBuf::from(locator))
        }
    }
}

impl std::fmt::Display for SnapshotSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotSource::File(path) => write!(f, "{}", path.display()),
            SnapshotSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Loads and validates snapshot documents
#[derive(Clone)]
pub struct SnapshotLoader {
    source: SnapshotSource,
    client: reqwest::Client,
    timeout: Duration,
}

impl SnapshotLoader {
    pub fn new(source: SnapshotSource, timeout: Duration) -> Self {
        Self {
            source,
            client: reqwest::Client::new(),
            timeout,
        }
    }

    pub fn source(&self) -> &SnapshotSource {
        &self.source
    }

    /// Perform one acquisition and parse. No retries; a timeout counts as
    /// the source being unavailable.
    pub async fn load(&self) -> AppResult<Snapshot> {
        let raw = tokio::time::timeout(self.timeout, self.acquire())
            .await
            .map_err(|_| {
                AppError::source_unavailable(format!(
                    "timed out after {:?} reading {}",
                    self.timeout, self.source
                ))
            })??;

        let snapshot: Snapshot = serde_json::from_str(&raw)?;
        validate(&snapshot)?;

        debug!(
            "Loaded snapshot from {}: {} peers, {} online",
            self.source, snapshot.peers_total, snapshot.peers_online
        );

        Ok(snapshot)
    }

    async fn acquire(&self) -> AppResult<String> {
        match &self.source {
            SnapshotSource::File(path) => {
                // A reachable but undecodable file is a document problem,
                // not an availability problem
                let bytes = tokio::fs::read(path).await?;
                String::from_utf8(bytes).map_err(|_| {
                    AppError::malformed(format!("{} is not valid UTF-8", path.display()))
                })
            }
            SnapshotSource::Url(url) => {
                let response = self.client.get(url).send().await?;
                let response = response.error_for_status()?;
                Ok(response.text().await?)
            }
        }
    }
}

/// Boundary validation of a parsed snapshot. Documents that violate the
/// counter invariant are rejected; a count/row mismatch is only logged
/// because the row set follows `peers` while the summary follows the
/// supplied counters.
fn validate(snapshot: &Snapshot) -> AppResult<()> {
    if snapshot.peers_online > snapshot.peers_total {
        return Err(AppError::malformed(format!(
            "peersOnline ({}) exceeds peersTotal ({})",
            snapshot.peers_online, snapshot.peers_total
        )));
    }

    if snapshot.peers_total as usize != snapshot.peers.len() {
        warn!(
            "snapshot reports peersTotal={} but carries {} peers",
            snapshot.peers_total,
            snapshot.peers.len()
        );
    }

    Ok(())
}
