pub mod health;
pub mod openapi;
pub mod report;
pub mod response;

use std::time::Duration;

use crate::config::Config;
use crate::loader::{SnapshotLoader, SnapshotSource};

/// Shared application state
///
/// The loader is the only collaborator; render cycles share nothing
/// mutable, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub loader: SnapshotLoader,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let source = SnapshotSource::parse(&config.snapshot_source);
        let loader = SnapshotLoader::new(source, Duration::from_secs(config.fetch_timeout_secs));
        Self { config, loader }
    }
}
