use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Filesystem path or HTTP(S) URL of the snapshot document
    #[serde(default = "default_snapshot_source")]
    pub snapshot_source: String,

    /// Upper bound on a single snapshot acquisition, in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

fn default_port() -> u16 {
    8080
}

fn default_snapshot_source() -> String {
    // By default the generator drops the report next to the server
    "meshreport.json".to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        let settings: Config = config
            .try_deserialize()
            .unwrap_or_else(|_| Config::default());

        Ok(settings)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            snapshot_source: default_snapshot_source(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}
