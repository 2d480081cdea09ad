//! Application configuration loaded from `{data_dir}/config.yaml`.
//!
//! Every field has a default, so a missing or partial file still yields a
//! usable configuration. The `--service-url` CLI flag overrides the file.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the remote analysis service.
    pub service_url: String,
    /// Timeout for one analysis request, in seconds.
    pub request_timeout_secs: u64,
    /// Duration of one readout animation, in milliseconds.
    pub readout_duration_ms: u64,
    /// Delay before the first narrative character appears, in milliseconds.
    pub reveal_delay_ms: u64,
    /// Interval between revealed narrative characters, in milliseconds.
    pub reveal_interval_ms: u64,
    /// Delay before the result sections become visible after a successful
    /// response, in milliseconds.
    pub settle_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_secs: 10,
            readout_duration_ms: 1000,
            reveal_delay_ms: finsnap_core::reveal::REVEAL_DELAY_MS,
            reveal_interval_ms: finsnap_core::reveal::REVEAL_INTERVAL_MS,
            settle_delay_ms: 500,
        }
    }
}

impl AppConfig {
    /// Load the config file, falling back to defaults if it is missing or
    /// fails to parse.
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("config.yaml");
        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_saphyr::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path());
        assert_eq!(config.readout_duration_ms, 1000);
        assert_eq!(config.settle_delay_ms, 500);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.yaml"),
            "service_url: http://analysis.internal:9000\n",
        )
        .unwrap();

        let config = AppConfig::load(dir.path());
        assert_eq!(config.service_url, "http://analysis.internal:9000");
        assert_eq!(config.reveal_delay_ms, 1500);
        assert_eq!(config.reveal_interval_ms, 20);
    }

    #[test]
    fn garbage_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.yaml"), ":::: not yaml [").unwrap();

        let config = AppConfig::load(dir.path());
        assert_eq!(config.service_url, AppConfig::default().service_url);
    }
}
