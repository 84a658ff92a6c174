//! Configuration loading and validation for the gateway.
//!
//! All values are read from environment variables at startup. The process will
//! exit with a clear error message if any required variable is missing or invalid.

use std::time::Duration;

use anyhow::{Context, Result};
use dyniv_codec::KeyMaterial;
use serde::Deserialize;

/// Validated gateway configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Shared 16-byte key, used verbatim as the AES-128 key. **Required.**
    pub codec_key: KeyMaterial,

    /// Maximum age (milliseconds) of an encrypted value accepted on decrypt.
    #[serde(default = "default_freshness_window_ms")]
    pub freshness_window_ms: u64,

    /// Port the HTTP server listens on.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// OTLP endpoint for span export. Spans are not exported when unset.
    #[serde(default)]
    pub otel_exporter_otlp_endpoint: Option<String>,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_freshness_window_ms() -> u64 {
    60_000
}
fn default_listen_port() -> u16 {
    8080
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required variable is absent or cannot be parsed,
    /// including a `CODEC_KEY` that is not exactly 16 bytes.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// The freshness window as a [`Duration`].
    pub fn freshness_window(&self) -> Duration {
        Duration::from_millis(self.freshness_window_ms)
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        if self.freshness_window_ms == 0 {
            anyhow::bail!("FRESHNESS_WINDOW_MS must be > 0");
        }
        if self.listen_port == 0 {
            anyhow::bail!("LISTEN_PORT must be a non-zero port");
        }
        ensure_non_empty(&self.log_level, "LOG_LEVEL")?;
        if let Some(endpoint) = &self.otel_exporter_otlp_endpoint {
            ensure_non_empty(endpoint, "OTEL_EXPORTER_OTLP_ENDPOINT")?;
        }
        Ok(())
    }
}

fn ensure_non_empty(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("{name} must not be empty");
    }
    Ok(())
}
