//! Structured logging and optional OpenTelemetry span export.
//!
//! # Telemetry invariants
//!
//! - **No key material or plaintext values** must appear in any span
//!   attribute or log field. Blobs are logged by length only.
//! - Log level is configurable via `LOG_LEVEL` (default: `info`); `RUST_LOG`
//!   takes precedence when set.

pub mod init;

pub use init::init_telemetry;
