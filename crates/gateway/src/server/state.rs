//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use dyniv_codec::{Codec, KeyMaterial};

/// Application state shared across all request handlers.
///
/// All fields are cheaply cloneable so that Axum can clone the state for each
/// request without copying the key.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Stateless codec carrying the clock and freshness window.
    pub codec: Codec,
    /// Shared key material loaded from configuration.
    pub key: Arc<KeyMaterial>,
}

impl AppState {
    /// Create a new [`AppState`] from a codec and its key.
    pub fn new(codec: Codec, key: KeyMaterial) -> Self {
        Self {
            codec,
            key: Arc::new(key),
        }
    }
}
