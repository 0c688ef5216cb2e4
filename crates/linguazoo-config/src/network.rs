use std::env;

use serde::{Deserialize, Serialize};

fn default_timeout_seconds() -> u64 {
    10
}

/// Outbound HTTP behavior shared by the translation and dictionary
/// clients. A timed-out call surfaces as a transport failure, never as a
/// content verdict.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NetworkConfig {
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl NetworkConfig {
    pub fn new() -> Self {
        let timeout_seconds = env::var("TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Self { timeout_seconds }
    }
}
