use std::env;

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "linguazoo_animals.json".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the JSON collection file.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        let path = env::var("LINGUAZOO_STORE_PATH").unwrap_or_else(|_| default_path());

        Self { path }
    }
}
