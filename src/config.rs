//! Configuration Management
//!
//! Reads the user's fbapps settings. The file is edited by hand and never
//! written back by the binary.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::project_management::DEFAULT_API_BASE_URL;

/// Environment variable overriding the API endpoint
pub const API_URL_ENV: &str = "FIREBASE_MANAGEMENT_URL";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Firebase Management API endpoint
    #[serde(default)]
    pub api_base_url: Option<String>,
}

impl Config {
    /// Directory holding the config file and logs
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fbapps"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                tracing::warn!("Failed to read {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Parse config JSON, falling back to defaults on malformed content
    pub fn parse(content: &str) -> Self {
        serde_json::from_str(content).unwrap_or_else(|e| {
            tracing::warn!("Ignoring malformed config: {}", e);
            Self::default()
        })
    }

    /// Get effective API endpoint (CLI > env > config > default)
    pub fn effective_api_base_url(&self, cli: Option<&str>) -> String {
        let env = std::env::var(API_URL_ENV).ok();
        self.resolve_api_base_url(cli, env.as_deref())
    }

    fn resolve_api_base_url(&self, cli: Option<&str>, env: Option<&str>) -> String {
        cli.or(env.filter(|s| !s.is_empty()))
            .or(self.api_base_url.as_deref())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string()
    }
}
