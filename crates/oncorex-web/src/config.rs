//! Configuration loading for Oncorex.
//! Reads oncorex.toml from the current directory or the path in ONCOREX_CONFIG.

use std::path::Path;

use oncorex_common::{OncorexError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub recommendation: RecommendationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// How many ranked treatments the recommendation endpoint returns.
    #[serde(default = "default_display_count")]
    pub display_count: usize,
}

fn default_display_count() -> usize { 3 }

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            recommendation: RecommendationConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self { display_count: default_display_count() }
    }
}

impl Config {
    /// Resolve configuration once at startup. A missing file yields the
    /// defaults; an unreadable or malformed file is an error.
    pub fn load() -> Result<Self> {
        let path =
            std::env::var("ONCOREX_CONFIG").unwrap_or_else(|_| "oncorex.toml".to_string());
        Self::from_path(&path)
    }

    pub fn from_path(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            tracing::debug!(path, "no config file found, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|e| OncorexError::Config(format!("failed to read {path}: {e}")))?;
        toml::from_str(&raw)
            .map_err(|e| OncorexError::Config(format!("failed to parse {path}: {e}")))
    }
}
