//! # Client Configuration
//!
//! Where the optimizer lives and how to reach it.
//!
//! ## Layering (lowest to highest precedence)
//!
//! 1. Built-in defaults (`http://127.0.0.1:5000`, `/api/skills`, `/api/optimize`)
//! 2. TOML file passed with `--config`
//! 3. `BUILDSMITH_URL` environment variable
//! 4. `--url` command-line flag
//!
//! ## Example
//!
//! ```toml
//! base_url = "https://optimizer.example.net"
//! catalog_path = "/api/skills"
//! optimize_path = "/api/optimize"
//! timeout_secs = 30
//! ```

use buildsmith_core::BuildsmithError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding the optimizer base URL.
pub const URL_ENV_VAR: &str = "BUILDSMITH_URL";

/// Maximum config file size (64 KB).
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

/// Optimizer endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Scheme + host (+ optional prefix), stored without a trailing slash.
    pub base_url: String,
    /// Path of the skill catalog endpoint.
    pub catalog_path: String,
    /// Path of the optimization endpoint.
    pub optimize_path: String,
    /// Request timeout. `None` leaves the transport default in place.
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            catalog_path: "/api/skills".to_string(),
            optimize_path: "/api/optimize".to_string(),
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, BuildsmithError> {
        toml::from_str(text).map_err(|e| BuildsmithError::Config(e.to_string()))
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, BuildsmithError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            BuildsmithError::IoError(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(BuildsmithError::Config(format!(
                "Config file size {} bytes exceeds maximum {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let text = std::fs::read_to_string(path).map_err(|e| {
            BuildsmithError::IoError(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Resolve the effective configuration from every layer.
    pub fn load(file: Option<&Path>, url_flag: Option<&str>) -> Result<Self, BuildsmithError> {
        Self::load_with_env(file, url_flag, |key| std::env::var(key).ok())
    }

    /// Like [`ClientConfig::load`], with an explicit environment lookup.
    pub fn load_with_env(
        file: Option<&Path>,
        url_flag: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, BuildsmithError> {
        let mut config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(url) = env(URL_ENV_VAR).filter(|u| !u.trim().is_empty()) {
            config.base_url = url;
        }
        if let Some(url) = url_flag {
            config.base_url = url.to_string();
        }

        config.normalized()
    }

    /// Validate and normalize the base URL and endpoint paths.
    pub fn normalized(mut self) -> Result<Self, BuildsmithError> {
        let base = self.base_url.trim().trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(BuildsmithError::Config(format!(
                "base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        self.base_url = base.to_string();

        for path in [&mut self.catalog_path, &mut self.optimize_path] {
            if !path.starts_with('/') {
                path.insert(0, '/');
            }
        }

        if self.timeout_secs == Some(0) {
            return Err(BuildsmithError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(self)
    }

    /// Full URL of the catalog endpoint.
    #[must_use]
    pub fn catalog_url(&self) -> String {
        format!("{}{}", self.base_url, self.catalog_path)
    }

    /// Full URL of the optimization endpoint.
    #[must_use]
    pub fn optimize_url(&self) -> String {
        format!("{}{}", self.base_url, self.optimize_path)
    }
}

// =============================================================================
// TESTS
// =============================================================================
