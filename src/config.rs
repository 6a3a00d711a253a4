//! Runtime configuration.
//!
//! Builder-style settings with environment overrides. Defaults point at a
//! local backend, matching the development setup.

use std::path::PathBuf;

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Backend base URL, without a trailing slash
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Optional path to a map-shape provider JSON file
    pub shapes_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            shapes_path: None,
        }
    }
}

impl Config {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL. A trailing slash is stripped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let url = base_url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout in seconds.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the map-shape provider file path.
    pub fn with_shapes_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.shapes_path = Some(path.into());
        self
    }

    /// Build a config from the environment.
    ///
    /// Honors `NUSARASA_API_URL`, `NUSARASA_TIMEOUT_SECS` (falls back to the
    /// default on a non-numeric value), and `NUSARASA_SHAPES`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("NUSARASA_API_URL") {
            if !url.is_empty() {
                config = config.with_base_url(url);
            }
        }
        if let Ok(secs) = std::env::var("NUSARASA_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse() {
                config.timeout_secs = secs;
            }
        }
        if let Ok(path) = std::env::var("NUSARASA_SHAPES") {
            if !path.is_empty() {
                config.shapes_path = Some(PathBuf::from(path));
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.shapes_path.is_none());
    }

    #[test]
    fn test_builder_setters() {
        let config = Config::new()
            .with_base_url("https://api.example.com")
            .with_timeout_secs(30)
            .with_shapes_path("/tmp/indonesia.json");
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.shapes_path, Some(PathBuf::from("/tmp/indonesia.json")));
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = Config::new().with_base_url("http://localhost:8000/");
        assert_eq!(config.base_url, "http://localhost:8000");
    }
}
