//! Configuration for the ARD web service

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main service configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Reference data configuration
    #[serde(default)]
    pub data: DataConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    pub host: String,
    /// Port to listen on (default: 3000)
    pub port: u16,
    /// Maximum request size (default: "1MB")
    pub max_request_size: String,
}

/// Reference data configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DataConfig {
    /// Path to the ARD lookup tables JSON file; built-in sample data is used when unset
    pub tables_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            max_request_size: "1MB".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: ServiceConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        parse_size(&self.server.max_request_size)
            .map_err(|e| format!("Invalid max_request_size: {}", e))?;

        if let Some(path) = &self.data.tables_path {
            if !path.exists() {
                return Err(format!(
                    "ARD tables file does not exist: {}",
                    path.display()
                ));
            }
        }

        Ok(())
    }
}

/// Parse size strings like "10MB", "1GB", etc.
pub fn parse_size(size_str: &str) -> Result<usize, String> {
    let size_str = size_str.trim().to_uppercase();

    // Longer suffixes first so "MB" is not read as "B"
    for (suffix, multiplier) in [("GB", 1024 * 1024 * 1024), ("MB", 1024 * 1024), ("KB", 1024)] {
        if let Some(num_str) = size_str.strip_suffix(suffix) {
            let num: usize = num_str
                .trim()
                .parse()
                .map_err(|_| format!("Invalid size format: {}", size_str))?;
            return num
                .checked_mul(multiplier)
                .ok_or_else(|| format!("Size too large: {}", size_str));
        }
    }

    size_str
        .strip_suffix('B')
        .unwrap_or(&size_str)
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("Invalid size format: {}", size_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert!(config.data.tables_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = ServiceConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_tables() {
        let mut config = ServiceConfig::default();
        config.data.tables_path = Some(PathBuf::from("/nonexistent/ard_tables.json"));
        let err = config.validate().unwrap_err();
        assert!(err.contains("does not exist"));
    }

    #[test]
    fn test_validate_rejects_bad_size() {
        let mut config = ServiceConfig::default();
        config.server.max_request_size = "lots".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("service.toml");

        let mut config = ServiceConfig::default();
        config.server.port = 8080;
        config.data.tables_path = Some(PathBuf::from("data/ard_tables.json"));
        config.to_file(&path).unwrap();

        let loaded = ServiceConfig::from_file(&path).unwrap();
        assert_eq!(loaded.server.port, 8080);
        assert_eq!(
            loaded.data.tables_path,
            Some(PathBuf::from("data/ard_tables.json"))
        );
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("service.toml");
        std::fs::write(&path, "[server]\nport = 9000\n").unwrap();

        let loaded = ServiceConfig::from_file(&path).unwrap();
        assert_eq!(loaded.server.port, 9000);
        assert_eq!(loaded.server.host, "0.0.0.0");
        assert_eq!(loaded.server.max_request_size, "1MB");
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("100").unwrap(), 100);
        assert_eq!(parse_size("100B").unwrap(), 100);
        assert_eq!(parse_size("1KB").unwrap(), 1024);
        assert_eq!(parse_size("10MB").unwrap(), 10 * 1024 * 1024);
        assert_eq!(parse_size("1GB").unwrap(), 1024 * 1024 * 1024);

        // Case insensitive
        assert_eq!(parse_size("10mb").unwrap(), 10 * 1024 * 1024);

        // Invalid formats
        assert!(parse_size("invalid").is_err());
        assert!(parse_size("10XB").is_err());
    }
}
