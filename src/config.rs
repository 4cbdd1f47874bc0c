use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub gateway: GatewayConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    /// Tokio worker threads; defaults to the available parallelism
    #[serde(default)]
    pub workers: Option<usize>,
}

impl GatewayConfig {
    /// Worker thread count actually used by the runtime
    pub fn worker_threads(&self) -> usize {
        self.workers.filter(|&n| n > 0).unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AppConfig {
    /// Load `config/{env}.yaml`
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path).map_err(|source| AppError::ConfigRead {
            path: config_path.clone(),
            source,
        })?;
        Self::from_yaml_str(&content).map_err(|source| AppError::ConfigParse {
            path: config_path,
            source,
        })
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Apply command line overrides on top of the file values
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.gateway.host = host;
        }
        if let Some(port) = port {
            self.gateway.port = port;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEV_YAML: &str = r#"
log_level: "debug"
log_dir: "./logs"
log_file: "api.log"
use_json: false
rotation: "daily"
gateway:
  host: "127.0.0.1"
  port: 5003
"#;

    #[test]
    fn test_parse_without_workers() {
        let config = AppConfig::from_yaml_str(DEV_YAML).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.gateway.port, 5003);
        assert!(config.gateway.workers.is_none());
        assert!(config.gateway.worker_threads() >= 1);
    }

    #[test]
    fn test_explicit_workers() {
        let yaml = DEV_YAML.replace("port: 5003", "port: 5003\n  workers: 3");
        let config = AppConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(config.gateway.worker_threads(), 3);
    }

    #[test]
    fn test_zero_workers_falls_back() {
        let yaml = DEV_YAML.replace("port: 5003", "port: 5003\n  workers: 0");
        let config = AppConfig::from_yaml_str(&yaml).unwrap();
        assert!(config.gateway.worker_threads() >= 1);
    }

    #[test]
    fn test_cli_overrides() {
        let config = AppConfig::from_yaml_str(DEV_YAML)
            .unwrap()
            .with_overrides(Some("0.0.0.0".to_string()), Some(9000));
        assert_eq!(config.gateway.bind_addr(), "0.0.0.0:9000");

        let untouched = AppConfig::from_yaml_str(DEV_YAML)
            .unwrap()
            .with_overrides(None, None);
        assert_eq!(untouched.gateway.bind_addr(), "127.0.0.1:5003");
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        assert!(AppConfig::from_yaml_str("log_level: info").is_err());
    }

    #[test]
    fn test_load_missing_env() {
        let err = AppConfig::load("does-not-exist").unwrap_err();
        assert!(matches!(err, AppError::ConfigRead { .. }));
    }
}
