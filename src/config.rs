use crate::error::{BookGraphError, Result};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Mongo,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_graphiql")]
    pub graphiql: bool,

    #[serde(default)]
    pub store: StoreKind,

    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Falls back to the database named in `database_url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

fn default_port() -> u16 {
    5000
}

fn default_graphiql() -> bool {
    true
}

fn default_database_url() -> String {
    "mongodb://localhost:27017".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphiql: default_graphiql(),
            store: StoreKind::default(),
            database_url: default_database_url(),
            database: None,
        }
    }
}

/// Values supplied on the command line or through the environment.
/// `None` leaves the file/default value in place.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
    pub no_graphiql: bool,
    pub store: Option<StoreKind>,
    pub database_url: Option<String>,
    pub database: Option<String>,
}

impl AppConfig {
    /// Loads defaults, then the TOML file at `path` if given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Err(BookGraphError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if overrides.no_graphiql {
            self.graphiql = false;
        }
        if let Some(store) = overrides.store {
            self.store = store;
        }
        if let Some(url) = overrides.database_url {
            self.database_url = url;
        }
        if overrides.database.is_some() {
            self.database = overrides.database;
        }
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.store, StoreKind::Mongo);
        assert!(config.graphiql);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:5000");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bookgraph.toml");
        std::fs::write(&path, "port = 8080\nstore = \"memory\"\n").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.store, StoreKind::Memory);
        assert_eq!(config.database_url, "mongodb://localhost:27017");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = AppConfig::load(Some(&temp_dir.path().join("nope.toml")));
        assert!(matches!(result, Err(BookGraphError::Config(_))));
    }

    #[test]
    fn test_invalid_file_is_toml_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        std::fs::write(&path, "port = \"not a number\"").unwrap();

        let result = AppConfig::load(Some(&path));
        assert!(matches!(result, Err(BookGraphError::Toml(_))));
    }

    #[test]
    fn test_overrides_win_over_file_values() {
        let config = AppConfig {
            port: 8080,
            database: Some("from-file".to_string()),
            ..AppConfig::default()
        }
        .with_overrides(ConfigOverrides {
            port: Some(9090),
            no_graphiql: true,
            database_url: Some("mongodb://db:27017/books".to_string()),
            ..ConfigOverrides::default()
        });

        assert_eq!(config.port, 9090);
        assert!(!config.graphiql);
        assert_eq!(config.database_url, "mongodb://db:27017/books");
        assert_eq!(config.database.as_deref(), Some("from-file"));
    }
}
