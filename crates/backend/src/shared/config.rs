use chrono::NaiveDate;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub frontend: FrontendConfig,
    pub data: DataConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FrontendConfig {
    /// Trunk output served as the fallback route
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DataConfig {
    /// "Today" for the dashboard; the seed data is pinned to this day
    pub reference_date: NaiveDate,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Used when RUST_LOG is not set
    pub filter: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[frontend]
static_dir = "dist"

[data]
reference_date = "2024-11-14"

[logging]
filter = "info,tower_http=warn"
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    default_config()
}

pub fn default_config() -> anyhow::Result<Config> {
    Ok(toml::from_str(DEFAULT_CONFIG)?)
}

/// Make `config` visible to handlers. The first call wins.
pub fn install(config: Config) -> &'static Config {
    CONFIG.get_or_init(|| config)
}

/// Installed configuration, or the embedded default when nothing was installed
pub fn current() -> anyhow::Result<&'static Config> {
    CONFIG.get_or_try_init(default_config)
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("Invalid server address '{}': {}", addr, e))
    }
}

/// Resolve the static directory relative to the executable
pub fn static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.frontend.static_dir);
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dir);
            if resolved.exists() {
                return resolved;
            }
        }
    }
    PathBuf::from(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = default_config().unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.frontend.static_dir, "dist");
        assert_eq!(
            config.data.reference_date,
            NaiveDate::from_ymd_opt(2024, 11, 14).unwrap()
        );
        assert_eq!(
            config.server.socket_addr().unwrap(),
            "0.0.0.0:3000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_bad_host_is_reported() {
        let server = ServerConfig {
            host: "not a host".into(),
            port: 3000,
        };
        assert!(server.socket_addr().is_err());
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let partial = "[server]\nhost = \"127.0.0.1\"\nport = 8080\n";
        assert!(toml::from_str::<Config>(partial).is_err());
    }
}
