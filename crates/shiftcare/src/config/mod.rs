use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use url::Url;

/// Relay endpoint the pre-launch form has always posted to.
pub const DEFAULT_RELAY_URL: &str = "https://formspree.io/f/xblyfeny";

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub relay: RelayConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let relay_url = env::var("SIGNUP_RELAY_URL").unwrap_or_else(|_| DEFAULT_RELAY_URL.to_string());
        let relay = RelayConfig::parse(&relay_url)?;

        let listings_path = env::var("LISTINGS_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            relay,
            catalog: CatalogConfig { listings_path },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where sign-ups are relayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: Url,
}

impl RelayConfig {
    /// Parse and check an endpoint; only absolute http(s) URLs are accepted.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidRelayUrl {
            value: raw.to_string(),
            source,
        })?;

        match endpoint.scheme() {
            "http" | "https" => Ok(Self { endpoint }),
            _ => Err(ConfigError::UnsupportedRelayScheme {
                value: raw.to_string(),
            }),
        }
    }
}

/// Source of the listing catalog. `None` selects the built-in examples.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    pub listings_path: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    InvalidRelayUrl {
        value: String,
        source: url::ParseError,
    },
    UnsupportedRelayScheme {
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidRelayUrl { value, .. } => {
                write!(f, "SIGNUP_RELAY_URL '{}' is not an absolute URL", value)
            }
            ConfigError::UnsupportedRelayScheme { value } => {
                write!(f, "SIGNUP_RELAY_URL '{}' must use http or https", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::UnsupportedRelayScheme { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidRelayUrl { source, .. } => Some(source),
        }
    }
}
