//! Process configuration
//!
//! Read once at startup from the environment (and `.env`, via dotenvy).
//! Missing provider credentials are a degraded state, not an error.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 4050;
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_REGISTRY_URL: &str = "http://localhost:8085/api/registry";
pub const DEFAULT_SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";
pub const DEFAULT_LOG_FILTER: &str = "info,searchlink_server=debug,tower_http=info";

/// Google Custom Search credentials and endpoint
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub search_engine_id: Option<String>,
    pub base_url: String,
}

/// Registry client timing and location
#[derive(Debug, Clone)]
pub struct RegistrationConfig {
    pub registry_url: String,
    /// Host advertised to the registry
    pub service_host: String,
    pub service_port: u16,
    pub registration_interval: Duration,
    pub heartbeat_interval: Duration,
    pub heartbeat_initial_delay: Duration,
    pub register_timeout: Duration,
    pub heartbeat_timeout: Duration,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            service_host: DEFAULT_HOST.to_string(),
            service_port: DEFAULT_PORT,
            registration_interval: Duration::from_millis(30_000),
            heartbeat_interval: Duration::from_millis(30_000),
            heartbeat_initial_delay: Duration::from_millis(2_000),
            register_timeout: Duration::from_millis(5_000),
            heartbeat_timeout: Duration::from_millis(3_000),
        }
    }
}

/// Full server settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub provider: ProviderConfig,
    pub registration: RegistrationConfig,
}

impl Settings {
    /// Load from process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = parse_or(get("SERVICE_PORT"), "SERVICE_PORT", DEFAULT_PORT);
        let bind_addr = parse_or(
            get("SERVICE_BIND_ADDR"),
            "SERVICE_BIND_ADDR",
            IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        );

        let provider = ProviderConfig {
            api_key: get("GOOGLE_API_KEY"),
            search_engine_id: get("GOOGLE_SEARCH_ENGINE_ID"),
            base_url: get("GOOGLE_SEARCH_URL").unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string()),
        };

        let defaults = RegistrationConfig::default();
        let registration = RegistrationConfig {
            registry_url: get("SERVICE_REGISTRY_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.registry_url),
            service_host: get("SERVICE_HOST").unwrap_or(defaults.service_host),
            service_port: port,
            registration_interval: interval_or(
                get("REGISTRATION_INTERVAL_MS"),
                "REGISTRATION_INTERVAL_MS",
                defaults.registration_interval,
            ),
            heartbeat_interval: interval_or(
                get("HEARTBEAT_INTERVAL_MS"),
                "HEARTBEAT_INTERVAL_MS",
                defaults.heartbeat_interval,
            ),
            ..defaults
        };

        Self {
            bind_addr,
            port,
            provider,
            registration,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, key: &str, default: T) -> T {
    match value {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("⚠️  Ignoring invalid {}={:?}, using default", key, raw);
            default
        }),
        None => default,
    }
}

/// Timer periods must be non-zero
fn interval_or(value: Option<String>, key: &str, default: Duration) -> Duration {
    match parse_or(value, key, default.as_millis() as u64) {
        0 => {
            tracing::warn!("⚠️  {} must be greater than zero, using default", key);
            default
        }
        ms => Duration::from_millis(ms),
    }
}
