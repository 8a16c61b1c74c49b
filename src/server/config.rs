use std::{net::SocketAddr, time::Duration};

use crate::server::error::config::ConfigError;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SPEECH_API_URL: &str = "https://speech.googleapis.com";

pub struct Config {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    pub page_size: u64,
    pub payment_gateway_url: String,
    pub payment_gateway_api_key: String,
    pub samsung_api_url: String,
    pub samsung_api_key: String,
    pub switchboard_url: String,
    pub switchboard_api_key: String,
    pub speech_api_url: String,
    pub speech_api_key: String,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source, `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        let listen_addr = match lookup("LISTEN_ADDR") {
            Some(value) => value.parse().map_err(|e| ConfigError::InvalidEnvValue {
                var: "LISTEN_ADDR".to_string(),
                reason: format!("{}", e),
            })?,
            None => DEFAULT_LISTEN_ADDR
                .parse()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "LISTEN_ADDR".to_string(),
                    reason: format!("{}", e),
                })?,
        };

        let page_size = parse_u64(&lookup, "PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(ConfigError::InvalidEnvValue {
                var: "PAGE_SIZE".to_string(),
                reason: format!("must be between 1 and {}", MAX_PAGE_SIZE),
            });
        }

        let http_timeout_secs =
            parse_u64(&lookup, "HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            listen_addr,
            page_size,
            payment_gateway_url: required("PAYMENT_GATEWAY_URL")?,
            payment_gateway_api_key: required("PAYMENT_GATEWAY_API_KEY")?,
            samsung_api_url: required("SAMSUNG_API_URL")?,
            samsung_api_key: required("SAMSUNG_API_KEY")?,
            switchboard_url: required("SWITCHBOARD_URL")?,
            switchboard_api_key: required("SWITCHBOARD_API_KEY")?,
            speech_api_url: lookup("SPEECH_API_URL")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SPEECH_API_URL.to_string()),
            speech_api_key: required("SPEECH_API_KEY")?,
            http_timeout: Duration::from_secs(http_timeout_secs),
        })
    }
}

fn parse_u64<F>(lookup: &F, var: &str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: format!("{}", e),
            }),
        None => Ok(default),
    }
}
