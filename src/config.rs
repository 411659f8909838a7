use thiserror::Error;

use crate::shared::infrastructure::upstream::http::UpstreamConfig;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub upstream: UpstreamConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`AppConfig::from_env`] but over an injectable lookup, so
    /// tests never touch process-global state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingVar(name))
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidVar {
                name: "PORT",
                value: raw.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        let accept_invalid_certs = match lookup("UPSTREAM_VERIFY_TLS") {
            Some(raw) => {
                !parse_bool(&raw).ok_or_else(|| ConfigError::InvalidVar {
                    name: "UPSTREAM_VERIFY_TLS",
                    value: raw.clone(),
                })?
            }
            None => true,
        };

        Ok(Self {
            port,
            upstream: UpstreamConfig {
                base_url: require("API_URL")?,
                api_token: require("API_TOKEN")?,
                accept_invalid_certs,
            },
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
