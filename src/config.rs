//! Server configuration read from environment variables

use axum::http::HeaderValue;
use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

/// Port the service has always listened on
pub const DEFAULT_PORT: u16 = 8090;

/// Default request body limit (2 MiB, same as axum's)
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Origins allowed by CORS; empty disables the CORS layer
    pub allowed_origins: Vec<String>,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            allowed_origins: Vec::new(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    /// Read configuration from the process environment
    ///
    /// Recognised variables: `HOST`, `PORT`, `CORS_ALLOWED_ORIGINS`
    /// (comma-separated) and `MAX_BODY_BYTES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = parse_var(&lookup, "HOST")?.unwrap_or(defaults.host);
        let port = parse_var(&lookup, "PORT")?.unwrap_or(defaults.port);
        let max_body_bytes =
            parse_var(&lookup, "MAX_BODY_BYTES")?.unwrap_or(defaults.max_body_bytes);

        let allowed_origins: Vec<String> = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        if let Some(bad) = allowed_origins
            .iter()
            .find(|origin| HeaderValue::from_str(origin).is_err())
        {
            return Err(ConfigError::Invalid {
                name: "CORS_ALLOWED_ORIGINS",
                value: bad.clone(),
            });
        }

        Ok(Self {
            host,
            port,
            allowed_origins,
            max_body_bytes,
        })
    }

    /// Socket address to bind the server to
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value }),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.addr().port(), 8090);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("CORS_ALLOWED_ORIGINS", "http://localhost:3000, https://example.com,"),
            ("MAX_BODY_BYTES", "1024"),
        ]))
        .unwrap();

        assert_eq!(config.addr(), "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:3000", "https://example.com"]
        );
        assert_eq!(config.max_body_bytes, 1024);
    }

    #[test]
    fn test_invalid_origin() {
        let err = Config::from_lookup(lookup_from(&[(
            "CORS_ALLOWED_ORIGINS",
            "http://ok.example,bad\norigin",
        )]))
        .unwrap_err();

        assert!(err.to_string().contains("CORS_ALLOWED_ORIGINS"));
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();

        assert!(err.to_string().contains("PORT"));
    }
}
