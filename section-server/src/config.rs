//! Server configuration.
//!
//! Read from environment variables at startup:
//!
//! | Variable             | Default          |
//! |----------------------|------------------|
//! | `XML_FILE_PATH`      | `./xml`          |
//! | `BIND_ADDR`          | `127.0.0.1:8080` |
//! | `CACHE_TTL_SECS`     | unset (no TTL)   |
//! | `CACHE_MAX_CAPACITY` | unset (no bound) |

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::CacheConfig;

const DEFAULT_XML_DIR: &str = "./xml";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but can't be parsed
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration for the section server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Directory holding the station XML files.
    pub xml_dir: PathBuf,

    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Lookup cache settings.
    pub cache: CacheConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration using `lookup` to resolve variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let xml_dir = lookup("XML_FILE_PATH")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_XML_DIR.to_string());

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: "BIND_ADDR",
                value: bind_addr.clone(),
                reason: e.to_string(),
            })?;

        let mut cache = CacheConfig::default();
        if let Some(secs) = parse_optional::<u64>(&lookup, "CACHE_TTL_SECS")? {
            cache = cache.with_ttl(Duration::from_secs(secs));
        }
        if let Some(capacity) = parse_optional::<u64>(&lookup, "CACHE_MAX_CAPACITY")? {
            cache = cache.with_max_capacity(capacity);
        }

        Ok(Self {
            xml_dir: PathBuf::from(xml_dir),
            bind_addr,
            cache,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            xml_dir: PathBuf::from(DEFAULT_XML_DIR),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            cache: CacheConfig::default(),
        }
    }
}

fn parse_optional<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) if value.is_empty() => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Invalid {
                var,
                reason: e.to_string(),
                value,
            }),
    }
}
