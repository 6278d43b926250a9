//! Server configuration from environment variables
//!
//! | Variable               | Default                        |
//! |------------------------|--------------------------------|
//! | `CATALOG_PATH`         | `data/crops_database.json`     |
//! | `DISEASE_CATALOG_PATH` | `data/diseases_database.json`  |
//! | `PORT`                 | `5000`                         |
//! | `TOP_N`                | `5`                            |
//! | `CACHE_TTL_SECS`       | `300`                          |
//! | `CACHE_CAPACITY`       | `10000`                        |

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::suitability::DEFAULT_TOP_N;

pub const DEFAULT_CATALOG_PATH: &str = "data/crops_database.json";
pub const DEFAULT_DISEASE_CATALOG_PATH: &str = "data/diseases_database.json";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub catalog_path: PathBuf,
    pub disease_catalog_path: PathBuf,
    pub port: u16,
    pub top_n: usize,
    pub cache_ttl: Duration,
    pub cache_capacity: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            disease_catalog_path: PathBuf::from(DEFAULT_DISEASE_CATALOG_PATH),
            port: DEFAULT_PORT,
            top_n: DEFAULT_TOP_N,
            cache_ttl: Duration::from_secs(300),
            cache_capacity: 10_000,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (environment, test map, ...)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let path_or = |key: &str, default: PathBuf| {
            lookup(key)
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(default)
        };
        let catalog_path = path_or("CATALOG_PATH", defaults.catalog_path);
        let disease_catalog_path = path_or("DISEASE_CATALOG_PATH", defaults.disease_catalog_path);

        let top_n = parse_or(&lookup, "TOP_N", defaults.top_n);

        Self {
            catalog_path,
            disease_catalog_path,
            port: parse_or(&lookup, "PORT", defaults.port),
            top_n: if top_n == 0 { defaults.top_n } else { top_n },
            cache_ttl: Duration::from_secs(parse_or(&lookup, "CACHE_TTL_SECS", defaults.cache_ttl.as_secs())),
            cache_capacity: parse_or(&lookup, "CACHE_CAPACITY", defaults.cache_capacity),
        }
    }
}

fn parse_or<T: FromStr + Copy>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}, using default", key, raw);
            default
        }),
        None => default,
    }
}
