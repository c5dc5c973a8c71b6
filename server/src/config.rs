//! Server configuration parsed from environment variables.
//!
//! Read once at startup. Unparseable numeric values fall back to their
//! defaults; only `DATABASE_URL` changes which store backs the service.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// `None` selects the in-memory store.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    /// Request body limit for `POST /api/rsvp`.
    pub max_body_bytes: usize,
    /// Directory served for unmatched paths.
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// - `PORT`: listen port (default 3000)
    /// - `DATABASE_URL`: Postgres URL; absent or empty means in-memory
    /// - `DB_MAX_CONNECTIONS`: pool size (default 5)
    /// - `RSVP_MAX_BODY_BYTES`: request body limit (default 10 MiB)
    /// - `STATIC_DIR`: page assets (default `<crate>/../public`)
    #[must_use]
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());
        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_static_dir());

        Self {
            port: env_parse("PORT", DEFAULT_PORT),
            database_url,
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS),
            max_body_bytes: env_parse("RSVP_MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES),
            static_dir,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            static_dir: default_static_dir(),
        }
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public")
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
