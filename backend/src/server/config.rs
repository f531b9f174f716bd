//! HTTP server configuration object and helpers.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tracing::warn;

/// Default bind address when `BIND_ADDR` is unset or invalid.
const fn default_bind_addr() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080)
}

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    bind_addr: SocketAddr,
    database_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            database_url: None,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// `BIND_ADDR` selects the listen address (default `0.0.0.0:8080`; an
    /// invalid value falls back with a warning). `DATABASE_URL` selects the
    /// PostgreSQL store; when unset the server runs on the in-memory store.
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR")
            .ok()
            .and_then(|raw| match raw.parse() {
                Ok(addr) => Some(addr),
                Err(error) => {
                    warn!(value = %raw, %error, "invalid BIND_ADDR; using default");
                    None
                }
            })
            .unwrap_or_else(default_bind_addr);
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        Self {
            bind_addr,
            database_url,
        }
    }

    /// Override the listen address.
    #[must_use]
    pub const fn with_bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = bind_addr;
        self
    }

    /// Attach a PostgreSQL database URL for the persistence adapter.
    #[must_use]
    pub fn with_database_url(mut self, database_url: impl Into<String>) -> Self {
        self.database_url = Some(database_url.into());
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the configured database URL, if any.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_port_8080_with_no_database() {
        let config = ServerConfig::default();

        assert_eq!(config.bind_addr().port(), 8080);
        assert!(config.database_url().is_none());
    }

    #[test]
    fn builders_override_the_defaults() {
        let config = ServerConfig::default()
            .with_bind_addr(SocketAddr::from(([127, 0, 0, 1], 9000)))
            .with_database_url("postgres://localhost/forum");

        assert_eq!(config.bind_addr().port(), 9000);
        assert_eq!(config.database_url(), Some("postgres://localhost/forum"));
    }
}
