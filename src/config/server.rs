//! HTTP server settings read from the environment.

use crate::errors::{Error, Result};
use std::net::SocketAddr;

/// Host used when `HOST` is not set.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Where the HTTP listener binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to listen on
    pub host: String,
    /// TCP port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads `HOST` and `PORT`, falling back to the defaults for unset variables.
    ///
    /// # Errors
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match std::env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    /// Resolves the configured host and port into a socket address.
    ///
    /// # Errors
    /// Returns an error if `HOST` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim().parse::<u16>().map_err(|e| Error::Config {
        message: format!("Invalid PORT '{raw}': {e}"),
    })
}
