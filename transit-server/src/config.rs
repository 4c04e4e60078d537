//! Application configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::warn;

/// Environment variable naming the network data directory.
pub const DATA_DIR_VAR: &str = "TRANSIT_DATA_DIR";

/// Environment variable naming the bind address.
pub const BIND_ADDR_VAR: &str = "TRANSIT_BIND_ADDR";

/// Process configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the network data files.
    pub data_dir: PathBuf,

    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("transit-server/data"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

impl AppConfig {
    /// Read configuration from the environment, with logged defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let data_dir = std::env::var(DATA_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                warn!(
                    "{} not set, using {}",
                    DATA_DIR_VAR,
                    defaults.data_dir.display()
                );
                defaults.data_dir.clone()
            });

        let bind_addr = match std::env::var(BIND_ADDR_VAR) {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("{BIND_ADDR_VAR} is not a valid socket address, using {}", defaults.bind_addr);
                defaults.bind_addr
            }),
            Err(_) => defaults.bind_addr,
        };

        Self {
            data_dir,
            bind_addr,
        }
    }
}
