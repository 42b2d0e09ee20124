use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Port the API server listens on when nothing else is configured
pub const DEFAULT_API_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct Config {
    // http server configuration
    /// address for the API server to listen on
    pub listen_addr: SocketAddr,

    // logging
    pub log_level: tracing::Level,
    /// Directory for log files (optional, logs to stdout only if not set)
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_API_PORT),
            log_level: tracing::Level::INFO,
            log_dir: None,
        }
    }
}
