use std::net::{Ipv4Addr, SocketAddr};

use clap::Args;

use jsonstash_daemon::process::ProcessError;
use jsonstash_daemon::state::AppState;
use jsonstash_daemon::{spawn_service, ServiceConfig};

#[derive(Args, Debug, Clone)]
pub struct Daemon {
    /// Override API server port (default from config)
    #[arg(long)]
    pub api_port: Option<u16>,

    /// Override log level (default from config)
    #[arg(long)]
    pub log_level: Option<tracing::Level>,

    /// Directory for log files (logs to stdout only if not set)
    #[arg(long)]
    pub log_dir: Option<std::path::PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum DaemonError {
    #[error("state error: {0}")]
    StateError(#[from] jsonstash_daemon::state::StateError),

    #[error("daemon failed: {0}")]
    Failed(#[from] ProcessError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Daemon {
    type Error = DaemonError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        // The stash lives in memory, so a missing config dir just means defaults
        let state = AppState::load_or_default(ctx.config_path.clone())?;

        let api_port = self.api_port.unwrap_or(state.config.api_port);
        let log_level = self
            .log_level
            .unwrap_or_else(|| state.config.tracing_level());

        let config = ServiceConfig {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, api_port)),
            log_level,
            log_dir: self.log_dir.clone(),
        };

        spawn_service(&config).await?;
        Ok("daemon ended".to_string())
    }
}
