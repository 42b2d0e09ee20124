use clap::Args;

use jsonstash_daemon::state::{AppConfig, AppState, StateError};

#[derive(Args, Debug, Clone)]
pub struct Init {
    /// Port the daemon API should listen on
    #[arg(long)]
    pub api_port: Option<u16>,

    /// Default log level (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("init failed: {0}")]
    State(#[from] StateError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Init {
    type Error = InitError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            api_port: self.api_port.unwrap_or(defaults.api_port),
            log_level: self.log_level.clone().unwrap_or(defaults.log_level),
        };

        let state = AppState::init(ctx.config_path.clone(), Some(config))?;

        Ok(format!(
            "Initialized jsonstash at {}\n  api_port:  {}\n  log_level: {}",
            state.config_dir.display(),
            state.config.api_port,
            state.config.log_level
        ))
    }
}
