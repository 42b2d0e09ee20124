pub use clap::Parser;

use std::path::PathBuf;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "jsonstash")]
#[command(about = "In-memory multi-bucket key-value store over HTTP")]
pub struct Args {
    /// Daemon API address (defaults to the configured api_port on localhost)
    #[arg(long, global = true)]
    pub remote: Option<Url>,

    /// Path to the jsonstash config directory (defaults to ~/.jsonstash)
    #[arg(long, global = true)]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: crate::Command,
}
