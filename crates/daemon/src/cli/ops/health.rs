use std::convert::Infallible;

use clap::Args;

use jsonstash_daemon::http_server::api::client::{endpoint, FromBody};
use jsonstash_daemon::http_server::StatsResponse;
use jsonstash_daemon::state::AppState;

#[derive(Args, Debug, Clone)]
pub struct Health;

#[async_trait::async_trait]
impl crate::cli::op::Op for Health {
    type Error = Infallible;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut lines = Vec::new();

        // 1. Check config directory
        lines.push("Config:".to_string());
        match AppState::load(ctx.config_path.clone()) {
            Ok(state) => {
                lines.push(format!("  directory:   {}", state.config_dir.display()));
                lines.push("  config.toml: OK".to_string());
                lines.push(format!("  api_port:    {}", state.config.api_port));
                lines.push(format!("  log_level:   {}", state.config.log_level));
            }
            Err(e) => {
                lines.push(format!("  error: {}", e));
            }
        }

        // 2. Check daemon probes
        let base = ctx.client.base_url();
        let client = ctx.client.http_client();

        lines.push(String::new());
        lines.push(format!("Daemon ({}):", base));

        for probe in ["livez", "readyz"] {
            let status = match endpoint(base, &["_status", probe]) {
                Ok(url) => match client.get(url).send().await {
                    Ok(resp) if resp.status().is_success() => "OK".to_string(),
                    Ok(resp) => format!("UNHEALTHY ({})", resp.status()),
                    Err(_) => "NOT REACHABLE".to_string(),
                },
                Err(e) => format!("BAD URL ({})", e),
            };
            lines.push(format!("  {}: {}", probe, status));
        }

        // 3. Report stash contents
        if let Some(stats) = fetch_stats(ctx).await {
            lines.push(format!("  buckets: {}", stats.buckets));
            lines.push(format!("  values:  {}", stats.values));
        }

        Ok(lines.join("\n"))
    }
}

async fn fetch_stats(ctx: &crate::cli::op::OpContext) -> Option<StatsResponse> {
    let url = endpoint(ctx.client.base_url(), &["_status", "stats"]).ok()?;
    let resp = ctx.client.http_client().get(url).send().await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    let body = resp.text().await.ok()?;
    StatsResponse::from_body(&body).ok()
}
