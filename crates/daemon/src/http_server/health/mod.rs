use axum::routing::get;
use axum::Router;

mod data_source;
mod liveness;
mod readiness;
mod stats;
mod version;

pub use stats::StatsResponse;

use crate::ServiceState;

pub fn router(state: ServiceState) -> Router<ServiceState> {
    Router::new()
        .route("/livez", get(liveness::handler))
        .route("/readyz", get(readiness::handler))
        .route("/version", get(version::handler))
        .route("/stats", get(stats::handler))
        .with_state(state)
}
