use axum::routing::get;
use axum::Router;

pub mod buckets;
pub mod client;
pub mod values;

use crate::ServiceState;

pub fn router(state: ServiceState) -> Router<ServiceState> {
    Router::new()
        .route(
            "/buckets",
            get(buckets::list::handler).post(buckets::create::handler),
        )
        .route(
            "/buckets/:bkey",
            get(buckets::get::handler)
                .post(buckets::add::handler)
                .delete(buckets::delete::handler),
        )
        .route(
            "/buckets/:bkey/:vkey",
            get(values::get::handler)
                .put(values::update::handler)
                .delete(values::delete::handler),
        )
        .with_state(state)
}
