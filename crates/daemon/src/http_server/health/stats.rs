use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::ServiceState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Number of registered buckets
    pub buckets: usize,
    /// Number of values held across all buckets
    pub values: usize,
}

#[tracing::instrument(skip(state))]
pub async fn handler(State(state): State<ServiceState>) -> Response {
    let buckets = state.stash().list_buckets();
    let values = buckets.iter().map(|(_, bucket)| bucket.len()).sum();

    let stats = StatsResponse {
        buckets: buckets.len(),
        values,
    };
    (StatusCode::OK, Json(stats)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_counts_buckets_and_values() {
        let state = ServiceState::default();
        let users = state.stash().add("users").unwrap();
        users.add("1", "alice").unwrap();
        users.add("2", "bob").unwrap();
        state.stash().add("empty").unwrap();

        let response = handler(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let stats: StatsResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            stats,
            StatsResponse {
                buckets: 2,
                values: 2
            }
        );
    }
}
