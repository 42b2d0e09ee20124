use axum::extract::{Json, State};
use axum::response::IntoResponse;
use reqwest::{Client, RequestBuilder, Url};

use crate::http_server::api::client::{endpoint, ApiError, ApiRequest};
use crate::ServiceState;

#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListRequest;

pub async fn handler(State(state): State<ServiceState>) -> impl IntoResponse {
    let names = state.stash().list_names();
    tracing::debug!(count = names.len(), "listing buckets");
    (http::StatusCode::OK, Json(names))
}

// Client implementation - builds request for this operation
impl ApiRequest for ListRequest {
    type Response = Vec<String>;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError> {
        Ok(client.get(endpoint(base_url, &["buckets"])?))
    }
}
