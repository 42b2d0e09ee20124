use axum::extract::{Json, Path, State};
use axum::response::{IntoResponse, Response};
use reqwest::{Client, RequestBuilder, Url};

use common::prelude::{BucketError, StashError};

use crate::http_server::api::client::{endpoint, ApiError, ApiRequest};
use crate::ServiceState;

#[derive(Debug, Clone, clap::Args)]
pub struct GetValueRequest {
    /// Bucket holding the value
    pub bucket: String,

    /// Key of the value to fetch
    pub key: String,
}

pub async fn handler(
    State(state): State<ServiceState>,
    Path((bkey, vkey)): Path<(String, String)>,
) -> Result<impl IntoResponse, GetValueError> {
    let value = state.stash().get(&bkey)?.get(&vkey)?;
    Ok((http::StatusCode::OK, Json(value)))
}

#[derive(Debug, thiserror::Error)]
pub enum GetValueError {
    #[error("{0}")]
    Stash(#[from] StashError),
    #[error("{0}")]
    Bucket(#[from] BucketError),
}

impl IntoResponse for GetValueError {
    fn into_response(self) -> Response {
        tracing::warn!("GET VALUE ERROR: {}", self);
        (http::StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

// Client implementation - builds request for this operation
impl ApiRequest for GetValueRequest {
    type Response = String;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError> {
        Ok(client.get(endpoint(base_url, &["buckets", &self.bucket, &self.key])?))
    }
}
