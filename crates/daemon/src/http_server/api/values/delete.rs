use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use reqwest::{Client, RequestBuilder, Url};

use common::prelude::{BucketError, StashError};

use crate::http_server::api::client::{endpoint, ApiError, ApiRequest, Confirmation};
use crate::ServiceState;

#[derive(Debug, Clone, clap::Args)]
pub struct DeleteValueRequest {
    /// Bucket holding the value
    pub bucket: String,

    /// Key of the value to delete
    pub key: String,
}

pub async fn handler(
    State(state): State<ServiceState>,
    Path((bkey, vkey)): Path<(String, String)>,
) -> Result<impl IntoResponse, DeleteValueError> {
    state.stash().get(&bkey)?.delete(&vkey)?;
    tracing::debug!(bucket = %bkey, key = %vkey, "value deleted");

    Ok((
        http::StatusCode::OK,
        format!("Value {} has been deleted from bucket {}.", vkey, bkey),
    ))
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteValueError {
    #[error("{0}")]
    Stash(#[from] StashError),
    #[error("{0}")]
    Bucket(#[from] BucketError),
}

impl IntoResponse for DeleteValueError {
    fn into_response(self) -> Response {
        tracing::warn!("DELETE VALUE ERROR: {}", self);
        (http::StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

// Client implementation - builds request for this operation
impl ApiRequest for DeleteValueRequest {
    type Response = Confirmation;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError> {
        Ok(client.delete(endpoint(base_url, &["buckets", &self.bucket, &self.key])?))
    }
}
