use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use reqwest::{Client, RequestBuilder, Url};

use common::prelude::StashError;

use crate::http_server::api::client::{endpoint, ApiError, ApiRequest, Confirmation};
use crate::ServiceState;

#[derive(Debug, Clone, clap::Args)]
pub struct DeleteRequest {
    /// Name of the bucket to delete
    pub bucket: String,
}

pub async fn handler(
    State(state): State<ServiceState>,
    Path(bkey): Path<String>,
) -> Result<impl IntoResponse, DeleteError> {
    state.stash().delete(&bkey)?;
    tracing::info!(bucket = %bkey, "bucket deleted");

    Ok((
        http::StatusCode::OK,
        format!("Bucket {} has been deleted.", bkey),
    ))
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteError {
    #[error("{0}")]
    Stash(#[from] StashError),
}

impl IntoResponse for DeleteError {
    fn into_response(self) -> Response {
        tracing::warn!("DELETE BUCKET ERROR: {}", self);
        (http::StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

// Client implementation - builds request for this operation
impl ApiRequest for DeleteRequest {
    type Response = Confirmation;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError> {
        Ok(client.delete(endpoint(base_url, &["buckets", &self.bucket])?))
    }
}
