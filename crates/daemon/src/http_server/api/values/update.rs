use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::response::{IntoResponse, Response};
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use common::prelude::{BucketError, StashError};

use crate::http_server::api::client::{endpoint, ApiError, ApiRequest, Confirmation};
use crate::ServiceState;

#[derive(Debug, Clone, Default, Serialize, Deserialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateRequest {
    /// Bucket holding the value (taken from the path)
    #[serde(skip)]
    pub bucket: String,

    /// Key of the value to overwrite (taken from the path)
    #[serde(skip)]
    pub key: String,

    /// The replacement value
    #[serde(default)]
    pub value: String,
}

pub async fn handler(
    State(state): State<ServiceState>,
    Path((bkey, vkey)): Path<(String, String)>,
    payload: Result<Json<UpdateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, UpdateError> {
    let Json(req) = payload.map_err(|e| UpdateError::InvalidPayload(e.body_text()))?;
    let bucket = state.stash().get(&bkey)?;

    if req.value.is_empty() {
        return Err(UpdateError::InvalidPayload("Empty value.".into()));
    }

    bucket.update(&vkey, req.value)?;
    tracing::debug!(bucket = %bkey, key = %vkey, "value updated");

    Ok((
        http::StatusCode::OK,
        format!("Value {} in bucket {} has been updated.", vkey, bkey),
    ))
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    #[error("Invalid posted payload: {0}")]
    InvalidPayload(String),
    #[error("{0}")]
    Stash(#[from] StashError),
    #[error("{0}")]
    Bucket(#[from] BucketError),
}

impl IntoResponse for UpdateError {
    fn into_response(self) -> Response {
        tracing::warn!("UPDATE VALUE ERROR: {}", self);
        (http::StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

// Client implementation - builds request for this operation
impl ApiRequest for UpdateRequest {
    type Response = Confirmation;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError> {
        let url = endpoint(base_url, &["buckets", &self.bucket, &self.key])?;
        Ok(client.put(url).json(&self))
    }
}
