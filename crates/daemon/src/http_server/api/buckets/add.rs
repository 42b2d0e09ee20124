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
pub struct AddRequest {
    /// Bucket to append to (taken from the path, not the body)
    #[serde(skip)]
    pub bucket: String,

    /// Key of the new value
    #[serde(default)]
    pub key: String,

    /// The value to store
    #[serde(default)]
    pub value: String,
}

pub async fn handler(
    State(state): State<ServiceState>,
    Path(bkey): Path<String>,
    payload: Result<Json<AddRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AddError> {
    let Json(req) = payload.map_err(|e| AddError::InvalidPayload(e.body_text()))?;
    let bucket = state.stash().get(&bkey)?;

    if req.key.is_empty() {
        return Err(AddError::InvalidPayload("Empty value key.".into()));
    }
    if req.value.is_empty() {
        return Err(AddError::InvalidPayload("Empty value.".into()));
    }

    bucket.add(req.key.as_str(), req.value)?;
    tracing::debug!(bucket = %bkey, key = %req.key, "value added");

    Ok((
        http::StatusCode::OK,
        format!("Value {} has been added to bucket {}.", req.key, bkey),
    ))
}

#[derive(Debug, thiserror::Error)]
pub enum AddError {
    #[error("Invalid posted payload: {0}")]
    InvalidPayload(String),
    #[error("{0}")]
    Stash(#[from] StashError),
    #[error("{0}")]
    Bucket(#[from] BucketError),
}

impl IntoResponse for AddError {
    fn into_response(self) -> Response {
        tracing::warn!("ADD VALUE ERROR: {}", self);
        (http::StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

// Client implementation - builds request for this operation
impl ApiRequest for AddRequest {
    type Response = Confirmation;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError> {
        let url = endpoint(base_url, &["buckets", &self.bucket])?;
        Ok(client.post(url).json(&self))
    }
}
