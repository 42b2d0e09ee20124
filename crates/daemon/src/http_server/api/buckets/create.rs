use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::response::{IntoResponse, Response};
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use common::prelude::StashError;

use crate::http_server::api::client::{endpoint, ApiError, ApiRequest, Confirmation};
use crate::ServiceState;

#[derive(Debug, Clone, Default, Serialize, Deserialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRequest {
    /// Name of the bucket to create
    #[serde(default)]
    pub key: String,
}

pub async fn handler(
    State(state): State<ServiceState>,
    payload: Result<Json<CreateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CreateError> {
    let Json(req) = payload.map_err(|e| CreateError::InvalidPayload(e.body_text()))?;

    if req.key.is_empty() {
        return Err(CreateError::InvalidPayload("Empty bucket key.".into()));
    }

    state.stash().add(req.key.as_str())?;
    tracing::info!(bucket = %req.key, "bucket created");

    Ok((
        http::StatusCode::OK,
        format!("Bucket {} has been added.", req.key),
    ))
}

#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    #[error("Invalid posted payload: {0}")]
    InvalidPayload(String),
    #[error("{0}")]
    Stash(#[from] StashError),
}

impl IntoResponse for CreateError {
    fn into_response(self) -> Response {
        tracing::warn!("CREATE BUCKET ERROR: {}", self);
        (http::StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

// Client implementation - builds request for this operation
impl ApiRequest for CreateRequest {
    type Response = Confirmation;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError> {
        Ok(client.post(endpoint(base_url, &["buckets"])?).json(&self))
    }
}
