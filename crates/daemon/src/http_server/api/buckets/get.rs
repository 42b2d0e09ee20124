use axum::extract::rejection::QueryRejection;
use axum::extract::{Json, Path, Query, State};
use axum::response::{IntoResponse, Response};
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};

use common::prelude::{Bucket, BucketError, StashError};

use crate::http_server::api::client::{endpoint, ApiError, ApiRequest};
use crate::ServiceState;

/// Optional positional slice of a bucket, `[start, stop)`.
///
/// A missing or empty `start` means 0; a missing, empty or zero `stop`
///  means the end.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize, clap::Args)]
pub struct RangeQuery {
    /// First position to include
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[arg(long)]
    pub start: Option<i64>,

    /// Position to stop before (0 = end of bucket)
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[arg(long)]
    pub stop: Option<i64>,
}

impl RangeQuery {
    fn is_empty(&self) -> bool {
        self.start.is_none() && self.stop.is_none()
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct GetRequest {
    /// Name of the bucket to read
    pub bucket: String,

    #[command(flatten)]
    pub range: RangeQuery,
}

pub async fn handler(
    State(state): State<ServiceState>,
    Path(bkey): Path<String>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> Result<impl IntoResponse, GetError> {
    let Query(range) = query.map_err(|e| GetError::InvalidPayload(e.body_text()))?;
    let bucket = state.stash().get(&bkey)?;

    let values = if range.is_empty() {
        read_all(&bucket)?
    } else {
        bucket.range(range.start.unwrap_or(0), range.stop.unwrap_or(0))?
    };

    Ok((http::StatusCode::OK, Json(values)))
}

/// Every value in the bucket, failing with `Gone` if the bucket was deleted
///  while this request held it.
fn read_all(bucket: &Bucket) -> Result<Vec<String>, BucketError> {
    let values = bucket.get_all();
    // retirement is one-way, so checking after the read is enough
    if bucket.is_retired() {
        return Err(BucketError::Gone);
    }
    Ok(values)
}

#[derive(Debug, thiserror::Error)]
pub enum GetError {
    #[error("Invalid query: {0}")]
    InvalidPayload(String),
    #[error("{0}")]
    Stash(#[from] StashError),
    #[error("{0}")]
    Bucket(#[from] BucketError),
}

impl IntoResponse for GetError {
    fn into_response(self) -> Response {
        tracing::warn!("GET BUCKET ERROR: {}", self);
        (http::StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

// Client implementation - builds request for this operation
impl ApiRequest for GetRequest {
    type Response = Vec<String>;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError> {
        let url = endpoint(base_url, &["buckets", &self.bucket])?;
        Ok(client.get(url).query(&self.range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_all_live_bucket() {
        let state = ServiceState::default();
        let bucket = state.stash().add("users").unwrap();
        bucket.add("1", "alice").unwrap();

        assert_eq!(read_all(&bucket).unwrap(), vec!["alice"]);
    }

    #[test]
    fn test_read_all_after_delete_is_gone() {
        let state = ServiceState::default();
        let bucket = state.stash().add("users").unwrap();
        bucket.add("1", "alice").unwrap();

        state.stash().delete("users").unwrap();

        assert_eq!(read_all(&bucket), Err(BucketError::Gone));
        assert_eq!(bucket.range(0, 0), Err(BucketError::Gone));
    }

    #[test]
    fn test_empty_params_deserialize_as_absent() {
        let range: RangeQuery = parse_query("start=&stop=");
        assert!(range.is_empty());

        let range: RangeQuery = parse_query("start=1&stop=");
        assert_eq!(range.start, Some(1));
        assert_eq!(range.stop, None);
    }

    fn parse_query(query: &str) -> RangeQuery {
        let uri: http::Uri = format!("/buckets/x?{}", query).parse().unwrap();
        Query::<RangeQuery>::try_from_uri(&uri).unwrap().0
    }
}
