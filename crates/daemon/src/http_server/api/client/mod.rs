#[allow(clippy::module_inception)]
mod client;
mod error;

pub use client::ApiClient;
pub use error::ApiError;

use reqwest::{Client, RequestBuilder, Url};

use crate::http_server::StatsResponse;

pub trait ApiRequest {
    type Response: FromBody;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError>;
}

/// Decoding of a successful response body into the endpoint's response type.
pub trait FromBody: Sized {
    fn from_body(body: &str) -> Result<Self, ApiError>;
}

/// Plain-text confirmation returned by mutating endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation(pub String);

impl std::fmt::Display for Confirmation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromBody for Confirmation {
    fn from_body(body: &str) -> Result<Self, ApiError> {
        Ok(Confirmation(body.to_string()))
    }
}

macro_rules! json_body {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromBody for $ty {
                fn from_body(body: &str) -> Result<Self, ApiError> {
                    Ok(serde_json::from_str(body)?)
                }
            }
        )*
    };
}

json_body!(String, Vec<String>, StatsResponse);

/// Build an endpoint URL from path segments, percent-encoding each one.
pub fn endpoint(base_url: &Url, segments: &[&str]) -> Result<Url, ApiError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidBaseUrl(base_url.clone()))?
        .clear()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_segments() {
        let base = Url::parse("http://localhost:8000").unwrap();
        let url = endpoint(&base, &["buckets", "a b/c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/buckets/a%20b%2Fc");
    }

    #[test]
    fn test_endpoint_replaces_base_path() {
        let base = Url::parse("http://localhost:8000/ignored/").unwrap();
        let url = endpoint(&base, &["buckets"]).unwrap();
        assert_eq!(url.path(), "/buckets");
    }

    #[test]
    fn test_endpoint_rejects_opaque_base() {
        let base = Url::parse("mailto:someone@example.com").unwrap();
        assert!(matches!(
            endpoint(&base, &["buckets"]),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_confirmation_is_raw_text() {
        let body = "Bucket users has been added.";
        assert_eq!(Confirmation::from_body(body).unwrap().to_string(), body);
    }
}
