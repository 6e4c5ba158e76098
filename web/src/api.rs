//! HTTP client for the ShopSafe backend.
//!
//! Every call is single-shot: one request, one result, no retries and no
//! caching. Request builders are public so the exact outbound request can be
//! inspected without sending it.

use leptos::logging::{log, warn};
use reqwest::{Client, RequestBuilder};
use shared_types::{CheckIn, LocationResult};
use thiserror::Error;

use crate::{config::ApiConfig, routes::LocationQuery};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Request(err.to_string())
    }
}

/// Returned once the backend has accepted a check-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckInAck {
    pub store_id: String,
}

/// The backend operations the views depend on.
#[allow(async_fn_in_trait)]
pub trait StoreApi {
    async fn submit_check_in(&self, check_in: &CheckIn) -> Result<CheckInAck, ApiError>;

    async fn fetch_nearby_stores(&self, query: &LocationQuery)
        -> Result<LocationResult, ApiError>;
}

#[derive(Clone, Debug)]
pub struct ApiService {
    client: Client,
    config: ApiConfig,
}

impl ApiService {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// `POST /checkin` with the five check-in fields as a form body.
    pub fn check_in_request(&self, check_in: &CheckIn) -> RequestBuilder {
        self.client
            .post(self.config.endpoint("checkin"))
            .form(&check_in.form_params())
    }

    /// `GET /stores?location=..&latlng=..`
    pub fn nearby_stores_request(&self, query: &LocationQuery) -> RequestBuilder {
        let latlng = if query.latlng { "true" } else { "false" };
        self.client
            .get(self.config.endpoint("stores"))
            .query(&[("location", query.location.as_str()), ("latlng", latlng)])
    }

    async fn send(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        check_status(status, body)
    }
}

impl Default for ApiService {
    fn default() -> Self {
        Self::new(ApiConfig::from_build_env())
    }
}

impl StoreApi for ApiService {
    async fn submit_check_in(&self, check_in: &CheckIn) -> Result<CheckInAck, ApiError> {
        self.send(self.check_in_request(check_in))
            .await
            .inspect_err(|err| warn!("check-in for store {} failed: {err}", check_in.store_id))?;

        log!("added new check-in for store {}", check_in.store_id);
        Ok(CheckInAck {
            store_id: check_in.store_id.clone(),
        })
    }

    async fn fetch_nearby_stores(
        &self,
        query: &LocationQuery,
    ) -> Result<LocationResult, ApiError> {
        let body = self.send(self.nearby_stores_request(query)).await?;
        decode_location_result(&body)
    }
}

/// Non-2xx responses carry a plain-text reason from the backend.
fn check_status(status: u16, body: String) -> Result<String, ApiError> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ApiError::Status {
            status,
            message: body.trim().to_string(),
        })
    }
}

pub fn decode_location_result(body: &str) -> Result<LocationResult, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::{header::CONTENT_TYPE, Method};

    fn service() -> ApiService {
        ApiService::new(ApiConfig::new("http://localhost:8080/"))
    }

    fn body_text(request: &reqwest::Request) -> String {
        let bytes = request
            .body()
            .and_then(|body| body.as_bytes())
            .expect("request should have an in-memory body");
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn check_in_request_posts_exactly_five_form_fields() {
        let check_in = CheckIn {
            store_id: "ChIJ123".to_string(),
            busy: 3.0,
            line: 4.0,
            hygiene: 7.5,
            mask: 10.0,
        };
        let request = service().check_in_request(&check_in).build().unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().as_str(), "http://localhost:8080/checkin");
        assert_eq!(
            request.headers()[CONTENT_TYPE],
            "application/x-www-form-urlencoded"
        );
        assert_eq!(
            body_text(&request),
            "storeId=ChIJ123&busy=3&line=4&hygiene=7.5&mask=10"
        );
    }

    #[test]
    fn nearby_stores_request_carries_location_and_flag() {
        let request = service()
            .nearby_stores_request(&LocationQuery::new("Seattle", false))
            .build()
            .unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8080/stores?location=Seattle&latlng=false"
        );
        assert!(request.body().is_none());
    }

    #[test]
    fn nearby_stores_request_encodes_coordinates() {
        let request = service()
            .nearby_stores_request(&LocationQuery::new("47.6,-122.3", true))
            .build()
            .unwrap();
        let pairs: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("location".to_string(), "47.6,-122.3".to_string()),
                ("latlng".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn error_status_keeps_backend_message() {
        assert_eq!(
            check_status(400, "Failed to find the location of: Atlantis\n".to_string()),
            Err(ApiError::Status {
                status: 400,
                message: "Failed to find the location of: Atlantis".to_string(),
            })
        );
        assert_eq!(check_status(204, String::new()), Ok(String::new()));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = decode_location_result(r#"{"stores": "nope"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn well_formed_body_decodes() {
        let result =
            decode_location_result(r#"{"stores": [], "countyStats": []}"#).unwrap();
        assert!(result.stores.is_empty());
        assert!(result.county_stats.is_empty());
    }

    #[test]
    fn errors_render_their_message() {
        let err = ApiError::Status {
            status: 400,
            message: "Failed to get api key.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "server responded with 400: Failed to get api key."
        );
    }
}
