//! HTTP client for the Strapi REST API.

use std::time::Duration;

use reqwest::{Client, StatusCode, header};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};
use url::Url;

use crate::models::{Branch, Salesperson, StrapiResponse};

const SALES_PROFILES_PATH: &str = "/api/sales-profiles";
const BRANCHES_PATH: &str = "/api/branches";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Strapi client errors.
#[derive(Debug, thiserror::Error)]
pub enum StrapiError {
    #[error("Invalid Strapi URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Strapi returned {0}")]
    Status(StatusCode),
    #[error("Invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Strapi client configuration.
#[derive(Debug, Clone)]
pub struct StrapiConfig {
    /// API host, e.g. `https://cms.example.com` (no trailing slash).
    pub base_url: String,
    /// API token sent as a bearer credential.
    pub api_key: Option<SecretString>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl StrapiConfig {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<SecretString>) -> Self {
        self.api_key = api_key;
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self, path: &str) -> Result<Url, StrapiError> {
        Ok(Url::parse(&format!("{}{path}", self.base_url))?)
    }
}

/// Outcome of a salesperson lookup that reached the API.
#[derive(Debug, Clone)]
pub enum ProfileLookup {
    Found(Box<Salesperson>),
    NotFound,
}

impl ProfileLookup {
    #[must_use]
    pub fn into_option(self) -> Option<Salesperson> {
        match self {
            Self::Found(salesperson) => Some(*salesperson),
            Self::NotFound => None,
        }
    }
}

/// Strapi REST client.
#[derive(Clone)]
pub struct StrapiClient {
    client: Client,
    config: StrapiConfig,
}

impl std::fmt::Debug for StrapiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrapiClient")
            .field("base_url", &self.config.base_url)
            .field("authenticated", &self.config.api_key.is_some())
            .field("timeout", &self.config.timeout)
            .finish_non_exhaustive()
    }
}

impl StrapiClient {
    /// Create a new client.
    ///
    /// # Errors
    /// Returns `StrapiError::Client` if the HTTP client fails to build.
    pub fn new(config: StrapiConfig) -> Result<Self, StrapiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(StrapiError::Client)?;

        Ok(Self { client, config })
    }

    /// Look up a salesperson by `sales_uid`, with all relations populated.
    ///
    /// # Errors
    /// Returns a `StrapiError` if the request fails, the API answers with a
    /// non-success status, or the body cannot be decoded.
    #[instrument(skip(self))]
    pub async fn find_salesperson(&self, uid: &str) -> Result<ProfileLookup, StrapiError> {
        let mut url = self.config.endpoint(SALES_PROFILES_PATH)?;
        url.query_pairs_mut()
            .append_pair("filters[sales_uid][$eq]", uid)
            .append_pair("populate", "*");

        let response: StrapiResponse<Salesperson> = self.get(url).await?;

        Ok(response
            .data
            .into_iter()
            .next()
            .map_or(ProfileLookup::NotFound, |salesperson| {
                ProfileLookup::Found(Box::new(salesperson))
            }))
    }

    /// List all branches.
    ///
    /// # Errors
    /// Same conditions as [`Self::find_salesperson`].
    #[instrument(skip(self))]
    pub async fn list_branches(&self) -> Result<Vec<Branch>, StrapiError> {
        let url = self.config.endpoint(BRANCHES_PATH)?;
        let response: StrapiResponse<Branch> = self.get(url).await?;
        Ok(response.data)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<StrapiResponse<T>, StrapiError> {
        debug!(path = url.path(), "Fetching from Strapi");

        let mut request = self
            .client
            .get(url)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key.expose_secret());
        }

        let response = request.send().await.map_err(StrapiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            error!(%status, "Strapi API error");
            return Err(StrapiError::Status(status));
        }

        response.json().await.map_err(StrapiError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::extract::Query;
    use axum::http::HeaderMap;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{Value, json};

    use super::*;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn sales_profiles(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
        assert_eq!(params.get("populate").map(String::as_str), Some("*"));

        let data = match params.get("filters[sales_uid][$eq]").map(String::as_str) {
            Some("SALES-1") => json!([{ "sales_uid": "SALES-1", "surename": "Ujang", "wanumber": "0812" }]),
            _ => json!([]),
        };
        Json(json!({ "data": data, "meta": {} }))
    }

    async fn echo_auth(headers: HeaderMap) -> Json<Value> {
        let auth = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        Json(json!({ "data": [{ "name": auth }] }))
    }

    fn client(base_url: &str) -> StrapiClient {
        StrapiClient::new(StrapiConfig::new(base_url)).unwrap()
    }

    #[tokio::test]
    async fn finds_salesperson_by_uid() {
        let base = serve(Router::new().route("/api/sales-profiles", get(sales_profiles))).await;

        let lookup = client(&base).find_salesperson("SALES-1").await.unwrap();
        match lookup {
            ProfileLookup::Found(salesperson) => {
                assert_eq!(salesperson.surename, "Ujang");
                assert_eq!(salesperson.wanumber, "0812");
            }
            ProfileLookup::NotFound => panic!("expected a salesperson"),
        }
    }

    #[tokio::test]
    async fn empty_result_is_not_found() {
        let base = serve(Router::new().route("/api/sales-profiles", get(sales_profiles))).await;

        let lookup = client(&base).find_salesperson("SALES-404").await.unwrap();
        assert!(matches!(lookup, ProfileLookup::NotFound));
    }

    #[tokio::test]
    async fn uid_is_url_encoded() {
        let base = serve(Router::new().route("/api/sales-profiles", get(sales_profiles))).await;

        let lookup = client(&base)
            .find_salesperson("SALES-1&populate=evil")
            .await
            .unwrap();
        assert!(matches!(lookup, ProfileLookup::NotFound));
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let router = Router::new().route(
            "/api/sales-profiles",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = serve(router).await;

        let err = client(&base).find_salesperson("SALES-1").await.unwrap_err();
        assert!(matches!(err, StrapiError::Status(StatusCode::INTERNAL_SERVER_ERROR)));
    }

    #[tokio::test]
    async fn invalid_body_is_decode_error() {
        let router = Router::new().route("/api/sales-profiles", get(|| async { "not json" }));
        let base = serve(router).await;

        let err = client(&base).find_salesperson("SALES-1").await.unwrap_err();
        assert!(matches!(err, StrapiError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{addr}"))
            .find_salesperson("SALES-1")
            .await
            .unwrap_err();
        assert!(matches!(err, StrapiError::Transport(_)));
    }

    #[tokio::test]
    async fn sends_bearer_token_when_configured() {
        let base = serve(Router::new().route("/api/branches", get(echo_auth))).await;

        let config = StrapiConfig::new(&base).with_api_key(Some(SecretString::from("token-123")));
        let branches = StrapiClient::new(config).unwrap().list_branches().await.unwrap();
        assert_eq!(branches[0].name, "Bearer token-123");

        let branches = client(&base).list_branches().await.unwrap();
        assert_eq!(branches[0].name, "");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let config = StrapiConfig::new("not a url");
        assert!(matches!(
            config.endpoint(BRANCHES_PATH),
            Err(StrapiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn debug_hides_api_key() {
        let config = StrapiConfig::new("http://localhost:1337/")
            .with_api_key(Some(SecretString::from("super-secret")));
        let client = StrapiClient::new(config).unwrap();

        let debug = format!("{client:?}");
        assert!(debug.contains("http://localhost:1337"));
        assert!(!debug.contains("super-secret"));
    }
}
