//! HTTP Content API client
//!
//! Implementation of `ContentApi` over JSON/HTTP.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use travel_core::{
    ApiConfig, ApiError, AppointmentRequest, BlogPost, BlogPostSummary, ContentApi, Hero,
    Result, Service,
};

/// Error body returned by the backend on non-2xx responses
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// `detail` is usually a string; validation failures send a list of
    /// `{loc, msg, type}` objects instead, in which case the first `msg` wins
    fn into_detail(self) -> Option<String> {
        match self.detail? {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Array(items) => items
                .first()
                .and_then(|item| item.get("msg"))
                .and_then(|msg| msg.as_str())
                .map(String::from),
            _ => None,
        }
    }
}

/// Content API client over HTTP
#[derive(Clone, Debug)]
pub struct HttpContentApi {
    client: Client,
    config: ApiConfig,
}

impl Default for HttpContentApi {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

impl HttpContentApi {
    /// Create from configuration
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Create with a preconfigured reqwest client
    pub const fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Build `{base_url}/{segments...}`, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL '{}': {}", self.config.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::Config(format!("base URL '{}' cannot carry a path", self.config.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.endpoint(segments)?;
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check_status(response)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Pass 2xx responses through, turn everything else into `ApiError::Status`
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = response
        .json::<ErrorBody>()
        .await
        .unwrap_or_default()
        .into_detail();

    Err(ApiError::Status {
        status: status.as_u16(),
        detail,
    })
}

#[async_trait(?Send)]
impl ContentApi for HttpContentApi {
    async fn hero(&self) -> Result<Hero> {
        self.get_json(&["api", "hero"]).await
    }

    async fn services(&self) -> Result<Vec<Service>> {
        self.get_json(&["api", "services"]).await
    }

    async fn blog_posts(&self) -> Result<Vec<BlogPostSummary>> {
        self.get_json(&["api", "blog"]).await
    }

    async fn blog_post(&self, slug: &str) -> Result<BlogPost> {
        self.get_json(&["api", "blog", slug]).await
    }

    async fn submit_appointment(&self, request: &AppointmentRequest) -> Result<()> {
        let url = self.endpoint(&["api", "appointments"])?;
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check_status(response).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_slug() {
        let api = HttpContentApi::new(ApiConfig::new("https://api.example.com/"));
        let url = api.endpoint(&["api", "blog", "a b/c"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/api/blog/a%20b%2Fc");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let api = HttpContentApi::new(ApiConfig::new("https://example.com/backend"));
        let url = api.endpoint(&["api", "hero"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/backend/api/hero");
    }

    #[test]
    fn test_invalid_base_url() {
        let api = HttpContentApi::new(ApiConfig::new("not a url"));
        assert!(matches!(api.endpoint(&["api"]), Err(ApiError::Config(_))));
    }

    #[test]
    fn test_error_body_detail_shapes() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "Invalid date"}"#).unwrap();
        assert_eq!(body.into_detail().as_deref(), Some("Invalid date"));

        let body: ErrorBody = serde_json::from_str(
            r#"{"detail": [{"loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error"}]}"#,
        )
        .unwrap();
        assert_eq!(
            body.into_detail().as_deref(),
            Some("value is not a valid email address")
        );

        let body: ErrorBody = serde_json::from_str(r#"{"error": "nope"}"#).unwrap();
        assert_eq!(body.into_detail(), None);
    }
}
