//! JSON HTTP client for the laboratory REST API.
//!
//! Every request carries `Content-Type: application/json` and, when the bound
//! credentials hold a token, `Authorization: Bearer <token>`. There is no
//! retry and no timeout policy: failures surface to the caller immediately.

mod error;
#[cfg(test)]
pub(crate) mod test_server;

pub use error::{ApiClientError, ApiResult};

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::ClientConfig;
use crate::system::auth::Credentials;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl ApiClient {
    /// Anonymous client for the configured API
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_url.clone(),
            credentials: Credentials::Anonymous,
        }
    }

    pub fn from_env() -> Self {
        Self::new(&ClientConfig::from_env())
    }

    /// Same client bound to other credentials
    pub fn with_credentials(&self, credentials: Credentials) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            credentials,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T>(&self, path: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send(Method::GET, path, None).await?;
        Self::parse(response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body).map_err(ApiClientError::Encode)?;
        let response = self.send(Method::POST, path, Some(body)).await?;
        Self::parse(response).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body).map_err(ApiClientError::Encode)?;
        let response = self.send(Method::PUT, path, Some(body)).await?;
        Self::parse(response).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body).map_err(ApiClientError::Encode)?;
        let response = self.send(Method::PATCH, path, Some(body)).await?;
        Self::parse(response).await
    }

    /// DELETE; any response body is ignored
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.send(Method::DELETE, path, None).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(header) = self.credentials.authorization_header() {
            builder = builder.header(AUTHORIZATION, header);
        }
        builder
    }

    async fn send(&self, method: Method, path: &str, body: Option<String>) -> ApiResult<Response> {
        log::debug!("{} {}", method, path);

        let mut builder = self.request(method.clone(), path);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            log::warn!("{} {} failed: {}", method, path, e);
            ApiClientError::Network(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error =
            ApiClientError::from_response(status.as_u16(), status.canonical_reason(), &body);
        log::warn!("{} {} -> {}", method, path, error);
        Err(error)
    }

    async fn parse<T>(response: Response) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let body = response.text().await.map_err(ApiClientError::Network)?;
        serde_json::from_str(&body).map_err(|e| {
            log::error!("Failed to parse API response: {}", e);
            ApiClientError::Decode(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::test_server::FakeBackend;
    use super::*;
    use serde_json::{json, Value};
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_anonymous_request_has_no_authorization() {
        let backend = FakeBackend::spawn().await;
        let api = backend.client(None);

        let _: Vec<Value> = api.get("/laboratories").await.unwrap();

        let request = backend.last_request().unwrap();
        assert_eq!(request.authorization, None);
        assert_eq!(request.content_type.as_deref(), Some("application/json"));
    }

    #[tokio::test]
    async fn test_bearer_header_is_exact() {
        let backend = FakeBackend::spawn().await;
        let api = backend.client(Some("tok-123"));

        let _: Value = api
            .post("/laboratories", &json!({"name": "Acme Dental"}))
            .await
            .unwrap();

        let request = backend.last_request().unwrap();
        assert_eq!(request.method, "POST");
        assert_eq!(request.authorization.as_deref(), Some("Bearer tok-123"));
        assert_eq!(request.content_type.as_deref(), Some("application/json"));
    }

    #[tokio::test]
    async fn test_rebinding_credentials_changes_header() {
        let backend = FakeBackend::spawn().await;
        let signed_in = backend.client(Some("first"));
        let signed_out = signed_in.with_credentials(Credentials::Anonymous);

        let _: Vec<Value> = signed_out.get("/laboratories").await.unwrap();
        assert_eq!(backend.last_request().unwrap().authorization, None);

        let _: Vec<Value> = signed_in.get("/laboratories").await.unwrap();
        assert_eq!(
            backend.last_request().unwrap().authorization.as_deref(),
            Some("Bearer first")
        );
    }

    #[tokio::test]
    async fn test_status_error_is_distinct_from_network_error() {
        let backend = FakeBackend::spawn().await;
        let api = backend.client(None);

        let err = api.get::<Value>("/laboratories/missing").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.message(), "resource not found");

        // Nothing listens on port 9 of localhost
        let offline = ApiClient::new(&ClientConfig::new("http://127.0.0.1:9"));
        let err = offline.get::<Value>("/laboratories").await.unwrap_err();
        assert!(matches!(err, ApiClientError::Network(_)));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_decode_error() {
        let backend = FakeBackend::spawn().await;
        let api = backend.client(None);

        // A list where a single object is expected
        let err = api
            .get::<HashMap<String, String>>("/laboratories")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiClientError::Decode(_)));
    }
}
