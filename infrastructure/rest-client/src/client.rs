use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use business::domain::session::model::SessionToken;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Query parameters appended to a request URL.
pub type Query<'a> = &'a [(&'a str, String)];

/// Shared HTTP client for the Foodee backend.
///
/// The session token is passed on every call; an absent token just means no
/// `Authorization` header is sent.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::from_transport)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, token: Option<&SessionToken>, path: &str) -> Result<Value, ApiError> {
        self.send::<()>(Method::GET, token, path, &[], None).await
    }

    pub async fn get_with_query(
        &self,
        token: Option<&SessionToken>,
        path: &str,
        query: Query<'_>,
    ) -> Result<Value, ApiError> {
        self.send::<()>(Method::GET, token, path, query, None).await
    }

    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        token: Option<&SessionToken>,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        self.send(Method::POST, token, path, &[], Some(body)).await
    }

    pub async fn post_query(
        &self,
        token: Option<&SessionToken>,
        path: &str,
        query: Query<'_>,
    ) -> Result<Value, ApiError> {
        self.send::<()>(Method::POST, token, path, query, None).await
    }

    pub async fn put_json<B: Serialize + ?Sized>(
        &self,
        token: Option<&SessionToken>,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        self.send(Method::PUT, token, path, &[], Some(body)).await
    }

    pub async fn put_query(
        &self,
        token: Option<&SessionToken>,
        path: &str,
        query: Query<'_>,
    ) -> Result<Value, ApiError> {
        self.send::<()>(Method::PUT, token, path, query, None).await
    }

    pub async fn delete(
        &self,
        token: Option<&SessionToken>,
        path: &str,
    ) -> Result<Value, ApiError> {
        self.send::<()>(Method::DELETE, token, path, &[], None).await
    }

    pub async fn delete_query(
        &self,
        token: Option<&SessionToken>,
        path: &str,
        query: Query<'_>,
    ) -> Result<Value, ApiError> {
        self.send::<()>(Method::DELETE, token, path, query, None).await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        token: Option<&SessionToken>,
        path: &str,
        query: Query<'_>,
        body: Option<&B>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "Sending request");

        let mut request = self.client.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, token.bearer());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|err| {
            let err = ApiError::from_transport(err);
            warn!(%method, %url, "Request failed: {}", err);
            err
        })?;

        let status = response.status();
        let text = response.text().await.map_err(ApiError::from_transport)?;

        if !status.is_success() {
            let err = ApiError::from_response(status.as_u16(), &text);
            warn!(%method, %url, status = status.as_u16(), "Request rejected: {}", err);
            return Err(err);
        }

        Ok(parse_body(&text))
    }
}

/// Empty bodies become `Null`; bodies that are not JSON are kept as text.
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
