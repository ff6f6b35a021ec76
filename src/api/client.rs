use reqwest::{multipart::Form, Client, RequestBuilder};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::ApiConfig;
use crate::error::ApiError;

const TOKEN_KEYS: &[&str] = &["token", "accessToken", "access_token"];

/// Thin client over the CVKing REST API. Holds the bearer token once
/// `login` succeeds and attaches it to every later request.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// `POST /auth/login`. Stores and returns the token from the response.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<String, ApiError> {
        info!("Logging in as {}", email);
        let body = self
            .post_json("/auth/login", &json!({ "email": email, "password": password }))
            .await?;

        let token = find_string(&body, TOKEN_KEYS).ok_or(ApiError::MissingToken)?;
        debug!("Login succeeded, token length {}", token.len());
        self.token = Some(token.clone());
        Ok(token)
    }

    pub async fn create_application(&self, payload: &Value) -> Result<Value, ApiError> {
        self.post_json("/applications", payload).await
    }

    pub async fn create_job(&self, payload: &Value) -> Result<Value, ApiError> {
        self.post_json("/jobs", payload).await
    }

    pub async fn post_json(&self, path: &str, payload: &Value) -> Result<Value, ApiError> {
        let url = self.endpoint(path);
        debug!("POST {}", url);
        let request = self.authorized(self.http.post(&url).json(payload));
        self.send(request, &url).await
    }

    pub async fn post_multipart(&self, path: &str, form: Form) -> Result<Value, ApiError> {
        let url = self.endpoint(path);
        debug!("POST {} (multipart)", url);
        let request = self.authorized(self.http.post(&url).multipart(form));
        self.send(request, &url).await
    }

    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Value, ApiError> {
        let response = request.send().await.map_err(|e| {
            error!(url = %url, error = %e, "Request failed");
            ApiError::Request(e)
        })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            error!(url = %url, status = status.as_u16(), body = %text, "Request rejected");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

/// Looks up the first of `keys` holding a string, at the top level of `body`
/// or inside its `data` envelope.
pub fn find_string(body: &Value, keys: &[&str]) -> Option<String> {
    let scopes = [Some(body), body.get("data")];
    scopes
        .into_iter()
        .flatten()
        .flat_map(|scope| keys.iter().filter_map(move |key| scope.get(*key)))
        .find_map(|value| value.as_str().map(str::to_string))
}
