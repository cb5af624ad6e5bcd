// src/api/http.rs — reqwest implementation of the API gateway
//
// Attaches `Authorization: Token <credential>` to every request except the
// two that establish the credential (login, register); the exemption is
// matched on the endpoint path, never on call ordering.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, multipart, Method, StatusCode};
use url::Url;

use super::{
    ApiGateway, DatasetFile, RegisteredUser, Summary, UploadReceipt, HISTORY_LIMIT,
};
use crate::auth::CredentialStore;
use crate::infra::config::Config;
use crate::infra::errors::ChemvizError;

pub struct HttpGateway {
    base_url: Url,
    client: reqwest::Client,
    credentials: Arc<CredentialStore>,
}

/// Whether a request to this endpoint carries the stored credential. Login
/// and register must never send a stale or absent credential's header.
fn requires_auth(path: &str) -> bool {
    !(path.contains("login") || path.contains("register"))
}

/// First field-level message out of a DRF-style `{field: [messages]}` error
/// body.
fn first_field_error(body: &serde_json::Value) -> Option<String> {
    let obj = body.as_object()?;
    let (_, value) = obj.iter().next()?;
    match value {
        serde_json::Value::Array(messages) => messages
            .first()
            .and_then(|m| m.as_str())
            .map(str::to_string),
        serde_json::Value::String(message) => Some(message.clone()),
        _ => None,
    }
}

/// Message out of an `{"error": "..."}` body, the backend's rejection shape.
fn error_message(body: &serde_json::Value) -> Option<String> {
    body.get("error").and_then(|v| v.as_str()).map(str::to_string)
}

impl HttpGateway {
    pub fn new(config: &Config, credentials: Arc<CredentialStore>) -> Result<Self, ChemvizError> {
        // Url::join treats a base without a trailing slash as a file and
        // would drop the /api segment.
        let mut raw = config.server.base_url.clone();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base_url = Url::parse(&raw)
            .map_err(|e| ChemvizError::Config(format!("invalid base_url '{raw}': {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.server.timeout_seconds))
            .build()
            .map_err(|e| ChemvizError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url,
            client,
            credentials,
        })
    }

    fn request(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder, ChemvizError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| ChemvizError::Config(format!("invalid endpoint '{path}': {e}")))?;

        let mut builder = self.client.request(method, url);
        if requires_auth(path) {
            if let Some(token) = self.credentials.get() {
                builder = builder.header(header::AUTHORIZATION, format!("Token {token}"));
            }
        }
        Ok(builder)
    }

    fn transport(e: reqwest::Error) -> ChemvizError {
        ChemvizError::api(e.status().map(|s| s.as_u16()), e.to_string())
    }
}

#[async_trait]
impl ApiGateway for HttpGateway {
    async fn authenticate(&self, username: &str, password: &str) -> Result<String, ChemvizError> {
        let response = self
            .request(Method::POST, "login/")?
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .map_err(|e| ChemvizError::auth(format!("login request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ChemvizError::auth("invalid username or password"));
        }

        #[derive(serde::Deserialize)]
        struct TokenResponse {
            token: String,
        }
        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| ChemvizError::auth(format!("malformed login response: {e}")))?;

        self.credentials.set(&body.token)?;
        tracing::debug!("credential stored after login");
        Ok(body.token)
    }

    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisteredUser, ChemvizError> {
        let response = self
            .request(Method::POST, "register/")?
            .json(&serde_json::json!({
                "username": username,
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .map_err(|e| ChemvizError::validation(format!("register request failed: {e}")))?;

        if !response.status().is_success() {
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            let message = first_field_error(&body)
                .unwrap_or_else(|| "registration failed, please try again".to_string());
            return Err(ChemvizError::validation(message));
        }

        response
            .json()
            .await
            .map_err(|e| ChemvizError::validation(format!("malformed register response: {e}")))
    }

    async fn upload_dataset(&self, file: DatasetFile) -> Result<UploadReceipt, ChemvizError> {
        if !file.is_csv() {
            return Err(ChemvizError::upload("only .csv files are supported"));
        }

        let mut part = multipart::Part::bytes(file.bytes).file_name(file.filename.clone());
        if let Some(content_type) = &file.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|e| ChemvizError::upload(format!("bad content type: {e}")))?;
        }
        let form = multipart::Form::new().part("file", part);

        let response = self
            .request(Method::POST, "upload/")?
            .multipart(form)
            .send()
            .await
            .map_err(|e| ChemvizError::upload(format!("upload request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            let message = error_message(&body).unwrap_or_else(|| format!("server returned {status}"));
            return Err(ChemvizError::upload(message));
        }

        response
            .json()
            .await
            .map_err(|e| ChemvizError::upload(format!("malformed upload response: {e}")))
    }

    async fn fetch_summary(&self) -> Result<Option<Summary>, ChemvizError> {
        let response = self
            .request(Method::GET, "summary/")?
            .send()
            .await
            .map_err(Self::transport)?;

        // No dataset uploaded yet: a valid first-use state, not a fault.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            return Err(ChemvizError::api(
                Some(status.as_u16()),
                format!("summary fetch returned {status}"),
            ));
        }

        let summary: Summary = response.json().await.map_err(Self::transport)?;
        Ok(Some(summary))
    }

    async fn fetch_history(&self) -> Result<Vec<Summary>, ChemvizError> {
        let response = self
            .request(Method::GET, "history/")?
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(ChemvizError::api(
                Some(status.as_u16()),
                format!("history fetch returned {status}"),
            ));
        }

        let mut entries: Vec<Summary> = response.json().await.map_err(Self::transport)?;
        entries.truncate(HISTORY_LIMIT);
        Ok(entries)
    }

    async fn fetch_report(&self, id: i64) -> Result<Vec<u8>, ChemvizError> {
        let response = self
            .request(Method::GET, &format!("report/{id}/"))?
            .send()
            .await
            .map_err(Self::transport)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ChemvizError::NotFound);
        }
        if !response.status().is_success() {
            let status = response.status();
            return Err(ChemvizError::api(
                Some(status.as_u16()),
                format!("report fetch returned {status}"),
            ));
        }

        let bytes = response.bytes().await.map_err(Self::transport)?;
        Ok(bytes.to_vec())
    }
}
