//! HTTP client for the Lexdoc document backend.
//!
//! Provides a client bound to one [`Session`] (bearer-token auth applied
//! centrally), generic GET/multipart/DELETE helpers, and the `DocumentApi`
//! implementation in [`api`]. The services layer and CLI use this client
//! directly.

pub mod api;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use lexdoc_core::{AppError, Session};

/// API path prefix for the document endpoints.
pub fn documents_prefix() -> &'static str {
    "/api/documents"
}

/// HTTP client for the document backend, authenticated as one session.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    session: Session,
}

impl ApiClient {
    pub fn new(session: Session) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, session })
    }

    /// Create a client from environment variables (see [`Session::from_env`]).
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Session::from_env()?)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.session.api_base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.session.api_base_url, path)
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.header("Authorization", format!("Bearer {}", self.session.token))
    }

    /// Turn a non-success response into the matching `AppError`, consuming
    /// the body for 400-class detail messages.
    async fn error_for_response(
        response: reqwest::Response,
        action: &str,
        resource: &str,
    ) -> AppError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        AppError::from_status(status, action, resource, body)
    }

    /// GET request, deserializing a JSON response.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        action: &str,
        resource: &str,
    ) -> Result<T, AppError> {
        let url = self.build_url(path);
        let request = self.apply_auth(self.client.get(&url));

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::error_for_response(response, action, resource).await);
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Network(format!("Failed to parse response as JSON: {}", e)))
    }

    /// POST a multipart form, deserializing a JSON response.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
        action: &str,
        resource: &str,
    ) -> Result<T, AppError> {
        let url = self.build_url(path);
        let request = self.apply_auth(self.client.post(&url).multipart(form));

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::error_for_response(response, action, resource).await);
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Network(format!("Failed to parse response as JSON: {}", e)))
    }

    /// GET raw bytes plus the declared content type.
    pub(crate) async fn get_bytes(
        &self,
        path: &str,
        action: &str,
        resource: &str,
    ) -> Result<(bytes::Bytes, Option<String>), AppError> {
        let url = self.build_url(path);
        let request = self.apply_auth(self.client.get(&url));

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::error_for_response(response, action, resource).await);
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response body: {}", e)))?;

        Ok((bytes, content_type))
    }

    /// DELETE request. Returns Ok(()) on success.
    pub(crate) async fn delete_path(
        &self,
        path: &str,
        action: &str,
        resource: &str,
    ) -> Result<(), AppError> {
        let url = self.build_url(path);
        let request = self.apply_auth(self.client.delete(&url));

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::error_for_response(response, action, resource).await);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexdoc_core::models::Role;

    fn session() -> Session {
        Session::new(
            "http://localhost:8080/".to_string(),
            "token-123".to_string(),
            42,
            "Jane Doe".to_string(),
            Role::Client,
        )
    }

    #[test]
    fn build_url_joins_base_and_path() {
        let client = ApiClient::new(session()).unwrap();
        assert_eq!(
            client.build_url("/api/documents/case/7"),
            "http://localhost:8080/api/documents/case/7"
        );
    }

    #[test]
    fn session_is_accessible() {
        let client = ApiClient::new(session()).unwrap();
        assert_eq!(client.session().user_id, 42);
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
