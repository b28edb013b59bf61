//! Authenticated JSON request plumbing.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ClientError};
use crate::token::TokenSource;

/// JSON HTTP client that attaches the current bearer credential.
pub struct HttpClient {
    base_url: String,
    inner: reqwest::Client,
    tokens: Arc<dyn TokenSource>,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenSource>) -> Self {
        Self {
            base_url: base_url.into(),
            inner: reqwest::Client::new(),
            tokens,
        }
    }

    /// Join `path` onto the base URL; absolute URLs pass through untouched.
    fn url(&self, path: &str) -> String {
        if path.starts_with("http") {
            return path.to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request(Method::GET, path, &[], None::<&()>).await
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        self.request(Method::GET, path, query, None::<&()>).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.request(Method::PUT, path, &[], Some(body)).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.request(Method::PATCH, path, &[], Some(body)).await
    }

    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<T, ClientError> {
        let mut builder = self.inner.request(method, self.url(path));
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(token) = self.tokens.token() {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(error_from_response(status, response).await.into());
        }
        Ok(response.json().await?)
    }
}

async fn error_from_response(status: StatusCode, response: reqwest::Response) -> ApiError {
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false);
    let status_text = status.canonical_reason().unwrap_or("request failed");
    let body = response.text().await.unwrap_or_default();
    ApiError::from_response_parts(status.as_u16(), status_text, is_json, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::NoToken;

    fn client(base: &str) -> HttpClient {
        HttpClient::new(base, Arc::new(NoToken))
    }

    #[test]
    fn url_joins_relative_paths_against_the_base() {
        let c = client("https://api.example.com/");
        assert_eq!(c.url("/examples"), "https://api.example.com/examples");
        assert_eq!(c.url("examples"), "https://api.example.com/examples");
    }

    #[test]
    fn url_passes_absolute_urls_through() {
        let c = client("https://api.example.com");
        assert_eq!(c.url("http://other.example/x"), "http://other.example/x");
    }
}
