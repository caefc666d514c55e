//! HTTP client capability used by the form glue.
//!
//! Callers speak in terms of `request(method, path, body) -> {status, json}`
//! against a fixed base URL. `ReqwestClient` is the real transport; tests
//! swap in a mock through the `HttpClient` trait.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Status plus the decoded body. `json` is `None` when the body is empty or
/// not JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub json: Option<Value>,
}

impl ApiResponse {
    pub fn new(status: u16, json: Option<Value>) -> Self {
        Self { status, json }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The `detail` string FastAPI-style backends put in error bodies.
    pub fn detail(&self) -> Option<&str> {
        self.json
            .as_ref()
            .and_then(|body| body.get("detail"))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|detail| !detail.is_empty())
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[cfg_attr(test, mockall::automock)]
pub trait HttpClient {
    fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> std::result::Result<ApiResponse, ApiError>;
}

pub struct ReqwestClient {
    client: Client,
    base_url: String,
}

impl ReqwestClient {
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build booking API HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl HttpClient for ReqwestClient {
    fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> std::result::Result<ApiResponse, ApiError> {
        let url = self.url_for(path);
        log::debug!("{} {}", method, url);

        let mut builder = self.client.request(method.into(), &url);
        if let Some(body) = body.as_ref() {
            builder = builder.json(body);
        }

        let response = builder.send().map_err(|source| ApiError::Transport {
            url: url.clone(),
            source: Box::new(source),
        })?;

        let status = response.status().as_u16();
        let bytes = response.bytes().map_err(|source| ApiError::Body {
            url: url.clone(),
            source,
        })?;

        let json = if bytes.is_empty() {
            None
        } else {
            match serde_json::from_slice::<Value>(&bytes) {
                Ok(value) => Some(value),
                Err(err) => {
                    log::warn!("Non-JSON response body from {} ({}): {}", url, status, err);
                    None
                }
            }
        };

        log::debug!("{} {} -> {}", method, url, status);
        Ok(ApiResponse { status, json })
    }
}
