//! HTTP client shared foundation
//!
//! A thin wrapper around reqwest with a configurable timeout and a
//! stable User-Agent. Requests are single-shot: lookup failures are
//! reported to the caller per dependency and never retried.

use crate::error::CheckError;
use reqwest::Client;
use std::time::Duration;

/// User-Agent sent with registry requests
const USER_AGENT: &str = concat!("depscan/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper for registry lookups
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self, CheckError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                CheckError::network(
                    String::new(),
                    "HTTP client",
                    format!("failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self { client })
    }

    /// Perform a GET request and parse the JSON response.
    ///
    /// `package` and `registry` provide error context; a 404 maps to
    /// `NotFound`, any other non-2xx status to `Network`, and a body
    /// that fails to decode to `InvalidResponse`.
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        package: &str,
        registry: &str,
    ) -> Result<T, CheckError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CheckError::network(package, registry, e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CheckError::not_found(package, registry));
        }

        if !response.status().is_success() {
            return Err(CheckError::network(
                package,
                registry,
                format!("HTTP {}", response.status()),
            ));
        }

        response.json::<T>().await.map_err(|e| {
            CheckError::invalid_response(package, registry, format!("failed to parse JSON: {}", e))
        })
    }
}
