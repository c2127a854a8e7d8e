use std::time::Duration;

use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, debug_span, Instrument};
use vt_core::ports::FetchError;
use vt_core::AppConfig;

/// Used when the configuration leaves the timeout at 0.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin JSON client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let base_url = base_url.into();
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(FetchError::InvalidConfig("api base_url is empty".into()));
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::InvalidConfig(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        let timeout = match config.api_timeout_secs {
            0 => DEFAULT_TIMEOUT,
            secs => Duration::from_secs(secs),
        };
        Self::new(config.api_base_url.as_str(), timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let response = self.send(Method::GET, path).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))
    }

    pub(crate) async fn patch(&self, path: &str) -> Result<(), FetchError> {
        self.send(Method::PATCH, path).await.map(|_| ())
    }

    async fn send(&self, method: Method, path: &str) -> Result<Response, FetchError> {
        let url = self.url(path);
        let span = debug_span!("http.request", method = %method, url = %url);

        async {
            let response = self
                .http
                .request(method, url.as_str())
                .send()
                .await
                .map_err(map_transport_error)?;

            let status = response.status();
            debug!(status = status.as_u16(), "Response received");
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }
            Ok(response)
        }
        .instrument(span)
        .await
    }
}

fn map_transport_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Network(format!("request timed out: {err}"))
    } else {
        FetchError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_base_url_is_rejected() {
        let err = ApiClient::from_config(&AppConfig::empty()).unwrap_err();
        assert!(matches!(err, FetchError::InvalidConfig(_)));
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:3000/api/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/api");
        assert_eq!(client.url("/actions"), "http://localhost:3000/api/actions");
        assert_eq!(client.url("actions"), "http://localhost:3000/api/actions");
    }
}
