use crate::{LastFmError, Result};
use async_trait::async_trait;
use http_client::{HttpClient, Request};
use http_types::{Method, Url};
use std::collections::BTreeMap;

/// Extra request headers, by name.
pub type Headers = BTreeMap<String, String>;

/// Status and body of an HTTP exchange, before any decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport used by [`LastFmClient`](crate::LastFmClient).
///
/// Implementations only move bytes: a failure to obtain any response is
/// reported as [`LastFmError::Http`], and every response, whatever its
/// status, is handed back as a [`RawResponse`]. Retries, timeouts and
/// cancellation belong here if anywhere.
///
/// # Mocking Support
///
/// When the `mock` feature is enabled, this crate provides `MockRequester`
/// that implements this trait using the `mockall` library.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait Requester: Send + Sync {
    async fn get(&self, url: &str, headers: Option<Headers>) -> Result<RawResponse>;

    async fn post(&self, url: &str, body: String, headers: Option<Headers>)
        -> Result<RawResponse>;
}

/// [`Requester`] backed by any `http_client::HttpClient`.
///
/// ```rust,no_run
/// use lastfm_api::HttpRequester;
///
/// let requester = HttpRequester::new(Box::new(http_client::native::NativeClient::new()));
/// ```
pub struct HttpRequester {
    client: Box<dyn HttpClient + Send + Sync>,
    user_agent: Option<String>,
}

impl HttpRequester {
    pub fn new(client: Box<dyn HttpClient + Send + Sync>) -> Self {
        Self {
            client,
            user_agent: None,
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
        headers: Option<Headers>,
    ) -> Result<RawResponse> {
        let parsed = url
            .parse::<Url>()
            .map_err(|e| LastFmError::Http(format!("Invalid URL: {e}")))?;
        let mut request = Request::new(method, parsed);

        if let Some(body) = body {
            request.set_body(body);
        }
        if let Some(user_agent) = &self.user_agent {
            request.insert_header("User-Agent", user_agent.as_str());
        }
        for (name, value) in headers.iter().flatten() {
            request.insert_header(name.as_str(), value.as_str());
        }

        let mut response = self
            .client
            .send(request)
            .await
            .map_err(|e| LastFmError::Http(e.to_string()))?;

        let status: u16 = response.status().into();
        let body = response
            .body_bytes()
            .await
            .map_err(|e| LastFmError::Http(e.to_string()))?;

        log::debug!("HTTP {status}, {} bytes", body.len());
        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl Requester for HttpRequester {
    async fn get(&self, url: &str, headers: Option<Headers>) -> Result<RawResponse> {
        self.send(Method::Get, url, None, headers).await
    }

    async fn post(
        &self,
        url: &str,
        body: String,
        headers: Option<Headers>,
    ) -> Result<RawResponse> {
        self.send(Method::Post, url, Some(body), headers).await
    }
}

impl std::fmt::Debug for HttpRequester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRequester")
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_response_success_range() {
        assert!(RawResponse::new(200, "{}").is_success());
        assert!(RawResponse::new(204, Vec::new()).is_success());
        assert!(!RawResponse::new(403, "{}").is_success());
        assert!(!RawResponse::new(500, "").is_success());
    }
}
