//! HTTP client for the insight backend.
//!
//! One `POST {base_url}/reflect` per call. Every failure mode (connection,
//! non-2xx status, unparseable body) is converted into
//! [`SubmissionResult::Failure`] at this boundary; callers never see a
//! `reqwest` error or a panic from here.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::types::{AiInsight, Mood, ReflectionRequest, SubmissionResult};

/// Backend address used when neither the config file nor the environment sets one.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Message shown when something other than the HTTP exchange failed.
pub const UNKNOWN_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Errors from a single `/reflect` exchange.
///
/// The `Display` strings are user-facing: they are what the input screen shows.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Unable to connect to backend")]
    Connect(#[source] reqwest::Error),
    #[error("API request failed (status {})", .0.as_u16())]
    Status(StatusCode),
    #[error("Unable to read insights from backend response")]
    Body(#[source] reqwest::Error),
    #[error("Unable to read insights from backend response")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can turn a mood + reflection into a [`SubmissionResult`].
///
/// The remote client is the production implementation; tests substitute
/// in-memory fakes.
#[async_trait]
pub trait InsightService: Send + Sync {
    async fn send(&self, mood: Mood, text: &str) -> SubmissionResult;
}

/// `reqwest`-backed client for `POST /reflect`.
#[derive(Debug, Clone)]
pub struct RemoteInsightClient {
    http: Client,
    base_url: String,
}

impl RemoteInsightClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), base_url)
    }

    pub fn with_http_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn reflect_url(&self) -> String {
        format!("{}/reflect", self.base_url)
    }

    /// Performs the exchange and returns the typed result.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-2xx status, or a
    /// body that is not an [`AiInsight`].
    pub async fn reflect(&self, mood: Mood, text: &str) -> Result<AiInsight, ClientError> {
        let url = self.reflect_url();
        tracing::debug!(%url, mood = mood.value(), chars = text.chars().count(), "sending reflection");

        let resp = self
            .http
            .post(&url)
            .json(&ReflectionRequest { mood, text })
            .send()
            .await
            .map_err(ClientError::Connect)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let body = resp.bytes().await.map_err(ClientError::Body)?;
        let insight: AiInsight = serde_json::from_slice(&body)?;
        Ok(insight)
    }
}

impl Default for RemoteInsightClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl InsightService for RemoteInsightClient {
    async fn send(&self, mood: Mood, text: &str) -> SubmissionResult {
        let result = self.reflect(mood, text).await;
        match &result {
            Ok(insight) => tracing::info!(
                emotion = %insight.emotion_detected,
                crisis = insight.crisis_detected,
                "insight received"
            ),
            Err(e) => tracing::warn!(error = ?e, "reflection request failed"),
        }
        result.into()
    }
}

/// Runs `service.send` on its own task so a panic inside the service becomes
/// a [`SubmissionResult::Failure`] with [`UNKNOWN_FAILURE_MESSAGE`] instead of
/// tearing down the caller.
pub async fn send_guarded(
    service: Arc<dyn InsightService>,
    mood: Mood,
    text: String,
) -> SubmissionResult {
    let handle = tokio::spawn(async move { service.send(mood, &text).await });
    match handle.await {
        Ok(result) => result,
        Err(join_err) => {
            tracing::error!(error = %join_err, "insight task did not complete");
            SubmissionResult::failure(UNKNOWN_FAILURE_MESSAGE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = RemoteInsightClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.reflect_url(), "http://localhost:8000/reflect");
    }

    #[test]
    fn status_error_message_names_the_code() {
        let msg = ClientError::Status(StatusCode::BAD_GATEWAY).to_string();
        assert_eq!(msg, "API request failed (status 502)");
    }

    struct Exploding;

    #[async_trait]
    impl InsightService for Exploding {
        async fn send(&self, _mood: Mood, _text: &str) -> SubmissionResult {
            panic!("service bug");
        }
    }

    #[tokio::test]
    async fn panicking_service_becomes_generic_failure() {
        let mood = Mood::new(2).unwrap();
        let result = send_guarded(Arc::new(Exploding), mood, "hello".to_owned()).await;
        assert_eq!(result, SubmissionResult::failure(UNKNOWN_FAILURE_MESSAGE));
    }
}
