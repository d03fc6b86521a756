//! YouTube transcript service client.

use super::config::ServiceEndpoint;
use crate::error::{SlidesError, SlidesResult};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

const TRANSCRIPT_PATH: &str = "/get-youtube-transcript";

/// Transcript service client.
///
/// Every failure mode collapses into [`SlidesError::Transcript`] carrying
/// the upstream message.
#[derive(Clone)]
pub struct TranscriptClient {
    /// HTTP client instance.
    client: Client,

    /// Service endpoint configuration.
    endpoint: ServiceEndpoint,
}

#[derive(Debug, Deserialize)]
struct TranscriptResponse {
    #[serde(default)]
    transcript: Option<serde_json::Value>,
}

impl TranscriptClient {
    /// Create a new transcript client.
    pub fn new(client: Client, endpoint: ServiceEndpoint) -> Self {
        Self { client, endpoint }
    }

    /// Fetch the transcript of a YouTube video. `yt_url` must already be
    /// a YouTube URL.
    #[instrument(skip(self))]
    pub async fn fetch_transcript(&self, yt_url: &str) -> SlidesResult<String> {
        debug!("Fetching YouTube transcript");

        let url = self.endpoint.url(TRANSCRIPT_PATH);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "ytUrl": yt_url }))
            .send()
            .await
            .map_err(|e| SlidesError::Transcript(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("Transcript API error ({}): {}", status.as_u16(), message);
            return Err(SlidesError::Transcript(format!(
                "API error ({}): {}",
                status.as_u16(),
                message
            )));
        }

        let body: TranscriptResponse = response
            .json()
            .await
            .map_err(|e| SlidesError::Transcript(e.to_string()))?;

        match body.transcript {
            Some(serde_json::Value::String(transcript)) if !transcript.trim().is_empty() => {
                debug!(chars = transcript.len(), "Transcript received");
                Ok(transcript)
            }
            _ => Err(SlidesError::Transcript(
                "response has no transcript".to_string(),
            )),
        }
    }
}
