//! Slide-details enrichment service client.
//!
//! The enrichment service reads free text and suggests generation
//! parameters. Its response is loosely typed, so it is decoded into
//! [`EnrichmentDetails`] before any merging happens: every field is either a
//! well-formed value or absent.

use super::config::ServiceEndpoint;
use crate::decode::{decode_slide_count, decode_text};
use crate::error::{SlidesError, SlidesResult};
use crate::params::{Model, Template};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

const SLIDE_DETAILS_PATH: &str = "/api/v1/fetch-slide-generation-data";
const SERVICE: &str = "Slide details";

/// Enrichment service client.
#[derive(Clone)]
pub struct EnrichmentClient {
    /// HTTP client instance.
    client: Client,

    /// Service endpoint configuration.
    endpoint: ServiceEndpoint,

    /// Request timeout, for error reporting.
    timeout_secs: u64,
}

impl EnrichmentClient {
    /// Create a new enrichment client.
    pub fn new(client: Client, endpoint: ServiceEndpoint, timeout_secs: u64) -> Self {
        Self {
            client,
            endpoint,
            timeout_secs,
        }
    }

    /// Ask the service for generation details about `text`.
    #[instrument(skip_all, fields(chars = text.len()))]
    pub async fn fetch_slide_details(&self, text: &str) -> SlidesResult<EnrichmentDetails> {
        let url = self.endpoint.url(SLIDE_DETAILS_PATH);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await
            .map_err(|e| SlidesError::from_transport(SERVICE, self.timeout_secs, e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("Slide details API error ({}): {}", status.as_u16(), message);
            return Err(SlidesError::UpstreamUnavailable {
                service: SERVICE,
                message: format!("API error ({}): {}", status.as_u16(), message),
            });
        }

        let raw: RawEnrichment = response.json().await.map_err(|e| {
            SlidesError::UpstreamUnavailable {
                service: SERVICE,
                message: format!("Invalid API response: {}", e),
            }
        })?;

        let details = raw.decode();
        debug!(?details, "Slide details received");
        Ok(details)
    }
}

/// Enrichment response as sent on the wire, before validation.
#[derive(Debug, Default, Deserialize)]
pub struct RawEnrichment {
    #[serde(default, rename = "slideCount")]
    slide_count: Option<Value>,
    #[serde(default)]
    language: Option<Value>,
    #[serde(default)]
    model: Option<Value>,
    #[serde(default)]
    template: Option<Value>,
    #[serde(default, rename = "imageForEachSlide")]
    image_for_each_slide: Option<Value>,
    #[serde(default)]
    image_source: Option<Value>,
    #[serde(default, rename = "msSummaryText")]
    summary_text: Option<Value>,
}

/// Strictly typed enrichment suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichmentDetails {
    /// Suggested slide count.
    pub slide_count: Option<u32>,
    /// Detected language.
    pub language: Option<String>,
    /// Suggested model.
    pub model: Option<Model>,
    /// Suggested template.
    pub template: Option<Template>,
    /// Whether each slide should get an image.
    pub image_for_each_slide: Option<bool>,
    /// Suggested image source.
    pub image_source: Option<String>,
    /// Refined topic extracted from the text.
    pub summary_text: Option<String>,
}

impl RawEnrichment {
    /// Validate every field, dropping anything malformed.
    pub fn decode(self) -> EnrichmentDetails {
        EnrichmentDetails {
            slide_count: self.slide_count.as_ref().and_then(decode_slide_count),
            language: self.language.as_ref().and_then(decode_text),
            model: self
                .model
                .as_ref()
                .and_then(decode_text)
                .and_then(|m| Model::parse(&m)),
            template: self
                .template
                .as_ref()
                .and_then(decode_text)
                .and_then(|t| Template::parse(&t)),
            image_for_each_slide: self.image_for_each_slide.as_ref().and_then(Value::as_bool),
            image_source: self.image_source.as_ref().and_then(decode_text),
            summary_text: self.summary_text.as_ref().and_then(decode_text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(value: Value) -> EnrichmentDetails {
        serde_json::from_value::<RawEnrichment>(value).unwrap().decode()
    }

    #[test]
    fn test_decode_full_response() {
        let details = decode(serde_json::json!({
            "slideCount": "8",
            "language": "fr",
            "model": "GPT-4",
            "template": "ed-bullet-point2",
            "imageForEachSlide": true,
            "image_source": "ai",
            "msSummaryText": "Renewable energy in France"
        }));

        assert_eq!(details.slide_count, Some(8));
        assert_eq!(details.language.as_deref(), Some("fr"));
        assert_eq!(details.model, Some(Model::Gpt4));
        assert_eq!(details.template, Some(Template::EdBulletPoint2));
        assert_eq!(details.image_for_each_slide, Some(true));
        assert_eq!(details.image_source.as_deref(), Some("ai"));
        assert_eq!(
            details.summary_text.as_deref(),
            Some("Renewable energy in France")
        );
    }

    #[test]
    fn test_decode_drops_malformed_fields() {
        let details = decode(serde_json::json!({
            "slideCount": "many",
            "language": 42,
            "model": "llama",
            "template": null,
            "imageForEachSlide": "yes",
            "msSummaryText": "   "
        }));

        assert_eq!(details, EnrichmentDetails::default());
    }

    #[test]
    fn test_empty_object_decodes_to_nothing() {
        assert_eq!(decode(serde_json::json!({})), EnrichmentDetails::default());
    }
}
