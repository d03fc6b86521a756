//! MagicSlides service client.
//!
//! HTTP client for the MagicSlides API. Provides the account lookup used to
//! authorize a request and the call that generates an editable presentation.

use super::config::ServiceEndpoint;
use crate::account::AccountInfoResponse;
use crate::decode::{decode_identifier, decode_slide_count};
use crate::error::{SlidesError, SlidesResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument, warn};

const ACCOUNT_INFO_PATH: &str = "/api/fetch-account-info-using-accountid";
const GENERATE_PATH: &str = "/api/generate-editable-mcp";
const SERVICE: &str = "MagicSlides";

/// MagicSlides service client.
#[derive(Clone)]
pub struct MagicSlidesClient {
    /// HTTP client instance.
    client: Client,

    /// Service endpoint configuration.
    endpoint: ServiceEndpoint,

    /// Request timeout, for error reporting.
    timeout_secs: u64,
}

impl MagicSlidesClient {
    /// Create a new MagicSlides client.
    pub fn new(client: Client, endpoint: ServiceEndpoint, timeout_secs: u64) -> Self {
        Self {
            client,
            endpoint,
            timeout_secs,
        }
    }

    /// Look up the account behind an access ID.
    ///
    /// Returns the raw response; presence and entitlement are checked by
    /// [`crate::account::validate_account`]. A body that is not a JSON object
    /// is reported as an invalid account.
    #[instrument(skip_all)]
    pub async fn fetch_account_info(&self, access_id: &str) -> SlidesResult<AccountInfoResponse> {
        debug!("Fetching account info");

        let url = self.endpoint.url(ACCOUNT_INFO_PATH);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "access_id": access_id }))
            .send()
            .await
            .map_err(|e| SlidesError::from_transport(SERVICE, self.timeout_secs, e))?;

        let body = self.handle_response(response).await?;
        serde_json::from_value(body).map_err(|e| {
            warn!("Malformed account info response: {}", e);
            SlidesError::InvalidAccount
        })
    }

    /// Generate an editable presentation.
    #[instrument(skip(self, request), fields(presentation_id = %request.presentation_id))]
    pub async fn generate_presentation(
        &self,
        request: &GenerationRequest,
    ) -> SlidesResult<GenerationResponse> {
        debug!(
            slides = request.slidelength,
            model = %request.model,
            template = %request.template_name,
            "Requesting presentation generation"
        );

        let url = self.endpoint.url(GENERATE_PATH);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| SlidesError::from_transport(SERVICE, self.timeout_secs, e))?;

        let body = self.handle_response(response).await?;
        let parsed: GenerationResponse = serde_json::from_value(body).map_err(|e| {
            warn!("Malformed generation response: {}", e);
            SlidesError::Generation("Invalid API response.".to_string())
        })?;

        if !parsed.success || parsed.presentation_url.trim().is_empty() {
            warn!(success = parsed.success, "Generation service did not succeed");
            return Err(SlidesError::Generation("Invalid API response.".to_string()));
        }

        Ok(parsed)
    }

    /// Check the status and read the body as JSON. A body that is not JSON
    /// reads as `null` so each caller applies its own decode error.
    async fn handle_response(&self, response: reqwest::Response) -> SlidesResult<Value> {
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("MagicSlides API error ({}): {}", status.as_u16(), message);
            return Err(SlidesError::UpstreamUnavailable {
                service: SERVICE,
                message: format!("API error ({}): {}", status.as_u16(), message),
            });
        }

        match response.json().await {
            Ok(body) => Ok(body),
            Err(e) => {
                warn!("MagicSlides returned a non-JSON body: {}", e);
                Ok(Value::Null)
            }
        }
    }
}

/// Body of the generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Topic or transcript text.
    pub topic: String,

    /// Number of slides.
    pub slidelength: u32,

    /// Template name.
    pub template_name: String,

    /// Image source.
    pub image_source: String,

    /// Whether each slide gets an image.
    pub include_images: bool,

    /// Locale code.
    pub language: String,

    /// Account email.
    pub user_email: String,

    /// Account workspace.
    pub workspace_slug: String,

    /// Whether to keep the input text verbatim.
    pub preserve_text: bool,

    /// Client-generated presentation ID.
    pub presentation_id: String,

    /// Whether the generator may search the web.
    pub web_search: bool,

    /// Account plan.
    pub plan: String,

    /// Generation model.
    pub model: String,

    /// Whether upstream caching is allowed.
    pub cache: bool,

    /// Calling channel tag.
    pub source: String,
}

/// Response of the generation call.
///
/// Only `success` and `presentationUrl` are required. The ID and slide count
/// arrive as either strings or numbers and are read through
/// [`GenerationResponse::presentation_id`] and
/// [`GenerationResponse::slide_count`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    /// Whether generation succeeded.
    #[serde(default)]
    pub success: bool,

    /// Editor URL of the presentation.
    #[serde(default)]
    pub presentation_url: String,

    #[serde(default, rename = "presentationId")]
    raw_presentation_id: Option<Value>,

    #[serde(default, rename = "slideCount")]
    raw_slide_count: Option<Value>,
}

impl GenerationResponse {
    /// Presentation ID as stored upstream, if well-formed.
    pub fn presentation_id(&self) -> Option<String> {
        self.raw_presentation_id.as_ref().and_then(decode_identifier)
    }

    /// Number of slides generated, if well-formed.
    pub fn slide_count(&self) -> Option<u32> {
        self.raw_slide_count.as_ref().and_then(decode_slide_count)
    }
}
