//! Presentation orchestrator
//!
//! Turns raw user text plus an access ID into a generated presentation:
//!
//! 1. Resolve and entitle the account
//! 2. Replace a YouTube URL with its transcript
//! 3. Resolve generation parameters (heuristics, enrichment, defaults)
//! 4. Call the generation endpoint with a fresh presentation ID
//!
//! Steps run strictly in sequence and the first failure aborts the call.
//! Nothing is created upstream before the final step, so there is nothing
//! to roll back.

use crate::account::{validate_account, AccountInfo};
use crate::clients::{
    ConfigError, EnrichmentClient, GenerationRequest, MagicSlidesClient, ServiceConfig,
    TranscriptClient,
};
use crate::enrich::resolve_parameters;
use crate::error::SlidesResult;
use crate::params::GenerationParameters;
use crate::youtube::is_youtube_url;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Channel tag sent with every generation request.
pub const SOURCE_TAG: &str = "mcp-tool";

/// Outcome of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Always true; failures are errors.
    pub success: bool,
    /// Editor URL.
    pub presentation_url: String,
    /// Presentation ID.
    pub presentation_id: String,
    /// Number of slides.
    pub slide_count: u32,
}

/// Sequential pipeline over the three remote services.
#[derive(Clone)]
pub struct PresentationOrchestrator {
    magicslides: MagicSlidesClient,
    transcripts: TranscriptClient,
    enrichment: EnrichmentClient,
    pricing_url: String,
}

impl PresentationOrchestrator {
    /// Create an orchestrator from prebuilt clients.
    pub fn new(
        magicslides: MagicSlidesClient,
        transcripts: TranscriptClient,
        enrichment: EnrichmentClient,
        pricing_url: impl Into<String>,
    ) -> Self {
        Self {
            magicslides,
            transcripts,
            enrichment,
            pricing_url: pricing_url.into(),
        }
    }

    /// Create an orchestrator with one shared HTTP client for all services.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, ConfigError> {
        let http = config.http_client()?;
        Ok(Self::new(
            MagicSlidesClient::new(http.clone(), config.magicslides.clone(), config.timeout_secs),
            TranscriptClient::new(http.clone(), config.transcripts.clone()),
            EnrichmentClient::new(http, config.slide_details.clone(), config.timeout_secs),
            config.pricing_url.clone(),
        ))
    }

    /// Transcript client, shared with the transcript tool.
    pub fn transcripts(&self) -> &TranscriptClient {
        &self.transcripts
    }

    /// Resolve and entitle the account behind `access_id`.
    pub async fn resolve_account(&self, access_id: &str) -> SlidesResult<AccountInfo> {
        let raw = self.magicslides.fetch_account_info(access_id).await?;
        validate_account(raw, &self.pricing_url)
    }

    /// Generate a presentation from text or a YouTube URL.
    ///
    /// Not idempotent: every call creates a new presentation.
    #[instrument(skip_all)]
    pub async fn create_from_text(
        &self,
        user_text: &str,
        access_id: &str,
    ) -> SlidesResult<GenerationResult> {
        let account = self.resolve_account(access_id).await?;
        debug!(plan = %account.plan, "Account resolved");

        let topic_text = if is_youtube_url(user_text) {
            info!("YouTube URL detected, fetching transcript");
            self.transcripts.fetch_transcript(user_text.trim()).await?
        } else {
            user_text.to_string()
        };

        let params = resolve_parameters(&self.enrichment, &topic_text).await;
        let request = build_request(params, &account, Uuid::new_v4());
        debug!(?request, "Generation request");

        let response = self.magicslides.generate_presentation(&request).await?;
        let result = GenerationResult {
            success: response.success,
            presentation_id: response
                .presentation_id()
                .unwrap_or(request.presentation_id),
            slide_count: response.slide_count().unwrap_or(request.slidelength),
            presentation_url: response.presentation_url,
        };

        info!(presentation_id = %result.presentation_id, "Presentation created");
        Ok(result)
    }
}

/// Combine resolved parameters, account identity and fixed flags.
pub fn build_request(
    params: GenerationParameters,
    account: &AccountInfo,
    presentation_id: Uuid,
) -> GenerationRequest {
    GenerationRequest {
        topic: params.topic,
        slidelength: params.slide_count,
        template_name: params.template.as_str().to_string(),
        image_source: params.image_source,
        include_images: params.include_images_per_slide,
        language: params.language,
        user_email: account.email.clone(),
        workspace_slug: account.workspace_id.clone(),
        preserve_text: false,
        presentation_id: presentation_id.to_string(),
        web_search: true,
        plan: account.plan.as_str().to_string(),
        model: params.model.as_str().to_string(),
        cache: true,
        source: SOURCE_TAG.to_string(),
    }
}
