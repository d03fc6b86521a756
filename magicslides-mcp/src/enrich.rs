//! Detail enrichment: heuristics, remote suggestions and defaults.
//!
//! Per field, an explicit request found in the text beats a remote
//! suggestion, which beats the default. A failed enrichment call is logged
//! and the heuristics-plus-defaults set is returned instead.

use crate::clients::{EnrichmentClient, EnrichmentDetails};
use crate::params::{parse_user_parameters, ExplicitParameters, GenerationParameters};
use tracing::{debug, instrument, warn};

/// Merge explicit parameters and enrichment details over the defaults.
pub fn merge_parameters(
    text: &str,
    explicit: &ExplicitParameters,
    details: EnrichmentDetails,
) -> GenerationParameters {
    let mut params = GenerationParameters::from_explicit(text, explicit);

    if explicit.slide_count.is_none() {
        if let Some(count) = details.slide_count {
            params.slide_count = count;
        }
    }
    if explicit.model.is_none() {
        if let Some(model) = details.model {
            params.model = model;
        }
    }
    if explicit.template.is_none() {
        if let Some(template) = details.template {
            params.template = template;
        }
    }
    if explicit.include_images_per_slide.is_none() {
        if let Some(images) = details.image_for_each_slide {
            params.include_images_per_slide = images;
        }
    }
    if let Some(language) = details.language {
        params.language = language;
    }
    if let Some(image_source) = details.image_source {
        params.image_source = image_source;
    }
    // The summary is a refined topic, not a fallback.
    if let Some(summary) = details.summary_text {
        params.topic = summary;
    }

    params
}

/// Resolve generation parameters for `text`. Never fails.
#[instrument(skip_all)]
pub async fn resolve_parameters(client: &EnrichmentClient, text: &str) -> GenerationParameters {
    let explicit = parse_user_parameters(text);
    debug!(?explicit, "Explicit parameters from text");

    match client.fetch_slide_details(text).await {
        Ok(details) => merge_parameters(text, &explicit, details),
        Err(e) => {
            warn!(error = %e, "Slide details unavailable, using defaults");
            GenerationParameters::from_explicit(text, &explicit)
        }
    }
}
