//! Service client modules for the outbound HTTP collaborators.
//!
//! This module provides HTTP clients for each remote service:
//! - MagicSlides: account lookup and presentation generation
//! - Transcripts: YouTube transcript retrieval
//! - Enrichment: slide-details extraction from free text
//!
//! All clients share one `reqwest::Client` (and therefore one timeout)
//! built from [`ServiceConfig`].

pub mod config;
pub mod enrichment;
pub mod magicslides;
pub mod transcript;

pub use config::{ConfigError, ServiceConfig, ServiceEndpoint};
pub use enrichment::{EnrichmentClient, EnrichmentDetails};
pub use magicslides::{GenerationRequest, GenerationResponse, MagicSlidesClient};
pub use transcript::TranscriptClient;
