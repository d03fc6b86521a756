//! Generation parameters and free-text heuristics
//!
//! [`parse_user_parameters`] pulls explicit user intent (model, template,
//! image inclusion, slide count) out of free text. Each field of the result
//! is `None` unless the text asked for it, so callers can tell an explicit
//! request apart from a default.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Default number of slides.
pub const DEFAULT_SLIDE_COUNT: u32 = 10;

/// Default presentation language.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default image source.
pub const DEFAULT_IMAGE_SOURCE: &str = "google";

/// Generation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Model {
    /// OpenAI GPT-4.
    #[serde(rename = "gpt-4")]
    Gpt4,
    /// Google Gemini.
    #[default]
    #[serde(rename = "gemini")]
    Gemini,
}

impl Model {
    /// Wire name of the model.
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Gpt4 => "gpt-4",
            Model::Gemini => "gemini",
        }
    }

    /// Parse a model name, case-insensitively. Unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "gpt-4" | "gpt4" => Some(Model::Gpt4),
            "gemini" => Some(Model::Gemini),
            _ => None,
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Slide template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Template {
    /// Bullet point layout 1.
    #[default]
    #[serde(rename = "ed-bullet-point1")]
    EdBulletPoint1,
    /// Bullet point layout 2.
    #[serde(rename = "ed-bullet-point2")]
    EdBulletPoint2,
}

impl Template {
    /// Wire name of the template.
    pub fn as_str(&self) -> &'static str {
        match self {
            Template::EdBulletPoint1 => "ed-bullet-point1",
            Template::EdBulletPoint2 => "ed-bullet-point2",
        }
    }

    /// Parse a template name, case-insensitively. Unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "ed-bullet-point1" => Some(Template::EdBulletPoint1),
            "ed-bullet-point2" => Some(Template::EdBulletPoint2),
            _ => None,
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters the user asked for explicitly in their text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplicitParameters {
    /// Requested model.
    pub model: Option<Model>,
    /// Requested template.
    pub template: Option<Template>,
    /// Whether images per slide were requested.
    pub include_images_per_slide: Option<bool>,
    /// Requested slide count.
    pub slide_count: Option<u32>,
}

/// Fully resolved parameters for a generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationParameters {
    /// Presentation topic (or transcript/summary text).
    pub topic: String,
    /// Number of slides, always at least 1.
    pub slide_count: u32,
    /// Whether every slide gets an image.
    pub include_images_per_slide: bool,
    /// Locale code.
    pub language: String,
    /// Generation model.
    pub model: Model,
    /// Slide template.
    pub template: Template,
    /// Where images come from.
    pub image_source: String,
}

impl GenerationParameters {
    /// Explicit values over defaults, with the trimmed text as topic.
    pub fn from_explicit(text: &str, explicit: &ExplicitParameters) -> Self {
        Self {
            topic: text.trim().to_string(),
            slide_count: explicit.slide_count.unwrap_or(DEFAULT_SLIDE_COUNT),
            include_images_per_slide: explicit.include_images_per_slide.unwrap_or(false),
            language: DEFAULT_LANGUAGE.to_string(),
            model: explicit.model.unwrap_or_default(),
            template: explicit.template.unwrap_or_default(),
            image_source: DEFAULT_IMAGE_SOURCE.to_string(),
        }
    }
}

fn slide_count_regex() -> &'static Regex {
    static SLIDE_COUNT: OnceLock<Regex> = OnceLock::new();
    SLIDE_COUNT.get_or_init(|| Regex::new(r"(\d+)\s*slides?").expect("slide count regex is valid"))
}

/// Extract explicitly requested parameters from free text.
pub fn parse_user_parameters(text: &str) -> ExplicitParameters {
    let text = text.to_lowercase();
    let mut params = ExplicitParameters::default();

    if text.contains("gpt-4") || text.contains("gpt4") {
        params.model = Some(Model::Gpt4);
    } else if text.contains("gemini") {
        params.model = Some(Model::Gemini);
    }

    if text.contains("ed-bullet-point2") || text.contains("bullet point 2") {
        params.template = Some(Template::EdBulletPoint2);
    } else if text.contains("ed-bullet-point1") || text.contains("bullet point 1") {
        params.template = Some(Template::EdBulletPoint1);
    }

    if ["google images", "include images", "with images"]
        .iter()
        .any(|phrase| text.contains(phrase))
    {
        params.include_images_per_slide = Some(true);
    }

    // Zero and out-of-range counts are ignored rather than clamped.
    params.slide_count = slide_count_regex()
        .captures(&text)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .filter(|count| *count > 0);

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_images_and_count() {
        let params = parse_user_parameters("Make 5 slides with gemini and include images");
        assert_eq!(params.model, Some(Model::Gemini));
        assert_eq!(params.include_images_per_slide, Some(true));
        assert_eq!(params.slide_count, Some(5));
        assert_eq!(params.template, None);
    }

    #[test]
    fn test_gpt4_wins_over_gemini() {
        let params = parse_user_parameters("Compare GPT4 and Gemini");
        assert_eq!(params.model, Some(Model::Gpt4));
    }

    #[test]
    fn test_template_detection() {
        assert_eq!(
            parse_user_parameters("use bullet point 2 please").template,
            Some(Template::EdBulletPoint2)
        );
        assert_eq!(
            parse_user_parameters("template ED-BULLET-POINT1").template,
            Some(Template::EdBulletPoint1)
        );
    }

    #[test]
    fn test_nothing_requested() {
        assert_eq!(
            parse_user_parameters("The history of the printing press"),
            ExplicitParameters::default()
        );
    }

    #[test]
    fn test_slide_count_first_match_only() {
        let params = parse_user_parameters("12 slides, not 3 slides");
        assert_eq!(params.slide_count, Some(12));

        let params = parse_user_parameters("a single slide: 1slide");
        assert_eq!(params.slide_count, Some(1));
    }

    #[test]
    fn test_zero_or_huge_slide_count_is_unset() {
        assert_eq!(parse_user_parameters("0 slides").slide_count, None);
        assert_eq!(
            parse_user_parameters("99999999999999 slides").slide_count,
            None
        );
    }

    #[test]
    fn test_model_and_template_parse() {
        assert_eq!(Model::parse(" GPT-4 "), Some(Model::Gpt4));
        assert_eq!(Model::parse("claude"), None);
        assert_eq!(Template::parse("Ed-Bullet-Point2"), Some(Template::EdBulletPoint2));
        assert_eq!(Template::parse("fancy"), None);
    }

    #[test]
    fn test_from_explicit_defaults() {
        let params =
            GenerationParameters::from_explicit("  Solar power  ", &ExplicitParameters::default());
        assert_eq!(params.topic, "Solar power");
        assert_eq!(params.slide_count, 10);
        assert!(!params.include_images_per_slide);
        assert_eq!(params.language, "en");
        assert_eq!(params.model, Model::Gemini);
        assert_eq!(params.template, Template::EdBulletPoint1);
        assert_eq!(params.image_source, "google");
    }
}
