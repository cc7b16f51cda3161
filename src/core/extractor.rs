use crate::models::{ColorAnalysis, Language, PersonalColor};
use serde_json::{Map, Number};

/// Placeholder colors reported when the reply had no structured data
pub const FALLBACK_COLORS: [&str; 3] = ["#000000", "#FFFFFF", "#808080"];

/// Confidence reported for results recovered from free text
pub const FALLBACK_CONFIDENCE: i64 = 50;

/// Which path produced an extracted result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionPath {
    Structured,
    TextScan,
}

/// Turns the model's reply text into a [`ColorAnalysis`]
///
/// Two stages, each attempted once:
/// 1. parse the reply as JSON in the result shape and pass it through
/// 2. on failure, scan the raw text for a category label
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultExtractor {
    language: Language,
    validate_structured: bool,
}

impl ResultExtractor {
    pub fn new(language: Language, validate_structured: bool) -> Self {
        Self {
            language,
            validate_structured,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Extract a result from the reply text
    pub fn extract(&self, reply: &str) -> ColorAnalysis {
        self.extract_with_path(reply).0
    }

    /// Extract a result and report which stage produced it
    pub fn extract_with_path(&self, reply: &str) -> (ColorAnalysis, ExtractionPath) {
        match self.parse_structured(reply) {
            Some(analysis) => (analysis, ExtractionPath::Structured),
            None => {
                tracing::debug!("Reply is not structured, falling back to text scan");
                (self.scan_text(reply), ExtractionPath::TextScan)
            }
        }
    }

    /// Parse the reply as a JSON result, tolerating a markdown code fence
    pub fn parse_structured(&self, reply: &str) -> Option<ColorAnalysis> {
        let analysis: ColorAnalysis = serde_json::from_str(strip_code_fence(reply)).ok()?;

        if self.validate_structured {
            if analysis.category().is_none() {
                tracing::warn!("Rejecting structured reply with unknown category: {}", analysis.personal_color);
                return None;
            }
            if !analysis.confidence_in_range() {
                tracing::warn!("Rejecting structured reply with confidence {}", analysis.confidence);
                return None;
            }
        }

        Some(analysis)
    }

    /// Build a result from unstructured text
    pub fn scan_text(&self, text: &str) -> ColorAnalysis {
        let personal_color = detect_personal_color(text)
            .map(|c| c.label(self.language))
            .unwrap_or_else(|| self.language.unknown_label());

        let reason = match self.language {
            Language::Ko => "텍스트에서 추출된 분석 결과",
            Language::En => "Result extracted from unstructured text",
        };

        ColorAnalysis {
            dominant_colors: FALLBACK_COLORS.iter().map(|c| c.to_string()).collect(),
            personal_color: personal_color.to_string(),
            confidence: Number::from(FALLBACK_CONFIDENCE),
            reason: reason.to_string(),
            extra: Map::new(),
        }
    }
}

/// First category, in priority order, that the text mentions
///
/// Priority is the category order, not the position in the text.
pub fn detect_personal_color(text: &str) -> Option<PersonalColor> {
    PersonalColor::ALL
        .into_iter()
        .find(|color| color.is_mentioned_in(text))
}

/// Remove a surrounding ``` or ```json fence, if any
fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = inner.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. "json") on the opening line
    match inner.find('\n') {
        Some(newline) => inner[newline + 1..].trim(),
        None => {
            let inner = inner.trim_start();
            inner
                .strip_prefix("json")
                .or_else(|| inner.strip_prefix("JSON"))
                .unwrap_or(inner)
                .trim()
        }
    }
}
