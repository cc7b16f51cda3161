// Core analysis exports
pub mod extractor;
pub mod prompt;

pub use extractor::{detect_personal_color, ExtractionPath, ResultExtractor, FALLBACK_COLORS, FALLBACK_CONFIDENCE};
pub use prompt::build_prompt;
