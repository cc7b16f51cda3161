//! Personal Color Relay - AI color analysis server for fashion products
//!
//! Forwards a product image URL to a vision model, asks it to place the
//! garment in one of ten PCCS-based personal color categories, and returns
//! a small JSON result. When the model does not reply with JSON, the
//! category is recovered by scanning the reply text.

pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{build_prompt, detect_personal_color, ResultExtractor};
pub use models::{AnalysisFailure, AnalysisOutcome, AnalyzeColorRequest, ColorAnalysis, Language, PersonalColor};
pub use services::{ClassifierError, ClassifierOptions, VisionClassifier};
