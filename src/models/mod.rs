// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AnalysisFailure, AnalysisOutcome, ColorAnalysis, Language, PersonalColor, Season};
pub use requests::AnalyzeColorRequest;
pub use responses::{ErrorResponse, HealthResponse};
