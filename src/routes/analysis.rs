use crate::errors::ApiError;
use crate::models::{AnalysisOutcome, AnalyzeColorRequest, HealthResponse};
use crate::services::VisionClassifier;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use tracing::Instrument;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<VisionClassifier>,
}

/// Configure the analysis and health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/analyze-color", web::post().to(analyze_color));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        message: "AI 색상 분석 서버가 정상 작동 중입니다".to_string(),
        api_key_configured: state.classifier.is_configured(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Personal color analysis endpoint
///
/// POST /analyze-color
///
/// Request body:
/// ```json
/// {
///   "image_url": "string"
/// }
/// ```
///
/// Upstream and configuration failures are returned with status 200 and an
/// `error` field; only a missing image URL is a 400.
async fn analyze_color(
    state: web::Data<AppState>,
    req: web::Json<AnalyzeColorRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for analyze_color request: {}", errors);
        return Err(ApiError::MissingImageUrl);
    }

    let Some(image_url) = req.image_url() else {
        tracing::info!("analyze_color request without image_url");
        return Err(ApiError::MissingImageUrl);
    };

    let analysis_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("analyze_color", %analysis_id);

    let outcome = async {
        tracing::info!("Analysis started: {}", image_url);
        let outcome = state.classifier.analyze(image_url).await;
        match &outcome {
            AnalysisOutcome::Analysis(analysis) => tracing::info!(
                "Analysis finished: {} ({}%)",
                analysis.personal_color,
                analysis.confidence
            ),
            AnalysisOutcome::Failure(failure) => {
                tracing::warn!("Analysis returned error result: {}", failure.error)
            }
        }
        outcome
    }
    .instrument(span)
    .await;

    let body = serde_json::to_value(&outcome)?;
    Ok(HttpResponse::Ok().json(body))
}
