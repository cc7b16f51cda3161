use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use personal_color_relay::config::Settings;
use personal_color_relay::errors::handle_json_payload_error;
use personal_color_relay::routes::{self, analysis::AppState};
use personal_color_relay::services::VisionClassifier;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting personal color analysis server...");

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!("Configuration loaded successfully");

    if settings.openai.api_key().is_none() {
        warn!("OpenAI API key is not configured; set OPENAI_API_KEY in the environment or .env file");
    }

    let classifier = VisionClassifier::new(
        settings.openai.classifier_options(),
        settings.analysis.extractor(),
    )
    .map_err(|e| {
        error!("Failed to create vision classifier: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    info!(
        "Vision classifier initialized (model: {}, language: {:?}, strict: {})",
        classifier.model(),
        settings.analysis.language,
        settings.analysis.validate_structured
    );

    let app_state = AppState {
        classifier: Arc::new(classifier),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
