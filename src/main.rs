use actix_web::{App, HttpServer, web};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod export;
mod model;
mod service;

use app::AppState;
use model::Config;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr();

    let state = match AppState::new(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialize services");
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    let analysis_service = web::Data::from(state.analysis_service);
    let risk_service = web::Data::from(state.risk_service);
    let summary_service = web::Data::from(state.summary_service);
    let authenticity_service = web::Data::from(state.authenticity_service);
    let classifier_service = web::Data::from(state.classifier_service);
    let logo_service = web::Data::new(state.logo_service);

    tracing::info!("Starting LegalEase analysis server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(analysis_service.clone())
            .app_data(risk_service.clone())
            .app_data(summary_service.clone())
            .app_data(authenticity_service.clone())
            .app_data(classifier_service.clone())
            .app_data(logo_service.clone())
            .configure(api::analyze::configure)
            .configure(api::health::configure)
            .configure(api::openapi::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
