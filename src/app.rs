//! Application state and service initialization
//!
//! This module centralizes all service initialization and dependency injection,
//! making it easier to manage the application lifecycle and test services.

use std::sync::Arc;

use crate::model::Config;
use crate::service::llm::GenerativeOracle;
use crate::service::{
    AuthenticityService, DocumentAnalysisService, DocumentTypeClassifier, LlmClient,
    LogoAuthenticityService, RiskAnalysisService, SummaryService, VisionClient,
};

/// Application state containing all services and shared resources
///
/// This struct centralizes service initialization and makes it easy to inject
/// dependencies into Actix-web handlers.
pub struct AppState {
    /// Combined summary-plus-risks orchestration
    pub analysis_service: Arc<DocumentAnalysisService>,
    /// Risk extraction service
    pub risk_service: Arc<RiskAnalysisService>,
    /// Summary, chat and clause-rewrite service
    pub summary_service: Arc<SummaryService>,
    /// Document authenticity engine
    pub authenticity_service: Arc<AuthenticityService>,
    /// Document-type classification and legal/non-legal gate
    pub classifier_service: Arc<DocumentTypeClassifier>,
    /// Logo verification (None without vision credentials)
    pub logo_service: Option<Arc<LogoAuthenticityService>>,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// This performs:
    /// 1. Oracle client initialization (requires OPENAI_API_KEY)
    /// 2. Vision client initialization (optional, requires VISION_API_KEY)
    /// 3. Service dependency graph construction
    ///
    /// The only failure mode is missing required configuration.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| AppError::MissingConfig("OPENAI_API_KEY"))?;

        let oracle: Arc<dyn GenerativeOracle> = Arc::new(LlmClient::new(&api_key));

        // Logo verification is optional; without vision credentials the
        // authenticity engine reports the logo stage as unavailable
        let logo_service = match VisionClient::new() {
            Ok(vision) => {
                tracing::info!("Logo verification enabled");
                Some(Arc::new(LogoAuthenticityService::new(Arc::new(vision))))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Logo verification disabled");
                None
            }
        };

        let summary_service = Arc::new(SummaryService::new(Arc::clone(&oracle)));
        let risk_service = Arc::new(RiskAnalysisService::new(Arc::clone(&oracle)));
        let analysis_service = Arc::new(DocumentAnalysisService::new(
            Arc::clone(&summary_service),
            Arc::clone(&risk_service),
        ));
        let authenticity_service = Arc::new(AuthenticityService::new(
            Arc::clone(&oracle),
            logo_service.clone(),
            config.fusion,
        ));
        let classifier_service = Arc::new(DocumentTypeClassifier::new(Arc::clone(&oracle)));

        Ok(Self {
            analysis_service,
            risk_service,
            summary_service,
            authenticity_service,
            classifier_service,
            logo_service,
        })
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),
}
