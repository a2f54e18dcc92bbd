//! REST API endpoints for document analysis

use actix_web::{HttpResponse, post, web};
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, OpenApi, ToSchema};

use crate::api::error::ApiError;
use crate::export;
use crate::model::{AuthenticityReport, RiskRecord, RiskStats};
use crate::service::extract::extract_text;
use crate::service::summary::{ChatMessage, RewriteMode};
use crate::service::{
    AuthenticityService, DocumentAnalysisService, DocumentTypeClassifier, RiskAnalysisService,
    SummaryService,
};

fn default_language() -> String {
    "English".to_string()
}

/// A document submitted for analysis, either as plain text or as an
/// uploaded file (base64-encoded with its MIME type).
#[derive(Debug, Deserialize, ToSchema)]
pub struct DocumentRequest {
    /// Plain document text
    pub text: Option<String>,
    /// Base64-encoded document bytes
    pub file_base64: Option<String>,
    /// MIME type of the uploaded bytes (e.g. application/pdf)
    pub mime_type: Option<String>,
    /// Target language for generated output
    #[serde(default = "default_language")]
    pub language: String,
}

impl DocumentRequest {
    /// Resolve the request into extracted text plus, when a file was
    /// uploaded, the raw bytes for the logo stage.
    fn resolve(&self) -> Result<(String, Option<(Vec<u8>, String)>), ApiError> {
        if let Some(encoded) = self.file_base64.as_deref() {
            let mime = self
                .mime_type
                .as_deref()
                .ok_or_else(|| ApiError::BadRequest("mime_type is required with file_base64".to_string()))?;
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(encoded)
                .map_err(|e| ApiError::BadRequest(format!("Invalid base64 payload: {}", e)))?;
            let text = extract_text(&bytes, mime)?;
            if text.trim().is_empty() {
                return Err(ApiError::BadRequest(
                    "No text could be extracted from the document".to_string(),
                ));
            }
            return Ok((text, Some((bytes, mime.to_string()))));
        }

        match self.text.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => Ok((text.to_string(), None)),
            _ => Err(ApiError::BadRequest(
                "No document text provided".to_string(),
            )),
        }
    }
}

/// Combined summary and risk analysis response
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    /// Plain-language summary rendered as HTML
    pub summary_html: String,
    pub risks: Vec<RiskRecord>,
    pub stats: RiskStats,
}

/// Risk-only analysis response
#[derive(Debug, Serialize, ToSchema)]
pub struct RisksResponse {
    pub risks: Vec<RiskRecord>,
    pub stats: RiskStats,
}

/// Analyze a document: plain-language summary plus risk extraction
#[utoipa::path(
    post,
    path = "/v1/analyze",
    request_body = DocumentRequest,
    responses(
        (status = 200, description = "Analysis completed", body = AnalyzeResponse),
        (status = 400, description = "No usable document text"),
        (status = 415, description = "Unsupported document format")
    ),
    tag = "analysis"
)]
#[post("/v1/analyze")]
pub async fn analyze(
    service: web::Data<DocumentAnalysisService>,
    classifier: web::Data<DocumentTypeClassifier>,
    request: web::Json<DocumentRequest>,
) -> Result<HttpResponse, ApiError> {
    let (text, _) = request.resolve()?;
    if !classifier.is_legal_document(&text).await {
        return Err(ApiError::BadRequest(
            "The document does not appear to be a legal document".to_string(),
        ));
    }
    let analysis = service.analyze_document(&text, &request.language).await;
    Ok(HttpResponse::Ok().json(AnalyzeResponse {
        summary_html: analysis.summary_html,
        risks: analysis.risks,
        stats: analysis.stats,
    }))
}

/// Extract risky clauses from a document
#[utoipa::path(
    post,
    path = "/v1/risks",
    request_body = DocumentRequest,
    responses(
        (status = 200, description = "Risks extracted", body = RisksResponse),
        (status = 400, description = "No usable document text"),
        (status = 415, description = "Unsupported document format")
    ),
    tag = "analysis"
)]
#[post("/v1/risks")]
pub async fn risks(
    service: web::Data<RiskAnalysisService>,
    request: web::Json<DocumentRequest>,
) -> Result<HttpResponse, ApiError> {
    let (text, _) = request.resolve()?;
    let risks = service.analyze_risks(&text, &request.language).await;
    let stats = crate::model::compute_risk_stats(&risks);
    Ok(HttpResponse::Ok().json(RisksResponse { risks, stats }))
}

/// Run the multi-stage authenticity check on a document
#[utoipa::path(
    post,
    path = "/v1/authenticity",
    request_body = DocumentRequest,
    responses(
        (status = 200, description = "Authenticity verdict produced", body = AuthenticityReport),
        (status = 400, description = "No usable document text"),
        (status = 415, description = "Unsupported document format")
    ),
    tag = "authenticity"
)]
#[post("/v1/authenticity")]
pub async fn authenticity(
    service: web::Data<AuthenticityService>,
    request: web::Json<DocumentRequest>,
) -> Result<HttpResponse, ApiError> {
    let (text, file) = request.resolve()?;
    let report = service
        .check_document_authenticity(&text, file.as_ref().map(|(b, m)| (b.as_slice(), m.as_str())))
        .await;
    Ok(HttpResponse::Ok().json(report))
}

/// Chat request grounded in a previously analyzed document
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// The document the conversation is grounded in
    pub document_text: String,
    /// Conversation so far, oldest first
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    /// Assistant reply rendered as HTML
    pub reply_html: String,
}

/// Answer a question about an analyzed document
#[utoipa::path(
    post,
    path = "/v1/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Reply generated", body = ChatResponse),
        (status = 400, description = "Empty document text")
    ),
    tag = "assistant"
)]
#[post("/v1/chat")]
pub async fn chat(
    service: web::Data<SummaryService>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, ApiError> {
    if request.document_text.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "No document text provided".to_string(),
        ));
    }
    let reply = service
        .get_chatbot_response(&request.history, &request.document_text)
        .await;
    Ok(HttpResponse::Ok().json(ChatResponse { reply_html: reply }))
}

/// Clause rewrite request
#[derive(Debug, Deserialize, ToSchema)]
pub struct RewriteRequest {
    pub clause_text: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "RewriteRequest::default_mode")]
    pub mode: RewriteMode,
}

impl RewriteRequest {
    fn default_mode() -> RewriteMode {
        RewriteMode::Plain
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RewriteResponse {
    pub rewrite: String,
}

/// Rewrite a clause to be safer for the signing party
#[utoipa::path(
    post,
    path = "/v1/rewrite",
    request_body = RewriteRequest,
    responses(
        (status = 200, description = "Rewrite generated", body = RewriteResponse),
        (status = 400, description = "Empty clause text")
    ),
    tag = "assistant"
)]
#[post("/v1/rewrite")]
pub async fn rewrite(
    service: web::Data<SummaryService>,
    request: web::Json<RewriteRequest>,
) -> Result<HttpResponse, ApiError> {
    if request.clause_text.trim().is_empty() {
        return Err(ApiError::BadRequest("No clause text provided".to_string()));
    }
    let rewrite = service
        .rewrite_clause(&request.clause_text, &request.language, request.mode)
        .await;
    Ok(HttpResponse::Ok().json(RewriteResponse { rewrite }))
}

/// Query parameters for risk export
#[derive(Debug, Deserialize, IntoParams)]
pub struct ExportParams {
    /// Output format: csv, html or pdf (default: csv)
    pub format: Option<String>,
}

/// Body for risk export: the risk list to render
#[derive(Debug, Deserialize, ToSchema)]
pub struct ExportRequest {
    pub risks: Vec<RiskRecord>,
    #[serde(default = "default_language")]
    pub language: String,
}

/// Export an extracted risk list as CSV, HTML or PDF
#[utoipa::path(
    post,
    path = "/v1/risks/export",
    params(ExportParams),
    request_body = ExportRequest,
    responses(
        (status = 200, description = "Exported risk report"),
        (status = 400, description = "Unknown export format")
    ),
    tag = "analysis"
)]
#[post("/v1/risks/export")]
pub async fn export_risks(
    query: web::Query<ExportParams>,
    request: web::Json<ExportRequest>,
) -> Result<HttpResponse, ApiError> {
    let format = query.format.as_deref().unwrap_or("csv");
    match format {
        "csv" => Ok(HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header(("Content-Disposition", "attachment; filename=risk_report.csv"))
            .body(export::risks_to_csv(&request.risks))),
        "html" => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(export::risks_to_html(&request.risks, &request.language))),
        "pdf" => {
            let bytes = export::risks_to_pdf_bytes(&request.risks)
                .map_err(|e| ApiError::Internal(format!("PDF rendering failed: {}", e)))?;
            Ok(HttpResponse::Ok()
                .content_type("application/pdf")
                .insert_header(("Content-Disposition", "attachment; filename=risk_report.pdf"))
                .body(bytes))
        }
        other => Err(ApiError::BadRequest(format!(
            "Unknown export format: {}",
            other
        ))),
    }
}

/// Configure analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze)
        .service(risks)
        .service(authenticity)
        .service(chat)
        .service(rewrite)
        .service(export_risks);
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LegalEase Analysis API",
        description = "Legal document summarization, risk extraction and authenticity verification"
    ),
    paths(
        analyze,
        risks,
        authenticity,
        chat,
        rewrite,
        export_risks,
        crate::api::health::liveness,
        crate::api::health::readiness,
    ),
    components(schemas(
        DocumentRequest,
        AnalyzeResponse,
        RisksResponse,
        ChatRequest,
        ChatResponse,
        RewriteRequest,
        RewriteResponse,
        ExportRequest,
        crate::model::RiskRecord,
        crate::model::RiskStats,
        crate::model::Severity,
        crate::model::AuthenticityReport,
        crate::model::ScoreBreakdown,
        crate::model::LogoAnalysis,
        crate::model::LogoFinding,
        crate::model::Verdict,
        crate::model::DocumentType,
        crate::service::summary::ChatMessage,
        crate::service::summary::RewriteMode,
    )),
    tags(
        (name = "analysis", description = "Summaries and risk extraction"),
        (name = "authenticity", description = "Document authenticity verification"),
        (name = "assistant", description = "Document-grounded chat and rewriting"),
        (name = "health", description = "Service health probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_request_resolves() {
        let request = DocumentRequest {
            text: Some("  agreement text  ".to_string()),
            file_base64: None,
            mime_type: None,
            language: default_language(),
        };
        let (text, file) = request.resolve().unwrap();
        assert_eq!(text, "agreement text");
        assert!(file.is_none());
    }

    #[test]
    fn empty_request_is_rejected() {
        let request = DocumentRequest {
            text: Some("   ".to_string()),
            file_base64: None,
            mime_type: None,
            language: default_language(),
        };
        assert!(matches!(request.resolve(), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn file_without_mime_type_is_rejected() {
        let request = DocumentRequest {
            text: None,
            file_base64: Some(base64::engine::general_purpose::STANDARD.encode("hello")),
            mime_type: None,
            language: default_language(),
        };
        assert!(matches!(request.resolve(), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn text_file_resolves_with_bytes() {
        let request = DocumentRequest {
            text: None,
            file_base64: Some(base64::engine::general_purpose::STANDARD.encode("hello agreement")),
            mime_type: Some("text/plain".to_string()),
            language: default_language(),
        };
        let (text, file) = request.resolve().unwrap();
        assert_eq!(text, "hello agreement");
        let (bytes, mime) = file.unwrap();
        assert_eq!(bytes, b"hello agreement");
        assert_eq!(mime, "text/plain");
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let request = DocumentRequest {
            text: None,
            file_base64: Some("%%not-base64%%".to_string()),
            mime_type: Some("text/plain".to_string()),
            language: default_language(),
        };
        assert!(matches!(request.resolve(), Err(ApiError::BadRequest(_))));
    }
}
