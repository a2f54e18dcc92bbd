//! Logo authenticity checker
//!
//! Extracts embedded raster images from the uploaded document, runs them
//! through the logo-detection oracle, and scores every detected logo against
//! the known-brand reference table. Never raises past its boundary: any
//! extraction or detection failure returns a neutral, well-formed result.

use std::collections::BTreeSet;
use std::sync::Arc;

use lopdf::{Dictionary, Document, Object};

use crate::model::{LogoAnalysis, LogoFinding};
use crate::service::logos::brands::match_brand;
use crate::service::vision::{LogoDetection, LogoDetector};

pub mod brands;

/// Threshold above which a matched logo counts as authentic
const AUTHENTIC_THRESHOLD: u8 = 80;

/// Neutral score assigned to logos with no reference-table match
const UNKNOWN_LOGO_SCORE: u8 = 50;

pub struct LogoAuthenticityService {
    detector: Arc<dyn LogoDetector>,
}

impl LogoAuthenticityService {
    pub fn new(detector: Arc<dyn LogoDetector>) -> Self {
        Self { detector }
    }

    /// Check all logos embedded in a document.
    ///
    /// PDF input is scanned page by page for embedded raster images; image
    /// input is treated as a single image. Unsupported MIME types and any
    /// extraction or detection failure yield the neutral unavailable result.
    pub async fn check_document_logos(&self, file_bytes: &[u8], mime: &str) -> LogoAnalysis {
        let images = if mime == "application/pdf" {
            match extract_pdf_images(file_bytes) {
                Ok(images) => images,
                Err(e) => {
                    tracing::warn!(error = %e, "PDF image extraction failed");
                    return LogoAnalysis::unavailable();
                }
            }
        } else if mime.starts_with("image/") {
            vec![file_bytes.to_vec()]
        } else {
            tracing::debug!(mime = %mime, "No image content to scan for logos");
            return LogoAnalysis::unavailable();
        };

        let mut detections: Vec<LogoDetection> = Vec::new();
        for image in &images {
            match self.detector.detect_logos(image).await {
                Ok(found) => detections.extend(found),
                Err(e) => {
                    tracing::warn!(error = %e, "Logo detection failed");
                    return LogoAnalysis::unavailable();
                }
            }
        }

        let analysis = score_detections(&detections);
        tracing::info!(
            images = images.len(),
            logos = analysis.total_logos_detected,
            overall_score = analysis.overall_logo_authenticity_score,
            "Logo authenticity check complete"
        );
        analysis
    }
}

/// Score detections against the known-brand table and bucket them.
fn score_detections(detections: &[LogoDetection]) -> LogoAnalysis {
    let mut authentic = Vec::new();
    let mut suspicious = Vec::new();
    let mut unknown = Vec::new();
    let mut risk_factors: BTreeSet<String> = BTreeSet::new();
    let mut score_sum: u32 = 0;

    for detection in detections {
        let finding = match match_brand(&detection.description) {
            Some(brand) => {
                let score =
                    (brand.baseline_score as f32 * detection.confidence).clamp(0.0, 100.0) as u8;
                let factors: Vec<String> = if score < AUTHENTIC_THRESHOLD {
                    brand.risk_factors.iter().map(|f| f.to_string()).collect()
                } else {
                    Vec::new()
                };
                LogoFinding {
                    name: detection.description.clone(),
                    matched_brand: Some(brand.name.to_string()),
                    score,
                    detection_confidence: detection.confidence,
                    risk_factors: factors,
                }
            }
            None => LogoFinding {
                name: detection.description.clone(),
                matched_brand: None,
                score: UNKNOWN_LOGO_SCORE,
                detection_confidence: detection.confidence,
                risk_factors: vec![
                    "unverified logo origin".to_string(),
                    "not in known brand reference table".to_string(),
                ],
            },
        };

        score_sum += finding.score as u32;
        risk_factors.extend(finding.risk_factors.iter().cloned());

        match (&finding.matched_brand, finding.score) {
            (Some(_), score) if score >= AUTHENTIC_THRESHOLD => authentic.push(finding),
            (Some(_), _) => suspicious.push(finding),
            (None, _) => unknown.push(finding),
        }
    }

    let total = detections.len();
    let overall = if total == 0 {
        50
    } else {
        (score_sum / total as u32) as u8
    };

    LogoAnalysis {
        success: true,
        total_logos_detected: total,
        authentic_logos: authentic,
        suspicious_logos: suspicious,
        unknown_logos: unknown,
        overall_logo_authenticity_score: overall,
        logo_risk_factors: risk_factors.into_iter().collect(),
    }
}

/// Extract embedded raster images from a PDF, page by page.
///
/// Walks each page's resource dictionaries for XObjects with an Image
/// subtype and collects their raw stream content.
fn extract_pdf_images(bytes: &[u8]) -> Result<Vec<Vec<u8>>, lopdf::Error> {
    let doc = Document::load_mem(bytes)?;
    let mut images = Vec::new();

    for (_page_number, page_id) in doc.get_pages() {
        let (inline_resources, resource_ids) = doc.get_page_resources(page_id);

        let mut resource_dicts: Vec<&Dictionary> = Vec::new();
        if let Some(dict) = inline_resources {
            resource_dicts.push(dict);
        }
        for id in resource_ids {
            if let Ok(Object::Dictionary(dict)) = doc.get_object(id) {
                resource_dicts.push(dict);
            }
        }

        for resources in resource_dicts {
            let Ok(xobjects) = resources.get(b"XObject") else {
                continue;
            };
            let xobjects = match xobjects {
                Object::Reference(id) => match doc.get_object(*id) {
                    Ok(Object::Dictionary(dict)) => dict,
                    _ => continue,
                },
                Object::Dictionary(dict) => dict,
                _ => continue,
            };

            for (_name, entry) in xobjects.iter() {
                let stream = match entry {
                    Object::Reference(id) => match doc.get_object(*id) {
                        Ok(Object::Stream(stream)) => stream,
                        _ => continue,
                    },
                    Object::Stream(stream) => stream,
                    _ => continue,
                };

                let is_image = stream
                    .dict
                    .get(b"Subtype")
                    .and_then(|o| o.as_name())
                    .map(|name| name == b"Image")
                    .unwrap_or(false);

                if is_image {
                    images.push(stream.content.clone());
                }
            }
        }
    }

    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::service::vision::VisionError;

    struct ScriptedDetector {
        detections: Mutex<Option<Result<Vec<LogoDetection>, ()>>>,
    }

    impl ScriptedDetector {
        fn detecting(detections: Vec<LogoDetection>) -> Self {
            Self {
                detections: Mutex::new(Some(Ok(detections))),
            }
        }

        fn failing() -> Self {
            Self {
                detections: Mutex::new(Some(Err(()))),
            }
        }
    }

    #[async_trait]
    impl LogoDetector for ScriptedDetector {
        async fn detect_logos(&self, _image: &[u8]) -> Result<Vec<LogoDetection>, VisionError> {
            match self.detections.lock().unwrap().take() {
                Some(Ok(detections)) => Ok(detections),
                _ => Err(VisionError::ParseError("scripted failure".to_string())),
            }
        }
    }

    fn detection(label: &str, confidence: f32) -> LogoDetection {
        LogoDetection {
            description: label.to_string(),
            confidence,
            bounding_box: Vec::new(),
        }
    }

    #[tokio::test]
    async fn known_brand_with_high_confidence_is_authentic() {
        let service = LogoAuthenticityService::new(Arc::new(ScriptedDetector::detecting(vec![
            detection("Google", 0.95),
        ])));
        let analysis = service.check_document_logos(b"img", "image/png").await;
        assert!(analysis.success);
        assert_eq!(analysis.total_logos_detected, 1);
        assert_eq!(analysis.authentic_logos.len(), 1);
        // 95 * 0.95 = 90.25 -> 90
        assert_eq!(analysis.authentic_logos[0].score, 90);
        assert_eq!(analysis.overall_logo_authenticity_score, 90);
    }

    #[tokio::test]
    async fn known_brand_with_low_confidence_is_suspicious() {
        let service = LogoAuthenticityService::new(Arc::new(ScriptedDetector::detecting(vec![
            detection("Visa card logo", 0.6),
        ])));
        let analysis = service.check_document_logos(b"img", "image/jpeg").await;
        assert_eq!(analysis.suspicious_logos.len(), 1);
        // 90 * 0.6 = 54
        assert_eq!(analysis.suspicious_logos[0].score, 54);
        assert!(!analysis.logo_risk_factors.is_empty());
    }

    #[tokio::test]
    async fn unmatched_logo_is_unknown_with_neutral_score() {
        let service = LogoAuthenticityService::new(Arc::new(ScriptedDetector::detecting(vec![
            detection("Acme Widgets", 0.9),
        ])));
        let analysis = service.check_document_logos(b"img", "image/png").await;
        assert_eq!(analysis.unknown_logos.len(), 1);
        assert_eq!(analysis.unknown_logos[0].score, 50);
        assert!(analysis
            .logo_risk_factors
            .iter()
            .any(|f| f.contains("unverified")));
    }

    #[tokio::test]
    async fn detection_failure_returns_neutral_result() {
        let service = LogoAuthenticityService::new(Arc::new(ScriptedDetector::failing()));
        let analysis = service.check_document_logos(b"img", "image/png").await;
        assert!(!analysis.success);
        assert_eq!(analysis.overall_logo_authenticity_score, 50);
        assert!(analysis.authentic_logos.is_empty());
    }

    #[tokio::test]
    async fn unsupported_mime_returns_neutral_result() {
        let service = LogoAuthenticityService::new(Arc::new(ScriptedDetector::detecting(vec![])));
        let analysis = service
            .check_document_logos(b"plain text", "text/plain")
            .await;
        assert!(!analysis.success);
    }

    #[tokio::test]
    async fn malformed_pdf_returns_neutral_result() {
        let service = LogoAuthenticityService::new(Arc::new(ScriptedDetector::detecting(vec![])));
        let analysis = service
            .check_document_logos(b"not a pdf", "application/pdf")
            .await;
        assert!(!analysis.success);
    }
}
