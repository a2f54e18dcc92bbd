//! Logo-detection (vision) API client
//!
//! Wraps a Google-Vision-style `images:annotate` REST endpoint behind the
//! [`LogoDetector`] trait so the logo checker can be tested with scripted
//! doubles.

use std::env;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const VISION_API_BASE_URL: &str = "https://vision.googleapis.com/v1";
const VISION_BASE_URL_ENV: &str = "VISION_BASE_URL";
const VISION_API_KEY_ENV: &str = "VISION_API_KEY";

/// Maximum logo detections requested per image
const MAX_RESULTS: u32 = 10;

#[derive(Debug, thiserror::Error)]
pub enum VisionError {
    #[error("Missing vision API key ({VISION_API_KEY_ENV})")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// One logo detection from the vision oracle.
#[derive(Debug, Clone)]
pub struct LogoDetection {
    /// Detected logo label (brand or institution name)
    pub description: String,
    /// Detection confidence in [0,1]
    pub confidence: f32,
    /// Bounding polygon vertices, if reported
    pub bounding_box: Vec<(i32, i32)>,
}

/// A logo-detection oracle: image bytes in, detections out.
#[async_trait]
pub trait LogoDetector: Send + Sync {
    async fn detect_logos(&self, image: &[u8]) -> Result<Vec<LogoDetection>, VisionError>;
}

#[derive(Serialize)]
struct AnnotateRequest<'a> {
    requests: Vec<ImageRequest<'a>>,
}

#[derive(Serialize)]
struct ImageRequest<'a> {
    image: ImageContent,
    features: Vec<Feature<'a>>,
}

#[derive(Serialize)]
struct ImageContent {
    content: String,
}

#[derive(Serialize)]
struct Feature<'a> {
    #[serde(rename = "type")]
    feature_type: &'a str,
    #[serde(rename = "maxResults")]
    max_results: u32,
}

#[derive(Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<ImageResponse>,
}

#[derive(Deserialize, Default)]
struct ImageResponse {
    #[serde(rename = "logoAnnotations", default)]
    logo_annotations: Vec<LogoAnnotation>,
}

#[derive(Deserialize)]
struct LogoAnnotation {
    #[serde(default)]
    description: String,
    #[serde(default)]
    score: f32,
    #[serde(rename = "boundingPoly", default)]
    bounding_poly: Option<BoundingPoly>,
}

#[derive(Deserialize)]
struct BoundingPoly {
    #[serde(default)]
    vertices: Vec<Vertex>,
}

#[derive(Deserialize, Default)]
struct Vertex {
    #[serde(default)]
    x: i32,
    #[serde(default)]
    y: i32,
}

/// Client for a vision annotate API with logo detection
pub struct VisionClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl VisionClient {
    /// Create a new vision client
    ///
    /// Requires `VISION_API_KEY`; the base URL can be overridden with
    /// `VISION_BASE_URL`.
    pub fn new() -> Result<Self, VisionError> {
        let api_key = env::var(VISION_API_KEY_ENV).map_err(|_| VisionError::MissingApiKey)?;
        let base_url =
            env::var(VISION_BASE_URL_ENV).unwrap_or_else(|_| VISION_API_BASE_URL.to_string());

        Ok(Self {
            client: Client::new(),
            base_url,
            api_key,
        })
    }
}

#[async_trait]
impl LogoDetector for VisionClient {
    async fn detect_logos(&self, image: &[u8]) -> Result<Vec<LogoDetection>, VisionError> {
        let url = format!("{}/images:annotate?key={}", self.base_url, self.api_key);

        let body = AnnotateRequest {
            requests: vec![ImageRequest {
                image: ImageContent {
                    content: BASE64.encode(image),
                },
                features: vec![Feature {
                    feature_type: "LOGO_DETECTION",
                    max_results: MAX_RESULTS,
                }],
            }],
        };

        tracing::debug!(image_bytes = image.len(), "Requesting logo detection");

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(VisionError::ParseError(format!(
                "Unexpected status {}: {}",
                status, body
            )));
        }

        let annotate: AnnotateResponse = response
            .json()
            .await
            .map_err(|e| VisionError::ParseError(format!("Failed to deserialize response: {}", e)))?;

        let detections: Vec<LogoDetection> = annotate
            .responses
            .into_iter()
            .flat_map(|r| r.logo_annotations)
            .map(|a| LogoDetection {
                description: a.description,
                confidence: a.score.clamp(0.0, 1.0),
                bounding_box: a
                    .bounding_poly
                    .map(|p| p.vertices.into_iter().map(|v| (v.x, v.y)).collect())
                    .unwrap_or_default(),
            })
            .collect();

        tracing::debug!(detections = detections.len(), "Logo detection complete");

        Ok(detections)
    }
}
