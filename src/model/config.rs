use std::fs;
use std::path::Path;

use serde::Deserialize;

const ENV_CONFIG_PATH: &str = "LEGALEASE_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Score-fusion policy constants for the authenticity engine.
///
/// The caps and weights are fixed policy values, not derived quantities; they
/// can be overridden from the config file but default to the tuned values.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct FusionPolicy {
    /// Confidence cap for FAKE verdicts when the precheck score is very low
    pub fake_cap_low_precheck: u8,
    /// Confidence cap for FAKE verdicts otherwise
    pub fake_cap: u8,
    /// Precheck score below which the stricter FAKE cap applies
    pub fake_precheck_threshold: u8,
    /// LLM weight for REAL verdict confidence blending
    pub real_llm_weight: f64,
    /// LLM weight for SUSPICIOUS verdict confidence blending
    pub suspicious_llm_weight: f64,
    /// Precheck score below which a REAL verdict may be downgraded
    pub real_downgrade_precheck_threshold: u8,
    /// LLM score below which a REAL verdict may be downgraded
    pub real_downgrade_llm_threshold: f64,
    /// LLM weight when blending in the logo authenticity signal
    pub logo_blend_llm_weight: f64,
}

impl Default for FusionPolicy {
    fn default() -> Self {
        Self {
            fake_cap_low_precheck: 25,
            fake_cap: 40,
            fake_precheck_threshold: 20,
            real_llm_weight: 0.7,
            suspicious_llm_weight: 0.6,
            real_downgrade_precheck_threshold: 30,
            real_downgrade_llm_threshold: 60.0,
            logo_blend_llm_weight: 0.8,
        }
    }
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub fusion: FusionPolicy,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub fusion: FusionPolicy,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fusion: FusionPolicy::default(),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and optional config file
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let fusion = Self::load_config_file(&config_path)
            .map(|cf| cf.fusion)
            .unwrap_or_default();

        Self { fusion, port, host }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => {
                let contents = contents.trim();
                if contents.is_empty() {
                    tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
                    return Some(ConfigFile::default());
                }

                match serde_yaml::from_str(contents) {
                    Ok(config) => {
                        tracing::info!(path = %path.display(), "Loaded configuration from file");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                        None
                    }
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
