//! Shared LLM client and the generative-oracle seam
//!
//! Every analysis stage consumes the oracle through the [`GenerativeOracle`]
//! trait so that components receive an injected client rather than reaching
//! for a global handle, and tests can substitute scripted doubles.

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::openai;

/// Environment variable for the analysis model (defaults to gpt-4o-mini)
const ENV_ANALYSIS_MODEL: &str = "ANALYSIS_MODEL";

/// Default model for document analysis
const DEFAULT_MODEL: &str = openai::GPT_4O_MINI;

/// Sampling mode for a completion request.
///
/// Classification and forensic stages run deterministic (temperature 0);
/// summary, chat, and clause rewriting use the provider default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sampling {
    Deterministic,
    Creative,
}

/// Error type for oracle interactions
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("text generation failed: {0}")]
    Generation(String),
}

/// A text-generation oracle: prompt in, completion text out.
#[async_trait]
pub trait GenerativeOracle: Send + Sync {
    async fn generate(&self, prompt: &str, sampling: Sampling) -> Result<String, OracleError>;
}

/// Shared LLM client wrapper backed by the OpenAI provider
#[derive(Clone)]
pub struct LlmClient {
    client: openai::Client,
    model: String,
}

impl LlmClient {
    /// Create a new LLM client with the provided API key
    ///
    /// Optionally uses the ANALYSIS_MODEL env var (defaults to gpt-4o-mini).
    pub fn new(api_key: &str) -> Self {
        let client = openai::Client::new(api_key);

        let model = std::env::var(ENV_ANALYSIS_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        tracing::info!(model = %model, "LLM client initialized");

        Self { client, model }
    }
}

#[async_trait]
impl GenerativeOracle for LlmClient {
    async fn generate(&self, prompt: &str, sampling: Sampling) -> Result<String, OracleError> {
        let start_time = std::time::Instant::now();
        let prompt_length = prompt.len();

        let mut builder = self.client.agent(&self.model);
        if sampling == Sampling::Deterministic {
            builder = builder.temperature(0.0);
        }
        let agent = builder.build();

        match agent.prompt(prompt).await {
            Ok(text) => {
                tracing::debug!(
                    model = %self.model,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    prompt_length = prompt_length,
                    response_length = text.len(),
                    "Oracle completion succeeded"
                );
                Ok(text)
            }
            Err(e) => {
                tracing::error!(
                    model = %self.model,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    prompt_length = prompt_length,
                    error = %e,
                    "Oracle completion failed"
                );
                Err(OracleError::Generation(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
pub mod test_support {
    use std::sync::Mutex;

    use super::*;

    /// Oracle double that replays a fixed script of responses in order.
    /// An `Err` entry simulates a transport failure.
    pub struct ScriptedOracle {
        responses: Mutex<Vec<Result<String, String>>>,
    }

    impl ScriptedOracle {
        pub fn new(responses: Vec<Result<String, String>>) -> Self {
            Self {
                responses: Mutex::new(responses),
            }
        }

        pub fn replying(text: &str) -> Self {
            Self::new(vec![Ok(text.to_string())])
        }

        pub fn failing() -> Self {
            Self::new(vec![])
        }
    }

    #[async_trait]
    impl GenerativeOracle for ScriptedOracle {
        async fn generate(&self, _prompt: &str, _sampling: Sampling) -> Result<String, OracleError> {
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                return Err(OracleError::Generation("oracle unreachable".to_string()));
            }
            responses.remove(0).map_err(OracleError::Generation)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_with_a_model_configured() {
        let client = LlmClient::new("test-key");
        assert!(!client.model.is_empty());
    }
}
