/// LLM Client — the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All model interactions MUST go through this module, via the
/// `TextGenerator` trait so pipeline code can be exercised against stubs.
///
/// Model: gemini-2.0-flash (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
/// The model used for all LLM calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("AI analysis is not available (no API key configured)")]
    Unavailable,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("No valid JSON found in model response")]
    NoJson,

    #[error("Failed to parse model response JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Model returned empty content")]
    EmptyContent,
}

/// A text generation backend. Held in `AppState` as `Arc<dyn TextGenerator>`
/// so tests can script replies without a network.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Requests exactly one generation for the given prompt.
    /// No retry — each pipeline stage makes a single model call.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiReplyContent,
}

#[derive(Debug, Deserialize)]
struct GeminiReplyContent {
    #[serde(default)]
    parts: Vec<GeminiReplyPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiReplyPart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// The production Gemini client. Constructed once at startup; an absent API
/// key is a constructor-time configuration state, surfaced on every call as
/// `LlmError::Unavailable` rather than a startup failure.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, GEMINI_API_BASE.to_string())
    }

    pub fn with_base_url(api_key: Option<String>, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            base_url,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::Unavailable)?;

        let request_body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, MODEL, api_key
        );

        let response = self.client.post(&url).json(&request_body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to pull out the structured error message
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let reply: GeminiResponse = response.json().await?;

        let text = reply
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().find_map(|p| p.text))
            .ok_or(LlmError::EmptyContent)?;

        debug!("LLM call succeeded: {} chars returned", text.len());

        Ok(text)
    }
}

/// Extracts the first brace-delimited JSON object from model output by greedy
/// scan (first `{` to last `}`). Models routinely wrap JSON in prose or code
/// fences; this mirrors a `\{[\s\S]*\}` match.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json_object_bare() {
        let input = r#"{"key": "value"}"#;
        assert_eq!(extract_json_object(input), Some(r#"{"key": "value"}"#));
    }

    #[test]
    fn test_extract_json_object_wrapped_in_prose() {
        let input = "Here is the analysis you asked for:\n{\"score\": 5}\nHope that helps!";
        assert_eq!(extract_json_object(input), Some("{\"score\": 5}"));
    }

    #[test]
    fn test_extract_json_object_with_code_fences() {
        let input = "```json\n{\"a\": {\"b\": 1}}\n```";
        assert_eq!(extract_json_object(input), Some("{\"a\": {\"b\": 1}}"));
    }

    #[test]
    fn test_extract_json_object_greedy_spans_nested_objects() {
        let input = "x {\"a\": 1} y {\"b\": 2} z";
        // Greedy: first `{` to last `}`, matching the reference regex scan.
        assert_eq!(extract_json_object(input), Some("{\"a\": 1} y {\"b\": 2}"));
    }

    #[test]
    fn test_extract_json_object_no_json() {
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object("} reversed {"), None);
    }

    #[test]
    fn test_unconfigured_client_is_unavailable() {
        let client = GeminiClient::new(None);
        assert!(!client.is_configured());
    }
}
