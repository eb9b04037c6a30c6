/// LLM Client — the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the generative-language API
/// directly. All LLM interactions MUST go through this module, behind the
/// `TextGenerator` trait.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// One conversational turn, either the user's prompt or the model's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Model,
}

impl TurnRole {
    fn as_str(self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Model => "model",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Turn {
            role: TurnRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Turn {
            role: TurnRole::Model,
            text: text.into(),
        }
    }
}

/// Text generation seam. The production implementation is `GeminiClient`;
/// tests substitute a mock so the pipeline can be exercised offline.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// One generation attempt over the supplied turn history.
    /// No retry, no cache — a failed call is surfaced as-is and the user
    /// re-triggers manually.
    async fn generate(&self, system: &str, turns: &[Turn]) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini wire types (camelCase JSON per the generativelanguage API)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: SystemInstruction<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction<'a> {
    parts: Vec<PartRef<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<PartRef<'a>>,
}

#[derive(Debug, Serialize)]
struct PartRef<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: String,
}

impl GenerateContentResponse {
    /// Concatenates the text of every part of every candidate.
    fn text(&self) -> String {
        self.candidates
            .iter()
            .flat_map(|c| c.content.parts.iter())
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// The single LLM client used by the generation pipeline.
/// Wraps the Gemini `generateContent` endpoint. Model id and credential are
/// injected at construction — no ambient global state.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            endpoint: format!("{GEMINI_BASE_URL}/models/{model}:generateContent"),
        }
    }

    fn build_request<'a>(system: &'a str, turns: &'a [Turn]) -> GenerateContentRequest<'a> {
        GenerateContentRequest {
            system_instruction: SystemInstruction {
                parts: vec![PartRef { text: system }],
            },
            contents: turns
                .iter()
                .map(|t| Content {
                    role: t.role.as_str(),
                    parts: vec![PartRef { text: &t.text }],
                })
                .collect(),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, system: &str, turns: &[Turn]) -> Result<String, LlmError> {
        let request_body = Self::build_request(system, turns);

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the API's own message when the body parses
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = parsed.text();

        if text.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }

        debug!("LLM call succeeded: {} chars returned", text.len());

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_system_instruction_camel_case() {
        let turns = vec![Turn::user("hello")];
        let req = GeminiClient::build_request("You are helpful", &turns);
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(
            json["systemInstruction"]["parts"][0]["text"],
            "You are helpful"
        );
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn test_request_maps_model_role() {
        let turns = vec![Turn::user("q"), Turn::model("a"), Turn::user("q2")];
        let req = GeminiClient::build_request("sys", &turns);
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["contents"].as_array().unwrap().len(), 3);
        assert_eq!(json["contents"][1]["role"], "model");
    }

    #[test]
    fn test_response_text_joins_candidate_parts() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Module 1"}, {"text": "Module 2"}]}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.text(), "Module 1\nModule 2");
    }

    #[test]
    fn test_response_without_candidates_is_empty() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.text().is_empty());
    }

    #[test]
    fn test_error_body_parses_api_message() {
        let raw = r#"{"error": {"code": 429, "message": "Resource exhausted", "status": "RESOURCE_EXHAUSTED"}}"#;
        let parsed: GeminiError = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.error.message, "Resource exhausted");
    }
}
