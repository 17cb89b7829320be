//! Live adapter for the `LlmClient` port using the Gemini `generateContent` API.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::ports::llm::{CompletionFuture, CompletionRequest, CompletionResponse, LlmClient};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Live LLM client that calls the Google Gemini API.
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    /// Creates a new live Gemini client with the given API key.
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self { client: Client::new(), api_key }
    }
}

/// Request body sent to the Gemini `generateContent` endpoint.
#[derive(Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

/// A content block in the Gemini request.
#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

/// A single text part.
#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Generation options, including the structured-output schema.
#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(rename = "responseSchema", skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

/// Top-level response from the Gemini API.
#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata", default)]
    usage_metadata: Option<UsageMetadata>,
}

/// One response candidate.
#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

/// The content of a candidate.
#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

/// A text part in the candidate content.
#[derive(Deserialize)]
struct TextPart {
    #[serde(default)]
    text: String,
}

/// Token usage reported by the Gemini API.
#[derive(Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount", default)]
    prompt_token_count: u32,
    #[serde(rename = "candidatesTokenCount", default)]
    candidates_token_count: u32,
}

/// Error response from the Gemini API.
#[derive(Deserialize)]
struct GeminiError {
    error: GeminiErrorDetail,
}

/// Detail inside a Gemini error response.
#[derive(Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

impl LlmClient for GeminiClient {
    fn complete(&self, request: &CompletionRequest) -> CompletionFuture<'_> {
        let model = request.model.clone();
        let prompt = request.prompt.clone();
        let max_tokens = request.max_tokens;
        let response_schema = request.response_schema.clone();

        Box::pin(async move {
            let response_mime_type = response_schema.as_ref().map(|_| "application/json");
            let body = GeminiRequest {
                contents: vec![Content { parts: vec![Part { text: &prompt }] }],
                generation_config: GenerationConfig {
                    max_output_tokens: max_tokens,
                    response_mime_type,
                    response_schema,
                },
            };

            let url = format!("{GEMINI_API_BASE}/{model}:generateContent");
            let response = self
                .client
                .post(&url)
                .header("x-goog-api-key", &self.api_key)
                .json(&body)
                .send()
                .await
                .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("Gemini API request failed: {e}").into()
                })?;

            let status = response.status();
            let response_text =
                response.text().await.map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("Failed to read Gemini API response: {e}").into()
                })?;

            if !status.is_success() {
                let msg = serde_json::from_str::<GeminiError>(&response_text)
                    .map(|e| e.error.message)
                    .unwrap_or(response_text);
                return Err(format!("Gemini API error ({}): {msg}", status.as_u16()).into());
            }

            let api_response: GeminiResponse = serde_json::from_str(&response_text).map_err(
                |e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("Failed to parse Gemini API response: {e}").into()
                },
            )?;

            let Some(candidate) = api_response.candidates.into_iter().next() else {
                return Err("Gemini API returned no candidates".into());
            };
            let text =
                candidate.content.parts.into_iter().map(|part| part.text).collect::<String>();

            let usage = api_response.usage_metadata;
            Ok(CompletionResponse {
                text,
                prompt_tokens: usage.as_ref().map_or(0, |u| u.prompt_token_count),
                completion_tokens: usage.as_ref().map_or(0, |u| u.candidates_token_count),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_carries_schema_and_mime_type() {
        let body = GeminiRequest {
            contents: vec![Content { parts: vec![Part { text: "hello" }] }],
            generation_config: GenerationConfig {
                max_output_tokens: 1024,
                response_mime_type: Some("application/json"),
                response_schema: Some(json!({"type": "OBJECT"})),
            },
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 1024);
        assert_eq!(value["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn schema_free_request_omits_mime_type() {
        let body = GeminiRequest {
            contents: vec![Content { parts: vec![Part { text: "hi" }] }],
            generation_config: GenerationConfig {
                max_output_tokens: 16,
                response_mime_type: None,
                response_schema: None,
            },
        };
        let value = serde_json::to_value(&body).unwrap();
        assert!(value["generationConfig"].get("responseMimeType").is_none());
        assert!(value["generationConfig"].get("responseSchema").is_none());
    }

    #[test]
    fn response_parsing_joins_parts_and_reads_usage() {
        let raw = json!({
            "candidates": [{
                "content": { "parts": [{"text": "{\"suggestions\""}, {"text": ": []}"}] }
            }],
            "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 34 }
        });
        let parsed: GeminiResponse = serde_json::from_value(raw).unwrap();
        let text: String =
            parsed.candidates[0].content.parts.iter().map(|p| p.text.clone()).collect();
        assert_eq!(text, "{\"suggestions\": []}");
        assert_eq!(parsed.usage_metadata.as_ref().unwrap().prompt_token_count, 12);
        assert_eq!(parsed.usage_metadata.unwrap().candidates_token_count, 34);
    }

    #[test]
    fn error_body_parsing_extracts_the_message() {
        let raw = r#"{"error": {"code": 400, "message": "API key not valid"}}"#;
        let parsed: GeminiError = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.error.message, "API key not valid");
    }
}
