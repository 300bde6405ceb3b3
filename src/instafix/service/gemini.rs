use super::prompt::{response_schema, SYSTEM_INSTRUCTION};
use super::FixGenerator;
use crate::config::FixConfig;
use crate::error::{FixError, Result};
use crate::model::FixPayload;
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::Deserialize;
use serde_json::{json, Value};

pub struct GeminiClient {
    http: ReqwestClient,
    api_key: Option<String>,
    model: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(config: &FixConfig, api_key: Option<String>) -> Self {
        Self {
            http: ReqwestClient::new(),
            api_key,
            model: config.model.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            FixError::Configuration("API_KEY environment variable is not defined".to_string())
        })
    }
}

#[async_trait(?Send)]
impl FixGenerator for GeminiClient {
    async fn generate_fix(&self, problem: &str) -> Result<FixPayload> {
        let api_key = self.api_key()?;
        let url = self.endpoint();
        let body = build_body(problem);

        log::debug!("Gemini request: {url} {body}");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(FixError::Transport(format!(
                "{} {}",
                status,
                error_message(&text)
            )));
        }

        log::debug!("Gemini response: {text}");
        parse_response(&text)
    }
}

pub fn build_body(problem: &str) -> Value {
    json!({
        "systemInstruction": {
            "parts": [{ "text": SYSTEM_INSTRUCTION }]
        },
        "contents": [{
            "role": "user",
            "parts": [{ "text": problem }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema()
        }
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts concatenated.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        Some(text)
    }
}

/// Decode a successful `generateContent` body into the declared payload.
pub fn parse_response(body: &str) -> Result<FixPayload> {
    let envelope: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| FixError::Format(format!("unreadable response envelope: {}", e)))?;

    let text = match envelope.text() {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Err(FixError::EmptyResponse),
    };

    serde_json::from_str::<FixPayload>(&text).map_err(|e| {
        log::error!("Failed to parse JSON response: {}", e);
        FixError::Format(e.to_string())
    })
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|data| data["error"]["message"].as_str().map(String::from))
        .unwrap_or_else(|| body.trim().to_string())
}
