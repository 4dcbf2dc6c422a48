//! Gemini `generateContent` client.

use crate::config::AdvisorConfig;
use crate::error::AdvisorError;
use crate::service::{TextService, advice_prompt, nickname_prompt, tidy_nickname};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Serialize)]
struct Request<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct Response {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl Response {
    /// Trimmed text of the first candidate, if any.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content.parts.iter().filter_map(|p| p.text.as_deref()).collect();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

/// HTTP client for the Gemini API. Without an API key every call falls back
/// locally and nothing is sent.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key_env: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Build a client, reading the API key from the configured environment variable.
    pub fn new(config: &AdvisorConfig) -> Result<Self, AdvisorError> {
        let http = reqwest::Client::builder().timeout(config.request_timeout()).build()?;
        let api_key = config.api_key();
        if api_key.is_none() {
            warn!("{} not set, AI features will use offline fallbacks", config.api_key_env);
        }
        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key_env: config.api_key_env.clone(),
            api_key,
        })
    }

    /// Replace the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    /// Send one prompt and return the trimmed reply.
    pub async fn generate(&self, prompt: &str) -> Result<String, AdvisorError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AdvisorError::MissingKey(self.api_key_env.clone()))?;

        let request = Request {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisorError::Status { status, body });
        }

        let body: Response = response.json().await?;
        debug!("{} replied with {} candidate(s)", self.model, body.candidates.len());
        body.text().ok_or(AdvisorError::EmptyResponse)
    }
}

impl TextService for GeminiClient {
    async fn nickname(&self, theme: &str) -> String {
        let result = self
            .generate(&nickname_prompt(theme))
            .await
            .and_then(|text| tidy_nickname(&text).ok_or(AdvisorError::EmptyResponse));
        match result {
            Ok(name) => name,
            Err(err) => {
                let fallback = err.nickname_fallback();
                warn!("Nickname generation failed ({}), using {:?}", err, fallback);
                fallback
            }
        }
    }

    async fn advice(&self, mass: u32, threats: u32) -> String {
        match self.generate(&advice_prompt(mass, threats)).await {
            Ok(text) => text,
            Err(err) => {
                let fallback = err.advice_fallback();
                warn!("Advice generation failed ({}), using fallback", err);
                fallback.to_string()
            }
        }
    }
}
