use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::types::{ClassifierRequest, LlmClassify};
use super::ServiceError;
use crate::config::GateConfig;

/// Groq chat-completions client (OpenAI-compatible API).
pub struct GroqClient {
    base_url: String,
    api_key: Option<String>,
    model: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl GroqClient {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        model: &str,
        timeout_secs: u64,
    ) -> Result<Self, ServiceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ServiceError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: model.to_string(),
            client,
            timeout_secs,
        })
    }

    pub fn from_config(config: &GateConfig) -> Result<Self, ServiceError> {
        Self::new(
            &config.groq_base_url,
            config.groq_api_key.clone(),
            &config.groq_model,
            config.timeout_secs,
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body<'a>(&'a self, request: &'a ClassifierRequest) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage { role: "system", content: &request.system_prompt },
                ChatMessage { role: "user", content: &request.user_message },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stop: &request.stop,
        }
    }
}

/// Request body for /chat/completions
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
    stop: &'a [String],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response body from /chat/completions
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Text of the first choice.
fn first_choice_text(response: ChatCompletionResponse) -> Result<String, ServiceError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| ServiceError::ResponseParsing("no content in first choice".to_string()))
}

impl LlmClassify for GroqClient {
    fn complete(&self, request: &ClassifierRequest) -> Result<String, ServiceError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(ServiceError::MissingCredentials);
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&self.request_body(request))
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    ServiceError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    ServiceError::Timeout(self.timeout_secs)
                } else {
                    ServiceError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ServiceError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .map_err(|e| ServiceError::ResponseParsing(e.to_string()))?;

        first_choice_text(parsed)
    }

    fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Mock classifier for testing. Returns a fixed reply and records every
/// request it receives.
pub struct MockClassifierClient {
    reply: Result<String, ServiceError>,
    credentials: bool,
    calls: Mutex<Vec<ClassifierRequest>>,
}

impl MockClassifierClient {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            credentials: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ServiceError) -> Self {
        Self {
            reply: Err(error),
            credentials: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn without_credentials(mut self) -> Self {
        self.credentials = false;
        self
    }

    pub fn calls(&self) -> Vec<ClassifierRequest> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }
}

impl LlmClassify for MockClassifierClient {
    fn complete(&self, request: &ClassifierRequest) -> Result<String, ServiceError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.clone());
        }
        if !self.credentials {
            return Err(ServiceError::MissingCredentials);
        }
        self.reply.clone()
    }

    fn has_credentials(&self) -> bool {
        self.credentials
    }
}
