use std::sync::Mutex;

use super::types::Translate;
use super::ServiceError;
use crate::config::GateConfig;

/// Client for the public Google translate endpoint.
pub struct GoogleTranslator {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl GoogleTranslator {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ServiceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ServiceError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        })
    }

    pub fn from_config(config: &GateConfig) -> Result<Self, ServiceError> {
        Self::new(&config.translate_base_url, config.timeout_secs)
    }
}

/// Join the translated segments of a `translate_a/single` reply.
///
/// The reply is a nested array whose first element lists
/// `[translated, original, ...]` per sentence.
fn join_segments(reply: &serde_json::Value) -> Result<String, ServiceError> {
    let segments = reply
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| ServiceError::ResponseParsing("missing sentence list".to_string()))?;

    Ok(segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|s| s.as_str()))
        .collect())
}

impl Translate for GoogleTranslator {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, ServiceError> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let url = format!("{}/translate_a/single", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
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

        let reply: serde_json::Value = response
            .json()
            .map_err(|e| ServiceError::ResponseParsing(e.to_string()))?;

        join_segments(&reply)
    }
}

/// Mock translator for testing.
pub struct MockTranslator {
    reply: Option<Result<String, ServiceError>>,
    calls: Mutex<Vec<String>>,
}

impl MockTranslator {
    /// Returns its input unchanged.
    pub fn echo() -> Self {
        Self { reply: None, calls: Mutex::new(Vec::new()) }
    }

    pub fn replying(text: &str) -> Self {
        Self { reply: Some(Ok(text.to_string())), calls: Mutex::new(Vec::new()) }
    }

    pub fn failing(error: ServiceError) -> Self {
        Self { reply: Some(Err(error)), calls: Mutex::new(Vec::new()) }
    }

    /// Texts passed to `translate`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Translate for MockTranslator {
    fn translate(&self, text: &str, _source: &str, _target: &str) -> Result<String, ServiceError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(text.to_string());
        }
        match &self.reply {
            None => Ok(text.to_string()),
            Some(reply) => reply.clone(),
        }
    }
}
