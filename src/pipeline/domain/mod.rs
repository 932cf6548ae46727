//! Tri-state domain classification.
//!
//! Local evidence decides whenever it can. Rules are evaluated in order and
//! the first match wins:
//!
//! 1. any medicine mention → YES
//! 2. health score > 0 and ≥ hard off-topic count → YES
//! 3. hard off-topic keywords, no health signal → NO
//! 4. hard off-topic count above health score → NO
//! 5. otherwise ask the external classifier
//!
//! The external step fails open: a missing API key or a failed call yields
//! YES. A reply that is neither YES nor NO yields UNCERTAIN.

pub mod groq;
pub mod prompt;
pub mod translate;
pub mod types;

pub use groq::*;
pub use translate::*;
pub use types::*;

use std::sync::Arc;

use thiserror::Error;

use crate::config::GateConfig;
use crate::pipeline::medicine::masking::replace_with_glosses;
use crate::pipeline::medicine::MedicineRecognizer;
use crate::pipeline::scoring::{score_signals, SignalScores};

/// Source language of user messages.
pub const SOURCE_LANGUAGE: &str = "tr";

/// Language the external classifier is prompted in.
pub const CLASSIFIER_LANGUAGE: &str = "en";

/// Translation is skipped for inputs shorter than this (trimmed chars).
const MIN_TRANSLATE_CHARS: usize = 2;

#[derive(Error, Debug, Clone)]
pub enum ServiceError {
    #[error("No API key configured")]
    MissingCredentials,

    #[error("Service is not reachable at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Service returned error (status {status}): {body}")]
    Http { status: u16, body: String },

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

/// Map a raw classifier reply to a verdict by case-insensitive prefix.
pub fn parse_verdict(raw: &str) -> DomainVerdict {
    let reply = raw.trim().to_uppercase();
    if reply.starts_with("YES") {
        DomainVerdict::Yes
    } else if reply.starts_with("NO") {
        DomainVerdict::No
    } else {
        DomainVerdict::Uncertain
    }
}

/// Rules 2-4 over precomputed scores. `None` means local evidence is
/// inconclusive.
pub fn decide_from_scores(scores: &SignalScores) -> Option<(DomainVerdict, DecisionRule)> {
    let health = scores.health_score();
    let hard = scores.hard_non_health;

    if health > 0 && health >= hard {
        return Some((DomainVerdict::Yes, DecisionRule::HealthSignal));
    }
    if hard > 0 && health == 0 {
        return Some((DomainVerdict::No, DecisionRule::HardNonHealthOnly));
    }
    if hard > health {
        return Some((DomainVerdict::No, DecisionRule::HardNonHealthDominant));
    }
    None
}

/// Domain classifier with injected translation and LLM collaborators.
pub struct DomainClassifier {
    recognizer: MedicineRecognizer,
    translator: Arc<dyn Translate>,
    llm: Arc<dyn LlmClassify>,
}

impl DomainClassifier {
    pub fn new(
        recognizer: MedicineRecognizer,
        translator: Arc<dyn Translate>,
        llm: Arc<dyn LlmClassify>,
    ) -> Self {
        Self { recognizer, translator, llm }
    }

    /// Classifier backed by Google translate and Groq.
    pub fn from_config(config: &GateConfig) -> Result<Self, ServiceError> {
        Ok(Self::new(
            MedicineRecognizer::new(config.fuzzy_max_distance),
            Arc::new(GoogleTranslator::from_config(config)?),
            Arc::new(GroqClient::from_config(config)?),
        ))
    }

    pub fn recognizer(&self) -> &MedicineRecognizer {
        &self.recognizer
    }

    pub fn classify(&self, text: &str) -> DomainVerdict {
        self.classify_detailed(text).verdict
    }

    /// Verdict together with the rule and evidence that produced it.
    pub fn classify_detailed(&self, text: &str) -> ClassificationResult {
        let medicines = self.recognizer.detect(text);
        let scores = score_signals(text);

        let (verdict, rule) = if !medicines.is_empty() {
            (DomainVerdict::Yes, DecisionRule::MedicineMention)
        } else if let Some(decision) = decide_from_scores(&scores) {
            decision
        } else {
            self.ask_classifier(text)
        };

        tracing::info!(
            verdict = verdict.as_str(),
            rule = rule.as_str(),
            medicines = medicines.len(),
            health_score = scores.health_score(),
            hard_non_health = scores.hard_non_health,
            soft_non_health = scores.soft_non_health,
            "Domain classified"
        );

        ClassificationResult { verdict, rule, medicines, scores }
    }

    fn ask_classifier(&self, text: &str) -> (DomainVerdict, DecisionRule) {
        if !self.llm.has_credentials() {
            tracing::warn!("No classifier credentials, leaning towards YES");
            return (DomainVerdict::Yes, DecisionRule::FailOpen);
        }

        let message_en = self.translate_for_classifier(text);
        let request = ClassifierRequest::domain_check(&message_en);

        match self.llm.complete(&request) {
            Ok(raw) => (parse_verdict(&raw), DecisionRule::LlmClassifier),
            Err(e) => {
                tracing::warn!(error = %e, "Classifier call failed, leaning towards YES");
                (DomainVerdict::Yes, DecisionRule::FailOpen)
            }
        }
    }

    /// English rendering of `text` for the classifier prompt. Falls back to
    /// the original text when translation fails.
    fn translate_for_classifier(&self, text: &str) -> String {
        if text.trim().chars().count() < MIN_TRANSLATE_CHARS {
            return text.to_string();
        }

        let preprocessed = replace_with_glosses(&self.recognizer, text);
        match self
            .translator
            .translate(&preprocessed, SOURCE_LANGUAGE, CLASSIFIER_LANGUAGE)
        {
            Ok(translated) => translated,
            Err(e) => {
                tracing::warn!(error = %e, "Translation failed, using original text");
                text.to_string()
            }
        }
    }
}
