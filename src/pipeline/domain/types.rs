use serde::{Deserialize, Serialize};

use super::ServiceError;
use crate::pipeline::medicine::DetectedMedicine;
use crate::pipeline::scoring::SignalScores;

/// Tri-state answer to "is this message about health?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DomainVerdict {
    Yes,
    No,
    Uncertain,
}

impl DomainVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "YES",
            Self::No => "NO",
            Self::Uncertain => "UNCERTAIN",
        }
    }
}

/// Which decision rule produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionRule {
    /// A medicine mention was found.
    MedicineMention,
    /// Health score is positive and not below the hard off-topic count.
    HealthSignal,
    /// Hard off-topic keywords and no health signal.
    HardNonHealthOnly,
    /// Hard off-topic keywords outnumber health signals.
    HardNonHealthDominant,
    /// The external classifier answered.
    LlmClassifier,
    /// The external classifier was unavailable; defaulted to YES.
    FailOpen,
}

impl DecisionRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MedicineMention => "medicine_mention",
            Self::HealthSignal => "health_signal",
            Self::HardNonHealthOnly => "hard_non_health_only",
            Self::HardNonHealthDominant => "hard_non_health_dominant",
            Self::LlmClassifier => "llm_classifier",
            Self::FailOpen => "fail_open",
        }
    }
}

/// Verdict plus the evidence behind it, for logs and tests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub verdict: DomainVerdict,
    pub rule: DecisionRule,
    pub medicines: Vec<DetectedMedicine>,
    pub scores: SignalScores,
}

/// One call to the external YES/NO/UNCERTAIN classifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifierRequest {
    pub system_prompt: String,
    pub user_message: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub stop: Vec<String>,
}

/// Machine translation (allows mocking).
pub trait Translate: Send + Sync {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, ServiceError>;
}

/// Chat-completion classifier (allows mocking).
pub trait LlmClassify: Send + Sync {
    /// Raw reply text for `request`.
    fn complete(&self, request: &ClassifierRequest) -> Result<String, ServiceError>;

    /// False when no API key is configured.
    fn has_credentials(&self) -> bool;
}
