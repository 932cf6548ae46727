//! Request-level gate in front of response generation.
//!
//! Order: empty check, emergency, greeting (only without prior health
//! context), then either the follow-up check or the full domain
//! classifier.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::domain::{DomainClassifier, DomainVerdict, ServiceError};
use super::emergency;
use super::greeting::{self, GreetingKind};
use super::medicine::DetectedMedicine;
use super::scoring::{is_health_related, score_signals};
use crate::config::GateConfig;
use crate::lexicon::{self, LexiconError};

pub const OFF_TOPIC_REPLY: &str = "Merhaba! Ben sağlık odaklı bir asistanım. 🏥\n\nSadece sağlık, hastalık, semptom ve tedavi ile ilgili sorularınızda size yardımcı olabilirim. Sağlık dışı konularda maalesef yardımcı olamıyorum.\n\nSağlıkla ilgili bir sorunuz varsa, lütfen sorun!";

pub const CLARIFICATION_REPLY: &str = "Merhaba! 😊 Mesajınızı tam anlayamadım.\n\nBen sağlık konularında yardımcı olan bir asistanım. Sağlık, semptom veya ilaçlarla ilgili bir sorunuz mu var?\n\nLütfen sorunuzu biraz daha açıklayabilir misiniz?";

pub const TOPIC_CHANGE_REPLY: &str = "Anladım, konu değiştirmek istiyorsunuz. 😊\n\nAncak ben sadece sağlık konularında yardımcı olabiliyorum. Eğer sağlıkla ilgili başka bir sorunuz varsa, sormaktan çekinmeyin!\n\nÖnceki konuya devam etmek isterseniz de yanınızdayım.";

#[derive(Error, Debug)]
pub enum GateError {
    #[error("Lexicon integrity error: {0}")]
    Lexicon(#[from] LexiconError),

    #[error("Collaborator setup failed: {0}")]
    Service(#[from] ServiceError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One earlier message of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: &str) -> Self {
        Self { role: ChatRole::User, content: content.to_string() }
    }

    pub fn assistant(content: &str) -> Self {
        Self { role: ChatRole::Assistant, content: content.to_string() }
    }
}

/// What the chat handler should do with a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GateDecision {
    EmptyMessage,
    Emergency { warning: String },
    Greeting { kind: GreetingKind, reply: &'static str },
    /// Hand the message to response generation.
    Proceed { medicines: Vec<DetectedMedicine> },
    OffTopic { reply: &'static str },
    NeedsClarification { reply: &'static str },
    /// Off-topic message in the middle of a health conversation.
    TopicChange { reply: &'static str },
}

impl GateDecision {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyMessage => "empty_message",
            Self::Emergency { .. } => "emergency",
            Self::Greeting { .. } => "greeting",
            Self::Proceed { .. } => "proceed",
            Self::OffTopic { .. } => "off_topic",
            Self::NeedsClarification { .. } => "needs_clarification",
            Self::TopicChange { .. } => "topic_change",
        }
    }

    pub fn proceeds(&self) -> bool {
        matches!(self, Self::Proceed { .. })
    }
}

/// True when an earlier user turn (not a greeting) was about health.
pub fn has_health_context(history: &[ChatTurn]) -> bool {
    history
        .iter()
        .filter(|turn| turn.role == ChatRole::User)
        .any(|turn| !greeting::is_greeting(&turn.content) && is_health_related(&turn.content))
}

pub struct ChatGate {
    classifier: DomainClassifier,
}

impl ChatGate {
    /// Gate with the Groq and Google collaborators from `config`.
    pub fn new(config: &GateConfig) -> Result<Self, GateError> {
        Self::with_classifier(DomainClassifier::from_config(config)?)
    }

    /// Gate around an existing classifier. Validates the lexicons once.
    pub fn with_classifier(classifier: DomainClassifier) -> Result<Self, GateError> {
        lexicon::validate()?;
        tracing::info!(
            fuzzy_max_distance = classifier.recognizer().max_distance(),
            "Chat gate ready"
        );
        Ok(Self { classifier })
    }

    pub fn classifier(&self) -> &DomainClassifier {
        &self.classifier
    }

    pub fn evaluate(&self, message: &str, history: &[ChatTurn]) -> GateDecision {
        let decision = self.decide(message.trim(), history);
        tracing::info!(
            decision = decision.kind(),
            history_len = history.len(),
            "Gate decision"
        );
        decision
    }

    /// `evaluate` on the blocking pool. A failed task proceeds.
    pub async fn evaluate_async(
        self: Arc<Self>,
        message: String,
        history: Vec<ChatTurn>,
    ) -> GateDecision {
        match tokio::task::spawn_blocking(move || self.evaluate(&message, &history)).await {
            Ok(decision) => decision,
            Err(e) => {
                tracing::warn!(error = %e, "Gate task failed, letting message through");
                GateDecision::Proceed { medicines: Vec::new() }
            }
        }
    }

    fn decide(&self, message: &str, history: &[ChatTurn]) -> GateDecision {
        if message.is_empty() {
            return GateDecision::EmptyMessage;
        }

        if let Some(finding) = emergency::assess(message) {
            return GateDecision::Emergency { warning: finding.warning() };
        }

        let health_context = has_health_context(history);
        if let Some(kind) = greeting::classify_greeting(message) {
            if !health_context {
                return GateDecision::Greeting {
                    kind,
                    reply: greeting::greeting_response(kind),
                };
            }
            return self.proceed(message);
        }

        if health_context {
            return self.follow_up(message);
        }

        let result = self.classifier.classify_detailed(message);
        match result.verdict {
            DomainVerdict::Yes => GateDecision::Proceed { medicines: result.medicines },
            DomainVerdict::No => GateDecision::OffTopic { reply: OFF_TOPIC_REPLY },
            DomainVerdict::Uncertain => {
                GateDecision::NeedsClarification { reply: CLARIFICATION_REPLY }
            }
        }
    }

    /// Inside a health conversation short answers ("evet", "3 gündür")
    /// pass. Only a hard off-topic switch is refused.
    fn follow_up(&self, message: &str) -> GateDecision {
        let scores = score_signals(message);
        if !scores.has_health_signal() && scores.hard_non_health > 0 {
            tracing::debug!(matched = ?scores.matched_hard, "Topic change in follow-up");
            return GateDecision::TopicChange { reply: TOPIC_CHANGE_REPLY };
        }
        self.proceed(message)
    }

    fn proceed(&self, message: &str) -> GateDecision {
        GateDecision::Proceed {
            medicines: self.classifier.recognizer().detect(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::domain::{MockClassifierClient, MockTranslator};
    use crate::pipeline::medicine::MedicineRecognizer;

    fn gate_with(llm: MockClassifierClient) -> (ChatGate, Arc<MockClassifierClient>) {
        let llm = Arc::new(llm);
        let classifier = DomainClassifier::new(
            MedicineRecognizer::default(),
            Arc::new(MockTranslator::echo()),
            llm.clone(),
        );
        (ChatGate::with_classifier(classifier).unwrap(), llm)
    }

    fn gate() -> ChatGate {
        gate_with(MockClassifierClient::replying("NO")).0
    }

    // =================================================================
    // First message
    // =================================================================

    #[test]
    fn empty_message() {
        assert_eq!(gate().evaluate("   ", &[]), GateDecision::EmptyMessage);
    }

    #[test]
    fn symptom_question_proceeds() {
        let decision = gate().evaluate("3 gündür başım ağrıyor, ne yapmalıyım?", &[]);
        assert_eq!(decision, GateDecision::Proceed { medicines: vec![] });
    }

    #[test]
    fn sports_question_is_off_topic() {
        assert_eq!(
            gate().evaluate("Galatasaray maç sonucu ne oldu?", &[]),
            GateDecision::OffTopic { reply: OFF_TOPIC_REPLY }
        );
    }

    #[test]
    fn medicine_question_carries_medicines() {
        let GateDecision::Proceed { medicines } = gate().evaluate("Parol aldım, midem bulandı", &[])
        else {
            panic!("expected proceed");
        };
        assert_eq!(medicines[0].canonical_name, "parol");
    }

    #[test]
    fn uncertain_asks_for_clarification() {
        let (gate, llm) = gate_with(MockClassifierClient::replying("UNCERTAIN"));
        assert_eq!(
            gate.evaluate("Tatil için otel önerir misin?", &[]),
            GateDecision::NeedsClarification { reply: CLARIFICATION_REPLY }
        );
        assert_eq!(llm.call_count(), 1);
    }

    #[test]
    fn classifier_outage_lets_message_through() {
        let (gate, _) = gate_with(MockClassifierClient::failing(ServiceError::Timeout(10)));
        assert!(gate.evaluate("Tatil için otel önerir misin?", &[]).proceeds());
    }

    // =================================================================
    // Emergency and greeting
    // =================================================================

    #[test]
    fn emergency_comes_before_greeting() {
        let GateDecision::Emergency { warning } = gate().evaluate("Merhaba, nefes alamıyorum", &[])
        else {
            panic!("expected emergency");
        };
        assert!(warning.contains("112"));
    }

    #[test]
    fn resolved_chest_pain_is_not_emergency() {
        let decision = gate().evaluate("Göğüs ağrısı var ama geçti", &[]);
        assert_ne!(decision.kind(), "emergency");
    }

    #[test]
    fn greeting_gets_canned_reply() {
        assert_eq!(
            gate().evaluate("Merhaba", &[]),
            GateDecision::Greeting {
                kind: GreetingKind::Hello,
                reply: greeting::greeting_response(GreetingKind::Hello),
            }
        );
    }

    #[test]
    fn greeting_only_history_is_not_health_context() {
        let history = [ChatTurn::user("Merhaba"), ChatTurn::assistant("Merhaba! 👋")];
        assert!(!has_health_context(&history));
        assert_eq!(gate().evaluate("Nasılsın", &history).kind(), "greeting");
    }

    // =================================================================
    // Follow-up
    // =================================================================

    fn health_history() -> Vec<ChatTurn> {
        vec![
            ChatTurn::user("Başım ağrıyor"),
            ChatTurn::assistant("Ne zamandır ağrıyor?"),
        ]
    }

    #[test]
    fn assistant_turns_do_not_count_as_context() {
        assert!(!has_health_context(&[ChatTurn::assistant("Başınız ağrıyor mu?")]));
        assert!(has_health_context(&health_history()));
    }

    #[test]
    fn short_follow_up_proceeds() {
        let (gate, llm) = gate_with(MockClassifierClient::replying("NO"));
        assert!(gate.evaluate("Evet, 3 gündür", &health_history()).proceeds());
        assert_eq!(llm.call_count(), 0);
    }

    #[test]
    fn hard_topic_switch_in_follow_up() {
        assert_eq!(
            gate().evaluate("Galatasaray maç sonucu ne oldu?", &health_history()),
            GateDecision::TopicChange { reply: TOPIC_CHANGE_REPLY }
        );
    }

    #[test]
    fn soft_topic_in_follow_up_proceeds_without_classifier() {
        let (gate, llm) = gate_with(MockClassifierClient::replying("NO"));
        assert!(gate.evaluate("Tatil için otel önerir misin?", &health_history()).proceeds());
        assert_eq!(llm.call_count(), 0);
    }

    #[test]
    fn greeting_in_follow_up_proceeds() {
        assert!(gate().evaluate("Teşekkürler", &health_history()).proceeds());
    }

    // =================================================================
    // Async wrapper
    // =================================================================

    #[tokio::test]
    async fn async_evaluation_matches_sync() {
        let gate = Arc::new(gate());
        let decision = gate
            .clone()
            .evaluate_async("Galatasaray maç sonucu ne oldu?".to_string(), Vec::new())
            .await;
        assert_eq!(decision, gate.evaluate("Galatasaray maç sonucu ne oldu?", &[]));
    }

    #[test]
    fn decision_serializes_with_tag() {
        let json = serde_json::to_value(GateDecision::EmptyMessage).unwrap();
        assert_eq!(json["decision"], "empty_message");
    }
}
