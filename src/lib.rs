pub mod config;
pub mod lexicon;
pub mod pipeline;

use tracing_subscriber::EnvFilter;

pub use pipeline::domain::{ClassificationResult, DomainClassifier, DomainVerdict, ServiceError};
pub use pipeline::emergency::check_emergency;
pub use pipeline::gate::{ChatGate, ChatTurn, GateDecision, GateError};
pub use pipeline::greeting::{classify_greeting, GreetingKind};
pub use pipeline::medicine::{detect_medicines, DetectedMedicine, MedicineRecognizer};

/// Install the fmt subscriber. `RUST_LOG` overrides the default filter.
/// Later calls are no-ops.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} v{} starting", config::APP_NAME, config::APP_VERSION);
    }
}

/// YES / NO / UNCERTAIN for one message.
pub fn classify_domain(classifier: &DomainClassifier, message: &str) -> DomainVerdict {
    classifier.classify(message)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::pipeline::domain::{MockClassifierClient, MockTranslator};

    #[test]
    fn init_tracing_twice_is_harmless() {
        init_tracing();
        init_tracing();
    }

    #[test]
    fn top_level_functions() {
        let classifier = DomainClassifier::new(
            MedicineRecognizer::default(),
            Arc::new(MockTranslator::echo()),
            Arc::new(MockClassifierClient::replying("NO")),
        );
        assert_eq!(
            classify_domain(&classifier, "3 gündür başım ağrıyor, ne yapmalıyım?"),
            DomainVerdict::Yes
        );
        assert_eq!(classify_domain(&classifier, "Galatasaray maç sonucu ne oldu?"), DomainVerdict::No);

        let names: Vec<&str> = detect_medicines("Parol aldım, midem bulandı")
            .iter()
            .map(|m| m.canonical_name)
            .collect();
        assert!(names.contains(&"parol"));
        assert!(detect_medicines("Aferin sana, çok iyi yaptın").is_empty());

        assert_eq!(check_emergency("Göğüs ağrısı var ama geçti"), (false, String::new()));
        assert_eq!(classify_greeting("Merhaba"), Some(GreetingKind::Hello));
    }
}
