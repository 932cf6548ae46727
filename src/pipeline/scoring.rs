use serde::Serialize;

use super::patterns;
use crate::lexicon::keywords::{HARD_NON_HEALTH_KEYWORDS, HEALTH_KEYWORDS, SOFT_NON_HEALTH_KEYWORDS};
use crate::lexicon::{contains_key, normalize_text};

/// Health vs. off-topic evidence in one message.
///
/// Keyword counts use substring containment over the normalized message,
/// so overlapping entries ("ağrı" and "baş ağrısı") each count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignalScores {
    pub health_keywords: usize,
    pub health_patterns: usize,
    pub hard_non_health: usize,
    pub soft_non_health: usize,
    pub matched_health: Vec<&'static str>,
    pub matched_patterns: Vec<&'static str>,
    pub matched_hard: Vec<&'static str>,
    pub matched_soft: Vec<&'static str>,
}

impl SignalScores {
    /// Keyword hits plus symptom-pattern hits.
    pub fn health_score(&self) -> usize {
        self.health_keywords + self.health_patterns
    }

    pub fn has_health_signal(&self) -> bool {
        self.health_score() > 0
    }
}

fn matches_in(set: &[&'static str], normalized: &str) -> Vec<&'static str> {
    set.iter().copied().filter(|k| contains_key(normalized, k)).collect()
}

/// Score `text` against the health, hard and soft lexicons.
pub fn score_signals(text: &str) -> SignalScores {
    let normalized = normalize_text(text);

    let matched_health = matches_in(HEALTH_KEYWORDS, &normalized);
    let matched_patterns = patterns::matched_symptom_patterns(&normalized);
    let matched_hard = matches_in(HARD_NON_HEALTH_KEYWORDS, &normalized);
    let matched_soft = matches_in(SOFT_NON_HEALTH_KEYWORDS, &normalized);

    SignalScores {
        health_keywords: matched_health.len(),
        health_patterns: matched_patterns.len(),
        hard_non_health: matched_hard.len(),
        soft_non_health: matched_soft.len(),
        matched_health,
        matched_patterns,
        matched_hard,
        matched_soft,
    }
}

/// Quick topical test used on conversation history: no hard off-topic
/// keyword, and at least one health keyword or symptom pattern.
pub fn is_health_related(text: &str) -> bool {
    let normalized = normalize_text(text);
    if HARD_NON_HEALTH_KEYWORDS.iter().any(|k| contains_key(&normalized, k)) {
        return false;
    }
    HEALTH_KEYWORDS.iter().any(|k| contains_key(&normalized, k))
        || patterns::has_symptom_pattern(&normalized)
}
