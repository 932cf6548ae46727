//! Emergency detection with negation-aware phrase scanning.
//!
//! Phrases are checked in severity order. A phrase counts only if at least
//! one of its occurrences has no negation word within
//! `NEGATION_WINDOW_CHARS` characters on either side. When no phrase
//! fires, a co-occurrence heuristic (an intensity cue plus a serious
//! symptom) catches emergencies the phrase list misses. The heuristic does
//! not look for negation.

use serde::Serialize;

use crate::lexicon::emergency::{
    warning_text, EMERGENCY_RULES, GENERIC_EMERGENCY_REASON, INTENSITY_WORDS,
    NEGATION_WINDOW_CHARS, NEGATION_WORDS, SERIOUS_SYMPTOM_WORDS,
};
use crate::lexicon::{contains_key, fold_key, normalize_text};

/// What made a message an emergency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum EmergencyTrigger {
    Phrase { phrase: &'static str },
    CoOccurrence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmergencyFinding {
    pub trigger: EmergencyTrigger,
    pub reason: &'static str,
}

impl EmergencyFinding {
    /// User-facing warning with emergency numbers.
    pub fn warning(&self) -> String {
        warning_text(self.reason)
    }
}

/// Full check: phrase list first, then the co-occurrence fallback.
pub fn assess(text: &str) -> Option<EmergencyFinding> {
    let normalized = normalize_text(text);

    if let Some((phrase, reason)) = scan_emergency_phrases(&normalized) {
        tracing::warn!(phrase, "Emergency phrase detected");
        return Some(EmergencyFinding {
            trigger: EmergencyTrigger::Phrase { phrase },
            reason,
        });
    }

    if has_co_occurrence(&normalized) {
        tracing::warn!("Emergency co-occurrence detected");
        return Some(EmergencyFinding {
            trigger: EmergencyTrigger::CoOccurrence,
            reason: GENERIC_EMERGENCY_REASON,
        });
    }

    None
}

/// `(is_emergency, warning)`; the warning is empty when not an emergency.
pub fn check_emergency(text: &str) -> (bool, String) {
    match assess(text) {
        Some(finding) => (true, finding.warning()),
        None => (false, String::new()),
    }
}

/// First phrase in severity order with an un-negated occurrence.
pub fn scan_emergency_phrases(normalized: &str) -> Option<(&'static str, &'static str)> {
    for &(phrase, reason) in EMERGENCY_RULES {
        let folded = fold_key(phrase);
        let mut occurrences = normalized.match_indices(&*folded).peekable();
        if occurrences.peek().is_none() {
            continue;
        }
        if occurrences.any(|(idx, _)| !is_negated(normalized, idx, &folded)) {
            return Some((phrase, reason));
        }
        tracing::debug!(phrase, "Emergency phrase negated");
    }
    None
}

/// True when a negation word appears within the window around the
/// occurrence of `phrase` at byte offset `byte_idx`.
fn is_negated(text: &str, byte_idx: usize, phrase: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    let start = text[..byte_idx].chars().count();
    let end = start + phrase.chars().count();

    let window_start = start.saturating_sub(NEGATION_WINDOW_CHARS);
    let window_end = (end + NEGATION_WINDOW_CHARS).min(chars.len());
    let window: String = chars[window_start..window_end].iter().collect();

    NEGATION_WORDS.iter().any(|neg| contains_key(&window, neg))
}

fn has_co_occurrence(normalized: &str) -> bool {
    INTENSITY_WORDS.iter().any(|w| contains_key(normalized, w))
        && SERIOUS_SYMPTOM_WORDS.iter().any(|w| contains_key(normalized, w))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Phrase found in raw `text`, if any.
    fn scan(text: &str) -> Option<&'static str> {
        scan_emergency_phrases(&normalize_text(text)).map(|(phrase, _)| phrase)
    }

    // =================================================================
    // Scenarios
    // =================================================================

    #[test]
    fn resolved_chest_pain_is_not_an_emergency() {
        assert_eq!(check_emergency("Göğüs ağrısı var ama geçti"), (false, String::new()));
    }

    #[test]
    fn respiratory_distress_reason_wins() {
        let (is_emergency, warning) =
            check_emergency("Aniden şiddetli göğüs ağrısı başladı, nefes alamıyorum");
        assert!(is_emergency);
        assert!(warning.contains("Nefes alamama acil müdahale gerektiren bir durumdur!"));
        assert!(warning.contains("112"));
    }

    #[test]
    fn all_caps_messages_fire() {
        assert!(check_emergency("NEFES ALAMIYORUM").0);
        assert!(check_emergency("GÖĞÜS AĞRISI VAR").0);
        let finding = assess("NEFES ALAMIYORUM").unwrap();
        assert_eq!(finding.trigger, EmergencyTrigger::Phrase { phrase: "nefes alamıyorum" });
    }

    #[test]
    fn ascii_spelling_fires() {
        assert!(check_emergency("nefes alamiyorum").0);
    }

    #[test]
    fn plain_chest_pain_fires() {
        let finding = assess("Göğüs ağrısı çekiyorum").unwrap();
        assert_eq!(finding.trigger, EmergencyTrigger::Phrase { phrase: "göğüs ağrısı" });
    }

    // =================================================================
    // Negation window
    // =================================================================

    #[test]
    fn every_phrase_followed_by_yok_is_suppressed() {
        for &(phrase, _) in EMERGENCY_RULES {
            let text = format!("Dün akşamdan beri {phrase} yok");
            assert_eq!(scan(&text), None, "{phrase} fired despite negation");
        }
    }

    #[test]
    fn negation_far_away_does_not_suppress() {
        let text = "hiçbir şikayetim yok diyordum ama bu sabahtan beri sürekli göğüs ağrısı çekiyorum";
        assert_eq!(scan(text), Some("göğüs ağrısı"));
    }

    #[test]
    fn negation_before_the_phrase_counts() {
        assert_eq!(scan("hayır, göğüs ağrısı çekmiyorum"), None);
    }

    #[test]
    fn failed_relief_is_not_a_negation() {
        assert!(check_emergency("Nefes alamıyorum, ilaç aldım ama olmuyor").0);
        assert_eq!(
            scan("Nefes alamıyorum, ilaç aldım ama olmuyor"),
            Some("nefes alamıyorum")
        );
    }

    #[test]
    fn capitalised_negation_still_suppresses() {
        assert_eq!(scan("GÖĞÜS AĞRISI YOK"), None);
        assert_eq!(scan("NEFES ALAMIYORUM DEĞİL"), None);
    }

    #[test]
    fn one_unnegated_occurrence_is_enough() {
        let text = "dün göğüs ağrısı yoktu. bugün öğleden sonra çok uzun süren bir göğüs ağrısı başladı";
        assert!(scan(text).is_some());
    }

    #[test]
    fn negated_phrase_falls_through_to_next_phrase() {
        let text = "göğüs ağrısı yok ama kolum uyuşuyor";
        // "yok" sits within the window of both phrases here.
        assert_eq!(scan(text), None);

        let text = "göğüs ağrısı yok. dün akşam saatlerinden beri hem de sürekli olarak kolum uyuşuyor";
        assert_eq!(scan(text), Some("kolum uyuşuyor"));
    }

    #[test]
    fn window_is_measured_in_characters() {
        // Two-byte letters between the phrase and the negation; the window
        // would reach "yok" here only if it counted bytes.
        let filler = "ğ".repeat(25);
        let text = format!("felç {filler} yok");
        assert_eq!(scan(&text), None);
        let filler = "ğ".repeat(40);
        let text = format!("felç {filler} yok");
        assert!(scan(&text).is_some());
    }

    // =================================================================
    // Co-occurrence fallback
    // =================================================================

    #[test]
    fn intensity_plus_symptom_fires() {
        let finding = assess("Dayanılmaz bir karın ağrım var").unwrap();
        assert_eq!(finding.trigger, EmergencyTrigger::CoOccurrence);
        assert_eq!(finding.reason, GENERIC_EMERGENCY_REASON);
    }

    #[test]
    fn co_occurrence_ignores_negation() {
        assert!(assess("Şiddetli bir baş dönmesi yok").is_some());
    }

    #[test]
    fn symptom_alone_is_not_enough() {
        assert!(assess("Karnım biraz ağrıyor").is_none());
    }

    #[test]
    fn ordinary_messages_pass() {
        assert_eq!(check_emergency("Merhaba, nasılsın?"), (false, String::new()));
        assert_eq!(check_emergency(""), (false, String::new()));
    }
}
