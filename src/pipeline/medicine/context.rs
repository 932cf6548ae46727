use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::ambiguous::{AmbiguousTermRule, AMBIGUOUS_TERMS, GENERIC_HEALTH_HINTS};
use crate::lexicon::{contains_key, fold_key};

/// Messages this short need a health hint before an ambiguous term counts.
const SHORT_MESSAGE_WORDS: usize = 3;

/// An ambiguous-term rule with its regexes compiled.
struct CompiledRule {
    rule: &'static AmbiguousTermRule,
    non_medicine: Vec<Regex>,
    bare_exclamation: Regex,
    praise: Regex,
}

static COMPILED_RULES: LazyLock<Vec<CompiledRule>> = LazyLock::new(|| {
    AMBIGUOUS_TERMS
        .iter()
        .map(|rule| {
            let term = regex::escape(rule.term);
            CompiledRule {
                rule,
                non_medicine: rule
                    .non_medicine_patterns
                    .iter()
                    .map(|p| Regex::new(&fold_key(p)).expect("Invalid ambiguous-term regex pattern"))
                    .collect(),
                bare_exclamation: Regex::new(&format!(r"^{term}[!.\s]*$"))
                    .expect("Invalid ambiguous-term regex pattern"),
                praise: Regex::new(&format!(r"\b{term}\s+(?:sana|size|ona|bana|bize|onlara)\b"))
                    .expect("Invalid ambiguous-term regex pattern"),
            }
        })
        .collect()
});

/// Compiled rule for `term`, if it is ambiguous.
fn rule_for(term: &str) -> Option<&'static CompiledRule> {
    COMPILED_RULES.iter().find(|c| c.rule.term == term)
}

/// True when `term` is a brand that is also an everyday word.
pub fn is_ambiguous(term: &str) -> bool {
    rule_for(term).is_some()
}

/// Decide whether `term` is used as a medicine in `normalized_text`.
///
/// Terms without a rule are always medicines. For ambiguous terms the order
/// is: explicit non-medicine context rejects, medicine triggers accept,
/// then shape defaults (bare exclamation, praise, short message without a
/// health hint) reject. Anything left is accepted.
pub fn is_medicine_context(term: &str, normalized_text: &str) -> bool {
    let Some(compiled) = rule_for(term) else {
        return true;
    };
    let rule = compiled.rule;

    if let Some(phrase) = rule
        .non_medicine_phrases
        .iter()
        .find(|p| contains_key(normalized_text, p))
    {
        tracing::debug!(term, phrase, "Ambiguous term rejected by context phrase");
        return false;
    }

    if compiled.non_medicine.iter().any(|re| re.is_match(normalized_text)) {
        tracing::debug!(term, "Ambiguous term rejected by context pattern");
        return false;
    }

    if rule.medicine_triggers.iter().any(|t| contains_key(normalized_text, t)) {
        return true;
    }

    let trimmed = normalized_text.trim();
    if compiled.bare_exclamation.is_match(trimmed) || compiled.praise.is_match(normalized_text) {
        return false;
    }

    let word_count = normalized_text.split_whitespace().count();
    let has_health_hint = GENERIC_HEALTH_HINTS.iter().any(|h| contains_key(normalized_text, h));
    if word_count <= SHORT_MESSAGE_WORDS && !has_health_hint {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::normalize_text;

    /// Context check over raw `text`.
    fn accepts(term: &str, text: &str) -> bool {
        is_medicine_context(term, &normalize_text(text))
    }

    #[test]
    fn only_aferin_is_ambiguous() {
        assert!(is_ambiguous("aferin"));
        assert!(!is_ambiguous("parol"));
        assert!(!is_ambiguous("aferin forte"));
    }

    #[test]
    fn unambiguous_terms_always_pass() {
        assert!(accepts("parol", "aferin sana"));
        assert!(accepts("parol", "parol"));
    }

    // ── Rejections ──────────────────────────────────────────

    #[test]
    fn praise_phrase_rejects() {
        assert!(!accepts("aferin", "aferin sana, çok iyi yaptın"));
    }

    #[test]
    fn praise_phrase_beats_medicine_trigger() {
        assert!(!accepts("aferin", "aferin oğlum, ilaç içtin mi"));
    }

    #[test]
    fn trailing_interjection_pattern_rejects() {
        assert!(!accepts("aferin", "bunu yaptın mı, aferin ya!"));
        assert!(!accepts("aferin", "aferin valla"));
    }

    #[test]
    fn bare_exclamation_rejects() {
        assert!(!accepts("aferin", "aferin!!"));
        assert!(!accepts("aferin", "  aferin.  "));
    }

    #[test]
    fn pronoun_praise_rejects() {
        assert!(!accepts("aferin", "çok güzel olmuş aferin bize"));
    }

    #[test]
    fn short_message_without_hint_rejects() {
        assert!(!accepts("aferin", "bu sefer aferin"));
    }

    // ── Acceptances ─────────────────────────────────────────

    #[test]
    fn medicine_trigger_accepts() {
        assert!(accepts("aferin", "aferin aldım"));
        assert!(accepts("aferin", "aferin kaç mg"));
    }

    #[test]
    fn capitalised_trigger_accepts() {
        assert!(accepts("aferin", "AFERİN ALDIM"));
        assert!(accepts("aferin", "AFERİN KULLANILIR MI"));
    }

    #[test]
    fn short_message_with_hint_accepts() {
        assert!(accepts("aferin", "aferin hasta"));
    }

    #[test]
    fn longer_neutral_message_accepts() {
        assert!(accepts("aferin", "evde bir kutu aferin var mıydı acaba"));
    }
}
