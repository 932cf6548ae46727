//! Immutable Turkish lexicons shared by every gate stage.
//!
//! All tables are `'static` slices compiled into the binary. Slices (not
//! hash sets) keep iteration order stable, which matters for emergency
//! precedence and fuzzy-match tie-breaks.

pub mod ambiguous;
pub mod emergency;
pub mod keywords;
pub mod medicines;

use std::borrow::Cow;
use std::collections::HashSet;

use regex::Regex;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

use ambiguous::AMBIGUOUS_TERMS;
use medicines::{MEDICINE_DICTIONARY, MEDICINE_TYPOS};

/// Data integrity problems in the compiled lexicons.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    #[error("Typo '{typo}' points to unknown brand '{target}'")]
    UnknownTypoTarget { typo: String, target: String },

    #[error("Ambiguous-term rule for unknown brand '{0}'")]
    UnknownAmbiguousTerm(String),

    #[error("Brand key '{0}' appears more than once")]
    DuplicateBrand(String),

    #[error("Lexicon key '{0}' is not folded lowercase NFKC")]
    NonCanonicalKey(String),

    #[error("Invalid context pattern for '{term}': {reason}")]
    InvalidContextPattern { term: String, reason: String },
}

/// Fold text for lexicon lookups: NFKC, Turkish dotted capital I to `i`,
/// lowercase, then dotless `ı` to `i`.
///
/// `İ` is folded explicitly because the default lowercase mapping yields
/// `i` followed by a combining dot. Capital `I` lowercases to `i` although
/// Turkish reads it as `ı`, so `ı` is folded into `i` as well and
/// "ALAMIYORUM", "alamıyorum" and "alamiyorum" all agree. Lexicon keys are
/// written with `ı` and go through [`fold_key`] before comparison.
pub fn normalize_text(text: &str) -> String {
    text.nfkc()
        .map(|c| if c == 'İ' { 'i' } else { c })
        .collect::<String>()
        .to_lowercase()
        .replace('ı', "i")
}

/// A lowercase lexicon key (or regex source) folded the way
/// [`normalize_text`] folds input. Char counts are unchanged.
pub fn fold_key(key: &str) -> Cow<'_, str> {
    if key.contains('ı') {
        Cow::Owned(key.replace('ı', "i"))
    } else {
        Cow::Borrowed(key)
    }
}

/// True when normalized text contains the lexicon `key`.
pub fn contains_key(normalized: &str, key: &str) -> bool {
    normalized.contains(&*fold_key(key))
}

/// Check every cross-table invariant. Called once when the gate is built.
pub fn validate() -> Result<(), LexiconError> {
    let mut brands: HashSet<&str> = HashSet::with_capacity(MEDICINE_DICTIONARY.len());
    for &(brand, _) in MEDICINE_DICTIONARY {
        if !is_folded(brand) {
            return Err(LexiconError::NonCanonicalKey(brand.to_string()));
        }
        if !brands.insert(brand) {
            return Err(LexiconError::DuplicateBrand(brand.to_string()));
        }
    }

    for &(typo, target) in MEDICINE_TYPOS {
        if !is_folded(typo) {
            return Err(LexiconError::NonCanonicalKey(typo.to_string()));
        }
        if !brands.contains(target) {
            return Err(LexiconError::UnknownTypoTarget {
                typo: typo.to_string(),
                target: target.to_string(),
            });
        }
    }

    for rule in AMBIGUOUS_TERMS {
        if !brands.contains(rule.term) {
            return Err(LexiconError::UnknownAmbiguousTerm(rule.term.to_string()));
        }
        if let Some(word) = rule
            .non_medicine_phrases
            .iter()
            .chain(rule.medicine_triggers)
            .find(|w| !is_canonical(w))
        {
            return Err(LexiconError::NonCanonicalKey(word.to_string()));
        }
        for pattern in rule.non_medicine_patterns {
            Regex::new(&fold_key(pattern)).map_err(|e| LexiconError::InvalidContextPattern {
                term: rule.term.to_string(),
                reason: e.to_string(),
            })?;
        }
    }

    tracing::debug!(
        brands = MEDICINE_DICTIONARY.len(),
        typos = MEDICINE_TYPOS.len(),
        ambiguous = AMBIGUOUS_TERMS.len(),
        "Lexicons validated"
    );
    Ok(())
}

/// Brand and typo keys are compared as-is, so they must already be folded.
fn is_folded(key: &str) -> bool {
    normalize_text(key) == key
}

/// Lowercase NFKC, with `ı` allowed.
pub(crate) fn is_canonical(key: &str) -> bool {
    normalize_text(key) == fold_key(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_lexicons_are_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn normalize_folds_turkish_capital_i() {
        assert_eq!(normalize_text("AFERİN"), "aferin");
        assert_eq!(normalize_text("İlaç"), "ilaç");
    }

    #[test]
    fn normalize_applies_nfkc() {
        // Fullwidth latin letters fold to ASCII under NFKC.
        assert_eq!(normalize_text("ＰＡＲＯＬ"), "parol");
        // Decomposed ğ (g + breve) recomposes.
        assert_eq!(normalize_text("g\u{306}"), "ğ");
    }

    #[test]
    fn normalize_keeps_other_turkish_letters() {
        assert_eq!(normalize_text("Göğüs Ağrısı"), "göğüs ağrisi");
    }

    #[test]
    fn dotless_i_and_capital_i_agree() {
        assert_eq!(normalize_text("NEFES ALAMIYORUM"), "nefes alamiyorum");
        assert_eq!(normalize_text("nefes alamıyorum"), "nefes alamiyorum");
        assert_eq!(normalize_text("nefes alamiyorum"), "nefes alamiyorum");
    }

    #[test]
    fn keys_fold_like_input() {
        assert_eq!(fold_key("ağrısı"), "ağrisi");
        assert!(matches!(fold_key("parol"), Cow::Borrowed("parol")));
        assert!(contains_key(&normalize_text("GÖĞÜS AĞRISI VAR"), "göğüs ağrısı"));
        assert!(!contains_key("göğüs ağrisi var", "nefes"));
    }

    #[test]
    fn canonical_key_detection() {
        assert!(is_canonical("parol"));
        assert!(is_canonical("ağrısı"));
        assert!(!is_canonical("Parol"));
        assert!(!is_canonical("ＰＡＲＯＬ"));
        assert!(is_folded("novalgin"));
        assert!(!is_folded("novalgın"));
    }
}
