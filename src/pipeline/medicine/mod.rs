//! Medicine entity recognition over Turkish chat messages.
//!
//! Detection runs two passes over word tokens. Multi-word brands ("aferin
//! forte") are matched first as exact 3-grams then 2-grams, consuming their
//! tokens. Remaining tokens try, in order, the brand dictionary, the typo
//! table, suffix-stripped forms and finally Levenshtein distance. Every
//! hit passes the ambiguity check before it is accepted, and brands that
//! are also everyday words are never reached by edit distance alone.

pub mod context;
pub mod fuzzy;
pub mod masking;
pub mod suffix;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::DEFAULT_FUZZY_MAX_DISTANCE;
use crate::lexicon::medicines::{self, HIGH_RISK_BRANDS, HIGH_RISK_GENERICS};
use crate::lexicon::normalize_text;

/// Unicode word tokens; `\w` covers Turkish letters.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("Invalid token regex pattern"));

/// Shortest token considered by the single-word pass.
const MIN_TOKEN_CHARS: usize = 3;

/// N-gram sizes for the multi-word pass, longest first.
const NGRAM_SIZES: [usize; 2] = [3, 2];

/// A recognized brand mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetectedMedicine {
    /// Canonical dictionary key, e.g. `"parol"`.
    pub canonical_name: &'static str,
    /// Active ingredient, e.g. `"paracetamol"`.
    pub gloss: &'static str,
}

/// Which lookup strategy produced a mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    MultiWord,
    Exact,
    Typo,
    Suffix,
    Fuzzy,
}

/// A mention with its byte span in the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicineMention {
    pub medicine: DetectedMedicine,
    pub kind: MatchKind,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug)]
struct Token {
    normalized: String,
    start: usize,
    end: usize,
}

fn tokenize(text: &str) -> Vec<Token> {
    TOKEN_PATTERN
        .find_iter(text)
        .map(|m| Token {
            normalized: normalize_text(m.as_str()),
            start: m.start(),
            end: m.end(),
        })
        .collect()
}

/// Brand recognizer with a configurable fuzzy ceiling.
#[derive(Debug, Clone, Copy)]
pub struct MedicineRecognizer {
    max_distance: usize,
}

impl Default for MedicineRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_FUZZY_MAX_DISTANCE)
    }
}

impl MedicineRecognizer {
    pub fn new(max_distance: usize) -> Self {
        Self { max_distance }
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// Every accepted mention in `text`, ordered by position.
    pub fn mentions(&self, text: &str) -> Vec<MedicineMention> {
        let mut found = self.scan(text);
        found.sort_by_key(|m| m.start);
        found
    }

    /// Accepted mentions in pass order: multi-word brands first, then
    /// single words left to right.
    fn scan(&self, text: &str) -> Vec<MedicineMention> {
        let tokens = tokenize(text);
        let normalized = normalize_text(text);
        let mut consumed = vec![false; tokens.len()];
        let mut found = Vec::new();

        for n in NGRAM_SIZES {
            if tokens.len() < n {
                continue;
            }
            for i in 0..=tokens.len() - n {
                if consumed[i..i + n].iter().any(|&c| c) {
                    continue;
                }
                let key = tokens[i..i + n]
                    .iter()
                    .map(|t| t.normalized.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                let Some((brand, gloss)) = medicines::entry(&key) else {
                    continue;
                };
                if !context::is_medicine_context(brand, &normalized) {
                    continue;
                }
                consumed[i..i + n].fill(true);
                found.push(MedicineMention {
                    medicine: DetectedMedicine { canonical_name: brand, gloss },
                    kind: MatchKind::MultiWord,
                    start: tokens[i].start,
                    end: tokens[i + n - 1].end,
                });
            }
        }

        for (i, token) in tokens.iter().enumerate() {
            if consumed[i] || token.normalized.chars().count() < MIN_TOKEN_CHARS {
                continue;
            }
            let Some((medicine, kind)) = self.match_word(&token.normalized) else {
                continue;
            };
            if kind == MatchKind::Fuzzy && context::is_ambiguous(medicine.canonical_name) {
                tracing::debug!(
                    medicine = medicine.canonical_name,
                    "Fuzzy match to an everyday word rejected"
                );
                continue;
            }
            if !context::is_medicine_context(medicine.canonical_name, &normalized) {
                tracing::debug!(
                    medicine = medicine.canonical_name,
                    "Mention rejected as everyday usage"
                );
                continue;
            }
            consumed[i] = true;
            found.push(MedicineMention {
                medicine,
                kind,
                start: token.start,
                end: token.end,
            });
        }

        found
    }

    /// Medicines mentioned in `text`, one entry per accepted mention.
    /// Multi-word brands come first, then single words in text order;
    /// a brand named twice appears twice.
    pub fn detect(&self, text: &str) -> Vec<DetectedMedicine> {
        let detected: Vec<DetectedMedicine> =
            self.scan(text).into_iter().map(|m| m.medicine).collect();

        if !detected.is_empty() {
            tracing::debug!(
                medicines = ?detected.iter().map(|m| m.canonical_name).collect::<Vec<_>>(),
                "Medicines detected"
            );
        }
        detected
    }

    /// Resolve one normalized word to a brand, without the context check.
    pub fn match_word(&self, word: &str) -> Option<(DetectedMedicine, MatchKind)> {
        if let Some((brand, gloss)) = medicines::entry(word) {
            return Some((medicine(brand, gloss), MatchKind::Exact));
        }
        if let Some(found) = resolve_typo(word) {
            return Some((found, MatchKind::Typo));
        }

        let candidates = suffix::suffix_candidates(word);
        for candidate in candidates.iter().skip(1) {
            if let Some((brand, gloss)) = medicines::entry(candidate) {
                return Some((medicine(brand, gloss), MatchKind::Suffix));
            }
            if let Some(found) = resolve_typo(candidate) {
                return Some((found, MatchKind::Suffix));
            }
        }

        fuzzy::nearest_brand(&candidates, self.max_distance)
            .map(|m| (medicine(m.brand, m.gloss), MatchKind::Fuzzy))
    }
}

fn medicine(canonical_name: &'static str, gloss: &'static str) -> DetectedMedicine {
    DetectedMedicine { canonical_name, gloss }
}

fn resolve_typo(word: &str) -> Option<DetectedMedicine> {
    let target = medicines::correct_typo(word)?;
    medicines::lookup(target).map(|gloss| medicine(target, gloss))
}

/// Medicines in `text` using the default fuzzy ceiling.
pub fn detect_medicines(text: &str) -> Vec<DetectedMedicine> {
    MedicineRecognizer::default().detect(text)
}

/// Generic name for a brand, tolerating case and known misspellings.
pub fn generic_name(brand: &str) -> Option<&'static str> {
    let normalized = normalize_text(brand.trim());
    let key = medicines::correct_typo(&normalized).unwrap_or(normalized.as_str());
    medicines::lookup(key)
}

/// True for controlled or abuse-prone medicines, by brand or generic name.
pub fn is_high_risk(name: &str) -> bool {
    let normalized = normalize_text(name.trim());
    if normalized.is_empty() {
        return false;
    }
    if HIGH_RISK_BRANDS.contains(&normalized.as_str()) {
        return true;
    }
    if generic_name(&normalized).is_some_and(|generic| HIGH_RISK_GENERICS.contains(&generic)) {
        return true;
    }
    HIGH_RISK_GENERICS.contains(&normalized.as_str())
}
