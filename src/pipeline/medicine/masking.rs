//! Placeholder masking that keeps Turkish brand names intact across
//! machine translation.
//!
//! Brands are swapped for `MEDTOK{n}X` tokens before translation and
//! restored afterwards. The fixed `X` suffix keeps `MEDTOK1X` from
//! matching inside `MEDTOK10X`.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};

use super::MedicineRecognizer;
use crate::lexicon::medicines::ENGLISH_TO_TURKISH_GENERICS;

/// Names behind one placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskedMedicine {
    /// Brand exactly as the user wrote it.
    pub tr: String,
    /// Generic name.
    pub en: String,
}

/// Placeholder → names. Shared by a whole conversation.
pub type MaskMap = BTreeMap<String, MaskedMedicine>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskOutcome {
    pub masked_text: String,
    pub mask_map: MaskMap,
    /// Counter to pass to the next call.
    pub next_counter: usize,
}

/// How a restored medicine name is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameStyle {
    /// "Parol (paracetamol)"
    #[default]
    TrWithEn,
    /// "Parol"
    TrOnly,
    /// "paracetamol"
    EnOnly,
}

pub fn placeholder(n: usize) -> String {
    format!("MEDTOK{n}X")
}

/// Replace every accepted mention in `text` with a placeholder.
///
/// Numbering starts at `start_counter` and follows text order. Entries of
/// `existing` are carried into the returned map.
pub fn mask_medicines(
    recognizer: &MedicineRecognizer,
    text: &str,
    start_counter: usize,
    existing: Option<&MaskMap>,
) -> MaskOutcome {
    let mentions = recognizer.mentions(text);
    let mut mask_map = existing.cloned().unwrap_or_default();
    let mut keys = Vec::with_capacity(mentions.len());

    for (offset, mention) in mentions.iter().enumerate() {
        let key = placeholder(start_counter + offset);
        mask_map.insert(
            key.clone(),
            MaskedMedicine {
                tr: text[mention.start..mention.end].to_string(),
                en: mention.medicine.gloss.to_string(),
            },
        );
        keys.push(key);
    }

    let mut masked_text = text.to_string();
    for (mention, key) in mentions.iter().zip(&keys).rev() {
        masked_text.replace_range(mention.start..mention.end, key);
    }

    if !mentions.is_empty() {
        tracing::debug!(masked = mentions.len(), start_counter, "Medicines masked");
    }

    MaskOutcome {
        masked_text,
        mask_map,
        next_counter: start_counter + mentions.len(),
    }
}

/// Replace every accepted mention with its generic name. Used on the
/// classifier input so the translator sees ingredients, not brands.
pub fn replace_with_glosses(recognizer: &MedicineRecognizer, text: &str) -> String {
    let mut result = text.to_string();
    for mention in recognizer.mentions(text).iter().rev() {
        result.replace_range(mention.start..mention.end, mention.medicine.gloss);
    }
    result
}

/// Restore placeholders. Matching ignores case since translators sometimes
/// change it. Longer placeholders go first.
pub fn unmask_medicines(text: &str, mask_map: &MaskMap, style: NameStyle) -> String {
    let mut keys: Vec<&String> = mask_map.keys().collect();
    keys.sort_by_key(|k| std::cmp::Reverse(k.len()));

    let mut result = text.to_string();
    for key in keys {
        let names = &mask_map[key];
        let replacement = match style {
            NameStyle::TrWithEn => format!("{} ({})", names.tr, short_generic(&names.en)),
            NameStyle::TrOnly => names.tr.clone(),
            NameStyle::EnOnly => names.en.clone(),
        };
        let Ok(re) = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(key))) else {
            continue;
        };
        result = re.replace_all(&result, NoExpand(&replacement)).into_owned();
    }
    result
}

/// Generic name up to the first `(`, `,` or `/`.
fn short_generic(en: &str) -> &str {
    en.split(['(', ',', '/']).next().unwrap_or(en).trim()
}

/// English generic names with their compiled matchers, longest first.
static ENGLISH_GENERIC_PATTERNS: LazyLock<Vec<(Regex, &'static str, &'static str)>> =
    LazyLock::new(|| {
        let mut entries = ENGLISH_TO_TURKISH_GENERICS.to_vec();
        entries.sort_by_key(|(en, _)| std::cmp::Reverse(en.len()));
        entries
            .into_iter()
            .map(|(en, tr)| {
                let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(en)))
                    .expect("Invalid generic-name regex pattern");
                (re, en, tr)
            })
            .collect()
    });

/// Rewrite English generic names in a reply into Turkish ones.
///
/// Occurrences already inside parentheses are left alone, which also keeps
/// the English half of an earlier "Parasetamol (paracetamol)" intact.
/// `EnOnly` leaves the text unchanged.
pub fn convert_english_medicines(text: &str, style: NameStyle) -> String {
    if style == NameStyle::EnOnly {
        return text.to_string();
    }

    let mut result = text.to_string();
    for (re, en, tr) in ENGLISH_GENERIC_PATTERNS.iter() {
        let spans: Vec<(usize, usize)> =
            re.find_iter(&result).map(|m| (m.start(), m.end())).collect();

        for (start, end) in spans.into_iter().rev() {
            if inside_parentheses(&result, start) {
                continue;
            }
            let replacement = match style {
                NameStyle::TrWithEn => format!("{tr} ({en})"),
                _ => tr.to_string(),
            };
            result.replace_range(start..end, &replacement);
        }
    }
    result
}

/// True when the last bracket before `idx` is an unclosed `(`.
fn inside_parentheses(text: &str, idx: usize) -> bool {
    let before = &text[..idx];
    match (before.rfind('('), before.rfind(')')) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        _ => false,
    }
}
