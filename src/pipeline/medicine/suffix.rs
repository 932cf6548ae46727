//! Turkish inflection stripping for brand lookups ("parolü", "nurofenden").

use std::sync::LazyLock;

use crate::lexicon::fold_key;
use crate::lexicon::medicines::{self, TURKISH_SUFFIXES};

/// Maximum number of suffix layers removed from one word.
const MAX_LAYERS: usize = 3;

/// Characters a stripped stem must keep beyond the suffix length.
const MIN_STEM_MARGIN: usize = 2;

/// Suffixes folded like normalized input, in list order, without the
/// duplicates folding creates ("ı" and "i").
static FOLDED_SUFFIXES: LazyLock<Vec<String>> = LazyLock::new(|| {
    let mut folded: Vec<String> = Vec::with_capacity(TURKISH_SUFFIXES.len());
    for suffix in TURKISH_SUFFIXES {
        let suffix = fold_key(suffix).into_owned();
        if !folded.contains(&suffix) {
            folded.push(suffix);
        }
    }
    folded
});

/// The word followed by each progressively stripped form.
///
/// Each layer removes the first suffix in list order that ends the current
/// form, provided the form is longer than the suffix by more than
/// `MIN_STEM_MARGIN` characters. Stops after `MAX_LAYERS` or when no
/// suffix applies.
pub fn suffix_candidates(word: &str) -> Vec<String> {
    let mut candidates = vec![word.to_string()];
    let mut current = word.to_string();

    for _ in 0..MAX_LAYERS {
        let word_len = current.chars().count();
        let Some(suffix) = FOLDED_SUFFIXES
            .iter()
            .find(|s| current.ends_with(s.as_str()) && word_len > s.chars().count() + MIN_STEM_MARGIN)
        else {
            break;
        };

        let stripped = current[..current.len() - suffix.len()].to_string();
        if !candidates.contains(&stripped) {
            candidates.push(stripped.clone());
        }
        current = stripped;
    }

    candidates
}

/// Strip inflection from `word`.
///
/// Returns the first candidate that is a brand key or a known typo. When
/// none is, returns the most-stripped form if it has at least three
/// characters, otherwise the word itself.
pub fn strip_suffix(word: &str) -> String {
    let candidates = suffix_candidates(word);

    if let Some(known) = candidates
        .iter()
        .find(|c| medicines::lookup(c).is_some() || medicines::correct_typo(c).is_some())
    {
        return known.clone();
    }

    match candidates.last() {
        Some(last) if last.chars().count() >= 3 => last.clone(),
        _ => word.to_string(),
    }
}
