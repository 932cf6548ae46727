//! Levenshtein fallback for misspelled brands that are not in the typo table.

use crate::lexicon::medicines::MEDICINE_DICTIONARY;

/// Neither side of a comparison may be shorter than this.
const MIN_FUZZY_LEN: usize = 4;

/// Up to this length the allowed distance drops to one.
const SHORT_WORD_LEN: usize = 5;

/// A dictionary entry reached by edit distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyMatch {
    pub brand: &'static str,
    pub gloss: &'static str,
    pub distance: usize,
}

/// Allowed distance for a pair with the given shorter length.
fn threshold(min_len: usize, max_distance: usize) -> usize {
    if min_len <= SHORT_WORD_LEN {
        max_distance.min(1)
    } else {
        max_distance
    }
}

/// Nearest brand to any of `candidates` within the length-dependent
/// threshold. Equal distances keep the earlier candidate, then the earlier
/// dictionary entry.
pub fn nearest_brand(candidates: &[String], max_distance: usize) -> Option<FuzzyMatch> {
    let mut best: Option<FuzzyMatch> = None;

    for candidate in candidates {
        let candidate_len = candidate.chars().count();
        if candidate_len < MIN_FUZZY_LEN {
            continue;
        }

        for &(brand, gloss) in MEDICINE_DICTIONARY {
            let brand_len = brand.chars().count();
            if brand_len < MIN_FUZZY_LEN {
                continue;
            }

            let distance = strsim::levenshtein(candidate, brand);
            if distance > threshold(candidate_len.min(brand_len), max_distance) {
                continue;
            }
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(FuzzyMatch { brand, gloss, distance });
            }
        }
    }

    best
}
