use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::fold_key;

/// A compiled symptom-question pattern with a label for logs and tests.
struct SymptomPattern {
    regex: Regex,
    label: &'static str,
}

/// Turkish symptom-question phrasings. Applied to normalized (lowercase,
/// `ı` folded) text; each pattern counts once no matter how often it matches.
static SYMPTOM_PATTERNS: LazyLock<Vec<SymptomPattern>> = LazyLock::new(|| {
    vec![
        pattern(r"ne\s+yapmal[ıi]", "what_should_i_do"),
        pattern(r"doktora\s+git", "see_a_doctor"),
        pattern(r"tedavi(?:si)?\s+(?:ne|nas[ıi]l)", "treatment_question"),
        pattern(r"ila[çc]\s+(?:öner|kullan)", "medication_question"),
        pattern(r"(?:bu|şu)\s+normal\s+mi", "is_this_normal"),
        pattern(r"endişelen(?:meli|iyorum|mem)", "worry"),
        pattern(r"(?:ne|hangi)\s+(?:hastal[ıi]k|rahats[ıi]zl[ıi]k)", "which_disease"),
        pattern(r"a[ğg]r[ıi]yor", "it_hurts"),
        pattern(r"\d+\s*(?:gündür|haftadır|aydır|saattir|yıldır)", "duration"),
        pattern(r"geçmiyor|geçmedi", "not_resolving"),
        pattern(r"kaşınıyor|yanıyor|sızlıyor|zonkluyor|şişti|şişiyor", "local_sensation"),
        pattern(r"bulanıyor|bulandı|kusuyorum|kustum", "nausea"),
        pattern(r"hangi\s+(?:doktor|bölüm|uzman)", "which_specialist"),
        pattern(r"(?:ateşim|öksürüğüm|ishalim)\s+(?:var|çıktı)", "reported_symptom"),
        pattern(r"yan\s+etki", "side_effect"),
        pattern(r"(?:kullanabilir|içebilir|alabilir)\s+miyim", "may_i_take"),
    ]
});

fn pattern(regex: &str, label: &'static str) -> SymptomPattern {
    SymptomPattern {
        regex: Regex::new(&fold_key(regex)).expect("Invalid symptom regex pattern"),
        label,
    }
}

/// Labels of every symptom pattern found in `normalized`.
pub fn matched_symptom_patterns(normalized: &str) -> Vec<&'static str> {
    SYMPTOM_PATTERNS
        .iter()
        .filter(|p| p.regex.is_match(normalized))
        .map(|p| p.label)
        .collect()
}

/// True when any symptom pattern matches.
pub fn has_symptom_pattern(normalized: &str) -> bool {
    SYMPTOM_PATTERNS.iter().any(|p| p.regex.is_match(normalized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::normalize_text;

    fn labels(text: &str) -> Vec<&'static str> {
        matched_symptom_patterns(&normalize_text(text))
    }

    fn matches(text: &str) -> bool {
        has_symptom_pattern(&normalize_text(text))
    }

    #[test]
    fn sixteen_patterns_compile() {
        assert_eq!(SYMPTOM_PATTERNS.len(), 16);
    }

    #[test]
    fn duration_and_pain_question() {
        let found = labels("3 gündür başım ağrıyor, ne yapmalıyım?");
        assert_eq!(found, vec!["what_should_i_do", "it_hurts", "duration"]);
    }

    #[test]
    fn ascii_spellings_match() {
        assert!(matches("ilac kullanabilir miyim"));
        assert!(matches("karnim agriyor"));
    }

    #[test]
    fn capitalised_dotless_i_matches() {
        assert_eq!(labels("MİDEM BULANIYOR"), vec!["nausea"]);
        assert_eq!(labels("NE YAPMALIYIM"), vec!["what_should_i_do"]);
    }

    #[test]
    fn each_pattern_counts_once() {
        let found = labels("başım ağrıyor, dişim de ağrıyor");
        assert_eq!(found, vec!["it_hurts"]);
    }

    #[test]
    fn side_effect_question() {
        assert_eq!(labels("bunun yan etkisi var mı"), vec!["side_effect"]);
    }

    #[test]
    fn off_topic_text_has_no_pattern() {
        assert!(!matches("galatasaray maç sonucu ne oldu?"));
        assert!(labels("").is_empty());
    }
}
