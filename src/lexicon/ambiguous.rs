//! Context rules for brand names that are also everyday words.
//!
//! "Aferin" is a paracetamol brand and the ordinary Turkish word for
//! "well done". A rule lists what makes a mention clearly non-medical and
//! what makes it clearly medical; the recognizer falls back to shape
//! heuristics when neither fires.

/// Disambiguation context for one brand key.
#[derive(Debug, Clone, Copy)]
pub struct AmbiguousTermRule {
    pub term: &'static str,
    /// Phrases whose presence anywhere in the message rejects the mention.
    pub non_medicine_phrases: &'static [&'static str],
    /// Regexes over the normalized message that reject the mention.
    pub non_medicine_patterns: &'static [&'static str],
    /// Words that confirm a medical reading.
    pub medicine_triggers: &'static [&'static str],
}

pub static AMBIGUOUS_TERMS: &[AmbiguousTermRule] = &[AmbiguousTermRule {
    term: "aferin",
    non_medicine_phrases: &[
        "aferin sana", "aferin size", "aferin ona", "aferin bana",
        "aferin çocuğum", "aferin kızım", "aferin oğlum",
        "aferin be",
        "bravo", "tebrik", "helal olsun",
    ],
    non_medicine_patterns: &[
        r"\baferin\s+ya[!.?\s]*$",
        r"\baferin\s+valla[!.?\s]*$",
    ],
    medicine_triggers: &[
        // Taking / using
        "alsam", "almalı", "alayım", "aldım", "alıyor", "almak", "alınır",
        "içsem", "içmeliyim", "içeyim", "içtim", "içiyor", "içmek", "içilir",
        "kullansam", "kullanmalı", "kullanayım", "kullandım", "kullanıyor", "kullanılır", "kullanmak",
        // Dosage and form
        "mg", "tablet", "hap", "şurup", "doz", "günde", "saatte",
        // Symptoms and care
        "ağrı", "ateş", "baş", "kafa", "grip", "soğuk algınlığı",
        "reçete", "doktor", "eczane", "ilaç",
        // Product variants
        "forte", "plus", "cold", "hot",
        // Questions about the drug
        "neden", "niçin", "ne için", "ne zaman", "nasıl", "ne işe", "faydası",
        "etkisi", "yan etki", "yan etkisi", "zararlı", "faydalı", "işe yarar",
    ],
}];

/// Weak health hints that keep a short message from being read as praise.
pub static GENERIC_HEALTH_HINTS: &[&str] = &[
    "ağrı", "agri", "ateş", "ates", "hasta", "ilaç", "ilac",
    "doktor", "eczane", "baş", "bas", "grip", "nezle",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::is_canonical;

    #[test]
    fn aferin_rule_lists_praise_and_intake() {
        let rule = AMBIGUOUS_TERMS.iter().find(|r| r.term == "aferin").unwrap();
        assert!(rule.non_medicine_phrases.contains(&"aferin sana"));
        assert!(rule.medicine_triggers.contains(&"aldım"));
    }

    #[test]
    fn rule_phrases_are_normalized() {
        for rule in AMBIGUOUS_TERMS {
            for phrase in rule.non_medicine_phrases.iter().chain(rule.medicine_triggers) {
                assert!(is_canonical(phrase), "{phrase} not normalized");
            }
        }
    }
}
