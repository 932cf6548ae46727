//! Emergency phrases, negation cues and the warning text.

/// Emergency phrases with the reason shown to the user, most severe first.
/// The first un-negated phrase found decides the reason.
pub static EMERGENCY_RULES: &[(&str, &str)] = &[
    // Respiratory
    ("nefes alamıyorum", "Nefes alamama acil müdahale gerektiren bir durumdur!"),
    ("boğuluyorum", "Boğulma hissi acil bir durumdur!"),
    ("nefessiz kaldım", "Nefes darlığı acil değerlendirme gerektirir!"),
    ("nefes almakta zorlanıyorum", "Nefes zorluğu acil değerlendirme gerektirir!"),
    // Cardiac
    ("göğüs ağrısı", "Göğüs ağrısı kalp krizi belirtisi olabilir!"),
    ("göğsüme baskı", "Göğüs baskısı kalp krizi belirtisi olabilir!"),
    ("koluma yayılan ağrı", "Kola yayılan ağrı kalp krizi belirtisi olabilir!"),
    ("çene ağrısı ve terleme", "Bu belirtiler kalp krizi işareti olabilir!"),
    // Stroke
    ("yüzüm uyuşuyor", "Ani yüz uyuşması felç belirtisi olabilir!"),
    ("kolum uyuşuyor", "Ani kol uyuşması felç belirtisi olabilir!"),
    ("konuşamıyorum", "Ani konuşma bozukluğu felç belirtisi olabilir!"),
    ("bir tarafım uyuşuyor", "Vücudun bir tarafında uyuşma felç belirtisi olabilir!"),
    ("felç", "Felç şüphesi acil müdahale gerektirir!"),
    // Anaphylaxis
    ("boğazım şişiyor", "Boğaz şişmesi anafilaksi belirtisi olabilir!"),
    ("dudaklarım şişiyor", "Dudak şişmesi ciddi alerjik reaksiyon olabilir!"),
    // Bleeding
    ("çok kan kaybediyorum", "Ciddi kanama acil müdahale gerektirir!"),
    ("kan durmuyor", "Durdurulamayan kanama acil müdahale gerektirir!"),
    // Loss of consciousness
    ("bayılıyorum", "Bayılma/bilinç kaybı acil değerlendirme gerektirir!"),
    ("bilincimi kaybediyorum", "Bilinç kaybı acil müdahale gerektirir!"),
    // Self-harm and other
    ("intihar", "İntihar düşüncesi acil psikolojik destek gerektirir!"),
    ("kendime zarar", "Kendinize zarar verme düşüncesi acil destek gerektirir!"),
    ("zehirlendim", "Zehirlenme acil müdahale gerektirir!"),
    ("kaza geçirdim", "Kaza sonrası acil değerlendirme gerekebilir!"),
];

/// Words that cancel a phrase when found near it. "hiç" is excluded since
/// it appears in the intensity cue "hiç olmamıştı".
pub static NEGATION_WORDS: &[&str] = &["yok", "değil", "geçti", "olmadı", "hayır"];

/// Characters inspected on each side of a phrase occurrence.
pub const NEGATION_WINDOW_CHARS: usize = 30;

/// Co-occurrence fallback: one intensity cue plus one serious symptom.
pub static INTENSITY_WORDS: &[&str] = &[
    "ani", "şiddetli", "dayanılmaz", "çok kötü",
    "ilk kez", "hiç olmamıştı", "aniden başladı",
];

pub static SERIOUS_SYMPTOM_WORDS: &[&str] = &[
    "ağrı", "baş dönmesi", "nefes", "uyuşma", "görme", "bilinç",
];

pub const GENERIC_EMERGENCY_REASON: &str =
    "Belirttiğiniz semptomlar acil değerlendirme gerektirebilir!";

const WARNING_HEADER: &str = "🚨 **ACİL DURUM UYARISI** 🚨";

const WARNING_FOOTER: &str = "**HEMEN 112'Yİ ARAYIN!**

⏰ Zaman çok önemli! Acil sağlık ekibi size en hızlı şekilde ulaşacaktır.

📞 **112** - Acil Sağlık Hattı
📞 **182** - ALO Sağlık Danışma Hattı

Eğer konuşamıyorsanız, yanınızdaki birisinden yardım isteyin.

**Sakin kalmaya çalışın ve acil yardım gelene kadar hareket etmeyin (travma durumunda).**
";

/// Full warning shown to the user for `reason`.
pub fn warning_text(reason: &str) -> String {
    format!("{WARNING_HEADER}\n\n{reason}\n\n{WARNING_FOOTER}")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::lexicon::{contains_key, fold_key, is_canonical};

    #[test]
    fn phrases_are_unique_and_normalized() {
        let mut seen = HashSet::new();
        for &(phrase, reason) in EMERGENCY_RULES {
            assert!(seen.insert(phrase), "duplicate {phrase}");
            assert!(is_canonical(phrase), "{phrase} not normalized");
            assert!(!reason.is_empty());
        }
    }

    #[test]
    fn respiratory_distress_outranks_chest_pain() {
        let pos = |p: &str| EMERGENCY_RULES.iter().position(|(k, _)| *k == p).unwrap();
        assert!(pos("nefes alamıyorum") < pos("göğüs ağrısı"));
    }

    #[test]
    fn warning_embeds_reason_and_hotlines() {
        let text = warning_text("Test nedeni");
        assert!(text.contains("Test nedeni"));
        assert!(text.contains("112"));
        assert!(text.contains("182"));
        assert!(text.starts_with(WARNING_HEADER));
    }

    #[test]
    fn no_phrase_contains_a_negation_word() {
        for &(phrase, _) in EMERGENCY_RULES {
            for neg in NEGATION_WORDS {
                assert!(!contains_key(&fold_key(phrase), neg), "{phrase} contains {neg}");
            }
        }
    }
}
