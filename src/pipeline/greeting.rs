use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lexicon::keywords::{
    GREETING_BYE, GREETING_HELLO, GREETING_HOWRU, GREETING_THANKS, GREETING_TRUST,
    SHORT_GREETING_TOKENS,
};
use crate::lexicon::{contains_key, fold_key, normalize_text};

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("Invalid word regex pattern"));

/// Small-talk category of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GreetingKind {
    Hello,
    Howru,
    Thanks,
    Bye,
    Trust,
}

impl GreetingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Howru => "howru",
            Self::Thanks => "thanks",
            Self::Bye => "bye",
            Self::Trust => "trust",
        }
    }
}

/// Categories in priority order.
fn priority() -> [(GreetingKind, &'static [&'static str]); 5] {
    [
        (GreetingKind::Trust, GREETING_TRUST),
        (GreetingKind::Howru, GREETING_HOWRU),
        (GreetingKind::Thanks, GREETING_THANKS),
        (GreetingKind::Bye, GREETING_BYE),
        (GreetingKind::Hello, GREETING_HELLO),
    ]
}

/// First greeting category that matches, in priority order
/// trust > howru > thanks > bye > hello.
pub fn classify_greeting(text: &str) -> Option<GreetingKind> {
    let normalized = normalize_text(text);
    let tokens: Vec<&str> = WORD_PATTERN.find_iter(&normalized).map(|m| m.as_str()).collect();

    let matches = |phrase: &&str| {
        if SHORT_GREETING_TOKENS.contains(phrase) {
            tokens.contains(&&*fold_key(phrase))
        } else {
            contains_key(&normalized, phrase)
        }
    };

    let kind = priority()
        .into_iter()
        .find(|(_, phrases)| phrases.iter().any(|p| matches(p)))
        .map(|(kind, _)| kind);

    if let Some(kind) = kind {
        tracing::debug!(kind = kind.as_str(), "Greeting detected");
    }
    kind
}

pub fn is_greeting(text: &str) -> bool {
    classify_greeting(text).is_some()
}

/// Canned Turkish reply for a greeting.
pub fn greeting_response(kind: GreetingKind) -> &'static str {
    match kind {
        GreetingKind::Hello => HELLO_REPLY,
        GreetingKind::Howru => HOWRU_REPLY,
        GreetingKind::Thanks => THANKS_REPLY,
        GreetingKind::Bye => BYE_REPLY,
        GreetingKind::Trust => TRUST_REPLY,
    }
}

const HELLO_REPLY: &str = "Merhaba! 👋

Ben **Sağlık Asistanı**'yım. Sağlıkla ilgili sorularınızda size yardımcı olmak için buradayım.

Bana şikayetlerinizi, semptomlarınızı veya merak ettiğiniz sağlık konularını sorabilirsiniz. Size genel bilgi ve yönlendirme sağlayacağım.

⚠️ Unutmayın: Ben tıbbi tavsiye vermiyorum, sadece bilgilendirme yapıyorum. Ciddi durumlarda mutlaka bir doktora başvurun.

Size nasıl yardımcı olabilirim?";

const HOWRU_REPLY: &str = "Teşekkür ederim, sorduğunuz için! 😊

Ben bir yapay zeka asistanıyım, bu yüzden duygularım yok ama size yardımcı olmak için her zaman hazırım!

Siz nasılsınız? Sağlığınızla ilgili bir konuda yardımcı olabilir miyim?";

const THANKS_REPLY: &str = "Rica ederim, ne demek! 😊

Size yardımcı olabildiysem ne mutlu bana. Başka bir sorunuz veya merak ettiğiniz bir şey olursa, çekinmeden sorabilirsiniz.

Sağlıklı günler dilerim! 🌟";

const BYE_REPLY: &str = "Hoşça kalın! 👋

Size yardımcı olabildiysem çok sevindim. Kendinize iyi bakın ve sağlıklı günler geçirin!

İhtiyacınız olduğunda tekrar görüşmek üzere. 🌟";

const TRUST_REPLY: &str = "Harika bir soru! 🤖

Ben bir **yapay zeka sağlık asistanıyım**. Size sağlık konularında genel bilgi ve yönlendirme sağlayabilirim.

**Neler yapabilirim:**
• Semptomlarınız hakkında genel bilgi verebilirim
• Olası nedenleri açıklayabilirim
• Ne zaman doktora gitmeniz gerektiğini söyleyebilirim
• Hangi uzmana başvurmanız gerektiğini yönlendirebilirim

**Neler yapamam:**
• Kesin teşhis koyamam
• İlaç reçetesi yazamam
• Gerçek bir doktorun yerini alamam

Bilgilerim güvenilir kaynaklara dayanır, ama ben bir doktor değilim. Ciddi durumlarda mutlaka bir sağlık uzmanına danışın.

Sağlıkla ilgili bir sorunuz var mı?";

#[cfg(test)]
mod tests {
    use super::*;

    // ── categories ──

    #[test]
    fn classifies_each_category() {
        assert_eq!(classify_greeting("Merhaba"), Some(GreetingKind::Hello));
        assert_eq!(classify_greeting("iyi günler"), Some(GreetingKind::Hello));
        assert_eq!(classify_greeting("Görüşürüz"), Some(GreetingKind::Bye));
        assert_eq!(classify_greeting("İyi geceler"), Some(GreetingKind::Bye));
        assert_eq!(classify_greeting("Sen doktor musun?"), Some(GreetingKind::Trust));
    }

    #[test]
    fn priority_order_decides_mixed_messages() {
        assert_eq!(classify_greeting("Merhaba nasılsın"), Some(GreetingKind::Howru));
        assert_eq!(classify_greeting("Teşekkürler, görüşürüz"), Some(GreetingKind::Thanks));
    }

    #[test]
    fn all_caps_dotless_i_matches() {
        assert_eq!(classify_greeting("NASILSIN"), Some(GreetingKind::Howru));
        assert_eq!(classify_greeting("YAPAY ZEKA MISIN"), Some(GreetingKind::Trust));
    }

    #[test]
    fn non_greetings_return_none() {
        assert_eq!(classify_greeting("Başım ağrıyor"), None);
        assert_eq!(classify_greeting(""), None);
        assert!(!is_greeting("Saat kaç"));
    }

    // ── short tokens ──

    #[test]
    fn short_tokens_match_whole_words_only() {
        assert_eq!(classify_greeting("sa"), Some(GreetingKind::Hello));
        assert_eq!(classify_greeting("SA"), Some(GreetingKind::Hello));
        assert_eq!(classify_greeting("Hey!"), Some(GreetingKind::Hello));
        assert_eq!(classify_greeting("bb"), Some(GreetingKind::Bye));
        assert_eq!(classify_greeting("Bye bye"), Some(GreetingKind::Bye));
    }

    #[test]
    fn short_tokens_do_not_match_inside_words() {
        assert_eq!(classify_greeting("Sağlık hakkında soru"), None);
        assert_eq!(classify_greeting("Sabah kalktığımda"), None);
        assert_eq!(classify_greeting("Heyecanlıyım"), None);
    }

    // ── replies ──

    #[test]
    fn every_kind_has_a_reply() {
        for (kind, _) in priority() {
            assert!(!greeting_response(kind).is_empty());
        }
        assert!(greeting_response(GreetingKind::Hello).starts_with("Merhaba!"));
        assert!(greeting_response(GreetingKind::Trust).contains("Kesin teşhis koyamam"));
    }

    #[test]
    fn kind_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&GreetingKind::Howru).unwrap(), "\"howru\"");
    }
}
