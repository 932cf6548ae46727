use super::types::ClassifierRequest;

/// Sampling temperature for the classifier call.
pub const CLASSIFIER_TEMPERATURE: f32 = 0.0;

/// One word fits in three tokens.
pub const CLASSIFIER_MAX_TOKENS: u32 = 3;

/// Cut the reply at the first line break.
pub const CLASSIFIER_STOP: &str = "\n";

pub const CLASSIFIER_SYSTEM_PROMPT: &str = r#"You are a classifier for a medical chatbot. Determine if the message is about medical/health topics.

HEALTH TOPICS (answer YES):
- Symptoms, diseases, illnesses
- Medications, drugs, treatments
- Body parts, body functions
- Doctors, hospitals, clinics
- Mental health, anxiety, depression
- Diet for health reasons
- Medical tests, diagnoses

NON-HEALTH TOPICS (answer NO):
- Recipes, cooking (unless for medical diet)
- Sports scores, games
- Technology, programming
- Weather, travel
- Movies, music, entertainment
- Politics, finance

Answer only one word: YES, NO, or UNCERTAIN.

If the message could POSSIBLY be about health (mentions body parts, feelings, medications even ambiguously) → YES
If clearly and definitely unrelated to health → NO
If too short/vague to determine → UNCERTAIN

For a medical chatbot, false positives are less harmful than false negatives.
When in doubt, lean towards YES."#;

/// User turn wrapping the (translated) message.
pub fn classifier_user_message(message_en: &str) -> String {
    format!("Is this message about MEDICAL/HEALTH topics?\n\nMessage: {message_en}")
}

impl ClassifierRequest {
    /// Domain-check request with the fixed prompt and sampling settings.
    pub fn domain_check(message_en: &str) -> Self {
        Self {
            system_prompt: CLASSIFIER_SYSTEM_PROMPT.to_string(),
            user_message: classifier_user_message(message_en),
            temperature: CLASSIFIER_TEMPERATURE,
            max_tokens: CLASSIFIER_MAX_TOKENS,
            stop: vec![CLASSIFIER_STOP.to_string()],
        }
    }
}
