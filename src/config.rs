use serde::Serialize;

/// Application-level constants
pub const APP_NAME: &str = "Medgate";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Groq model used for the YES/NO/UNCERTAIN domain check.
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

/// OpenAI-compatible Groq endpoint root.
pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Public Google translate endpoint root.
pub const DEFAULT_TRANSLATE_BASE_URL: &str = "https://translate.googleapis.com";

/// Upper bound on a single outbound call. The classifier is on the request
/// path, so this stays short.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Levenshtein ceiling for brand names longer than five letters.
pub const DEFAULT_FUZZY_MAX_DISTANCE: usize = 2;

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "medgate=info"
}

/// Runtime configuration for the external collaborators.
#[derive(Debug, Clone, Serialize)]
pub struct GateConfig {
    /// Groq API key. `None` puts the domain classifier in fail-open mode.
    #[serde(skip_serializing)]
    pub groq_api_key: Option<String>,
    pub groq_model: String,
    pub groq_base_url: String,
    pub translate_base_url: String,
    pub timeout_secs: u64,
    pub fuzzy_max_distance: usize,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            groq_api_key: None,
            groq_model: DEFAULT_GROQ_MODEL.to_string(),
            groq_base_url: DEFAULT_GROQ_BASE_URL.to_string(),
            translate_base_url: DEFAULT_TRANSLATE_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            fuzzy_max_distance: DEFAULT_FUZZY_MAX_DISTANCE,
        }
    }
}

impl GateConfig {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset or unparsable
    /// values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let groq_api_key = non_empty("GROQ_API_KEY");
        if groq_api_key.is_none() {
            tracing::warn!("GROQ_API_KEY not set, domain classifier will lean towards YES");
        }

        Self {
            groq_api_key,
            groq_model: non_empty("GROQ_MODEL").unwrap_or(defaults.groq_model),
            groq_base_url: non_empty("GROQ_BASE_URL").unwrap_or(defaults.groq_base_url),
            translate_base_url: non_empty("TRANSLATE_BASE_URL")
                .unwrap_or(defaults.translate_base_url),
            timeout_secs: non_empty("MEDGATE_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .filter(|&secs: &u64| secs > 0)
                .unwrap_or(defaults.timeout_secs),
            fuzzy_max_distance: non_empty("MEDGATE_FUZZY_MAX_DISTANCE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.fuzzy_max_distance),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn app_name_is_medgate() {
        assert_eq!(APP_NAME, "Medgate");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.3.0");
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = GateConfig::from_lookup(|_| None);
        assert!(config.groq_api_key.is_none());
        assert_eq!(config.groq_model, DEFAULT_GROQ_MODEL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.fuzzy_max_distance, 2);
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let config = GateConfig::from_lookup(lookup_from(&[("GROQ_API_KEY", "   ")]));
        assert!(config.groq_api_key.is_none());
    }

    #[test]
    fn overrides_are_applied() {
        let config = GateConfig::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "gsk_test"),
            ("GROQ_MODEL", "llama-3.1-8b-instant"),
            ("MEDGATE_TIMEOUT_SECS", "3"),
            ("MEDGATE_FUZZY_MAX_DISTANCE", "1"),
        ]));
        assert_eq!(config.groq_api_key.as_deref(), Some("gsk_test"));
        assert_eq!(config.groq_model, "llama-3.1-8b-instant");
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.fuzzy_max_distance, 1);
    }

    #[test]
    fn unparsable_numbers_fall_back() {
        let config = GateConfig::from_lookup(lookup_from(&[
            ("MEDGATE_TIMEOUT_SECS", "soon"),
            ("MEDGATE_FUZZY_MAX_DISTANCE", "-1"),
        ]));
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.fuzzy_max_distance, DEFAULT_FUZZY_MAX_DISTANCE);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = GateConfig::from_lookup(lookup_from(&[("MEDGATE_TIMEOUT_SECS", "0")]));
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn api_key_never_serialized() {
        let config = GateConfig::from_lookup(lookup_from(&[("GROQ_API_KEY", "gsk_secret")]));
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("gsk_secret"));
        assert!(json.contains("\"groq_model\""));
    }
}
