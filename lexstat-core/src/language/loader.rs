//! Language profile loader
//!
//! Manages the embedded language profiles with caching.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::{AnalysisError, Result};
use crate::language::{
    config::LanguageConfig, interface::CharacterClassifier, runtime::ConfigurableClassifier,
};

/// Code of the profile used when nothing else is requested
pub const DEFAULT_LANGUAGE: &str = "de";

const EMBEDDED_PROFILES: &[(&str, &str)] = &[
    ("de", include_str!("../../configs/languages/german.toml")),
    ("en", include_str!("../../configs/languages/english.toml")),
];

/// Embedded language profiles, keyed by code and by lower-cased name
static EMBEDDED: OnceLock<HashMap<String, Arc<ConfigurableClassifier>>> = OnceLock::new();

fn embedded() -> &'static HashMap<String, Arc<ConfigurableClassifier>> {
    EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        for (code, source) in EMBEDDED_PROFILES {
            match load_embedded_language(code, source) {
                Ok(classifier) => {
                    log::debug!("loaded language profile {code} ({})", classifier.name());
                    map.insert(classifier.name().to_lowercase(), classifier.clone());
                    map.insert(code.to_string(), classifier);
                }
                Err(e) => {
                    log::warn!("failed to load {code} language profile: {e}");
                }
            }
        }

        map
    })
}

/// Load a classifier by language code or name
pub fn get_classifier(code: &str) -> Result<Arc<ConfigurableClassifier>> {
    embedded()
        .get(&code.to_lowercase())
        .cloned()
        .ok_or_else(|| AnalysisError::Config(format!("Unknown language code: {code}")))
}

/// Codes and names of every embedded profile, sorted by code
pub fn available_languages() -> Vec<(String, String)> {
    let mut languages: Vec<(String, String)> = EMBEDDED_PROFILES
        .iter()
        .filter_map(|(code, _)| embedded().get(*code))
        .map(|classifier| (classifier.code().to_string(), classifier.name().to_string()))
        .collect();
    languages.sort();
    languages
}

/// Load embedded language from TOML string
fn load_embedded_language(
    code: &str,
    toml_str: &str,
) -> std::result::Result<Arc<ConfigurableClassifier>, String> {
    let config: LanguageConfig =
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse {code} profile: {e}"))?;

    let classifier = ConfigurableClassifier::from_config(&config)?;
    Ok(Arc::new(classifier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_german_profile_by_code_and_name() {
        let by_code = get_classifier("de").unwrap();
        let by_name = get_classifier("German").unwrap();
        assert_eq!(by_code.code(), "de");
        assert_eq!(by_name.code(), "de");
    }

    #[test]
    fn test_german_specials_are_letters() {
        let german = get_classifier("de").unwrap();
        for ch in ['Ä', 'ä', 'Ö', 'ö', 'Ü', 'ü', 'ß'] {
            assert!(german.is_letter(ch), "{ch} should be a letter");
        }
        assert!(!german.is_letter('0'));
    }

    #[test]
    fn test_unknown_language() {
        let err = get_classifier("tlh").unwrap_err();
        assert!(err.to_string().contains("Unknown language code: tlh"));
    }

    #[test]
    fn test_available_languages() {
        let languages = available_languages();
        assert_eq!(
            languages,
            vec![
                ("de".to_string(), "German".to_string()),
                ("en".to_string(), "English".to_string()),
            ]
        );
    }
}
