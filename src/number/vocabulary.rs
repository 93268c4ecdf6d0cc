//! Locale vocabulary contract and registry.
//!
//! Each spoken language implements [`NumberVocabulary`] to map decomposed
//! numbers onto its recorded clips. The reader never branches on the language
//! itself, only on the capabilities a vocabulary declares.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::error::{PitError, PitResult};

/// Grammar rules of one spoken language, mapping numbers to clip identifiers.
///
/// The time-related methods all receive the full (hours, minutes, seconds,
/// tenths) tuple because many languages need sibling fields for agreement
/// rules, e.g. dropping "zero minutes" when the hours were already spoken.
pub trait NumberVocabulary: Send + Sync {
    /// Locale tag served by this vocabulary ("en", "it", "fr", ...).
    fn locale(&self) -> &str;

    /// Speak an arbitrary digit sequence per this language's number grammar.
    /// `digits` holds '0'-'9' characters and may be a single '0'.
    fn integer_sounds(&self, digits: &[char]) -> Vec<String>;

    fn hours_sounds(&self, hours: u32, minutes: u32, seconds: u32, tenths: u32) -> Vec<String>;

    fn minutes_sounds(&self, hours: u32, minutes: u32, seconds: u32, tenths: u32) -> Vec<String>;

    fn seconds_sounds(&self, hours: u32, minutes: u32, seconds: u32, tenths: u32) -> Vec<String>;

    /// The inflection hint selects an alternate take with a rising (hanging)
    /// tone, needed by languages whose tenths pronunciation changes when no
    /// further words follow (Italian, for one).
    fn tenths_sounds(
        &self,
        hours: u32,
        minutes: u32,
        seconds: u32,
        tenths: u32,
        rising_inflection: bool,
    ) -> Vec<String>;

    /// Whether this language's sound pack records the combined
    /// seconds-with-tenths and minutes-with-seconds phrases.
    fn supports_compact_times(&self) -> bool {
        false
    }

    /// Single combined clip for "S point T" seconds. Only meaningful when
    /// [`supports_compact_times`](Self::supports_compact_times) is true.
    fn seconds_with_tenths(&self, _seconds: u32, _tenths: u32) -> String {
        String::new()
    }

    /// Combined phrase for 1-2 minutes plus seconds and tenths. Only
    /// meaningful when compact times are supported.
    fn minutes_and_seconds_with_tenths(
        &self,
        _minutes: u32,
        _seconds: u32,
        _tenths: u32,
    ) -> Vec<String> {
        Vec::new()
    }
}

/// Registry of the vocabularies available to the announcer, keyed by locale
/// tag. Registration validates the implementation up front so a broken
/// vocabulary is a startup failure, not a silent mid-race announcement bug.
pub struct VocabularyRegistry {
    vocabularies: HashMap<String, Arc<dyn NumberVocabulary>>,
}

impl VocabularyRegistry {
    pub fn new() -> Self {
        Self {
            vocabularies: HashMap::new(),
        }
    }

    /// Register a vocabulary under its own locale tag.
    pub fn register(&mut self, vocabulary: Arc<dyn NumberVocabulary>) -> PitResult<()> {
        let tag = vocabulary.locale().to_string();
        if tag.is_empty() {
            return Err(PitError::Vocabulary(
                "Vocabulary reports an empty locale tag".to_string(),
            ));
        }
        if self.vocabularies.contains_key(&tag) {
            return Err(PitError::Vocabulary(format!(
                "Locale '{}' is already registered",
                tag
            )));
        }

        // Probe the compact capabilities so a vocabulary that claims them
        // but left the defaults in place fails here instead of mid-race.
        if vocabulary.supports_compact_times()
            && (vocabulary.seconds_with_tenths(1, 1).is_empty()
                || vocabulary.minutes_and_seconds_with_tenths(1, 1, 1).is_empty())
        {
            return Err(PitError::Vocabulary(format!(
                "Locale '{}' claims compact times but does not implement them",
                tag
            )));
        }

        info!("🗣️ Registered number vocabulary for '{}'", tag);
        self.vocabularies.insert(tag, vocabulary);
        Ok(())
    }

    /// Look up the vocabulary for a locale tag.
    pub fn get(&self, tag: &str) -> PitResult<Arc<dyn NumberVocabulary>> {
        self.vocabularies
            .get(tag)
            .cloned()
            .ok_or_else(|| PitError::Vocabulary(format!("No vocabulary for locale '{}'", tag)))
    }

    /// Locale tags currently registered.
    pub fn locales(&self) -> Vec<&str> {
        self.vocabularies.keys().map(|k| k.as_str()).collect()
    }
}

impl Default for VocabularyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubVocabulary {
        tag: &'static str,
        compact: bool,
    }

    impl NumberVocabulary for StubVocabulary {
        fn locale(&self) -> &str {
            self.tag
        }

        fn integer_sounds(&self, _digits: &[char]) -> Vec<String> {
            vec!["stub".to_string()]
        }

        fn hours_sounds(&self, _h: u32, _m: u32, _s: u32, _t: u32) -> Vec<String> {
            Vec::new()
        }

        fn minutes_sounds(&self, _h: u32, _m: u32, _s: u32, _t: u32) -> Vec<String> {
            Vec::new()
        }

        fn seconds_sounds(&self, _h: u32, _m: u32, _s: u32, _t: u32) -> Vec<String> {
            Vec::new()
        }

        fn tenths_sounds(&self, _h: u32, _m: u32, _s: u32, _t: u32, _r: bool) -> Vec<String> {
            Vec::new()
        }

        fn supports_compact_times(&self) -> bool {
            self.compact
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = VocabularyRegistry::new();
        registry
            .register(Arc::new(StubVocabulary {
                tag: "fr",
                compact: false,
            }))
            .expect("Registration should succeed");

        assert!(registry.get("fr").is_ok());
        assert!(registry.get("de").is_err());
        assert_eq!(registry.locales(), vec!["fr"]);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = VocabularyRegistry::new();
        let first = Arc::new(StubVocabulary {
            tag: "fr",
            compact: false,
        });
        let second = Arc::new(StubVocabulary {
            tag: "fr",
            compact: false,
        });

        registry.register(first).expect("First registration");
        assert!(registry.register(second).is_err());
    }

    #[test]
    fn test_incomplete_compact_vocabulary_rejected() {
        // Claims the compact capability but inherits the empty defaults
        let mut registry = VocabularyRegistry::new();
        let result = registry.register(Arc::new(StubVocabulary {
            tag: "sv",
            compact: true,
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_locale_tag_rejected() {
        let mut registry = VocabularyRegistry::new();
        let result = registry.register(Arc::new(StubVocabulary {
            tag: "",
            compact: false,
        }));
        assert!(result.is_err());
    }
}
