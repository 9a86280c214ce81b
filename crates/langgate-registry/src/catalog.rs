//! In-memory language catalog.

use langgate_policy::LanguageCatalog;
use langgate_types::{LangCode, Language};
use serde::{Deserialize, Serialize};

/// An insertion-ordered, in-memory [`LanguageCatalog`].
///
/// Suitable as a per-request snapshot of a CMS language configuration and
/// as the standard test catalog. Reserved codes (`und`, `zxx`) are never
/// enumerated, even if a config file lists them.
///
/// # Example
///
/// ```
/// use langgate_policy::LanguageCatalog;
/// use langgate_registry::StaticCatalog;
/// use langgate_types::{LangCode, Language};
///
/// let catalog = StaticCatalog::new("en-gb")
///     .with_language(Language::enabled("en-gb", "English (United Kingdom)"))
///     .with_language(Language::disabled("sv-se", "Swedish (Sweden)"));
///
/// assert_eq!(catalog.languages().len(), 2);
/// assert_eq!(catalog.content_language(), LangCode::new("en-gb"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticCatalog {
    languages: Vec<Language>,
    content_language: LangCode,
}

impl StaticCatalog {
    /// Creates an empty catalog with the given content language.
    #[must_use]
    pub fn new(content_language: impl Into<LangCode>) -> Self {
        Self {
            languages: Vec::new(),
            content_language: content_language.into(),
        }
    }

    /// Adds a language, replacing any existing entry with the same code.
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        match self.languages.iter_mut().find(|l| l.code == language.code) {
            Some(existing) => *existing = language,
            None => self.languages.push(language),
        }
        self
    }

    /// Adds several languages at once.
    #[must_use]
    pub fn with_languages(mut self, languages: impl IntoIterator<Item = Language>) -> Self {
        for language in languages {
            self = self.with_language(language);
        }
        self
    }

    /// Number of real (non-reserved) languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.languages().len()
    }

    /// Returns `true` when no real language is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LanguageCatalog for StaticCatalog {
    fn languages(&self) -> Vec<Language> {
        self.languages
            .iter()
            .filter(|l| !l.code.is_reserved())
            .cloned()
            .collect()
    }

    fn language(&self, code: &LangCode) -> Option<Language> {
        if code.is_reserved() {
            return None;
        }
        self.languages.iter().find(|l| &l.code == code).cloned()
    }

    fn content_language(&self) -> LangCode {
        self.content_language.clone()
    }
}
