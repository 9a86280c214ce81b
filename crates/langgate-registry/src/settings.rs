//! Per-language site page settings.
//!
//! Each sub-site language can override the front page path, the 404 page
//! path and the site name. Lookups fall back to the default block, so a
//! freshly added language behaves sensibly before it is themed.

use langgate_types::{LangCode, Language};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Page-level settings for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSettings {
    /// Internal path of the front page, e.g. `"/node/100"`.
    pub front_page: String,
    /// Internal path of the 404 page.
    pub not_found_page: String,
    /// Site name shown for this language.
    pub site_name: String,
}

impl PageSettings {
    /// Creates a settings block.
    #[must_use]
    pub fn new(
        front_page: impl Into<String>,
        not_found_page: impl Into<String>,
        site_name: impl Into<String>,
    ) -> Self {
        Self {
            front_page: front_page.into(),
            not_found_page: not_found_page.into(),
            site_name: site_name.into(),
        }
    }
}

/// Site settings with per-language overrides.
///
/// # Example
///
/// ```
/// use langgate_registry::{PageSettings, SiteSettings};
/// use langgate_types::LangCode;
///
/// let settings = SiteSettings::new(PageSettings::new("/node/1", "/node/404", "Sitecat"))
///     .with_override(
///         LangCode::new("de-kk"),
///         PageSettings::new("/node/100", "/node/404", "Sitecat Kasachstan"),
///     );
///
/// assert_eq!(settings.front_page(&LangCode::new("de-kk")), "/node/100");
/// assert_eq!(settings.front_page(&LangCode::new("en-gb")), "/node/1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    default: PageSettings,
    #[serde(default)]
    overrides: HashMap<LangCode, PageSettings>,
}

impl SiteSettings {
    /// Creates settings with the given default block and no overrides.
    #[must_use]
    pub fn new(default: PageSettings) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
        }
    }

    /// Adds or replaces the override for one language.
    #[must_use]
    pub fn with_override(mut self, code: LangCode, settings: PageSettings) -> Self {
        self.overrides.insert(code, settings);
        self
    }

    fn for_language(&self, code: &LangCode) -> &PageSettings {
        self.overrides.get(code).unwrap_or(&self.default)
    }

    /// The front page path for a language.
    #[must_use]
    pub fn front_page(&self, code: &LangCode) -> &str {
        &self.for_language(code).front_page
    }

    /// The 404 page path for a language.
    #[must_use]
    pub fn not_found_page(&self, code: &LangCode) -> &str {
        &self.for_language(code).not_found_page
    }

    /// The site name for a language.
    #[must_use]
    pub fn site_name(&self, code: &LangCode) -> &str {
        &self.for_language(code).site_name
    }

    /// Front page paths for a language list, in list order.
    #[must_use]
    pub fn front_pages(&self, languages: &[Language]) -> Vec<(LangCode, String)> {
        languages
            .iter()
            .map(|l| (l.code.clone(), self.front_page(&l.code).to_string()))
            .collect()
    }
}
