//! Language value type.

use crate::{LangCode, SiteCode};
use serde::{Deserialize, Serialize};

/// A language known to the catalog.
///
/// The enabled flag is an external property: a companion mechanism may mark a
/// language disabled to hide its sub-site from the public while editors keep
/// working on it. Disabled languages are excluded from most listings unless
/// the principal holds the view-disabled permission.
///
/// # Example
///
/// ```
/// use langgate_types::Language;
///
/// let live = Language::enabled("en-gb", "English (United Kingdom)");
/// assert!(live.enabled);
/// assert_eq!(live.short_name(), "English");
///
/// let staged = Language::disabled("sv-se", "Swedish (Sweden)");
/// assert!(!staged.enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// The language code, usually with a site suffix.
    pub code: LangCode,
    /// Human-readable name, conventionally with the country in parentheses.
    pub name: String,
    /// Whether the language is currently live.
    pub enabled: bool,
}

impl Language {
    /// Creates an enabled language.
    #[must_use]
    pub fn enabled(code: impl Into<LangCode>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            enabled: true,
        }
    }

    /// Creates a disabled language.
    #[must_use]
    pub fn disabled(code: impl Into<LangCode>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            enabled: false,
        }
    }

    /// The site this language belongs to, if its code carries one.
    #[must_use]
    pub fn site(&self) -> Option<SiteCode> {
        self.code.site()
    }

    /// The display name with parenthesized country suffixes removed.
    ///
    /// `"English (United Kingdom)"` becomes `"English"`. Unbalanced
    /// parentheses are left untouched.
    #[must_use]
    pub fn short_name(&self) -> String {
        let mut out = String::with_capacity(self.name.len());
        let mut rest = self.name.as_str();
        while let Some(start) = rest.find(" (") {
            match rest[start..].find(')') {
                Some(end) => {
                    out.push_str(&rest[..start]);
                    rest = &rest[start + end + 1..];
                }
                None => break,
            }
        }
        out.push_str(rest);
        out
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
