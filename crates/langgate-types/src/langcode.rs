//! Language and site code identifiers.
//!
//! A [`LangCode`] is the string identifier a CMS attaches to content and
//! menus. Two dialects occur in a multi-site deployment:
//!
//! - a plain code such as `"en"`, and
//! - a composite `<language>-<site>` code such as `"en-gb"`, where the
//!   substring after the first hyphen is the [`SiteCode`] of a sub-site.
//!
//! Codes without a hyphen have no site and are treated as global/unfiltered.
//! Two codes are reserved: [`LangCode::UNDEFINED`] (`"und"`, no language) and
//! [`LangCode::NOT_APPLICABLE`] (`"zxx"`, language does not apply).

use serde::{Deserialize, Serialize};

/// A language identifier, optionally suffixed with a site code.
///
/// # Example
///
/// ```
/// use langgate_types::LangCode;
///
/// let code = LangCode::new("en-gb");
/// assert_eq!(code.language(), "en");
/// assert_eq!(code.site().unwrap().as_str(), "gb");
///
/// let plain = LangCode::new("en");
/// assert!(plain.site().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LangCode(String);

impl LangCode {
    /// Reserved code for "language undefined".
    pub const UNDEFINED: &'static str = "und";

    /// Reserved code for "not applicable to language".
    pub const NOT_APPLICABLE: &'static str = "zxx";

    /// Creates a langcode from a raw string.
    ///
    /// No validation is performed; a code with no recognizable structure is
    /// simply a code without a site.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The reserved `"und"` code.
    #[must_use]
    pub fn undefined() -> Self {
        Self(Self::UNDEFINED.to_string())
    }

    /// The reserved `"zxx"` code.
    #[must_use]
    pub fn not_applicable() -> Self {
        Self(Self::NOT_APPLICABLE.to_string())
    }

    /// Returns the raw code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the language part (everything before the first hyphen).
    #[must_use]
    pub fn language(&self) -> &str {
        match self.0.find('-') {
            Some(pos) => &self.0[..pos],
            None => &self.0,
        }
    }

    /// Extracts the site code (everything after the first hyphen).
    ///
    /// Codes without a hyphen, or with nothing after it, have no site.
    #[must_use]
    pub fn site(&self) -> Option<SiteCode> {
        let suffix = &self.0[self.0.find('-')? + 1..];
        if suffix.is_empty() {
            None
        } else {
            Some(SiteCode::new(suffix))
        }
    }

    /// Returns `true` if this code carries a site suffix.
    #[must_use]
    pub fn has_site(&self) -> bool {
        self.site().is_some()
    }

    /// Returns `true` for the reserved non-language codes (`und`, `zxx`).
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        self.0 == Self::UNDEFINED || self.0 == Self::NOT_APPLICABLE
    }
}

impl From<&str> for LangCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for LangCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl PartialEq<str> for LangCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LangCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for LangCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The sub-site segment of a composite langcode.
///
/// Sites are derived, never stored: any site code that appears as the suffix
/// of at least one composite [`LangCode`] names a sub-site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteCode(String);

impl SiteCode {
    /// Creates a site code from a raw string.
    #[must_use]
    pub fn new(site: impl Into<String>) -> Self {
        Self(site.into())
    }

    /// Returns the raw site code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SiteCode {
    fn from(site: &str) -> Self {
        Self::new(site)
    }
}

impl PartialEq<&str> for SiteCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for SiteCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
