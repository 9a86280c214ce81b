//! Language to domain mapping.
//!
//! Deployments that serve each sub-site on its own host keep the mapping
//! here and resolve it in both directions: outgoing links pick the domain
//! for a language, incoming requests pick the language for a host.

use langgate_types::LangCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Bidirectional langcode/domain map.
///
/// # Example
///
/// ```
/// use langgate_registry::DomainMap;
/// use langgate_types::LangCode;
///
/// let domains = DomainMap::new()
///     .with_domain(LangCode::new("en-gb"), "example.co.uk")
///     .with_domain(LangCode::new("de-kk"), "example.kz");
///
/// assert_eq!(domains.domain_for(&LangCode::new("de-kk")), Some("example.kz"));
/// assert_eq!(
///     domains.langcode_for("example.co.uk"),
///     Some(&LangCode::new("en-gb"))
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainMap {
    domains: HashMap<LangCode, String>,
}

impl DomainMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the domain for a language.
    #[must_use]
    pub fn with_domain(mut self, code: LangCode, domain: impl Into<String>) -> Self {
        self.domains.insert(code, domain.into());
        self
    }

    /// Adds or replaces the domain for a language in place.
    pub fn insert(&mut self, code: LangCode, domain: impl Into<String>) {
        self.domains.insert(code, domain.into());
    }

    /// The domain serving a language, if mapped.
    #[must_use]
    pub fn domain_for(&self, code: &LangCode) -> Option<&str> {
        self.domains.get(code).map(String::as_str)
    }

    /// The language served by a domain, if mapped.
    #[must_use]
    pub fn langcode_for(&self, domain: &str) -> Option<&LangCode> {
        self.domains
            .iter()
            .find(|(_, d)| d.as_str() == domain)
            .map(|(code, _)| code)
    }

    /// Number of mapped languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Whether no languages are mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
