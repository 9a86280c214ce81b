//! Language catalog trait.
//!
//! The catalog is the list of languages the installation knows about. It is
//! owned and mutated elsewhere; the policy engine only ever reads it, and
//! treats each call as a snapshot.

use langgate_types::{LangCode, Language};

/// Read-only view of the installation's languages.
///
/// # Contract
///
/// - [`languages`](Self::languages) enumerates real languages only — the
///   reserved `und`/`zxx` codes never appear, even if a storage layer keeps
///   rows for them. Filter modes inject the reserved codes explicitly where
///   they apply.
/// - Enumeration order is stable (configuration/weight order); filtering
///   operations preserve it.
///
/// # Implementors
///
/// - `StaticCatalog` (in `langgate-registry`) — in-memory snapshot
/// - Custom impls for testing or for bridging a CMS language manager
pub trait LanguageCatalog: Send + Sync {
    /// All real languages, in catalog order.
    fn languages(&self) -> Vec<Language>;

    /// Looks up a single language by exact code.
    ///
    /// Reserved codes resolve to `None`; they are not catalog entries.
    fn language(&self, code: &LangCode) -> Option<Language> {
        self.languages().into_iter().find(|l| &l.code == code)
    }

    /// The content language currently in effect for the request.
    ///
    /// Used as the fallback for parent-language filtering when no explicit
    /// parent is known.
    fn content_language(&self) -> LangCode;
}
