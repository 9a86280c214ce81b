//! Filter invocation context.

use langgate_types::{LangCode, Principal};

/// Per-invocation inputs for filter-set resolution.
///
/// A context bundles what varies between calls: the requesting principal (if
/// any) and the language of the parent entity being edited (if any). The
/// catalog is passed to the engine separately, since it is shared by every
/// call of a request.
///
/// Contexts are cheap immutable values; the `with_*` methods consume and
/// return the context builder-style.
///
/// # Example
///
/// ```
/// use langgate_policy::FilterContext;
/// use langgate_types::{LangCode, Principal};
///
/// let editor = Principal::root();
/// let ctx = FilterContext::new()
///     .with_principal(&editor)
///     .with_parent_language(LangCode::new("de-kk"));
///
/// assert!(ctx.principal().is_some());
/// assert_eq!(ctx.parent_language().unwrap(), &LangCode::new("de-kk"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterContext<'a> {
    principal: Option<&'a Principal>,
    parent_language: Option<LangCode>,
}

impl<'a> FilterContext<'a> {
    /// Creates an empty context (no principal, no parent language).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the requesting principal.
    #[must_use]
    pub fn with_principal(mut self, principal: &'a Principal) -> Self {
        self.principal = Some(principal);
        self
    }

    /// Attaches the language of the entity being edited.
    #[must_use]
    pub fn with_parent_language(mut self, code: LangCode) -> Self {
        self.parent_language = Some(code);
        self
    }

    /// The requesting principal, if one was attached.
    #[must_use]
    pub fn principal(&self) -> Option<&Principal> {
        self.principal
    }

    /// The parent entity's language, if one was attached.
    #[must_use]
    pub fn parent_language(&self) -> Option<&LangCode> {
        self.parent_language.as_ref()
    }
}
