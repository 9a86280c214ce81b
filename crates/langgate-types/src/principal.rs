//! Principal (requesting user) type.
//!
//! A [`Principal`] bundles the facts the policy engine needs about the
//! requesting user: identity, the languages assigned to the account, role
//! names and the view-disabled-languages permission. It carries no
//! permission *logic*; decisions live in the policy crate.

use crate::{LangCode, UserId};
use serde::{Deserialize, Serialize};

/// Role name that exempts an account from query-level language filtering.
pub const ADMIN_ROLE: &str = "administrator";

/// The requesting user, as seen by the policy engine.
///
/// The language assignment is an ordered, deduplicated list: construction
/// keeps the first occurrence of each code and drops repeats. The principal
/// with the reserved root id is the superuser and is granted every language
/// unconditionally.
///
/// # Example
///
/// ```
/// use langgate_types::{LangCode, Principal, UserId};
///
/// let editor = Principal::new(UserId::new("42"))
///     .with_languages([LangCode::new("de-kk"), LangCode::new("en-gb")]);
/// assert!(!editor.is_superuser());
/// assert!(editor.is_assigned(&LangCode::new("de-kk")));
///
/// let root = Principal::root();
/// assert!(root.is_superuser());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    id: UserId,
    languages: Vec<LangCode>,
    roles: Vec<String>,
    can_view_disabled: bool,
}

impl Principal {
    /// Creates a principal with no assigned languages, no roles and no
    /// view-disabled permission.
    #[must_use]
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            languages: Vec::new(),
            roles: Vec::new(),
            can_view_disabled: false,
        }
    }

    /// The superuser principal.
    ///
    /// No language assignment is needed; the superuser is resolved against
    /// the full catalog by the engine.
    #[must_use]
    pub fn root() -> Self {
        Self::new(UserId::root())
    }

    /// Replaces the language assignment, deduplicating while keeping the
    /// first occurrence of each code.
    #[must_use]
    pub fn with_languages(mut self, codes: impl IntoIterator<Item = LangCode>) -> Self {
        self.languages.clear();
        for code in codes {
            if !self.languages.contains(&code) {
                self.languages.push(code);
            }
        }
        self
    }

    /// Replaces the role list.
    #[must_use]
    pub fn with_roles<R: Into<String>>(mut self, roles: impl IntoIterator<Item = R>) -> Self {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the view-disabled-languages permission.
    #[must_use]
    pub fn with_view_disabled(mut self, can_view_disabled: bool) -> Self {
        self.can_view_disabled = can_view_disabled;
        self
    }

    /// Returns the user id.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the assigned language codes, in assignment order.
    #[must_use]
    pub fn languages(&self) -> &[LangCode] {
        &self.languages
    }

    /// Returns `true` for the reserved root account.
    #[must_use]
    pub fn is_superuser(&self) -> bool {
        self.id.is_root()
    }

    /// Returns `true` if the given code is in the language assignment.
    ///
    /// Exact string comparison; the superuser shortcut is applied by the
    /// engine, not here.
    #[must_use]
    pub fn is_assigned(&self, code: &LangCode) -> bool {
        self.languages.contains(code)
    }

    /// Returns `true` if the account holds the given role.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Returns `true` for accounts with the [`ADMIN_ROLE`] role.
    #[must_use]
    pub fn is_administrator(&self) -> bool {
        self.has_role(ADMIN_ROLE)
    }

    /// Returns `true` if the account may see disabled languages.
    #[must_use]
    pub fn can_view_disabled(&self) -> bool {
        self.can_view_disabled
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_superuser() {
            write!(f, "{} (superuser)", self.id)
        } else {
            write!(f, "{}", self.id)
        }
    }
}
