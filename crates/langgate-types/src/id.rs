//! Identifier newtypes.
//!
//! Identities come from the surrounding CMS, which hands them around as
//! strings. The newtypes keep user ids and entity ids from being mixed up in
//! call sites that take both.

use serde::{Deserialize, Serialize};

/// Identifier of a user account.
///
/// The id `"1"` is reserved for the superuser, which is exempt from every
/// language restriction.
///
/// # Example
///
/// ```
/// use langgate_types::UserId;
///
/// let root = UserId::root();
/// assert!(root.is_root());
/// assert!(!UserId::new("42").is_root());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

/// The reserved superuser id.
const ROOT_ID: &str = "1";

impl UserId {
    /// Creates a user id from a raw string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The reserved superuser id (`"1"`).
    #[must_use]
    pub fn root() -> Self {
        Self(ROOT_ID.to_string())
    }

    /// Returns `true` if this is the reserved superuser id.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == ROOT_ID
    }

    /// Returns the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user:{}", self.0)
    }
}

/// Identifier of a content entity (node, taxonomy term, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Creates an entity id from a raw string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "entity:{}", self.0)
    }
}
