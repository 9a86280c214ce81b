//! Option list entries for widget filtering.
//!
//! Select/checkbox widgets hand the engine ordered `(key, label)` lists.
//! Filtering returns a sub-list: surviving entries keep their original order
//! and labels, nothing is ever relabeled or reordered.

use langgate_types::{EntityId, LangCode};
use serde::{Deserialize, Serialize};

/// A language entry of a widget option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOption {
    /// The option key.
    pub code: LangCode,
    /// The label shown to the user.
    pub label: String,
}

impl LanguageOption {
    /// Creates an option.
    #[must_use]
    pub fn new(code: impl Into<LangCode>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// A candidate entry of a reference-field option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceOption {
    /// The candidate entity.
    pub id: EntityId,
    /// The label shown to the user.
    pub label: String,
}

impl ReferenceOption {
    /// Creates an option.
    #[must_use]
    pub fn new(id: impl Into<EntityId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}
