//! In-memory entity language lookup.

use langgate_policy::EntityLookup;
use langgate_types::{EntityId, LangCode};
use std::collections::HashMap;

/// [`EntityLookup`] over a static `(entity type, id) → langcode` table.
///
/// Entities missing from the table resolve to `None`, which reference
/// filtering treats as "keep the option".
///
/// # Example
///
/// ```
/// use langgate_policy::EntityLookup;
/// use langgate_registry::StaticEntityLookup;
/// use langgate_types::{EntityId, LangCode};
///
/// let lookup = StaticEntityLookup::new()
///     .with_entity("node", "244", "en-gb")
///     .with_entity("taxonomy_term", "7", "de-kk");
///
/// assert_eq!(
///     lookup.language_of("node", &EntityId::new("244")),
///     Some(LangCode::new("en-gb"))
/// );
/// assert!(lookup.language_of("node", &EntityId::new("7")).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticEntityLookup {
    languages: HashMap<(String, String), LangCode>,
}

impl StaticEntityLookup {
    /// Creates an empty lookup table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an entity's language.
    #[must_use]
    pub fn with_entity(
        mut self,
        entity_type: impl Into<String>,
        id: impl Into<String>,
        code: impl Into<LangCode>,
    ) -> Self {
        self.languages
            .insert((entity_type.into(), id.into()), code.into());
        self
    }

    /// Number of recorded entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Returns `true` when no entity is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl EntityLookup for StaticEntityLookup {
    fn language_of(&self, entity_type: &str, id: &EntityId) -> Option<LangCode> {
        self.languages
            .iter()
            .find(|((ty, eid), _)| ty == entity_type && eid == id.as_str())
            .map(|(_, code)| code.clone())
    }
}
