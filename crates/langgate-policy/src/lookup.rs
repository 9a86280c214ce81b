//! Entity language resolver trait.

use langgate_types::{EntityId, LangCode};

/// Resolves the language of a content entity.
///
/// Reference-field filtering needs the language of each candidate entity.
/// Resolution is best-effort by contract: a `None` means the language could
/// not be determined, and the filter keeps such options rather than dropping
/// them (lookup failure defaults to "not excluded"; the caller logs it).
pub trait EntityLookup: Send + Sync {
    /// The language of the given entity, or `None` when unknown.
    fn language_of(&self, entity_type: &str, id: &EntityId) -> Option<LangCode>;
}
