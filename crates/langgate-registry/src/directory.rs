//! Thread-safe in-memory principal directory.

use langgate_policy::{DirectoryError, PrincipalDirectory};
use langgate_types::{Principal, UserId};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory [`PrincipalDirectory`] backed by `RwLock<HashMap>`.
///
/// Read-heavy by design: access checks hit [`principal`](PrincipalDirectory::principal)
/// on every request, while account changes are rare. Lock poisoning (a
/// writer panicking mid-update) is surfaced as
/// [`DirectoryError::LockPoisoned`] instead of being swallowed.
///
/// # Example
///
/// ```
/// use langgate_policy::PrincipalDirectory;
/// use langgate_registry::InMemoryDirectory;
/// use langgate_types::{LangCode, Principal, UserId};
///
/// let directory = InMemoryDirectory::new();
/// directory
///     .insert(Principal::new(UserId::new("42")).with_languages([LangCode::new("de-kk")]))
///     .unwrap();
///
/// let editor = directory.principal(&UserId::new("42")).unwrap().unwrap();
/// assert!(editor.is_assigned(&LangCode::new("de-kk")));
/// assert!(directory.principal(&UserId::new("7")).unwrap().is_none());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    users: RwLock<HashMap<UserId, Principal>>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a principal, keyed by its user id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::LockPoisoned`] if a writer panicked while
    /// holding the lock.
    pub fn insert(&self, principal: Principal) -> Result<(), DirectoryError> {
        let mut users = self.users.write().map_err(|_| poisoned("insert"))?;
        users.insert(principal.id().clone(), principal);
        Ok(())
    }

    /// Removes a principal, returning it if it was present.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::LockPoisoned`] if a writer panicked while
    /// holding the lock.
    pub fn remove(&self, id: &UserId) -> Result<Option<Principal>, DirectoryError> {
        let mut users = self.users.write().map_err(|_| poisoned("remove"))?;
        Ok(users.remove(id))
    }

    /// Number of known principals. A poisoned lock counts as empty.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    /// Returns `true` when no principal is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PrincipalDirectory for InMemoryDirectory {
    fn principal(&self, id: &UserId) -> Result<Option<Principal>, DirectoryError> {
        let users = self.users.read().map_err(|_| poisoned("principal"))?;
        Ok(users.get(id).cloned())
    }
}

fn poisoned(operation: &str) -> DirectoryError {
    tracing::error!("directory: users lock poisoned on {operation}");
    DirectoryError::LockPoisoned {
        context: format!("users lock on {operation}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use langgate_types::LangCode;

    #[test]
    fn insert_lookup_remove() {
        let directory = InMemoryDirectory::new();
        assert!(directory.is_empty());

        directory
            .insert(Principal::new(UserId::new("42")).with_languages([LangCode::new("de-kk")]))
            .unwrap();
        assert_eq!(directory.len(), 1);

        let principal = directory.principal(&UserId::new("42")).unwrap().unwrap();
        assert_eq!(principal.languages(), &[LangCode::new("de-kk")]);

        let removed = directory.remove(&UserId::new("42")).unwrap();
        assert!(removed.is_some());
        assert!(directory.principal(&UserId::new("42")).unwrap().is_none());
    }

    #[test]
    fn insert_replaces_same_id() {
        let directory = InMemoryDirectory::new();
        directory
            .insert(Principal::new(UserId::new("42")).with_languages([LangCode::new("de-kk")]))
            .unwrap();
        directory
            .insert(Principal::new(UserId::new("42")).with_languages([LangCode::new("en-gb")]))
            .unwrap();

        assert_eq!(directory.len(), 1);
        let principal = directory.principal(&UserId::new("42")).unwrap().unwrap();
        assert_eq!(principal.languages(), &[LangCode::new("en-gb")]);
    }

    #[test]
    fn unknown_user_is_none_not_error() {
        let directory = InMemoryDirectory::new();
        assert!(directory.principal(&UserId::new("nobody")).unwrap().is_none());
        assert!(directory.remove(&UserId::new("nobody")).unwrap().is_none());
    }

    #[test]
    fn shared_across_threads() {
        use std::sync::Arc;

        let directory = Arc::new(InMemoryDirectory::new());
        directory.insert(Principal::root()).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let directory = Arc::clone(&directory);
                std::thread::spawn(move || {
                    let principal = directory.principal(&UserId::root()).unwrap().unwrap();
                    assert!(principal.is_superuser());
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("reader thread");
        }
    }
}
