//! Principal directory trait.

use langgate_types::{ErrorCode, Principal, UserId};
use thiserror::Error;

/// Error returned by directory implementations that guard shared state.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Internal lock was poisoned (a thread panicked while holding it).
    #[error("principal directory lock poisoned: {context}")]
    LockPoisoned {
        /// Which lock was poisoned.
        context: String,
    },
}

impl ErrorCode for DirectoryError {
    fn code(&self) -> &'static str {
        match self {
            Self::LockPoisoned { .. } => "LANG_DIRECTORY_LOCK_POISONED",
        }
    }

    fn is_recoverable(&self) -> bool {
        // A poisoned lock stays poisoned; the process needs a restart.
        false
    }
}

/// Read-only lookup of principals by user id.
///
/// The directory is the system of record for which languages an account is
/// assigned; the policy engine receives the resolved [`Principal`] value and
/// never reaches into storage itself.
///
/// # Implementors
///
/// - `InMemoryDirectory` (in `langgate-registry`)
/// - Custom impls bridging a CMS user storage
pub trait PrincipalDirectory: Send + Sync {
    /// Resolves a principal, or `None` when the account is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] if internal state is inaccessible.
    fn principal(&self, id: &UserId) -> Result<Option<Principal>, DirectoryError>;
}
