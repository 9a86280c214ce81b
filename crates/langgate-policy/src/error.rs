//! Policy engine errors.

use langgate_types::{ErrorCode, FilterMode};
use thiserror::Error;

/// Error raised while resolving a filter set.
///
/// The engine is total over well-formed inputs: empty catalogs, empty
/// assignments and empty option lists all yield empty results. The only
/// failure is a caller error — asking for a principal-dependent mode without
/// supplying a principal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// A principal-dependent mode was resolved with no principal in context.
    #[error("filter mode '{mode}' requires a principal in the context")]
    MissingPrincipal {
        /// The mode that was requested.
        mode: FilterMode,
    },
}

impl ErrorCode for PolicyError {
    fn code(&self) -> &'static str {
        match self {
            Self::MissingPrincipal { .. } => "LANG_MISSING_PRINCIPAL",
        }
    }

    fn is_recoverable(&self) -> bool {
        // The caller can retry with a principal attached.
        true
    }
}
