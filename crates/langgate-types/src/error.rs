//! Unified error code interface.
//!
//! Every error type in the workspace implements [`ErrorCode`] so callers and
//! log pipelines can handle failures by stable machine-readable code instead
//! of matching display strings. Codes are UPPER_SNAKE_CASE, prefixed with
//! `LANG_`, and are an API contract: once published they do not change.

/// Machine-readable error classification.
///
/// # Example
///
/// ```
/// use langgate_types::ErrorCode;
///
/// #[derive(Debug)]
/// struct CatalogUnavailable;
///
/// impl ErrorCode for CatalogUnavailable {
///     fn code(&self) -> &'static str {
///         "LANG_CATALOG_UNAVAILABLE"
///     }
///
///     fn is_recoverable(&self) -> bool {
///         true
///     }
/// }
///
/// assert_eq!(CatalogUnavailable.code(), "LANG_CATALOG_UNAVAILABLE");
/// ```
pub trait ErrorCode {
    /// Stable UPPER_SNAKE_CASE code, prefixed with the domain.
    fn code(&self) -> &'static str;

    /// Whether retrying or corrective caller action can succeed.
    ///
    /// Configuration and caller errors are not recoverable; transient
    /// conditions (a poisoned lock after a crashed writer, say) are.
    fn is_recoverable(&self) -> bool;
}

/// Asserts that an error's code follows the workspace conventions.
///
/// Intended for tests covering every variant of an error enum.
///
/// # Panics
///
/// Panics when the code is empty, lacks the expected prefix, or is not
/// UPPER_SNAKE_CASE.
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "error code must not be empty");
    assert!(
        code.starts_with(expected_prefix),
        "error code '{code}' must start with prefix '{expected_prefix}'"
    );
    assert!(
        is_upper_snake_case(code),
        "error code '{code}' must be UPPER_SNAKE_CASE"
    );
}

/// [`assert_error_code`] over a slice of variants.
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

fn is_upper_snake_case(s: &str) -> bool {
    if s.is_empty() || s.starts_with('_') || s.ends_with('_') || s.contains("__") {
        return false;
    }
    s.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
