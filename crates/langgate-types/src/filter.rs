//! Language filter modes.
//!
//! A [`FilterMode`] selects which subset of languages is permitted in a given
//! list-filtering or access-check context. Field configuration persists the
//! mode as a small integer; [`FilterMode::from_config`] is the only place
//! that mapping is interpreted, and it rejects unknown values instead of
//! silently falling through.

use crate::ErrorCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Strategy selecting the permitted language subset.
///
/// # Example
///
/// ```
/// use langgate_types::FilterMode;
///
/// let mode = FilterMode::from_config(2).unwrap();
/// assert_eq!(mode, FilterMode::UserOrUndefined);
/// assert!(mode.requires_principal());
/// assert!(mode.includes_undefined());
///
/// assert!(FilterMode::from_config(9).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// No filtering; callers treat the empty filter set as "allow all".
    None,
    /// Languages assigned to the requesting principal.
    User,
    /// Principal's languages, plus the undefined language.
    UserOrUndefined,
    /// All enabled site languages.
    Enabled,
    /// Enabled site languages, plus the undefined language.
    EnabledOrUndefined,
    /// The parent entity's language (or the current content language when no
    /// parent is known).
    Parent,
    /// Parent entity's language, plus the undefined language.
    ParentOrUndefined,
    /// Only the reserved not-applicable language.
    NotApplicable,
}

impl FilterMode {
    /// Every mode, in config-value order.
    pub const ALL: [FilterMode; 8] = [
        FilterMode::None,
        FilterMode::User,
        FilterMode::UserOrUndefined,
        FilterMode::Enabled,
        FilterMode::EnabledOrUndefined,
        FilterMode::Parent,
        FilterMode::ParentOrUndefined,
        FilterMode::NotApplicable,
    ];

    /// Decodes the persisted config value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFilterMode`] for values outside `0..=7`. Only the
    /// explicit `0` maps to [`FilterMode::None`]; unknown values are a
    /// caller error, never an implicit "no filtering".
    pub fn from_config(value: u8) -> Result<Self, InvalidFilterMode> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::User),
            2 => Ok(Self::UserOrUndefined),
            3 => Ok(Self::Enabled),
            4 => Ok(Self::EnabledOrUndefined),
            5 => Ok(Self::Parent),
            6 => Ok(Self::ParentOrUndefined),
            7 => Ok(Self::NotApplicable),
            other => Err(InvalidFilterMode(other)),
        }
    }

    /// The persisted config value for this mode.
    #[must_use]
    pub fn as_config(self) -> u8 {
        match self {
            Self::None => 0,
            Self::User => 1,
            Self::UserOrUndefined => 2,
            Self::Enabled => 3,
            Self::EnabledOrUndefined => 4,
            Self::Parent => 5,
            Self::ParentOrUndefined => 6,
            Self::NotApplicable => 7,
        }
    }

    /// Returns `true` for modes that cannot be resolved without a principal.
    #[must_use]
    pub fn requires_principal(self) -> bool {
        matches!(self, Self::User | Self::UserOrUndefined)
    }

    /// Returns `true` for the `*OrUndefined` variants.
    #[must_use]
    pub fn includes_undefined(self) -> bool {
        matches!(
            self,
            Self::UserOrUndefined | Self::EnabledOrUndefined | Self::ParentOrUndefined
        )
    }

    /// Human-readable label for configuration UIs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::User => "User languages",
            Self::UserOrUndefined => "User languages or undefined",
            Self::Enabled => "Enabled languages",
            Self::EnabledOrUndefined => "Enabled languages or undefined",
            Self::Parent => "Parent entity language",
            Self::ParentOrUndefined => "Parent entity language or undefined",
            Self::NotApplicable => "Not applicable",
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A persisted filter mode value outside the known range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid language filter mode {0}, expected 0..=7")]
pub struct InvalidFilterMode(pub u8);

impl ErrorCode for InvalidFilterMode {
    fn code(&self) -> &'static str {
        "LANG_INVALID_FILTER_MODE"
    }

    fn is_recoverable(&self) -> bool {
        // Stored configuration will not fix itself on retry.
        false
    }
}
