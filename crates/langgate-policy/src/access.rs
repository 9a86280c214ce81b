//! Pure access-check functions.
//!
//! Each check is a total function of its arguments: no catalog, no lookup,
//! no logging. The engine wraps these with catalog resolution and audit
//! logging; callers that already hold the resolved language lists can use
//! them directly.

use langgate_types::{LangCode, Principal};

/// Checks whether a translation target language is permitted.
///
/// An empty allowed set means no site languages are configured and no
/// restriction is enforced — a deliberately permissive default. Otherwise
/// the target must be an exact member.
///
/// # Example
///
/// ```
/// use langgate_policy::access::target_language_allowed;
/// use langgate_types::LangCode;
///
/// let allowed = [LangCode::new("en-gb"), LangCode::new("fr-fr")];
/// assert!(target_language_allowed(&LangCode::new("fr-fr"), &allowed));
/// assert!(!target_language_allowed(&LangCode::new("de-kk"), &allowed));
/// assert!(target_language_allowed(&LangCode::new("de-kk"), &[]));
/// ```
#[must_use]
pub fn target_language_allowed(target: &LangCode, allowed: &[LangCode]) -> bool {
    allowed.is_empty() || allowed.contains(target)
}

/// Checks whether the translation overview may be shown for a site.
///
/// A site with a single language has nothing to translate to, so the
/// overview is denied. The empty set keeps the permissive no-configuration
/// default of [`target_language_allowed`].
#[must_use]
pub fn translation_overview_allowed(site_languages: &[LangCode]) -> bool {
    site_languages.is_empty() || site_languages.len() >= 2
}

/// The menu type prefix of a menu id such as `"main-menu--de-kk"`.
///
/// Everything before the first `--`; ids without the separator are their own
/// prefix.
#[must_use]
pub fn menu_prefix(menu_id: &str) -> &str {
    match menu_id.find("--") {
        Some(pos) => &menu_id[..pos],
        None => menu_id,
    }
}

/// Checks whether a principal may edit a menu.
///
/// Menus whose type prefix is not in `affected_prefixes` are outside the
/// language-access scheme and always allowed. Affected menus require the
/// menu's language to be exactly present in the principal's languages —
/// case-sensitive, no undefined-language fallback.
///
/// # Example
///
/// ```
/// use langgate_policy::access::menu_access_allowed;
/// use langgate_types::LangCode;
///
/// let mine = [LangCode::new("de-kk")];
/// let affected = ["main-menu"];
///
/// // Affected type, language assigned.
/// assert!(menu_access_allowed("main-menu--de-kk", &LangCode::new("de-kk"), &mine, &affected));
/// // Affected type, language not assigned.
/// assert!(!menu_access_allowed("main-menu--en-gb", &LangCode::new("en-gb"), &mine, &affected));
/// // Unaffected type is never filtered.
/// assert!(menu_access_allowed("loginarea-menu--en-gb", &LangCode::new("en-gb"), &mine, &affected));
/// ```
#[must_use]
pub fn menu_access_allowed<S: AsRef<str>>(
    menu_id: &str,
    menu_langcode: &LangCode,
    principal_langcodes: &[LangCode],
    affected_prefixes: &[S],
) -> bool {
    let prefix = menu_prefix(menu_id);
    let affected = affected_prefixes.iter().any(|p| p.as_ref() == prefix);
    if !affected {
        return true;
    }
    principal_langcodes.contains(menu_langcode)
}

/// Checks whether a principal may use the menu-link translation overview.
///
/// Reserved for the superuser; menu link translations are managed centrally.
#[must_use]
pub fn menu_translation_overview_allowed(principal: &Principal) -> bool {
    principal.is_superuser()
}
