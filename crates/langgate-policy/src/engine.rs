//! The access policy engine.
//!
//! [`AccessPolicy`] holds a borrowed catalog snapshot and answers every
//! language-access question of a request: which languages a principal may
//! see, which filter set a mode resolves to, whether a translation or menu
//! operation is permitted. It holds no state of its own; repeated calls with
//! identical inputs produce identical results.
//!
//! Engine-level checks are audit-logged (debug on allow, warn on deny); the
//! pure functions in [`crate::access`] stay silent.

use crate::access;
use crate::{EntityLookup, FilterContext, LanguageCatalog, PolicyError};
use crate::{LanguageOption, ReferenceOption};
use langgate_types::{FilterMode, LangCode, Language, Principal, SiteCode};
use std::collections::BTreeSet;

/// Stateless language-access decisions over a catalog snapshot.
///
/// # Example
///
/// ```
/// use langgate_policy::{AccessPolicy, FilterContext, LanguageCatalog};
/// use langgate_types::{FilterMode, LangCode, Language, Principal, UserId};
///
/// struct Catalog;
///
/// impl LanguageCatalog for Catalog {
///     fn languages(&self) -> Vec<Language> {
///         vec![
///             Language::enabled("en-gb", "English (United Kingdom)"),
///             Language::enabled("de-kk", "German (Kasachstan)"),
///         ]
///     }
///
///     fn content_language(&self) -> LangCode {
///         LangCode::new("en-gb")
///     }
/// }
///
/// let catalog = Catalog;
/// let policy = AccessPolicy::new(&catalog);
/// let editor = Principal::new(UserId::new("42"))
///     .with_languages([LangCode::new("de-kk")]);
///
/// let ctx = FilterContext::new().with_principal(&editor);
/// let set = policy.resolve_filter_set(FilterMode::User, &ctx).unwrap();
/// assert!(set.contains(&LangCode::new("de-kk")));
/// assert!(!set.contains(&LangCode::new("en-gb")));
/// ```
#[derive(Clone, Copy)]
pub struct AccessPolicy<'a> {
    catalog: &'a dyn LanguageCatalog,
}

impl<'a> AccessPolicy<'a> {
    /// Creates an engine over the given catalog snapshot.
    #[must_use]
    pub fn new(catalog: &'a dyn LanguageCatalog) -> Self {
        Self { catalog }
    }

    /// Every catalog language that belongs to a site.
    ///
    /// Plain codes without a site suffix are global and excluded from site
    /// listings.
    #[must_use]
    pub fn site_languages(&self) -> Vec<Language> {
        self.catalog
            .languages()
            .into_iter()
            .filter(|l| l.code.has_site())
            .collect()
    }

    /// Site languages, narrowed to enabled ones when `respect_disabled` is
    /// set.
    ///
    /// Never contains the reserved codes; an empty catalog yields an empty
    /// list.
    #[must_use]
    pub fn enabled_languages(&self, respect_disabled: bool) -> Vec<Language> {
        self.site_languages()
            .into_iter()
            .filter(|l| !respect_disabled || l.enabled)
            .collect()
    }

    /// The languages a principal may work in.
    ///
    /// The superuser gets every site language, enabled or not. Other
    /// accounts get their assignment resolved against the catalog (unknown
    /// codes dropped, assignment order kept), narrowed to enabled languages
    /// unless `include_disabled` is set *and* the account holds the
    /// view-disabled permission.
    #[must_use]
    pub fn languages_of_principal(
        &self,
        principal: &Principal,
        include_disabled: bool,
    ) -> Vec<Language> {
        if principal.is_superuser() {
            return self.site_languages();
        }

        let keep_disabled = include_disabled && principal.can_view_disabled();
        principal
            .languages()
            .iter()
            .filter_map(|code| self.catalog.language(code))
            .filter(|l| keep_disabled || l.enabled)
            .collect()
    }

    /// The language codes of [`languages_of_principal`](Self::languages_of_principal).
    #[must_use]
    pub fn langcodes_of_principal(
        &self,
        principal: &Principal,
        include_disabled: bool,
    ) -> Vec<LangCode> {
        self.languages_of_principal(principal, include_disabled)
            .into_iter()
            .map(|l| l.code)
            .collect()
    }

    /// The sites a principal's languages belong to, deduplicated in
    /// assignment order.
    #[must_use]
    pub fn sites_of_principal(
        &self,
        principal: &Principal,
        include_disabled: bool,
    ) -> Vec<SiteCode> {
        dedup_sites(self.languages_of_principal(principal, include_disabled))
    }

    /// All languages belonging to one site.
    #[must_use]
    pub fn languages_of_site(&self, site: &SiteCode, include_disabled: bool) -> Vec<Language> {
        self.enabled_languages(!include_disabled)
            .into_iter()
            .filter(|l| l.site().as_ref() == Some(site))
            .collect()
    }

    /// All distinct site codes, in catalog order.
    #[must_use]
    pub fn sites(&self, include_disabled: bool) -> Vec<SiteCode> {
        dedup_sites(self.enabled_languages(!include_disabled))
    }

    /// Whether the principal may access the given language.
    #[must_use]
    pub fn has_access_to_language(&self, principal: &Principal, code: &LangCode) -> bool {
        self.languages_of_principal(principal, true)
            .iter()
            .any(|l| &l.code == code)
    }

    /// Like [`has_access_to_language`](Self::has_access_to_language), but the
    /// undefined language is always accessible.
    #[must_use]
    pub fn has_access_to_language_or_neutral(
        &self,
        principal: &Principal,
        code: &LangCode,
    ) -> bool {
        code.as_str() == LangCode::UNDEFINED || self.has_access_to_language(principal, code)
    }

    /// Resolves a filter mode to the set of permitted language codes.
    ///
    /// [`FilterMode::None`] resolves to the empty set, which callers
    /// interpret as "no filtering". The parent modes use the context's
    /// parent language, falling back to the catalog's current content
    /// language.
    ///
    /// # Errors
    ///
    /// [`PolicyError::MissingPrincipal`] when a principal-dependent mode is
    /// resolved without a principal in the context.
    pub fn resolve_filter_set(
        &self,
        mode: FilterMode,
        ctx: &FilterContext<'_>,
    ) -> Result<BTreeSet<LangCode>, PolicyError> {
        let mut set: BTreeSet<LangCode> = match mode {
            FilterMode::None => BTreeSet::new(),
            FilterMode::User | FilterMode::UserOrUndefined => {
                let principal = ctx
                    .principal()
                    .ok_or(PolicyError::MissingPrincipal { mode })?;
                self.langcodes_of_principal(principal, false)
                    .into_iter()
                    .collect()
            }
            FilterMode::Enabled | FilterMode::EnabledOrUndefined => self
                .enabled_languages(true)
                .into_iter()
                .map(|l| l.code)
                .collect(),
            FilterMode::Parent | FilterMode::ParentOrUndefined => {
                let parent = ctx
                    .parent_language()
                    .cloned()
                    .unwrap_or_else(|| self.catalog.content_language());
                std::iter::once(parent).collect()
            }
            FilterMode::NotApplicable => std::iter::once(LangCode::not_applicable()).collect(),
        };

        if mode.includes_undefined() {
            set.insert(LangCode::undefined());
        }

        Ok(set)
    }

    /// Narrows a language option list to the permitted subset.
    ///
    /// Surviving entries keep their original order and labels; in
    /// particular, an existing labeled `und` entry survives the
    /// `*OrUndefined` modes with its own label. [`FilterMode::None`] is the
    /// identity.
    ///
    /// # Errors
    ///
    /// [`PolicyError::MissingPrincipal`] for principal-dependent modes with
    /// no principal in context.
    pub fn filter_language_list(
        &self,
        options: &[LanguageOption],
        mode: FilterMode,
        ctx: &FilterContext<'_>,
    ) -> Result<Vec<LanguageOption>, PolicyError> {
        if mode == FilterMode::None {
            return Ok(options.to_vec());
        }

        let allowed = self.resolve_filter_set(mode, ctx)?;
        Ok(options
            .iter()
            .filter(|o| allowed.contains(&o.code))
            .cloned()
            .collect())
    }

    /// Narrows a reference-field option list by the parent entity's
    /// language.
    ///
    /// Only [`FilterMode::Parent`] applies entity-level filtering; every
    /// other mode is handled upstream at the query layer and the input is
    /// returned unchanged. When the requesting entity has no language the
    /// input is returned unchanged as well. Candidates whose language the
    /// lookup cannot determine are kept.
    #[must_use]
    pub fn filter_reference_options(
        &self,
        options: &[ReferenceOption],
        mode: FilterMode,
        ctx: &FilterContext<'_>,
        lookup: &dyn EntityLookup,
        entity_type: &str,
    ) -> Vec<ReferenceOption> {
        if mode != FilterMode::Parent {
            return options.to_vec();
        }
        let Some(parent) = ctx.parent_language() else {
            return options.to_vec();
        };

        options
            .iter()
            .filter(|o| match lookup.language_of(entity_type, &o.id) {
                Some(code) => &code == parent,
                // Unresolvable language: not excluded.
                None => true,
            })
            .cloned()
            .collect()
    }

    /// The langcode restriction to apply to a listing query, or `None` when
    /// the account is exempt.
    ///
    /// The superuser and administrator-role accounts see everything; other
    /// accounts are restricted to their assigned languages.
    #[must_use]
    pub fn query_language_restriction(&self, principal: &Principal) -> Option<Vec<LangCode>> {
        if principal.is_superuser() || principal.is_administrator() {
            tracing::debug!(principal = %principal, "query language filtering bypassed");
            return None;
        }

        let langcodes = self.langcodes_of_principal(principal, true);
        tracing::debug!(
            principal = %principal,
            langcodes = ?langcodes,
            "query restricted to principal languages"
        );
        Some(langcodes)
    }

    /// Whether a translation may be created/updated towards `target` on an
    /// entity in language `entity_langcode`.
    ///
    /// The allowed set is the entity's site languages seeded with the
    /// reserved codes, which are always permitted targets.
    #[must_use]
    pub fn translation_target_allowed(
        &self,
        entity_langcode: &LangCode,
        target: &LangCode,
    ) -> bool {
        let mut allowed = vec![LangCode::not_applicable(), LangCode::undefined()];
        if let Some(site) = entity_langcode.site() {
            allowed.extend(
                self.languages_of_site(&site, true)
                    .into_iter()
                    .map(|l| l.code),
            );
        }

        let verdict = access::target_language_allowed(target, &allowed);
        if verdict {
            tracing::debug!(
                entity_langcode = %entity_langcode,
                target = %target,
                "translation target allowed"
            );
        } else {
            tracing::warn!(
                entity_langcode = %entity_langcode,
                target = %target,
                "translation target denied: not a language of the entity's site"
            );
        }
        verdict
    }

    /// Whether the translation overview may be shown for an entity in
    /// language `entity_langcode`.
    ///
    /// Entities on a single-language site (or without a site) have nothing
    /// to translate to.
    #[must_use]
    pub fn translation_overview_allowed(&self, entity_langcode: &LangCode) -> bool {
        let verdict = match entity_langcode.site() {
            Some(site) => {
                let site_langcodes: Vec<LangCode> = self
                    .languages_of_site(&site, true)
                    .into_iter()
                    .map(|l| l.code)
                    .collect();
                access::translation_overview_allowed(&site_langcodes)
            }
            None => false,
        };

        if verdict {
            tracing::debug!(entity_langcode = %entity_langcode, "translation overview allowed");
        } else {
            tracing::warn!(
                entity_langcode = %entity_langcode,
                "translation overview denied: single-language site"
            );
        }
        verdict
    }

    /// Whether the principal may edit the given menu.
    ///
    /// Resolves the principal's languages and delegates to
    /// [`access::menu_access_allowed`].
    #[must_use]
    pub fn menu_access_allowed<S: AsRef<str>>(
        &self,
        principal: &Principal,
        menu_id: &str,
        menu_langcode: &LangCode,
        affected_prefixes: &[S],
    ) -> bool {
        let langcodes = self.langcodes_of_principal(principal, true);
        let verdict =
            access::menu_access_allowed(menu_id, menu_langcode, &langcodes, affected_prefixes);
        if verdict {
            tracing::debug!(principal = %principal, menu_id, "menu access allowed");
        } else {
            tracing::warn!(
                principal = %principal,
                menu_id,
                menu_langcode = %menu_langcode,
                "menu access denied: language not assigned"
            );
        }
        verdict
    }
}

impl std::fmt::Debug for AccessPolicy<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessPolicy")
            .field("languages", &self.catalog.languages().len())
            .finish()
    }
}

/// Distinct site codes of a language list, first occurrence wins.
fn dedup_sites(languages: Vec<Language>) -> Vec<SiteCode> {
    let mut sites = Vec::new();
    for language in languages {
        if let Some(site) = language.site() {
            if !sites.contains(&site) {
                sites.push(site);
            }
        }
    }
    sites
}

#[cfg(test)]
mod tests {
    use super::*;
    use langgate_types::{EntityId, UserId};

    struct TestCatalog {
        languages: Vec<Language>,
        content: LangCode,
    }

    impl LanguageCatalog for TestCatalog {
        fn languages(&self) -> Vec<Language> {
            self.languages.clone()
        }

        fn content_language(&self) -> LangCode {
            self.content.clone()
        }
    }

    fn catalog() -> TestCatalog {
        TestCatalog {
            languages: vec![
                Language::enabled("en-gb", "English (United Kingdom)"),
                Language::enabled("fr-fr", "French (France)"),
                Language::enabled("de-kk", "German (Kasachstan)"),
                Language::disabled("sv-se", "Swedish (Sweden)"),
                Language::enabled("en", "English"),
            ],
            content: LangCode::new("en-gb"),
        }
    }

    fn editor() -> Principal {
        Principal::new(UserId::new("42"))
            .with_languages([LangCode::new("de-kk"), LangCode::new("sv-se")])
    }

    struct MapLookup(Vec<(&'static str, &'static str, &'static str)>);

    impl EntityLookup for MapLookup {
        fn language_of(&self, entity_type: &str, id: &EntityId) -> Option<LangCode> {
            self.0
                .iter()
                .find(|(ty, eid, _)| *ty == entity_type && *eid == id.as_str())
                .map(|(_, _, code)| LangCode::new(*code))
        }
    }

    fn codes(languages: &[Language]) -> Vec<&str> {
        languages.iter().map(|l| l.code.as_str()).collect()
    }

    #[test]
    fn site_languages_exclude_plain_codes() {
        let catalog = catalog();
        let policy = AccessPolicy::new(&catalog);
        assert_eq!(
            codes(&policy.site_languages()),
            ["en-gb", "fr-fr", "de-kk", "sv-se"]
        );
    }

    #[test]
    fn enabled_languages_respect_the_flag() {
        let catalog = catalog();
        let policy = AccessPolicy::new(&catalog);
        assert_eq!(
            codes(&policy.enabled_languages(true)),
            ["en-gb", "fr-fr", "de-kk"]
        );
        assert_eq!(
            codes(&policy.enabled_languages(false)),
            ["en-gb", "fr-fr", "de-kk", "sv-se"]
        );
    }

    #[test]
    fn superuser_gets_the_full_site_catalog() {
        let catalog = catalog();
        let policy = AccessPolicy::new(&catalog);
        let root = Principal::root();

        // Independent of include_disabled.
        assert_eq!(
            codes(&policy.languages_of_principal(&root, false)),
            ["en-gb", "fr-fr", "de-kk", "sv-se"]
        );
        assert_eq!(
            codes(&policy.languages_of_principal(&root, true)),
            ["en-gb", "fr-fr", "de-kk", "sv-se"]
        );
    }

    #[test]
    fn principal_languages_resolve_in_assignment_order() {
        let catalog = catalog();
        let policy = AccessPolicy::new(&catalog);
        let principal = Principal::new(UserId::new("42"))
            .with_languages([LangCode::new("fr-fr"), LangCode::new("en-gb")]);

        assert_eq!(
            codes(&policy.languages_of_principal(&principal, false)),
            ["fr-fr", "en-gb"]
        );
    }

    #[test]
    fn disabled_assignment_needs_flag_and_permission() {
        let catalog = catalog();
        let policy = AccessPolicy::new(&catalog);

        // No permission: disabled language dropped either way.
        assert_eq!(
            codes(&policy.languages_of_principal(&editor(), true)),
            ["de-kk"]
        );

        // Permission, but include_disabled off: still dropped.
        let privileged = editor().with_view_disabled(true);
        assert_eq!(
            codes(&policy.languages_of_principal(&privileged, false)),
            ["de-kk"]
        );

        // Both: disabled language visible.
        assert_eq!(
            codes(&policy.languages_of_principal(&privileged, true)),
            ["de-kk", "sv-se"]
        );
    }

    #[test]
    fn unknown_assignment_codes_are_dropped() {
        let catalog = catalog();
        let policy = AccessPolicy::new(&catalog);
        let principal =
            Principal::new(UserId::new("42")).with_languages([LangCode::new("xx-yy")]);
        assert!(policy.languages_of_principal(&principal, true).is_empty());
    }

    #[test]
    fn sites_of_principal_dedup_in_order() {
        let catalog = TestCatalog {
            languages: vec![
                Language::enabled("en-gb", "English (United Kingdom)"),
                Language::enabled("cy-gb", "Welsh (United Kingdom)"),
                Language::enabled("fr-fr", "French (France)"),
            ],
            content: LangCode::new("en-gb"),
        };
        let policy = AccessPolicy::new(&catalog);
        let principal = Principal::new(UserId::new("42")).with_languages([
            LangCode::new("en-gb"),
            LangCode::new("cy-gb"),
            LangCode::new("fr-fr"),
        ]);

        assert_eq!(
            policy.sites_of_principal(&principal, true),
            [SiteCode::new("gb"), SiteCode::new("fr")]
        );
    }

    #[test]
    fn languages_and_sites_of_site() {
        let catalog = catalog();
        let policy = AccessPolicy::new(&catalog);

        assert_eq!(
            codes(&policy.languages_of_site(&SiteCode::new("kk"), true)),
            ["de-kk"]
        );
        assert!(policy
            .languages_of_site(&SiteCode::new("se"), false)
            .is_empty());
        assert_eq!(
            policy.sites(true),
            [
                SiteCode::new("gb"),
                SiteCode::new("fr"),
                SiteCode::new("kk"),
                SiteCode::new("se"),
            ]
        );
        assert_eq!(
            policy.sites(false),
            [SiteCode::new("gb"), SiteCode::new("fr"), SiteCode::new("kk")]
        );
    }

    #[test]
    fn language_access_and_neutral_variant() {
        let catalog = catalog();
        let policy = AccessPolicy::new(&catalog);
        let principal = editor();

        assert!(policy.has_access_to_language(&principal, &LangCode::new("de-kk")));
        assert!(!policy.has_access_to_language(&principal, &LangCode::new("en-gb")));
        assert!(!policy.has_access_to_language(&principal, &LangCode::undefined()));
        assert!(policy.has_access_to_language_or_neutral(&principal, &LangCode::undefined()));
        assert!(!policy.has_access_to_language_or_neutral(&principal, &LangCode::new("en-gb")));
    }

    #[test]
    fn resolve_none_is_empty() {
        let catalog = catalog();
        let policy = AccessPolicy::new(&catalog);
        let set = policy
            .resolve_filter_set(FilterMode::None, &FilterContext::new())
            .unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn resolve_user_modes() {
        let catalog = catalog();
        let policy = AccessPolicy::new(&catalog);
        let principal = editor();
        let ctx = FilterContext::new().with_principal(&principal);

        let user = policy.resolve_filter_set(FilterMode::User, &ctx).unwrap();
        assert_eq!(user, [LangCode::new("de-kk")].into_iter().collect());

        let with_und = policy
            .resolve_filter_set(FilterMode::UserOrUndefined, &ctx)
            .unwrap();
        assert!(with_und.is_superset(&user));
        assert!(with_und.contains(&LangCode::undefined()));
        assert_eq!(with_und.len(), user.len() + 1);
    }

    #[test]
    fn resolve_user_without_principal_fails() {
        let catalog = catalog();
        let policy = AccessPolicy::new(&catalog);
        let ctx = FilterContext::new();

        for mode in [FilterMode::User, FilterMode::UserOrUndefined] {
            assert_eq!(
                policy.resolve_filter_set(mode, &ctx),
                Err(PolicyError::MissingPrincipal { mode })
            );
        }
    }

    #[test]
    fn resolve_enabled_modes() {
        let catalog = catalog();
        let policy = AccessPolicy::new(&catalog);
        let ctx = FilterContext::new();

        let enabled = policy.resolve_filter_set(FilterMode::Enabled, &ctx).unwrap();
        assert!(enabled.contains(&LangCode::new("en-gb")));
        assert!(!enabled.contains(&LangCode::new("sv-se")));
        assert!(!enabled.contains(&LangCode::new("en")));

        let with_und = policy
            .resolve_filter_set(FilterMode::EnabledOrUndefined, &ctx)
            .unwrap();
        assert!(with_und.contains(&LangCode::undefined()));
    }

    #[test]
    fn resolve_parent_prefers_context_then_content_language() {
        let catalog = catalog();
        let policy = AccessPolicy::new(&catalog);

        let ctx = FilterContext::new().with_parent_language(LangCode::new("de-kk"));
        let set = policy.resolve_filter_set(FilterMode::Parent, &ctx).unwrap();
        assert_eq!(set, [LangCode::new("de-kk")].into_iter().collect());

        let fallback = policy
            .resolve_filter_set(FilterMode::Parent, &FilterContext::new())
            .unwrap();
        assert_eq!(fallback, [LangCode::new("en-gb")].into_iter().collect());

        let with_und = policy
            .resolve_filter_set(FilterMode::ParentOrUndefined, &ctx)
            .unwrap();
        assert!(with_und.contains(&LangCode::new("de-kk")));
        assert!(with_und.contains(&LangCode::undefined()));
    }

    #[test]
    fn resolve_not_applicable() {
        let catalog = catalog();
        let policy = AccessPolicy::new(&catalog);
        let set = policy
            .resolve_filter_set(FilterMode::NotApplicable, &FilterContext::new())
            .unwrap();
        assert_eq!(set, [LangCode::not_applicable()].into_iter().collect());
    }

    #[test]
    fn filter_language_list_none_is_identity() {
        let catalog = catalog();
        let policy = AccessPolicy::new(&catalog);
        let options = vec![
            LanguageOption::new("en-gb", "English"),
            LanguageOption::new("xx-yy", "Unknown"),
        ];

        let out = policy
            .filter_language_list(&options, FilterMode::None, &FilterContext::new())
            .unwrap();
        assert_eq!(out, options);
    }

    #[test]
    fn filter_language_list_keeps_order_and_labels() {
        let catalog = catalog();
        let policy = AccessPolicy::new(&catalog);
        let options = vec![
            LanguageOption::new("sv-se", "Swedish"),
            LanguageOption::new("de-kk", "German"),
            LanguageOption::new("en-gb", "English"),
            LanguageOption::new("fr-fr", "French"),
        ];

        let out = policy
            .filter_language_list(&options, FilterMode::Enabled, &FilterContext::new())
            .unwrap();
        assert_eq!(
            out,
            vec![
                LanguageOption::new("de-kk", "German"),
                LanguageOption::new("en-gb", "English"),
                LanguageOption::new("fr-fr", "French"),
            ]
        );
    }

    #[test]
    fn filter_language_list_keeps_existing_undefined_label() {
        let catalog = catalog();
        let policy = AccessPolicy::new(&catalog);
        let principal = editor();
        let ctx = FilterContext::new().with_principal(&principal);
        let options = vec![
            LanguageOption::new("und", "- Language neutral -"),
            LanguageOption::new("de-kk", "German"),
            LanguageOption::new("en-gb", "English"),
        ];

        let out = policy
            .filter_language_list(&options, FilterMode::UserOrUndefined, &ctx)
            .unwrap();
        assert_eq!(
            out,
            vec![
                LanguageOption::new("und", "- Language neutral -"),
                LanguageOption::new("de-kk", "German"),
            ]
        );
    }

    #[test]
    fn filter_references_only_applies_to_parent_mode() {
        let catalog = catalog();
        let policy = AccessPolicy::new(&catalog);
        let lookup = MapLookup(vec![("node", "1", "en-gb")]);
        let options = vec![ReferenceOption::new("1", "About us")];

        let ctx = FilterContext::new().with_parent_language(LangCode::new("de-kk"));
        for mode in [
            FilterMode::None,
            FilterMode::Enabled,
            FilterMode::ParentOrUndefined,
            FilterMode::NotApplicable,
        ] {
            let out = policy.filter_reference_options(&options, mode, &ctx, &lookup, "node");
            assert_eq!(out, options, "mode {mode:?} must not filter entities");
        }
    }

    #[test]
    fn filter_references_drops_language_mismatches() {
        let catalog = catalog();
        let policy = AccessPolicy::new(&catalog);
        let lookup = MapLookup(vec![
            ("node", "1", "de-kk"),
            ("node", "2", "en-gb"),
            ("node", "3", "de-kk"),
        ]);
        let options = vec![
            ReferenceOption::new("1", "Startseite"),
            ReferenceOption::new("2", "Home"),
            ReferenceOption::new("3", "Impressum"),
        ];

        let ctx = FilterContext::new().with_parent_language(LangCode::new("de-kk"));
        let out = policy.filter_reference_options(&options, FilterMode::Parent, &ctx, &lookup, "node");
        assert_eq!(
            out,
            vec![
                ReferenceOption::new("1", "Startseite"),
                ReferenceOption::new("3", "Impressum"),
            ]
        );
    }

    #[test]
    fn filter_references_keeps_unresolvable_candidates() {
        let catalog = catalog();
        let policy = AccessPolicy::new(&catalog);
        let lookup = MapLookup(vec![("node", "2", "en-gb")]);
        let options = vec![
            ReferenceOption::new("1", "No language on record"),
            ReferenceOption::new("2", "Home"),
        ];

        let ctx = FilterContext::new().with_parent_language(LangCode::new("de-kk"));
        let out = policy.filter_reference_options(&options, FilterMode::Parent, &ctx, &lookup, "node");
        assert_eq!(out, vec![ReferenceOption::new("1", "No language on record")]);
    }

    #[test]
    fn filter_references_without_parent_language_is_identity() {
        let catalog = catalog();
        let policy = AccessPolicy::new(&catalog);
        let lookup = MapLookup(vec![("node", "1", "en-gb")]);
        let options = vec![
            ReferenceOption::new("1", "Home"),
            ReferenceOption::new("2", "About"),
        ];

        let out = policy.filter_reference_options(
            &options,
            FilterMode::Parent,
            &FilterContext::new(),
            &lookup,
            "node",
        );
        assert_eq!(out, options);
    }

    #[test]
    fn query_restriction_exempts_superuser_and_admin() {
        let catalog = catalog();
        let policy = AccessPolicy::new(&catalog);

        assert!(policy.query_language_restriction(&Principal::root()).is_none());

        let admin = Principal::new(UserId::new("7")).with_roles([langgate_types::ADMIN_ROLE]);
        assert!(policy.query_language_restriction(&admin).is_none());

        let restricted = policy.query_language_restriction(&editor()).unwrap();
        assert_eq!(restricted, [LangCode::new("de-kk")]);
    }

    #[test]
    fn translation_target_follows_site_languages() {
        let catalog = TestCatalog {
            languages: vec![
                Language::enabled("en-gb", "English (United Kingdom)"),
                Language::enabled("cy-gb", "Welsh (United Kingdom)"),
                Language::enabled("fr-fr", "French (France)"),
            ],
            content: LangCode::new("en-gb"),
        };
        let policy = AccessPolicy::new(&catalog);
        let entity = LangCode::new("en-gb");

        assert!(policy.translation_target_allowed(&entity, &LangCode::new("cy-gb")));
        assert!(!policy.translation_target_allowed(&entity, &LangCode::new("fr-fr")));
        // Reserved codes are always permitted targets.
        assert!(policy.translation_target_allowed(&entity, &LangCode::undefined()));
        assert!(policy.translation_target_allowed(&entity, &LangCode::not_applicable()));
    }

    #[test]
    fn translation_overview_needs_a_multi_language_site() {
        let catalog = TestCatalog {
            languages: vec![
                Language::enabled("en-gb", "English (United Kingdom)"),
                Language::enabled("cy-gb", "Welsh (United Kingdom)"),
                Language::enabled("de-kk", "German (Kasachstan)"),
            ],
            content: LangCode::new("en-gb"),
        };
        let policy = AccessPolicy::new(&catalog);

        assert!(policy.translation_overview_allowed(&LangCode::new("en-gb")));
        assert!(!policy.translation_overview_allowed(&LangCode::new("de-kk")));
        // No site, nothing to translate.
        assert!(!policy.translation_overview_allowed(&LangCode::new("en")));
    }

    #[test]
    fn menu_access_through_the_engine() {
        let catalog = catalog();
        let policy = AccessPolicy::new(&catalog);
        let affected = ["main-menu"];

        assert!(policy.menu_access_allowed(
            &editor(),
            "main-menu--de-kk",
            &LangCode::new("de-kk"),
            &affected,
        ));
        assert!(!policy.menu_access_allowed(
            &editor(),
            "main-menu--en-gb",
            &LangCode::new("en-gb"),
            &affected,
        ));
        // Superuser carries every site language.
        assert!(policy.menu_access_allowed(
            &Principal::root(),
            "main-menu--en-gb",
            &LangCode::new("en-gb"),
            &affected,
        ));
    }

    #[test]
    fn empty_catalog_yields_empty_results() {
        let catalog = TestCatalog {
            languages: Vec::new(),
            content: LangCode::new("en"),
        };
        let policy = AccessPolicy::new(&catalog);

        assert!(policy.site_languages().is_empty());
        assert!(policy.enabled_languages(true).is_empty());
        assert!(policy.languages_of_principal(&Principal::root(), true).is_empty());
        assert!(policy.sites(true).is_empty());
        let set = policy
            .resolve_filter_set(FilterMode::Enabled, &FilterContext::new())
            .unwrap();
        assert!(set.is_empty());
    }
}
