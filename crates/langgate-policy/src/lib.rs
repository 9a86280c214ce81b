//! Language/site access policy for multi-site CMS deployments.
//!
//! This crate decides which languages a principal, entity or menu may
//! access, and narrows widget option lists to the permitted subset. It sits
//! between the pure value types and the concrete collaborator
//! implementations:
//!
//! ```text
//! langgate-types   (LangCode, Language, Principal, FilterMode)
//!       ↑
//! langgate-policy  (LanguageCatalog, PrincipalDirectory, EntityLookup,
//!                   AccessPolicy, access checks)  ◄── THIS CRATE
//!       ↑
//! langgate-registry (StaticCatalog, InMemoryDirectory, StaticEntityLookup)
//! ```
//!
//! # Decision Model
//!
//! ```text
//! Allowed Languages = Catalog(WHAT exists) ∩ Principal(WHO asks) ∩ Mode(WHERE it applies)
//! ```
//!
//! | Layer | Type | Controls |
//! |-------|------|----------|
//! | [`LanguageCatalog`] | Trait | Which languages exist, and the content language in effect |
//! | [`Principal`] | Struct | Which languages the account is assigned |
//! | [`FilterMode`] | Enum | Which subset a given widget or check permits |
//!
//! # Design Principles
//!
//! - **Trait definitions here, implementations in consumers** —
//!   `langgate-registry` provides `StaticCatalog` and friends; tests bring
//!   their own small impls.
//! - **Explicit dependency injection** — every operation is a function of
//!   the catalog, the context and its arguments. No global service access,
//!   no hidden current-user lookup.
//! - **Stateless and deterministic** — the engine owns nothing and mutates
//!   nothing; identical inputs give identical outputs, concurrent use is
//!   safe by construction.
//!
//! # Example
//!
//! ```
//! use langgate_policy::{AccessPolicy, FilterContext, LanguageCatalog, LanguageOption};
//! use langgate_types::{FilterMode, LangCode, Language, Principal, UserId};
//!
//! struct Catalog;
//!
//! impl LanguageCatalog for Catalog {
//!     fn languages(&self) -> Vec<Language> {
//!         vec![
//!             Language::enabled("en-gb", "English (United Kingdom)"),
//!             Language::enabled("de-kk", "German (Kasachstan)"),
//!         ]
//!     }
//!
//!     fn content_language(&self) -> LangCode {
//!         LangCode::new("en-gb")
//!     }
//! }
//!
//! let catalog = Catalog;
//! let policy = AccessPolicy::new(&catalog);
//! let editor = Principal::new(UserId::new("42"))
//!     .with_languages([LangCode::new("de-kk")]);
//!
//! let options = vec![
//!     LanguageOption::new("en-gb", "English"),
//!     LanguageOption::new("de-kk", "German"),
//! ];
//! let ctx = FilterContext::new().with_principal(&editor);
//! let visible = policy
//!     .filter_language_list(&options, FilterMode::User, &ctx)
//!     .unwrap();
//! assert_eq!(visible, vec![LanguageOption::new("de-kk", "German")]);
//! ```

pub mod access;
mod catalog;
mod context;
mod directory;
mod engine;
mod error;
mod lookup;
mod selection;

pub use catalog::LanguageCatalog;
pub use context::FilterContext;
pub use directory::{DirectoryError, PrincipalDirectory};
pub use engine::AccessPolicy;
pub use error::PolicyError;
pub use lookup::EntityLookup;
pub use selection::{LanguageOption, ReferenceOption};

// Re-export the value types for convenience
pub use langgate_types::{FilterMode, LangCode, Language, Principal, SiteCode};
