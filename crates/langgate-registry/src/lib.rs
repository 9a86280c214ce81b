//! # langgate-registry
//!
//! Concrete backing stores for the language access policy layer.
//!
//! `langgate-policy` defines the traits the access engine consults;
//! this crate ships the in-process implementations a deployment wires
//! together at startup:
//!
//! ```text
//! +--------------------------------------------------+
//! |                 langgate-registry                |
//! |                                                  |
//! |  StaticCatalog      -> LanguageCatalog           |
//! |  InMemoryDirectory  -> PrincipalDirectory        |
//! |  StaticEntityLookup -> EntityLookup              |
//! |                                                  |
//! |  SiteSettings / PageSettings (per-language UI)   |
//! |  DomainMap (langcode <-> domain)                 |
//! +------------------------+-------------------------+
//!                          |
//!                          v
//!               langgate-policy  (AccessPolicy)
//! ```
//!
//! # Example
//!
//! ```
//! use langgate_policy::AccessPolicy;
//! use langgate_registry::StaticCatalog;
//! use langgate_types::{LangCode, Language, Principal};
//!
//! let catalog = StaticCatalog::new(LangCode::new("en-gb"))
//!     .with_language(Language::enabled("en-gb", "English (United Kingdom)"))
//!     .with_language(Language::enabled("de-kk", "German (Kasachstan)"));
//!
//! let policy = AccessPolicy::new(&catalog);
//! let root = Principal::root();
//! assert!(policy.has_access_to_language(&root, &LangCode::new("de-kk")));
//! ```

mod catalog;
mod directory;
mod domains;
mod lookup;
mod settings;

pub use catalog::StaticCatalog;
pub use directory::InMemoryDirectory;
pub use domains::DomainMap;
pub use lookup::StaticEntityLookup;
pub use settings::{PageSettings, SiteSettings};
