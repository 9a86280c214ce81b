//! Core value types for the langgate workspace.
//!
//! langgate is a language/site access-filtering policy engine for multi-site,
//! multilingual CMS deployments: one installation serves many sub-sites, each
//! addressed by a composite `<language>-<site>` code such as `en-gb`, and
//! editors only see the languages assigned to their account.
//!
//! # Crate Architecture
//!
//! ```text
//! langgate-types     : LangCode, Language, Principal, FilterMode  ◄── HERE
//!       ↑
//! langgate-policy    : collaborator traits + AccessPolicy engine
//!       ↑
//! langgate-registry  : in-memory catalog/directory/lookup implementations
//! ```
//!
//! This crate holds pure data: identifiers, the [`Language`] value type, the
//! requesting [`Principal`], and the [`FilterMode`] selector. No access
//! decision lives here — the policy crate makes those, the registry crate
//! supplies concrete collaborators.
//!
//! # Example
//!
//! ```
//! use langgate_types::{FilterMode, LangCode, Language, Principal, UserId};
//!
//! let code = LangCode::new("en-gb");
//! assert_eq!(code.site().unwrap().as_str(), "gb");
//!
//! let editor = Principal::new(UserId::new("42")).with_languages([code.clone()]);
//! assert!(editor.is_assigned(&code));
//!
//! let mode = FilterMode::from_config(1).unwrap();
//! assert_eq!(mode, FilterMode::User);
//! ```

mod error;
mod filter;
mod id;
mod langcode;
mod language;
mod principal;

pub use error::{assert_error_code, assert_error_codes, ErrorCode};
pub use filter::{FilterMode, InvalidFilterMode};
pub use id::{EntityId, UserId};
pub use langcode::{LangCode, SiteCode};
pub use language::Language;
pub use principal::{Principal, ADMIN_ROLE};
