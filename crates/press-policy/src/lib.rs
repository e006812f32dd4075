//! # Press Hub Policy
//!
//! Decides, for every `(principal, action, target)` triple, whether the action
//! is permitted.
//!
//! ## Overview
//!
//! An [`Ability`] is an ordered list of independent [`AbilityRule`]s. A request
//! is allowed when any rule permits it; when no rule matches, it is denied.
//! Checks are pure functions of their arguments: the principal carries its
//! grants, and the target carries everything needed to scope it (a section or
//! file set carries its parent monograph).
//!
//! ## Default rules
//!
//! - [`PlatformAdminRule`]: platform admins manage everything
//! - [`PressCatalogRule`]: presses and sub-brands are readable by everyone
//! - [`PressAdminRule`]: press admins manage their own press's resources
//! - [`PressEditorRule`]: press editors read their own press's publications
//! - [`PublicReadRule`]: public publications are readable by everyone
//!
//! Press admins cannot publish unless [`AbilityOptions::publish_for_press_admins`]
//! adds the [`PressAdminPublishRule`].
//!
//! ## Example
//!
//! ```rust
//! use press_policy::{Ability, Target};
//! use press_types::{Action, Grant, Monograph, Press, Principal, PrincipalId, RoleKind};
//!
//! let umich = Press::new("umich");
//! let admin = Principal::user(PrincipalId::new("u1"))
//!     .with_grant(Grant::new(umich.id.clone(), "umich", RoleKind::Admin));
//!
//! let ability = Ability::default();
//! let mine = Monograph::new("umich");
//! let theirs = Monograph::new("psu");
//!
//! assert!(ability.can(&admin, Action::Create, &Target::Monograph(&mine)));
//! assert!(!ability.can(&admin, Action::Create, &Target::Monograph(&theirs)));
//! ```

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod ability;
pub mod decision;
pub mod error;
pub mod rules;
pub mod target;

// Re-exports
pub use ability::{can, Ability, AbilityOptions, AbilityRule};
pub use decision::{AbilityDecision, DecisionCard, RuleEvaluationRecord};
pub use error::{PolicyError, Result};
pub use rules::{
    PlatformAdminRule, PressAdminPublishRule, PressAdminRule, PressCatalogRule, PressEditorRule,
    PublicReadRule,
};
pub use target::Target;
