//! Press Hub Types - Core entities for the publishing hub
//!
//! A press hub hosts many presses. Each press publishes monographs, and a
//! monograph aggregates an ordered list of sections and file sets.
//!
//! ## Key Concepts
//!
//! - **Principal**: The acting identity of a request (user or anonymous)
//! - **Grant**: A `(press, role kind)` authorization record held by a principal
//! - **Press / SubBrand**: The tenants of the hub and their imprints
//! - **Monograph**: The aggregate; owns the ordered member list
//! - **Section / FileSet**: Child resources attached to a monograph
//! - **Action**: What a principal asks to do with a resource

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod action;
pub mod error;
pub mod ids;
pub mod principal;
pub mod resource;

pub use action::Action;
pub use error::{Result, TypesError};
pub use ids::{PressId, PrincipalId, ResourceId};
pub use principal::{Grant, GrantSet, Principal, RoleKind};
pub use resource::{FileSet, Monograph, Press, ResourceKind, RoleRecord, Section, SubBrand, Visibility};
