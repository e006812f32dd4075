//! Press Hub - Request harness
//!
//! Wires the policy engine and the membership actor behind the flow every
//! inbound request follows: load the principal once, gate the request with
//! the ability, then run mutations through the membership actor.
//!
//! The `pressctl` binary drives this harness from the command line against
//! an in-memory registry seeded from a JSON file.

#![deny(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod hub;
pub mod logging;
pub mod seed;
pub mod target;

pub use catalog::CatalogQuery;
pub use config::HubConfig;
pub use error::{HubError, HubResult};
pub use hub::PressHub;
pub use target::TargetRef;
