//! Press Hub Registry - Collaborators of the policy and curation cores
//!
//! This crate defines the collaborators the cores consume:
//!
//! - **PrincipalDirectory**: Loads a principal with its grants, once per request
//! - **PressDirectory**: Resolves presses by id or subdomain
//! - **ResourceLookup**: Finds stored resources by id
//! - **Persistence**: The base save pipeline
//!
//! ## In-Memory vs Persistent
//!
//! [`InMemoryRegistry`] implements all of them and is suitable for development
//! and testing. Saves overwrite whatever is stored (last write wins); there is
//! no locking across concurrent requests.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod directory;
pub mod error;
pub mod lookup;
pub mod memory;
pub mod seed;

// Re-exports
pub use directory::{PressDirectory, PrincipalDirectory};
pub use error::{RegistryError, Result};
pub use lookup::{Persistence, ResourceLookup};
pub use memory::InMemoryRegistry;
pub use seed::{Seed, SeedPrincipal};
