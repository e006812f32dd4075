//! Press Hub Curation - Aggregate membership side effects
//!
//! When a section or file set is created or updated with a `monograph_id`
//! attribute, the [`MembershipActor`] appends it to that monograph's ordered
//! member list, saves the monograph, and brings the child's visibility and
//! parent reference in line with the monograph.
//!
//! ## Ordering of effects
//!
//! 1. `monograph_id` is removed from the attributes and resolved
//! 2. The remaining attributes are applied to the child (base save)
//! 3. If the child is not yet a member, it is appended and the monograph saved
//! 4. Unless the caller set `visibility`, the child inherits the monograph's
//! 5. The child's parent reference is set
//!
//! The base save runs even when the monograph lookup fails; the lookup
//! failure is reported afterwards. Child save and membership are therefore
//! not atomic.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod actor;
pub mod attributes;
pub mod error;
pub mod member;

// Re-exports
pub use actor::{AttachOutcome, MembershipActor, SideEffect};
pub use attributes::{Attributes, MONOGRAPH_ID, TITLE, VISIBILITY};
pub use error::{CurationError, Result};
pub use member::Member;
