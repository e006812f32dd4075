//! Membership actor
//!
//! Runs the save of a section or file set and, when a `monograph_id`
//! attribute came along, attaches the child to that monograph.

use crate::attributes::{Attributes, VISIBILITY};
use crate::error::{CurationError, Result};
use crate::member::Member;
use press_registry::{Persistence, RegistryError, ResourceLookup};
use press_types::{Monograph, PrincipalId, ResourceId, Visibility};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A side effect performed while attaching
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SideEffect {
    /// The child was appended to the monograph's members
    MemberAppended {
        monograph: ResourceId,
        position: usize,
    },

    /// The monograph was committed
    MonographSaved { monograph: ResourceId },

    /// The child took the monograph's visibility
    VisibilityInherited { visibility: Visibility },

    /// The child's parent reference was set
    ParentReferenceSet { monograph: ResourceId },
}

/// Result of [`MembershipActor::apply_save_data`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachOutcome {
    /// Monograph named by the attributes, if any
    pub monograph: Option<ResourceId>,

    /// Side effects, in the order they happened
    pub side_effects: Vec<SideEffect>,

    /// Attributes left after `monograph_id` was extracted
    pub attributes: Attributes,
}

impl AttachOutcome {
    /// Whether attaching changed nothing (no parent, or already a member)
    pub fn is_noop(&self) -> bool {
        self.side_effects.is_empty()
    }

    pub fn inherited_visibility(&self) -> Option<Visibility> {
        self.side_effects.iter().find_map(|effect| match effect {
            SideEffect::VisibilityInherited { visibility } => Some(*visibility),
            _ => None,
        })
    }
}

/// Attaches sections and file sets to monographs
pub struct MembershipActor<R> {
    registry: Arc<R>,
}

impl<R> MembershipActor<R>
where
    R: ResourceLookup + Persistence,
{
    pub fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<R> {
        &self.registry
    }

    /// Apply `attributes` to `member` and attach it to the monograph they
    /// name, if any.
    ///
    /// The member itself is not saved here; [`MembershipActor::create`] and
    /// [`MembershipActor::update`] commit it afterwards.
    pub fn apply_save_data<M: Member>(
        &self,
        member: &mut M,
        mut attributes: Attributes,
    ) -> Result<AttachOutcome> {
        let monograph_id = attributes.take_monograph_id()?;
        let parent = monograph_id
            .as_ref()
            .map(|id| self.registry.monograph(id));

        member.apply_attributes(&attributes)?;

        let mut outcome = AttachOutcome {
            monograph: monograph_id.clone(),
            side_effects: Vec::new(),
            attributes,
        };

        match (monograph_id, parent) {
            (Some(id), Some(Err(err))) => {
                warn!(monograph = %id, member = %member.id(), error = %err, "parent lookup failed");
                Err(lookup_error(id, err))
            }
            (_, Some(Ok(mut monograph))) => {
                self.attach(member, &mut monograph, &mut outcome)?;
                Ok(outcome)
            }
            _ => Ok(outcome),
        }
    }

    fn attach<M: Member>(
        &self,
        member: &mut M,
        monograph: &mut Monograph,
        outcome: &mut AttachOutcome,
    ) -> Result<()> {
        let Some(position) = monograph.append_member(member.id().clone()) else {
            debug!(monograph = %monograph.id, member = %member.id(), "already a member");
            return Ok(());
        };
        outcome.side_effects.push(SideEffect::MemberAppended {
            monograph: monograph.id.clone(),
            position,
        });

        self.registry.save_monograph(monograph)?;
        outcome.side_effects.push(SideEffect::MonographSaved {
            monograph: monograph.id.clone(),
        });
        info!(
            monograph = %monograph.id,
            member = %member.id(),
            kind = %member.kind(),
            position,
            "member appended"
        );

        if !outcome.attributes.contains_key(VISIBILITY) {
            member.set_visibility(monograph.visibility);
            outcome.side_effects.push(SideEffect::VisibilityInherited {
                visibility: monograph.visibility,
            });
        }

        member.set_monograph_id(monograph.id.clone());
        outcome.side_effects.push(SideEffect::ParentReferenceSet {
            monograph: monograph.id.clone(),
        });
        Ok(())
    }

    /// Create a new member from `attributes` and commit it.
    ///
    /// The member is committed even when the parent lookup fails; the
    /// lookup failure is returned after the commit.
    pub fn create<M: Member + Default>(
        &self,
        attributes: Attributes,
        creator: Option<PrincipalId>,
    ) -> Result<(M, AttachOutcome)> {
        let mut member = M::default();
        if let Some(creator) = creator {
            member.set_creator(creator);
        }
        let outcome = self.save(&mut member, attributes)?;
        Ok((member, outcome))
    }

    /// Update an existing member with `attributes` and commit it
    pub fn update<M: Member>(&self, member: &mut M, attributes: Attributes) -> Result<AttachOutcome> {
        self.save(member, attributes)
    }

    fn save<M: Member>(&self, member: &mut M, attributes: Attributes) -> Result<AttachOutcome> {
        let result = self.apply_save_data(member, attributes);
        let commit = match &result {
            Ok(_) => true,
            Err(err) => err.is_lookup_failure(),
        };
        if commit {
            member.persist(self.registry.as_ref())?;
            debug!(member = %member.id(), kind = %member.kind(), "member committed");
        }
        result
    }
}

fn lookup_error(id: ResourceId, err: RegistryError) -> CurationError {
    match err {
        RegistryError::NotFound { .. } => CurationError::ParentNotFound(id),
        source => CurationError::ParentLookup {
            monograph: id,
            source,
        },
    }
}
