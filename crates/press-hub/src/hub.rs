//! Request harness
//!
//! Every entry point takes a principal loaded once for the request, resolves
//! the target from the registry, gates it with the ability, and only then
//! runs the membership actor.

use crate::catalog::{self, CatalogQuery};
use crate::config::HubConfig;
use crate::error::{HubError, HubResult};
use crate::seed::load_seed;
use crate::target::TargetRef;
use press_curation::{Attributes, AttachOutcome, MembershipActor, MONOGRAPH_ID, VISIBILITY};
use press_policy::{Ability, AbilityOptions, DecisionCard, Target};
use press_registry::{
    InMemoryRegistry, PressDirectory, PrincipalDirectory, RegistryError, ResourceLookup,
};
use press_types::{
    Action, FileSet, Monograph, Press, PressId, Principal, PrincipalId, ResourceId, ResourceKind,
    RoleRecord, Section, SubBrand, Visibility,
};
use std::sync::Arc;
use tracing::{info, warn};

/// A target resolved from the registry, owning what it loaded
enum Loaded {
    Presses,
    JobDashboard,
    Press(Press),
    SubBrand(SubBrand),
    Role(RoleRecord),
    Monograph(Monograph),
    Section(Section, Option<Monograph>),
    FileSet(FileSet, Option<Monograph>),
}

impl Loaded {
    fn target(&self) -> Target<'_> {
        match self {
            Loaded::Presses => Target::Presses,
            Loaded::JobDashboard => Target::JobDashboard,
            Loaded::Press(press) => Target::Press(press),
            Loaded::SubBrand(sub_brand) => Target::SubBrand(sub_brand),
            Loaded::Role(role) => Target::Role(role),
            Loaded::Monograph(monograph) => Target::Monograph(monograph),
            Loaded::Section(section, parent) => Target::Section {
                section,
                parent: parent.as_ref(),
            },
            Loaded::FileSet(file_set, parent) => Target::FileSet {
                file_set,
                parent: parent.as_ref(),
            },
        }
    }
}

/// The press hub: registry, ability and membership actor
pub struct PressHub {
    registry: Arc<InMemoryRegistry>,
    ability: Ability,
    actor: MembershipActor<InMemoryRegistry>,
}

impl PressHub {
    pub fn new(registry: Arc<InMemoryRegistry>, options: AbilityOptions) -> Self {
        Self {
            actor: MembershipActor::new(registry.clone()),
            ability: Ability::with_options(options),
            registry,
        }
    }

    /// Build a hub from configuration, seeding the registry when a seed
    /// file is configured
    pub fn from_config(config: &HubConfig) -> HubResult<Self> {
        let registry = match &config.seed.path {
            Some(path) => {
                let seed = load_seed(path).map_err(|e| HubError::Seed(format!("{:#}", e)))?;
                InMemoryRegistry::from_seed(seed)?
            }
            None => InMemoryRegistry::new(),
        };
        info!(
            monographs = registry.monograph_count(),
            publish_for_press_admins = config.policy.publish_for_press_admins,
            "press hub ready"
        );
        Ok(Self::new(Arc::new(registry), config.policy))
    }

    pub fn registry(&self) -> &Arc<InMemoryRegistry> {
        &self.registry
    }

    pub fn ability(&self) -> &Ability {
        &self.ability
    }

    /// Load the requesting principal; `None` is the anonymous visitor
    pub fn principal(&self, id: Option<&str>) -> HubResult<Principal> {
        let id = id.map(PrincipalId::new);
        Ok(self.registry.load_or_anonymous(id.as_ref())?)
    }

    /// Evaluate `action` on a registry target and return the audit card
    pub fn check(
        &self,
        principal: &Principal,
        action: Action,
        target: &TargetRef,
    ) -> HubResult<DecisionCard> {
        let loaded = self.resolve(target)?;
        Ok(self.evaluate(principal, action, &loaded.target()))
    }

    /// Like [`PressHub::check`], but a denial is an error
    pub fn authorize(
        &self,
        principal: &Principal,
        action: Action,
        target: &Target<'_>,
    ) -> HubResult<DecisionCard> {
        let card = self.evaluate(principal, action, target);
        if card.was_allowed() {
            Ok(card)
        } else {
            warn!(
                principal = %card.principal,
                %action,
                target = %card.target,
                "request forbidden"
            );
            Err(HubError::Forbidden {
                principal: card.principal,
                action,
                target: card.target,
            })
        }
    }

    /// Attach an existing section to a monograph.
    ///
    /// Requires `update` on the section and on the monograph. A monograph
    /// that does not exist is left to the actor, which still commits the
    /// section and then reports the missing parent.
    pub fn attach_section(
        &self,
        principal: &Principal,
        section_id: &ResourceId,
        monograph_id: &ResourceId,
        visibility: Option<Visibility>,
    ) -> HubResult<(Section, AttachOutcome)> {
        let mut section = self.registry.section(section_id)?;
        let parent = self.parent_of(section.monograph_id.as_ref())?;
        self.authorize(
            principal,
            Action::Update,
            &Target::Section {
                section: &section,
                parent: parent.as_ref(),
            },
        )?;

        let attributes = self.attach_attributes(principal, monograph_id, visibility)?;
        let outcome = self.actor.update(&mut section, attributes)?;
        Ok((section, outcome))
    }

    /// Attach an existing file set to a monograph; see
    /// [`PressHub::attach_section`]
    pub fn attach_file_set(
        &self,
        principal: &Principal,
        file_set_id: &ResourceId,
        monograph_id: &ResourceId,
        visibility: Option<Visibility>,
    ) -> HubResult<(FileSet, AttachOutcome)> {
        let mut file_set = self.registry.file_set(file_set_id)?;
        let parent = self.parent_of(file_set.monograph_id.as_ref())?;
        self.authorize(
            principal,
            Action::Update,
            &Target::FileSet {
                file_set: &file_set,
                parent: parent.as_ref(),
            },
        )?;

        let attributes = self.attach_attributes(principal, monograph_id, visibility)?;
        let outcome = self.actor.update(&mut file_set, attributes)?;
        Ok((file_set, outcome))
    }

    /// Create a section from form attributes.
    ///
    /// The create check sees the monograph named by `monograph_id`, so press
    /// admins may create sections inside their own press's monographs.
    pub fn create_section(
        &self,
        principal: &Principal,
        attributes: Attributes,
    ) -> HubResult<(Section, AttachOutcome)> {
        let parent = self.creation_parent(&attributes)?;
        let draft = Section::default();
        self.authorize(
            principal,
            Action::Create,
            &Target::Section {
                section: &draft,
                parent: parent.as_ref(),
            },
        )?;
        Ok(self.actor.create(attributes, principal.id.clone())?)
    }

    /// Create a file set from form attributes; see [`PressHub::create_section`]
    pub fn create_file_set(
        &self,
        principal: &Principal,
        attributes: Attributes,
    ) -> HubResult<(FileSet, AttachOutcome)> {
        let parent = self.creation_parent(&attributes)?;
        let draft = FileSet::default();
        self.authorize(
            principal,
            Action::Create,
            &Target::FileSet {
                file_set: &draft,
                parent: parent.as_ref(),
            },
        )?;
        Ok(self.actor.create(attributes, principal.id.clone())?)
    }

    /// Monographs `principal` may read, narrowed by `query`
    pub fn catalog(&self, principal: &Principal, query: &CatalogQuery) -> HubResult<Vec<Monograph>> {
        if let Some(subdomain) = &query.press {
            self.registry.press_by_subdomain(subdomain)?;
        }
        let monographs = self.registry.list_monographs()?;
        Ok(catalog::visible_monographs(
            &self.ability,
            principal,
            monographs,
            query,
        ))
    }

    fn evaluate(&self, principal: &Principal, action: Action, target: &Target<'_>) -> DecisionCard {
        let card = self.ability.evaluate_with_card(principal, action, target);
        info!(
            decision_id = %card.id,
            principal = %card.principal,
            %action,
            target = %card.target,
            allowed = card.was_allowed(),
            "capability checked"
        );
        card
    }

    fn resolve(&self, target: &TargetRef) -> HubResult<Loaded> {
        let loaded = match target {
            TargetRef::Presses => Loaded::Presses,
            TargetRef::JobDashboard => Loaded::JobDashboard,
            TargetRef::Press(subdomain) => Loaded::Press(self.registry.press_by_subdomain(subdomain)?),
            TargetRef::Resource { kind, id } => match kind {
                ResourceKind::Press => Loaded::Press(self.registry.press(&PressId::new(id.as_str()))?),
                ResourceKind::SubBrand => Loaded::SubBrand(self.registry.sub_brand(id)?),
                ResourceKind::Role => Loaded::Role(self.registry.role(id)?),
                ResourceKind::Monograph => Loaded::Monograph(self.registry.monograph(id)?),
                ResourceKind::Section => {
                    let section = self.registry.section(id)?;
                    let parent = self.parent_of(section.monograph_id.as_ref())?;
                    Loaded::Section(section, parent)
                }
                ResourceKind::FileSet => {
                    let file_set = self.registry.file_set(id)?;
                    let parent = self.parent_of(file_set.monograph_id.as_ref())?;
                    Loaded::FileSet(file_set, parent)
                }
            },
        };
        Ok(loaded)
    }

    /// The monograph a child points at; a dangling reference is unattached
    fn parent_of(&self, monograph_id: Option<&ResourceId>) -> HubResult<Option<Monograph>> {
        let Some(id) = monograph_id else {
            return Ok(None);
        };
        match self.registry.monograph(id) {
            Ok(monograph) => Ok(Some(monograph)),
            Err(RegistryError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn creation_parent(&self, attributes: &Attributes) -> HubResult<Option<Monograph>> {
        let mut peek = attributes.clone();
        let id = peek.take_monograph_id()?;
        self.parent_of(id.as_ref())
    }

    /// Attributes for an attach, after checking `update` on the monograph
    fn attach_attributes(
        &self,
        principal: &Principal,
        monograph_id: &ResourceId,
        visibility: Option<Visibility>,
    ) -> HubResult<Attributes> {
        if let Some(monograph) = self.parent_of(Some(monograph_id))? {
            self.authorize(principal, Action::Update, &Target::Monograph(&monograph))?;
        }

        let mut attributes = Attributes::new().with(MONOGRAPH_ID, monograph_id.as_str());
        if let Some(visibility) = visibility {
            attributes.insert(VISIBILITY, visibility.as_str());
        }
        Ok(attributes)
    }
}
