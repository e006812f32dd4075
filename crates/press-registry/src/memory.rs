//! In-memory implementation of the registry traits
//!
//! Suitable for development and testing. Production deployments should use
//! persistent backends implementing the same traits.

use crate::directory::{PressDirectory, PrincipalDirectory};
use crate::error::{RegistryError, Result};
use crate::lookup::{Persistence, ResourceLookup};
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use press_types::{
    FileSet, Grant, GrantSet, Monograph, Press, PressId, Principal, PrincipalId, ResourceId,
    ResourceKind, RoleRecord, Section, SubBrand,
};
use std::sync::RwLock;
use tracing::debug;

/// In-memory registry
pub struct InMemoryRegistry {
    presses: DashMap<PressId, Press>,
    by_subdomain: DashMap<String, PressId>,
    principals: DashMap<PrincipalId, bool>,
    roles: DashMap<ResourceId, RoleRecord>,
    sub_brands: DashMap<ResourceId, SubBrand>,
    monographs: DashMap<ResourceId, Monograph>,
    monograph_order: RwLock<Vec<ResourceId>>,
    sections: DashMap<ResourceId, Section>,
    file_sets: DashMap<ResourceId, FileSet>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self {
            presses: DashMap::new(),
            by_subdomain: DashMap::new(),
            principals: DashMap::new(),
            roles: DashMap::new(),
            sub_brands: DashMap::new(),
            monographs: DashMap::new(),
            monograph_order: RwLock::new(Vec::new()),
            sections: DashMap::new(),
            file_sets: DashMap::new(),
        }
    }

    /// Register a press; subdomains are unique
    pub fn register_press(&self, press: Press) -> Result<PressId> {
        let id = press.id.clone();
        match self.by_subdomain.entry(press.subdomain.clone()) {
            Entry::Occupied(_) => return Err(RegistryError::SubdomainTaken(press.subdomain)),
            Entry::Vacant(slot) => {
                slot.insert(id.clone());
            }
        }
        self.presses.insert(id.clone(), press);
        Ok(id)
    }

    /// Register a principal
    pub fn register_principal(&self, id: PrincipalId, platform_admin: bool) {
        self.principals.insert(id, platform_admin);
    }

    /// Store a role record for a known principal
    pub fn register_role(&self, role: RoleRecord) -> Result<ResourceId> {
        if !self.principals.contains_key(&role.principal_id) {
            return Err(RegistryError::PrincipalNotFound(role.principal_id));
        }
        let id = role.id.clone();
        self.roles.insert(id.clone(), role);
        Ok(id)
    }

    /// Store a sub-brand of a known press
    pub fn register_sub_brand(&self, sub_brand: SubBrand) -> Result<ResourceId> {
        if !self.presses.contains_key(&sub_brand.press_id) {
            return Err(RegistryError::PressNotFound(sub_brand.press_id.to_string()));
        }
        let id = sub_brand.id.clone();
        self.sub_brands.insert(id.clone(), sub_brand);
        Ok(id)
    }

    /// Role records held by a principal
    pub fn roles_of(&self, principal_id: &PrincipalId) -> Vec<RoleRecord> {
        self.roles
            .iter()
            .filter(|r| &r.value().principal_id == principal_id)
            .map(|r| r.value().clone())
            .collect()
    }

    pub fn monograph_count(&self) -> usize {
        self.monographs.len()
    }
}

impl Default for InMemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PrincipalDirectory for InMemoryRegistry {
    fn load_principal(&self, id: &PrincipalId) -> Result<Principal> {
        let platform_admin = *self
            .principals
            .get(id)
            .ok_or_else(|| RegistryError::PrincipalNotFound(id.clone()))?;

        let mut grants = GrantSet::new();
        for role in self.roles_of(id) {
            // Records without a press confer nothing
            let Some(press_id) = role.resource else {
                continue;
            };
            let press = self
                .presses
                .get(&press_id)
                .ok_or_else(|| RegistryError::PressNotFound(press_id.to_string()))?;
            grants.insert(Grant::new(press_id.clone(), press.subdomain.clone(), role.kind));
        }

        debug!(principal = %id, platform_admin, grants = grants.len(), "principal loaded");
        Ok(Principal {
            id: Some(id.clone()),
            platform_admin,
            grants,
        })
    }
}

impl PressDirectory for InMemoryRegistry {
    fn press(&self, id: &PressId) -> Result<Press> {
        self.presses
            .get(id)
            .map(|p| p.clone())
            .ok_or_else(|| RegistryError::PressNotFound(id.to_string()))
    }

    fn press_by_subdomain(&self, subdomain: &str) -> Result<Press> {
        let id = self
            .by_subdomain
            .get(subdomain)
            .map(|id| id.clone())
            .ok_or_else(|| RegistryError::PressNotFound(subdomain.to_string()))?;
        self.press(&id)
    }

    fn list_presses(&self) -> Result<Vec<Press>> {
        let mut presses: Vec<Press> = self.presses.iter().map(|p| p.value().clone()).collect();
        presses.sort_by(|a, b| a.subdomain.cmp(&b.subdomain));
        Ok(presses)
    }
}

impl ResourceLookup for InMemoryRegistry {
    fn monograph(&self, id: &ResourceId) -> Result<Monograph> {
        self.monographs
            .get(id)
            .map(|m| m.clone())
            .ok_or_else(|| RegistryError::not_found(ResourceKind::Monograph, id))
    }

    fn section(&self, id: &ResourceId) -> Result<Section> {
        self.sections
            .get(id)
            .map(|s| s.clone())
            .ok_or_else(|| RegistryError::not_found(ResourceKind::Section, id))
    }

    fn file_set(&self, id: &ResourceId) -> Result<FileSet> {
        self.file_sets
            .get(id)
            .map(|f| f.clone())
            .ok_or_else(|| RegistryError::not_found(ResourceKind::FileSet, id))
    }

    fn sub_brand(&self, id: &ResourceId) -> Result<SubBrand> {
        self.sub_brands
            .get(id)
            .map(|s| s.clone())
            .ok_or_else(|| RegistryError::not_found(ResourceKind::SubBrand, id))
    }

    fn role(&self, id: &ResourceId) -> Result<RoleRecord> {
        self.roles
            .get(id)
            .map(|r| r.clone())
            .ok_or_else(|| RegistryError::not_found(ResourceKind::Role, id))
    }

    fn list_monographs(&self) -> Result<Vec<Monograph>> {
        let order = self.monograph_order.read().map_err(|_| RegistryError::Lock)?;
        Ok(order
            .iter()
            .filter_map(|id| self.monographs.get(id).map(|m| m.clone()))
            .collect())
    }
}

impl Persistence for InMemoryRegistry {
    fn save_monograph(&self, monograph: &Monograph) -> Result<()> {
        let mut stored = monograph.clone();
        stored.date_modified = Some(Utc::now());

        if self.monographs.insert(stored.id.clone(), stored).is_none() {
            let mut order = self.monograph_order.write().map_err(|_| RegistryError::Lock)?;
            order.push(monograph.id.clone());
        }
        debug!(monograph = %monograph.id, members = monograph.members.len(), "monograph saved");
        Ok(())
    }

    fn save_section(&self, section: &Section) -> Result<()> {
        self.sections.insert(section.id.clone(), section.clone());
        debug!(section = %section.id, "section saved");
        Ok(())
    }

    fn save_file_set(&self, file_set: &FileSet) -> Result<()> {
        self.file_sets.insert(file_set.id.clone(), file_set.clone());
        debug!(file_set = %file_set.id, "file set saved");
        Ok(())
    }
}
