//! Seed data for the in-memory registry

use crate::error::Result;
use crate::lookup::Persistence;
use crate::memory::InMemoryRegistry;
use press_types::{FileSet, Monograph, Press, PrincipalId, RoleRecord, Section, SubBrand};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A principal entry in seed data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedPrincipal {
    pub id: PrincipalId,

    #[serde(default)]
    pub platform_admin: bool,
}

/// Everything needed to stand up a registry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub presses: Vec<Press>,

    #[serde(default)]
    pub sub_brands: Vec<SubBrand>,

    #[serde(default)]
    pub principals: Vec<SeedPrincipal>,

    #[serde(default)]
    pub roles: Vec<RoleRecord>,

    #[serde(default)]
    pub monographs: Vec<Monograph>,

    #[serde(default)]
    pub sections: Vec<Section>,

    #[serde(default)]
    pub file_sets: Vec<FileSet>,
}

impl InMemoryRegistry {
    /// Build a registry from seed data.
    ///
    /// Presses and principals go in first so that sub-brands and role
    /// records can be checked against them.
    pub fn from_seed(seed: Seed) -> Result<Self> {
        let registry = Self::new();

        for press in seed.presses {
            registry.register_press(press)?;
        }
        for principal in seed.principals {
            registry.register_principal(principal.id, principal.platform_admin);
        }
        for sub_brand in seed.sub_brands {
            registry.register_sub_brand(sub_brand)?;
        }
        for role in seed.roles {
            registry.register_role(role)?;
        }
        for monograph in &seed.monographs {
            registry.save_monograph(monograph)?;
        }
        for section in &seed.sections {
            registry.save_section(section)?;
        }
        for file_set in &seed.file_sets {
            registry.save_file_set(file_set)?;
        }

        info!(monographs = registry.monograph_count(), "registry seeded");
        Ok(registry)
    }
}
