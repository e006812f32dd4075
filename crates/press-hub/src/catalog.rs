//! Press catalog
//!
//! The hub-wide catalog lists every monograph the principal may read. A press
//! catalog narrows it to one press, and a query keeps titles containing the
//! query text, ignoring case.

use press_policy::{Ability, Target};
use press_types::{Action, Monograph, Principal};

/// Catalog filters
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Restrict to one press's subdomain
    pub press: Option<String>,

    /// Case-insensitive title filter
    pub text: Option<String>,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_press(mut self, subdomain: impl Into<String>) -> Self {
        self.press = Some(subdomain.into());
        self
    }

    pub fn matching(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    fn accepts(&self, monograph: &Monograph) -> bool {
        if let Some(press) = &self.press {
            if &monograph.press != press {
                return false;
            }
        }
        match &self.text {
            Some(text) => monograph
                .title
                .to_lowercase()
                .contains(&text.to_lowercase()),
            None => true,
        }
    }
}

/// Monographs `principal` may read that pass `query`, in registry order
pub fn visible_monographs(
    ability: &Ability,
    principal: &Principal,
    monographs: Vec<Monograph>,
    query: &CatalogQuery,
) -> Vec<Monograph> {
    monographs
        .into_iter()
        .filter(|m| query.accepts(m))
        .filter(|m| ability.can(principal, Action::Read, &Target::Monograph(m)))
        .collect()
}
