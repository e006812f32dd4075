//! Ability rule trait and the ordered rule list
//!
//! Rules are independent clauses. An [`Ability`] asks them in order and
//! allows the request as soon as one of them permits it.

use crate::decision::{AbilityDecision, DecisionCard, RuleEvaluationRecord};
use crate::error::{PolicyError, Result};
use crate::rules::{
    PlatformAdminRule, PressAdminPublishRule, PressAdminRule, PressCatalogRule, PressEditorRule,
    PublicReadRule,
};
use crate::target::Target;
use press_types::{Action, Principal};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// One clause of an ability
pub trait AbilityRule: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this rule
    fn id(&self) -> &str;

    /// Human-readable name for this rule
    fn name(&self) -> &str;

    /// Whether this rule permits `principal` to perform `action` on `target`
    fn permits(&self, principal: &Principal, action: Action, target: &Target<'_>) -> bool;

    fn description(&self) -> &str {
        "Ability rule"
    }
}

/// Switches for the default rule set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityOptions {
    /// Let press admins publish monographs of their own press
    #[serde(default)]
    pub publish_for_press_admins: bool,
}

/// Ordered list of rules, combined with logical OR
#[derive(Debug, Clone)]
pub struct Ability {
    rules: Vec<Arc<dyn AbilityRule>>,
}

impl Ability {
    /// An ability with no rules: denies everything
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The default rule set
    pub fn with_options(options: AbilityOptions) -> Self {
        let mut rules: Vec<Arc<dyn AbilityRule>> = vec![
            Arc::new(PlatformAdminRule),
            Arc::new(PressCatalogRule),
            Arc::new(PressAdminRule),
            Arc::new(PressEditorRule),
            Arc::new(PublicReadRule),
        ];
        if options.publish_for_press_admins {
            rules.push(Arc::new(PressAdminPublishRule));
        }
        Self { rules }
    }

    /// Append a rule; rule ids must be unique
    pub fn add_rule(&mut self, rule: Arc<dyn AbilityRule>) -> Result<()> {
        if self.rules.iter().any(|r| r.id() == rule.id()) {
            return Err(PolicyError::DuplicateRule(rule.id().to_string()));
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Ids of the rules, in evaluation order
    pub fn rule_ids(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Whether `principal` may perform `action` on `target`
    pub fn can(&self, principal: &Principal, action: Action, target: &Target<'_>) -> bool {
        let matched = self
            .rules
            .iter()
            .find(|rule| rule.permits(principal, action, target));

        match matched {
            Some(rule) => {
                debug!(
                    principal = %principal.label(),
                    %action,
                    target = %target.describe(),
                    rule = rule.id(),
                    "ability allowed"
                );
                true
            }
            None => {
                debug!(
                    principal = %principal.label(),
                    %action,
                    target = %target.describe(),
                    "ability denied"
                );
                false
            }
        }
    }

    /// Negation of [`Ability::can`]
    pub fn cannot(&self, principal: &Principal, action: Action, target: &Target<'_>) -> bool {
        !self.can(principal, action, target)
    }

    /// Evaluate and record every rule consulted
    pub fn evaluate_with_card(
        &self,
        principal: &Principal,
        action: Action,
        target: &Target<'_>,
    ) -> DecisionCard {
        let mut card = DecisionCard::new(principal.label(), action, target.describe());

        for rule in &self.rules {
            let start = Instant::now();
            let permitted = rule.permits(principal, action, target);
            let duration_us = start.elapsed().as_micros() as u64;

            debug!(rule = rule.id(), permitted, "rule evaluated");
            card.add_evaluation(
                RuleEvaluationRecord::new(rule.id(), rule.name(), permitted, duration_us)
                    .with_description(rule.description()),
            );

            if permitted {
                card.decision = AbilityDecision::allow(rule.id());
                break;
            }
        }

        card
    }

    /// Every action `principal` may perform on `target`
    pub fn permitted_actions(&self, principal: &Principal, target: &Target<'_>) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|action| self.can(principal, *action, target))
            .collect()
    }
}

impl Default for Ability {
    fn default() -> Self {
        Self::with_options(AbilityOptions::default())
    }
}

/// Check against the default rule set
pub fn can(principal: &Principal, action: Action, target: &Target<'_>) -> bool {
    Ability::default().can(principal, action, target)
}

/// Whether any of `granted` covers the requested action
pub(crate) fn grants_any(action: Action, granted: &[Action]) -> bool {
    granted.iter().any(|g| action.is_covered_by(*g))
}

#[cfg(test)]
mod tests {
    use super::*;
    use press_types::{Monograph, PrincipalId, Visibility};

    #[derive(Debug)]
    struct AllowReads;

    impl AbilityRule for AllowReads {
        fn id(&self) -> &str {
            "allow-reads"
        }

        fn name(&self) -> &str {
            "Allow Reads"
        }

        fn permits(&self, _principal: &Principal, action: Action, _target: &Target<'_>) -> bool {
            action == Action::Read
        }
    }

    #[test]
    fn test_empty_ability_denies() {
        let ability = Ability::empty();
        let admin = Principal::platform_admin(PrincipalId::new("root"));
        assert!(ability.cannot(&admin, Action::Read, &Target::Presses));
    }

    #[test]
    fn test_rules_are_ored() {
        let mut ability = Ability::empty();
        ability.add_rule(Arc::new(AllowReads)).unwrap();

        let anon = Principal::anonymous();
        let monograph = Monograph::new("umich");
        assert!(ability.can(&anon, Action::Read, &Target::Monograph(&monograph)));
        assert!(!ability.can(&anon, Action::Update, &Target::Monograph(&monograph)));
    }

    #[test]
    fn test_duplicate_rule_rejected() {
        let mut ability = Ability::empty();
        ability.add_rule(Arc::new(AllowReads)).unwrap();
        let err = ability.add_rule(Arc::new(AllowReads)).unwrap_err();
        assert!(matches!(err, PolicyError::DuplicateRule(id) if id == "allow-reads"));
    }

    #[test]
    fn test_card_stops_at_first_match() {
        let ability = Ability::default();
        let admin = Principal::platform_admin(PrincipalId::new("root"));
        let monograph = Monograph::new("umich");

        let card = ability.evaluate_with_card(&admin, Action::Publish, &Target::Monograph(&monograph));
        assert!(card.was_allowed());
        assert_eq!(card.decision.rule_id(), Some("platform-admin"));
        assert_eq!(card.rules_evaluated.len(), 1);
        assert_eq!(
            card.rules_evaluated[0].rule_description,
            "Platform admins manage everything, including the job dashboard"
        );
    }

    #[test]
    fn test_card_falls_back_to_default_description() {
        let mut ability = Ability::empty();
        ability.add_rule(Arc::new(AllowReads)).unwrap();

        let card = ability.evaluate_with_card(&Principal::anonymous(), Action::Read, &Target::Presses);
        assert_eq!(card.rules_evaluated[0].rule_description, "Ability rule");
    }

    #[test]
    fn test_card_records_every_rule_on_deny() {
        let ability = Ability::default();
        let anon = Principal::anonymous();
        let monograph = Monograph::new("umich");

        let card = ability.evaluate_with_card(&anon, Action::Update, &Target::Monograph(&monograph));
        assert!(!card.was_allowed());
        assert_eq!(card.rules_evaluated.len(), ability.rule_ids().len());
        assert!(card.rules_evaluated.iter().all(|r| !r.permitted));
    }

    #[test]
    fn test_publish_option_adds_rule() {
        let strict = Ability::default();
        let relaxed = Ability::with_options(AbilityOptions {
            publish_for_press_admins: true,
        });
        assert!(!strict.rule_ids().contains(&"press-admin-publish"));
        assert!(relaxed.rule_ids().contains(&"press-admin-publish"));
    }

    #[test]
    fn test_permitted_actions_for_public_monograph() {
        let ability = Ability::default();
        let anon = Principal::anonymous();
        let monograph = Monograph::new("umich").with_visibility(Visibility::Public);

        assert_eq!(
            ability.permitted_actions(&anon, &Target::Monograph(&monograph)),
            vec![Action::Read]
        );
    }
}
