//! Ability decision types
//!
//! A decision is the verdict of one check. A decision card is the audit
//! record of how that verdict was reached.

use chrono::{DateTime, Utc};
use press_types::Action;
use serde::{Deserialize, Serialize};

/// Verdict of a capability check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityDecision {
    /// Action is permitted
    Allow {
        /// Rule that permitted the action
        rule_id: String,
    },

    /// Action is not permitted by any rule
    Deny {
        /// Reason for denial
        reason: String,
    },
}

impl AbilityDecision {
    /// Create an allow decision
    pub fn allow(rule_id: impl Into<String>) -> Self {
        Self::Allow {
            rule_id: rule_id.into(),
        }
    }

    /// Create a deny decision
    pub fn deny(reason: impl Into<String>) -> Self {
        Self::Deny {
            reason: reason.into(),
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow { .. })
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Deny { .. })
    }

    /// Rule that permitted the action (if any)
    pub fn rule_id(&self) -> Option<&str> {
        match self {
            Self::Allow { rule_id } => Some(rule_id),
            Self::Deny { .. } => None,
        }
    }

    /// Reason for denial (if any)
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Allow { .. } => None,
            Self::Deny { reason } => Some(reason),
        }
    }
}

/// Audit card for a capability check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionCard {
    /// Unique identifier for this decision
    pub id: String,

    /// Principal that asked
    pub principal: String,

    /// Action requested
    pub action: Action,

    /// Target of the action
    pub target: String,

    /// The verdict
    pub decision: AbilityDecision,

    /// When the decision was made
    pub timestamp: DateTime<Utc>,

    /// Rules consulted, in evaluation order
    pub rules_evaluated: Vec<RuleEvaluationRecord>,
}

impl DecisionCard {
    /// Create a new card; the verdict starts as a deny until a rule matches
    pub fn new(principal: impl Into<String>, action: Action, target: impl Into<String>) -> Self {
        let principal = principal.into();
        let target = target.into();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            decision: AbilityDecision::deny(format!(
                "no rule permits {} to {} {}",
                principal, action, target
            )),
            principal,
            action,
            target,
            timestamp: Utc::now(),
            rules_evaluated: Vec::new(),
        }
    }

    /// Add a rule evaluation record
    pub fn add_evaluation(&mut self, record: RuleEvaluationRecord) {
        self.rules_evaluated.push(record);
    }

    pub fn was_allowed(&self) -> bool {
        self.decision.is_allowed()
    }
}

/// Record of a single rule evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleEvaluationRecord {
    pub rule_id: String,
    pub rule_name: String,

    /// What the rule covers, as reported by the rule
    #[serde(default)]
    pub rule_description: String,

    pub permitted: bool,

    /// Evaluation duration in microseconds
    pub duration_us: u64,
}

impl RuleEvaluationRecord {
    pub fn new(
        rule_id: impl Into<String>,
        rule_name: impl Into<String>,
        permitted: bool,
        duration_us: u64,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            rule_name: rule_name.into(),
            rule_description: String::new(),
            permitted,
            duration_us,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.rule_description = description.into();
        self
    }
}
