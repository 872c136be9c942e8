//! Rule evaluator: pure logic, no I/O.

use validator::ValidateEmail;

use super::catalog::RuleCatalog;
use super::fields::ShipmentField;
use super::lists;
use super::record::ShipmentRecord;
use super::rules::{Constraint, Rule, Violation};

/// Evaluate every rule of `catalog` against `record`.
///
/// Violations come back in rule declaration order, then in the order the
/// rule lists its fields. Evaluation never stops early.
pub fn evaluate_rules(catalog: &RuleCatalog, record: &ShipmentRecord) -> Vec<Violation> {
    let mut violations = Vec::new();

    for rule in catalog.rules() {
        if !rule.condition.applies(record) {
            continue;
        }
        for &field in rule.fields {
            if let Some(violation) = evaluate_single_field(rule, field, record.get(field)) {
                violations.push(violation);
            }
        }
    }

    violations
}

fn evaluate_single_field(rule: &Rule, field: ShipmentField, value: &str) -> Option<Violation> {
    if value.is_empty() && rule.skip_on_empty {
        return None;
    }

    let message = match &rule.constraint {
        Constraint::Required => value
            .is_empty()
            .then(|| format!("{field} cannot be blank.")),
        Constraint::IntegerPattern(pattern)
        | Constraint::NumericPattern(pattern)
        | Constraint::DateOrTimePattern(pattern) => (!pattern.is_match(value))
            .then(|| format!("{field} must be {}.", pattern.description())),
        Constraint::MaxLength(max) => (value.chars().count() > *max)
            .then(|| format!("{field} should contain at most {max} characters.")),
        Constraint::EnumMembership => {
            let allowed = lists::options_for(field)
                .is_some_and(|options| lists::contains(options, value));
            (!allowed).then(|| format!("{field} is invalid."))
        }
        Constraint::EmailFormat => (!value.validate_email())
            .then(|| format!("{field} is not a valid email address.")),
    }?;

    Some(Violation {
        field,
        kind: rule.kind(),
        message,
    })
}

impl RuleCatalog {
    /// Validate `record` against this catalog. An empty result means valid.
    pub fn validate(&self, record: &ShipmentRecord) -> Vec<Violation> {
        evaluate_rules(self, record)
    }
}
