//! Validation rule and violation types.

use regex::Regex;
use serde::Serialize;

use super::fields::ShipmentField;
use super::record::ShipmentRecord;
use crate::error::CoreError;

/// Tag of a [`Constraint`], reported in violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstraintKind {
    Required,
    IntegerPattern,
    NumericPattern,
    MaxLength,
    DateOrTimePattern,
    EnumMembership,
    EmailFormat,
}

impl ConstraintKind {
    /// Whether fields governed by this kind are classified as numeric.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::IntegerPattern | Self::NumericPattern)
    }
}

/// A compiled pattern together with the text shown in violation messages.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    description: &'static str,
}

impl Pattern {
    pub fn new(source: &str, description: &'static str) -> Result<Self, CoreError> {
        let regex = Regex::new(source)
            .map_err(|e| CoreError::Catalog(format!("Invalid pattern {source:?}: {e}")))?;
        Ok(Self { regex, description })
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// A constraint together with its parameters.
#[derive(Debug, Clone)]
pub enum Constraint {
    Required,
    IntegerPattern(Pattern),
    NumericPattern(Pattern),
    /// Maximum length in characters.
    MaxLength(usize),
    DateOrTimePattern(Pattern),
    /// Membership in the field's option list (see [`super::lists`]).
    EnumMembership,
    EmailFormat,
}

impl Constraint {
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Self::Required => ConstraintKind::Required,
            Self::IntegerPattern(_) => ConstraintKind::IntegerPattern,
            Self::NumericPattern(_) => ConstraintKind::NumericPattern,
            Self::MaxLength(_) => ConstraintKind::MaxLength,
            Self::DateOrTimePattern(_) => ConstraintKind::DateOrTimePattern,
            Self::EnumMembership => ConstraintKind::EnumMembership,
            Self::EmailFormat => ConstraintKind::EmailFormat,
        }
    }
}

/// Applicability predicate of a rule, evaluated against the whole record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    /// Applies only while the given field holds a non-empty, non-zero value.
    NonZero(ShipmentField),
}

impl Condition {
    pub fn applies(self, record: &ShipmentRecord) -> bool {
        match self {
            Self::Always => true,
            Self::NonZero(field) => is_non_zero(record.get(field)),
        }
    }
}

/// `""`, `"0"`, `"0.00"` and friends are zero; anything else counts as set.
fn is_non_zero(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    match trimmed.parse::<f64>() {
        Ok(number) => number != 0.0,
        Err(_) => true,
    }
}

/// One declarative rule: a constraint over a set of fields.
#[derive(Debug, Clone)]
pub struct Rule {
    pub fields: &'static [ShipmentField],
    pub constraint: Constraint,
    pub condition: Condition,
    /// When set, an empty value passes without evaluating the constraint.
    pub skip_on_empty: bool,
}

impl Rule {
    /// A rule that always applies. Every kind except `required` skips
    /// empty values.
    pub fn new(fields: &'static [ShipmentField], constraint: Constraint) -> Self {
        let skip_on_empty = !matches!(constraint, Constraint::Required);
        Self {
            fields,
            constraint,
            condition: Condition::Always,
            skip_on_empty,
        }
    }

    pub fn when(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    /// Evaluate the constraint against empty values as well.
    pub fn check_empty(mut self) -> Self {
        self.skip_on_empty = false;
        self
    }

    pub fn kind(&self) -> ConstraintKind {
        self.constraint.kind()
    }

    pub fn governs(&self, field: ShipmentField) -> bool {
        self.fields.contains(&field)
    }
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: ShipmentField,
    pub kind: ConstraintKind,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn numeric_kinds() {
        assert!(ConstraintKind::IntegerPattern.is_numeric());
        assert!(ConstraintKind::NumericPattern.is_numeric());
        assert!(!ConstraintKind::MaxLength.is_numeric());
        assert!(!ConstraintKind::Required.is_numeric());
    }

    #[test]
    fn invalid_pattern_is_a_catalog_error() {
        assert_matches!(Pattern::new("^[0-9", "broken"), Err(CoreError::Catalog(_)));
    }

    #[test]
    fn only_required_checks_empty_by_default() {
        let required = Rule::new(&[ShipmentField::CityName], Constraint::Required);
        let length = Rule::new(&[ShipmentField::CityName], Constraint::MaxLength(30));
        assert!(!required.skip_on_empty);
        assert!(length.skip_on_empty);
        assert!(!length.check_empty().skip_on_empty);
    }

    #[test]
    fn non_zero_condition() {
        let mut record = ShipmentRecord::new();
        let condition = Condition::NonZero(ShipmentField::ConsigneeSum);
        assert!(!condition.applies(&record));

        for zero in ["0", "0.00", " "] {
            record.set(ShipmentField::ConsigneeSum, zero);
            assert!(!condition.applies(&record), "{zero:?} should not apply");
        }

        record.set(ShipmentField::ConsigneeSum, "12.50");
        assert!(condition.applies(&record));
        assert!(Condition::Always.applies(&ShipmentRecord::new()));
    }

    #[test]
    fn violation_serializes_kind_in_kebab_case() {
        let violation = Violation {
            field: ShipmentField::Code,
            kind: ConstraintKind::EnumMembership,
            message: "code is invalid".to_string(),
        };
        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(json["field"], "code");
        assert_eq!(json["kind"], "enum-membership");
    }
}
