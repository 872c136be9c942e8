//! The carrier rule catalog.
//!
//! Rules are kept in declaration order; the validator reports violations in
//! that order. The numeric/text classification used by the encoder is
//! derived from the rules once, when the catalog is built.

use std::sync::LazyLock;

use super::fields::ShipmentField;
use super::lists;
use super::rules::{Condition, Constraint, Pattern, Rule};
use crate::error::CoreError;

use ShipmentField::*;

/// Signed integer of any width.
pub const INTEGER_PATTERN: &str = r"^[+-]?[0-9]+$";
/// Signed decimal number, optionally with an exponent.
pub const NUMBER_PATTERN: &str = r"^[-+]?[0-9]*\.?[0-9]+([eE][-+]?[0-9]+)?$";
pub const RETURN_PACKAGES_PATTERN: &str = r"^[0-9]{3}$";
/// Up to 8 integer digits and up to 2 decimals.
pub const CONSIGNEE_SUM_PATTERN: &str = r"^([0-9]){1,8}\.?([0-9]){0,2}$";
pub const DATE_PATTERN: &str = r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$";
pub const TIME_PATTERN: &str = r"^[0-9]{2}:[0-9]{2}$";

static STANDARD: LazyLock<RuleCatalog> = LazyLock::new(|| {
    RuleCatalog::new(standard_rules().expect("valid carrier patterns"))
        .expect("valid carrier catalog")
});

/// An ordered, immutable set of rules plus the derived field classification.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
    numeric: [bool; ShipmentField::COUNT],
}

impl RuleCatalog {
    /// Build a catalog, rejecting rules that cannot be evaluated.
    pub fn new(rules: Vec<Rule>) -> Result<Self, CoreError> {
        let mut numeric = [false; ShipmentField::COUNT];

        for (position, rule) in rules.iter().enumerate() {
            if rule.fields.is_empty() {
                return Err(CoreError::Catalog(format!(
                    "Rule #{position} ({:?}) governs no fields",
                    rule.kind()
                )));
            }
            for &field in rule.fields {
                if matches!(rule.constraint, Constraint::EnumMembership)
                    && lists::options_for(field).is_none()
                {
                    return Err(CoreError::Catalog(format!(
                        "Rule #{position} requires an option list for {field}"
                    )));
                }
                if rule.kind().is_numeric() {
                    numeric[field.index()] = true;
                }
            }
        }

        Ok(Self { rules, numeric })
    }

    /// The carrier's catalog, built once per process.
    pub fn standard() -> &'static RuleCatalog {
        &STANDARD
    }

    /// All rules in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules governing `field`, in declaration order.
    pub fn rules_for(&self, field: ShipmentField) -> impl Iterator<Item = &Rule> + '_ {
        self.rules.iter().filter(move |rule| rule.governs(field))
    }

    /// Whether `field` is governed by an integer or number constraint.
    pub fn is_numeric(&self, field: ShipmentField) -> bool {
        self.numeric[field.index()]
    }

    pub fn numeric_fields(&self) -> impl Iterator<Item = ShipmentField> + '_ {
        ShipmentField::ALL
            .into_iter()
            .filter(|field| self.is_numeric(*field))
    }
}

fn standard_rules() -> Result<Vec<Rule>, CoreError> {
    let number = || Pattern::new(NUMBER_PATTERN, "a number");
    let integer = || Pattern::new(INTEGER_PATTERN, "an integer");
    let date = || Pattern::new(DATE_PATTERN, "a date in DD/MM/YYYY format");

    Ok(vec![
        Rule::new(
            &[Type, Code, CargoType, ConsigneeName, CityName, StreetName, BuildingNumber, PhoneNumber],
            Constraint::Required,
        ),
        Rule::new(
            &[Code, Stage, CargoType, ReturnCargoType],
            Constraint::NumericPattern(number()?),
        ),
        Rule::new(
            &[ReturnPackagesNumber],
            Constraint::IntegerPattern(Pattern::new(RETURN_PACKAGES_PATTERN, "exactly 3 digits")?),
        ),
        Rule::new(
            &[PackagesNumber, ParcelPreparationTime],
            Constraint::NumericPattern(number()?),
        ),
        Rule::new(
            &[ConsigneeSum],
            Constraint::NumericPattern(Pattern::new(
                CONSIGNEE_SUM_PATTERN,
                "an amount with up to 8 digits and 2 decimals",
            )?),
        ),
        Rule::new(
            &[ReturnPickupPoint, PickupPoint, PaymentTypeCode],
            Constraint::IntegerPattern(integer()?),
        ),
        Rule::new(&[CompanyName, CityCode, StreetCode], Constraint::MaxLength(10)),
        Rule::new(&[ConsigneeName, PhoneNumber, PhoneNumber2], Constraint::MaxLength(20)),
        Rule::new(&[CityName, StreetName], Constraint::MaxLength(30)),
        Rule::new(&[BuildingNumber], Constraint::MaxLength(5)),
        Rule::new(&[EntranceNumber], Constraint::MaxLength(1)),
        Rule::new(&[FloorNumber], Constraint::MaxLength(2)),
        Rule::new(&[ApartmentNumber], Constraint::MaxLength(4)),
        Rule::new(&[ReferenceNumber], Constraint::MaxLength(200)),
        Rule::new(&[AddressRemarks], Constraint::MaxLength(70)),
        Rule::new(&[ShipmentRemarks], Constraint::MaxLength(80)),
        Rule::new(&[ReferenceNumber2], Constraint::MaxLength(50)),
        Rule::new(
            &[PickupDate, ParcelPreparationDate],
            Constraint::DateOrTimePattern(date()?),
        ),
        Rule::new(&[ConsigneeDate], Constraint::DateOrTimePattern(date()?))
            .when(Condition::NonZero(ConsigneeSum))
            .check_empty(),
        Rule::new(
            &[PickupTime],
            Constraint::DateOrTimePattern(Pattern::new(TIME_PATTERN, "a time in HH:MM format")?),
        ),
        Rule::new(&[PaymentCollectionNotes], Constraint::MaxLength(500)),
        Rule::new(&[ConsigneeEmail], Constraint::EmailFormat),
        Rule::new(
            &[Type, Code, CargoType, AutoPickupPoint, PaymentTypeCode],
            Constraint::EnumMembership,
        ),
    ])
}
