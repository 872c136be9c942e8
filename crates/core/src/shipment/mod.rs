//! Carrier shipment engine.
//!
//! Provides the shipment record and its field layout, the rule catalog, a
//! pure-logic validator, the positional encoder, and the option/label lookup
//! tables the catalog and form layers share.

pub mod catalog;
pub mod encoder;
pub mod evaluator;
pub mod fields;
pub mod labels;
pub mod lists;
pub mod record;
pub mod rules;

pub use catalog::RuleCatalog;
pub use encoder::{EncodedField, FieldKind};
pub use fields::ShipmentField;
pub use record::ShipmentRecord;
pub use rules::{ConstraintKind, Violation};

/// Validate a record against the standard carrier catalog.
pub fn validate(record: &ShipmentRecord) -> Vec<Violation> {
    RuleCatalog::standard().validate(record)
}

/// Encode a record using the standard carrier catalog's classification.
pub fn encode(record: &ShipmentRecord) -> Vec<EncodedField> {
    RuleCatalog::standard().encode(record)
}
