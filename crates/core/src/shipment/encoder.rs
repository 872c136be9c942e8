//! Positional encoder for the carrier's flat, type-prefixed layout.
//!
//! One token per field, in declared field order, each formed by a one
//! character type prefix followed by the raw value. The encoder never pads,
//! trims or validates; framing the tokens for transport is up to the caller.

use std::fmt;

use serde::{Serialize, Serializer};

use super::catalog::RuleCatalog;
use super::fields::ShipmentField;
use super::record::ShipmentRecord;

/// Numeric/text classification of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Numeric,
    Text,
}

impl FieldKind {
    pub fn prefix(self) -> char {
        match self {
            Self::Numeric => 'N',
            Self::Text => 'A',
        }
    }
}

/// One encoded token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedField {
    pub field: ShipmentField,
    pub kind: FieldKind,
    pub value: String,
}

impl EncodedField {
    /// The wire token, e.g. `N3` or `AAlice`.
    pub fn token(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EncodedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.value)
    }
}

impl Serialize for EncodedField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Encode `record` using `catalog`'s numeric/text classification.
pub fn encode_record(catalog: &RuleCatalog, record: &ShipmentRecord) -> Vec<EncodedField> {
    record
        .iter()
        .map(|(field, value)| EncodedField {
            field,
            kind: if catalog.is_numeric(field) {
                FieldKind::Numeric
            } else {
                FieldKind::Text
            },
            value: value.to_string(),
        })
        .collect()
}

/// Wire tokens of an encoded record, in order.
pub fn tokens(encoded: &[EncodedField]) -> Vec<String> {
    encoded.iter().map(EncodedField::token).collect()
}

impl RuleCatalog {
    /// Encode `record` into its positional token sequence.
    pub fn encode(&self, record: &ShipmentRecord) -> Vec<EncodedField> {
        encode_record(self, record)
    }
}
