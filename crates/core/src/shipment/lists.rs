//! Enumerated option lists for shipment fields.
//!
//! Consumed by `enum-membership` rules and by form layers rendering
//! drop-downs. Entries keep the carrier's ordering.

use serde::Serialize;

use super::fields::ShipmentField;

/// Shipment type: delivery to the consignee.
pub const TYPE_DELIVERIES: &str = "מסירה";
/// Shipment type: pickup from the consignee.
pub const TYPE_RETURNS: &str = "איסוף";

pub const DEFAULT_CODE: &str = "140";
pub const DEFAULT_STAGE: &str = "4";
pub const DEFAULT_CARGO_TYPE: &str = "199";

/// One acceptable value of an enumerated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionEntry {
    pub value: &'static str,
    pub label: &'static str,
}

const fn entry(value: &'static str, label: &'static str) -> OptionEntry {
    OptionEntry { value, label }
}

pub const TYPE_OPTIONS: &[OptionEntry] = &[
    entry(TYPE_DELIVERIES, "Deliveries"),
    entry(TYPE_RETURNS, "Returns"),
];

pub const CODE_OPTIONS: &[OptionEntry] = &[
    entry("140", "Home Delivery"),
    entry("240", "PUDO (pickup point)"),
];

pub const CARGO_TYPE_OPTIONS: &[OptionEntry] = &[
    entry("99", "cargo_type_99"),
    entry("100", "cargo_type_100"),
    entry("130", "cargo_type_130"),
    entry("145", "cargo_type_145"),
    entry("150", "cargo_type_150"),
    entry("155", "cargo_type_155"),
    entry("160", "cargo_type_160"),
    entry("170", "cargo_type_170"),
    entry("190", "cargo_type_190"),
    entry("198", "cargo_type_198"),
    entry("199", "cargo_type_199"),
    entry("999", "cargo_type_999"),
];

pub const AUTO_PICKUP_POINT_OPTIONS: &[OptionEntry] = &[
    entry("N", "Do not assign (default)"),
    entry("Y", "Assign any type (store or locker)"),
    entry("L", "Assign a locker"),
    entry("S", "Assign a store"),
];

pub const PAYMENT_TYPE_CODE_OPTIONS: &[OptionEntry] = &[
    entry("", ""),
    entry("1", "paymentTypeCode_check"),
    entry("2", "paymentTypeCode_cash"),
];

/// The option list governing `field`, if it is an enumerated field.
pub fn options_for(field: ShipmentField) -> Option<&'static [OptionEntry]> {
    match field {
        ShipmentField::Type => Some(TYPE_OPTIONS),
        ShipmentField::Code => Some(CODE_OPTIONS),
        ShipmentField::CargoType => Some(CARGO_TYPE_OPTIONS),
        ShipmentField::AutoPickupPoint => Some(AUTO_PICKUP_POINT_OPTIONS),
        ShipmentField::PaymentTypeCode => Some(PAYMENT_TYPE_CODE_OPTIONS),
        _ => None,
    }
}

/// Whether `value` is one of the acceptable codes in `options`.
///
/// Codes compare as exact strings, so `"0140"` is not `"140"`.
pub fn contains(options: &[OptionEntry], value: &str) -> bool {
    options.iter().any(|option| option.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_listed_options() {
        assert!(contains(TYPE_OPTIONS, TYPE_DELIVERIES));
        assert!(contains(CODE_OPTIONS, DEFAULT_CODE));
        assert!(contains(CARGO_TYPE_OPTIONS, DEFAULT_CARGO_TYPE));
    }

    #[test]
    fn membership_is_exact() {
        assert!(contains(CODE_OPTIONS, "240"));
        assert!(!contains(CODE_OPTIONS, "14"));
        assert!(!contains(CODE_OPTIONS, "0140"));
        assert!(!contains(AUTO_PICKUP_POINT_OPTIONS, "n"));
    }

    #[test]
    fn only_enumerated_fields_have_options() {
        assert_eq!(options_for(ShipmentField::Code), Some(CODE_OPTIONS));
        assert!(options_for(ShipmentField::Stage).is_none());
        assert!(options_for(ShipmentField::ConsigneeName).is_none());
    }

    #[test]
    fn cargo_types_keep_carrier_order() {
        let values: Vec<_> = CARGO_TYPE_OPTIONS.iter().map(|o| o.value).collect();
        assert_eq!(values.first(), Some(&"99"));
        assert_eq!(values.last(), Some(&"999"));
        assert_eq!(values.len(), 12);
    }
}
