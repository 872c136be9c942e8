//! Declared field layout of a carrier shipment.
//!
//! The variant order is the carrier's positional layout: records store their
//! values in this order and the encoder emits tokens in this order.

use std::fmt;

use serde::{Serialize, Serializer};

use super::lists::{DEFAULT_CARGO_TYPE, DEFAULT_CODE, DEFAULT_STAGE, TYPE_DELIVERIES};

/// Default value of the `responseType` field.
pub const DEFAULT_RESPONSE_TYPE: &str = "XML";

/// One positional field of a shipment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShipmentField {
    Type,
    Code,
    Stage,
    CompanyName,
    N6,
    CargoType,
    ReturnCargoType,
    ReturnPackagesNumber,
    N10,
    ConsigneeName,
    CityCode,
    CityName,
    StreetCode,
    StreetName,
    BuildingNumber,
    EntranceNumber,
    FloorNumber,
    ApartmentNumber,
    PhoneNumber,
    PhoneNumber2,
    ReferenceNumber,
    PackagesNumber,
    AddressRemarks,
    ShipmentRemarks,
    ReferenceNumber2,
    PickupDate,
    PickupTime,
    N29,
    PaymentTypeCode,
    ConsigneeSum,
    ConsigneeDate,
    PaymentCollectionNotes,
    ReturnPickupPoint,
    PickupPoint,
    ResponseType,
    AutoPickupPoint,
    N38,
    N39,
    ConsigneeEmail,
    ParcelPreparationDate,
    ParcelPreparationTime,
}

impl ShipmentField {
    /// Number of positional fields.
    pub const COUNT: usize = 41;

    /// Every field in declared (positional) order.
    pub const ALL: [ShipmentField; Self::COUNT] = [
        Self::Type,
        Self::Code,
        Self::Stage,
        Self::CompanyName,
        Self::N6,
        Self::CargoType,
        Self::ReturnCargoType,
        Self::ReturnPackagesNumber,
        Self::N10,
        Self::ConsigneeName,
        Self::CityCode,
        Self::CityName,
        Self::StreetCode,
        Self::StreetName,
        Self::BuildingNumber,
        Self::EntranceNumber,
        Self::FloorNumber,
        Self::ApartmentNumber,
        Self::PhoneNumber,
        Self::PhoneNumber2,
        Self::ReferenceNumber,
        Self::PackagesNumber,
        Self::AddressRemarks,
        Self::ShipmentRemarks,
        Self::ReferenceNumber2,
        Self::PickupDate,
        Self::PickupTime,
        Self::N29,
        Self::PaymentTypeCode,
        Self::ConsigneeSum,
        Self::ConsigneeDate,
        Self::PaymentCollectionNotes,
        Self::ReturnPickupPoint,
        Self::PickupPoint,
        Self::ResponseType,
        Self::AutoPickupPoint,
        Self::N38,
        Self::N39,
        Self::ConsigneeEmail,
        Self::ParcelPreparationDate,
        Self::ParcelPreparationTime,
    ];

    /// Zero-based position in the carrier layout.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Wire/form name of the field.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Code => "code",
            Self::Stage => "stage",
            Self::CompanyName => "companyName",
            Self::N6 => "n6",
            Self::CargoType => "cargoType",
            Self::ReturnCargoType => "returnCargoType",
            Self::ReturnPackagesNumber => "returnPackagesNumber",
            Self::N10 => "n10",
            Self::ConsigneeName => "consigneeName",
            Self::CityCode => "cityCode",
            Self::CityName => "cityName",
            Self::StreetCode => "streetCode",
            Self::StreetName => "streetName",
            Self::BuildingNumber => "buildingNumber",
            Self::EntranceNumber => "entranceNumber",
            Self::FloorNumber => "floorNumber",
            Self::ApartmentNumber => "apartmentNumber",
            Self::PhoneNumber => "phoneNumber",
            Self::PhoneNumber2 => "phoneNumber2",
            Self::ReferenceNumber => "referenceNumber",
            Self::PackagesNumber => "packagesNumber",
            Self::AddressRemarks => "addressRemarks",
            Self::ShipmentRemarks => "shipmentRemarks",
            Self::ReferenceNumber2 => "referenceNumber2",
            Self::PickupDate => "pickupDate",
            Self::PickupTime => "pickupTime",
            Self::N29 => "n29",
            Self::PaymentTypeCode => "paymentTypeCode",
            Self::ConsigneeSum => "consigneeSum",
            Self::ConsigneeDate => "consigneeDate",
            Self::PaymentCollectionNotes => "paymentCollectionNotes",
            Self::ReturnPickupPoint => "returnPickupPoint",
            Self::PickupPoint => "pickupPoint",
            Self::ResponseType => "responseType",
            Self::AutoPickupPoint => "autoPickupPoint",
            Self::N38 => "n38",
            Self::N39 => "n39",
            Self::ConsigneeEmail => "consigneeEmail",
            Self::ParcelPreparationDate => "parcelPreparationDate",
            Self::ParcelPreparationTime => "parcelPreparationTime",
        }
    }

    /// Value a freshly constructed record holds for this field.
    pub const fn default_value(self) -> &'static str {
        match self {
            Self::Type => TYPE_DELIVERIES,
            Self::Code => DEFAULT_CODE,
            Self::Stage => DEFAULT_STAGE,
            Self::CargoType => DEFAULT_CARGO_TYPE,
            Self::ResponseType => DEFAULT_RESPONSE_TYPE,
            _ => "",
        }
    }

    /// Look a field up by its wire/form name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}

impl fmt::Display for ShipmentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ShipmentField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_declared_order() {
        for (position, field) in ShipmentField::ALL.iter().enumerate() {
            assert_eq!(field.index(), position);
        }
    }

    #[test]
    fn layout_starts_and_ends_with_carrier_positions() {
        assert_eq!(ShipmentField::ALL[0].name(), "type");
        assert_eq!(ShipmentField::ALL[9].name(), "consigneeName");
        assert_eq!(ShipmentField::ALL[34].name(), "responseType");
        assert_eq!(
            ShipmentField::ALL[ShipmentField::COUNT - 1].name(),
            "parcelPreparationTime"
        );
    }

    #[test]
    fn names_are_unique_and_resolvable() {
        for field in ShipmentField::ALL {
            assert_eq!(ShipmentField::from_name(field.name()), Some(field));
        }
    }

    #[test]
    fn from_name_is_case_sensitive() {
        assert_eq!(ShipmentField::from_name("consigneename"), None);
        assert_eq!(ShipmentField::from_name("addressList"), None);
    }

    #[test]
    fn defaults_match_carrier_constants() {
        assert_eq!(ShipmentField::Type.default_value(), "מסירה");
        assert_eq!(ShipmentField::Code.default_value(), "140");
        assert_eq!(ShipmentField::Stage.default_value(), "4");
        assert_eq!(ShipmentField::CargoType.default_value(), "199");
        assert_eq!(ShipmentField::ResponseType.default_value(), "XML");
        assert_eq!(ShipmentField::ConsigneeName.default_value(), "");
    }

    #[test]
    fn serializes_as_name() {
        let json = serde_json::to_string(&ShipmentField::PhoneNumber2).unwrap();
        assert_eq!(json, "\"phoneNumber2\"");
    }
}
