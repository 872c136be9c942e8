//! Form labels and input hints for shipment fields.
//!
//! A field without a label is not shown on the creation form; it keeps its
//! default value.

use super::fields::ShipmentField;

/// Human-readable label, or `None` for fields hidden from the form.
pub fn label(field: ShipmentField) -> Option<&'static str> {
    use ShipmentField::*;

    let text = match field {
        CargoType => "Shipped cargo type",
        ConsigneeName => "Consignee's name",
        CityName => "City/settlement name",
        StreetName => "Street name",
        BuildingNumber => "Building No.",
        EntranceNumber => "Entrance No.",
        FloorNumber => "Floor No.",
        ApartmentNumber => "Apartment No.",
        PhoneNumber => "Primary phone number",
        PhoneNumber2 => "Additional phone number",
        ReferenceNumber => "Reference number",
        PackagesNumber => "Number of packages",
        AddressRemarks => "Address remarks",
        ShipmentRemarks => "Additional shipment remarks",
        PickupDate => "Date",
        PickupTime => "Time",
        PaymentTypeCode => "Payment type code",
        ConsigneeSum => "Consignee Sum",
        ConsigneeDate => "Consignee Date",
        PaymentCollectionNotes => "Notes for payment collection",
        _ => return None,
    };
    Some(text)
}

/// Input hint shown next to the field, if any.
pub fn hint(field: ShipmentField) -> Option<&'static str> {
    use ShipmentField::*;

    let text = match field {
        Code => "get the code from the shipping company",
        Stage => "Consult with the shipping company which code to send (if any)",
        ReturnCargoType => {
            "(relevant for returns only) - get the code from the shipping company"
        }
        ReturnPackagesNumber => "(relevant for returns only)",
        CityCode => "If you are sending city codes, please use the gov.il database",
        StreetCode => "If you are sending street codes, please use the gov.il database",
        PhoneNumber => "(cellular)",
        ReferenceNumber => "Your reference number for the shipment",
        PackagesNumber => {
            "This field is mandatory if there is more than one package in the shipment."
        }
        PickupDate => {
            "If you want the shipment to be picked up on a specific date which is more than a day away from the date of the request, you can specify a date in this field."
        }
        PickupTime => {
            "If you want the shipment to be picked up at a specific hour which is more than a day away from the date of the request, you can specify time in this field."
        }
        PaymentTypeCode => {
            "If the courier needs to collect payment from the consignee, please specify the payment type code in this field - get it from the shipping company"
        }
        ConsigneeSum => "The sum to be collected from the consignee",
        ConsigneeDate => "The date of payment collection from the consignee",
        ReturnPickupPoint => "relevant for returns only",
        PickupPoint => {
            "Relevant only for shipments to pickup points. Please fill in if your customer has chosen a pickup point on your website. If you fill in this field, please leave next field blank."
        }
        AutoPickupPoint => {
            "Run system can choose a pickup point for a shipment automatically, based on a consignee's address (the closest working point will be assigned)."
        }
        ParcelPreparationDate | ParcelPreparationTime => {
            "This field is used in case your parcels are assembled at the shipping company warehouse."
        }
        _ => return None,
    };
    Some(text)
}

/// Fields shown on the creation form, in declared order.
pub fn form_fields() -> impl Iterator<Item = ShipmentField> {
    ShipmentField::ALL
        .into_iter()
        .filter(|field| label(*field).is_some())
}
