//! Shipment record: one value per positional field.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use super::fields::ShipmentField;
use crate::error::CoreError;

/// A shipment request, holding a string value for every [`ShipmentField`].
///
/// An empty string means "not set". Fields the caller does not supply keep
/// their [`ShipmentField::default_value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentRecord {
    values: [String; ShipmentField::COUNT],
}

impl ShipmentRecord {
    /// A record with every field at its default.
    pub fn new() -> Self {
        Self {
            values: std::array::from_fn(|i| ShipmentField::ALL[i].default_value().to_string()),
        }
    }

    /// Build a record from a field-name → value map.
    ///
    /// Strings are taken verbatim, numbers are rendered the way JSON prints
    /// them, `null` clears the field, `true`/`false` become `"1"`/`""`.
    /// Unknown names and non-scalar values are rejected.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, CoreError> {
        let mut record = Self::new();
        for (name, value) in map {
            let field = ShipmentField::from_name(name)
                .ok_or_else(|| CoreError::UnknownField(name.clone()))?;
            record.set(field, scalar_to_string(field, value)?);
        }
        Ok(record)
    }

    pub fn get(&self, field: ShipmentField) -> &str {
        &self.values[field.index()]
    }

    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        ShipmentField::from_name(name).map(|field| self.get(field))
    }

    pub fn set(&mut self, field: ShipmentField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, field: ShipmentField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn is_empty(&self, field: ShipmentField) -> bool {
        self.get(field).is_empty()
    }

    /// `(field, value)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (ShipmentField, &str)> + '_ {
        ShipmentField::ALL
            .iter()
            .map(move |field| (*field, self.get(*field)))
    }
}

impl Default for ShipmentRecord {
    fn default() -> Self {
        Self::new()
    }
}

fn scalar_to_string(field: ShipmentField, value: &Value) -> Result<String, CoreError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(true) => Ok("1".to_string()),
        Value::Bool(false) => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(CoreError::InvalidValue {
            field: field.name().to_string(),
            reason: "expected a string, number, boolean or null".to_string(),
        }),
    }
}

impl Serialize for ShipmentRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ShipmentField::COUNT))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.name(), value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ShipmentRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_map(&map).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn new_record_holds_defaults() {
        let record = ShipmentRecord::new();
        for field in ShipmentField::ALL {
            assert_eq!(record.get(field), field.default_value());
        }
    }

    #[test]
    fn from_map_overrides_only_supplied_fields() {
        let record = ShipmentRecord::from_map(&map(json!({
            "consigneeName": "Alice",
            "packagesNumber": 3,
        })))
        .unwrap();

        assert_eq!(record.get(ShipmentField::ConsigneeName), "Alice");
        assert_eq!(record.get(ShipmentField::PackagesNumber), "3");
        assert_eq!(record.get(ShipmentField::Code), "140");
        assert_eq!(record.get(ShipmentField::CityName), "");
    }

    #[test]
    fn from_map_renders_scalars() {
        let record = ShipmentRecord::from_map(&map(json!({
            "consigneeSum": 12.5,
            "code": null,
            "n6": true,
            "n10": false,
            "stage": 0,
        })))
        .unwrap();

        assert_eq!(record.get(ShipmentField::ConsigneeSum), "12.5");
        assert_eq!(record.get(ShipmentField::Code), "");
        assert_eq!(record.get(ShipmentField::N6), "1");
        assert_eq!(record.get(ShipmentField::N10), "");
        assert_eq!(record.get(ShipmentField::Stage), "0");
    }

    #[test]
    fn from_map_rejects_unknown_fields() {
        let result = ShipmentRecord::from_map(&map(json!({ "addressList": "x" })));
        assert_matches!(result, Err(CoreError::UnknownField(name)) if name == "addressList");
    }

    #[test]
    fn from_map_rejects_nested_values() {
        let result = ShipmentRecord::from_map(&map(json!({ "cityName": ["a"] })));
        assert_matches!(result, Err(CoreError::InvalidValue { field, .. }) if field == "cityName");
    }

    #[test]
    fn serializes_in_declared_order() {
        let record = ShipmentRecord::new().with(ShipmentField::ConsigneeName, "Bob");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.starts_with("{\"type\":\"מסירה\",\"code\":\"140\",\"stage\":\"4\""));
        assert!(json.ends_with("\"parcelPreparationTime\":\"\"}"));
        assert!(json.contains("\"consigneeName\":\"Bob\""));
    }

    #[test]
    fn deserializes_through_from_map() {
        let record: ShipmentRecord =
            serde_json::from_value(json!({ "cityName": "Haifa" })).unwrap();
        assert_eq!(record.get_by_name("cityName"), Some("Haifa"));
        assert_eq!(record.get_by_name("nope"), None);

        let err = serde_json::from_value::<ShipmentRecord>(json!({ "bogus": 1 })).unwrap_err();
        assert!(err.to_string().contains("Unknown shipment field: bogus"));
    }
}
