//! Payload types of the storefront API.
//!
//! Only the fields the service reads are typed; everything else the store
//! sends is kept in `extra` so nothing is lost when re-serializing.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Order status codes used by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    PhoneBankTransfer,
    Lead,
    Paid,
    Error,
    Delivered,
    PendingReview,
    Cancelled,
    Claimed,
}

impl OrderStatus {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::PhoneBankTransfer),
            2 => Some(Self::Lead),
            4 => Some(Self::Paid),
            5 => Some(Self::Error),
            6 => Some(Self::Delivered),
            7 => Some(Self::PendingReview),
            8 => Some(Self::Cancelled),
            9 => Some(Self::Claimed),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::PhoneBankTransfer => 1,
            Self::Lead => 2,
            Self::Paid => 4,
            Self::Error => 5,
            Self::Delivered => 6,
            Self::PendingReview => 7,
            Self::Cancelled => 8,
            Self::Claimed => 9,
        }
    }
}

/// A store order as returned by `/Stores/Orders`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Order {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub shiping_type: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub floor_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub street_name_and_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub apartment_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub zip_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub order_status: i32,
    pub order_date: Option<NaiveDateTime>,
    #[serde(deserialize_with = "null_as_default")]
    pub shiping_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub is_self_delivery: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_option_type: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub total_products: i32,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Order {
    pub fn status(&self) -> Option<OrderStatus> {
        OrderStatus::from_code(self.order_status)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

/// Fields accepted by `/Stores/SendOrderUpdate`. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub order_status_type: Option<i32>,
    pub total_price: Option<f64>,
    pub invoice_number: Option<String>,
    pub invoice_url: Option<String>,
    #[serde(default)]
    pub order_notes: Vec<String>,
    pub tracking_code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductCategories {
    pub primary_id: Option<i64>,
    pub more_categories: Vec<CategoryRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPrices {
    pub price: Option<serde_json::Value>,
    pub retail: Option<f64>,
    pub sell: Option<f64>,
}

/// A product as returned by `/Products/GetProducts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub sku: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub qty: f64,
    pub categories: Option<ProductCategories>,
    #[serde(deserialize_with = "null_as_default")]
    pub images: BTreeMap<String, String>,
    pub prices: Option<ProductPrices>,
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Stock entry from `/Products/GetQty`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductQuantity {
    #[serde(deserialize_with = "null_as_default")]
    pub product_id: i64,
    pub product_sku: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub sku: String,
    #[serde(deserialize_with = "null_as_default")]
    pub qty: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub is_matrix: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A navigation node of the storefront website.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Category {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(rename = "Type", deserialize_with = "null_as_default")]
    pub kind: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub children: Vec<Category>,
    pub data: Option<serde_json::Value>,
    pub permalink: Option<String>,
}

/// The store sends `null` for unset scalars; read those as the default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `{ "result": [...] }` envelope used by list endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct ResultEnvelope<T> {
    pub result: Option<Vec<T>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn order_decodes_store_payload() {
        let order: Order = serde_json::from_value(json!({
            "Id": 3546111,
            "ShipingType": 1,
            "FirstName": "Pavel",
            "LastName": "Bariew",
            "Email": "my@gmail.com",
            "Phone": "0503057111",
            "Address": "first street, 24",
            "City": "London",
            "FloorNumber": "",
            "OrderStatus": 4,
            "OrderDate": "2022-04-28T11:43:27.777",
            "ShipingPrice": 0.0,
            "TotalPrice": 5700.0,
            "IsSelfDelivery": false,
            "IsAccountReadThisOrder": false,
            "PaymentOptionType": 3,
            "TotalProducts": 3
        }))
        .unwrap();

        assert_eq!(order.id, 3546111);
        assert_eq!(order.full_name(), "Pavel Bariew");
        assert_eq!(order.status(), Some(OrderStatus::Paid));
        assert_eq!(
            order.order_date.unwrap().format("%Y-%m-%d %H:%M").to_string(),
            "2022-04-28 11:43"
        );
        assert_eq!(order.extra["IsAccountReadThisOrder"], json!(false));
    }

    #[test]
    fn null_scalars_decode_as_defaults() {
        let orders: Vec<Order> = serde_json::from_value(json!([
            { "Id": 1, "FirstName": "Dana", "ZipCode": null, "LastName": null, "TotalPrice": null },
            { "Id": 2, "FirstName": "Noa", "ZipCode": "3100000" }
        ]))
        .unwrap();

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].zip_code, "");
        assert_eq!(orders[0].full_name(), "Dana");
        assert_eq!(orders[0].total_price, 0.0);
        assert_eq!(orders[1].zip_code, "3100000");
    }

    #[test]
    fn null_product_fields_decode_as_defaults() {
        let product: Product =
            serde_json::from_value(json!({ "id": 5, "sku": null, "title": null, "images": null }))
                .unwrap();
        assert_eq!(product.sku, "");
        assert!(product.images.is_empty());

        let quantity: ProductQuantity = serde_json::from_value(json!({
            "product_id": 5,
            "product_sku": null,
            "sku": null,
            "qty": 2.0
        }))
        .unwrap();
        assert_eq!(quantity.product_sku, None);
        assert_eq!(quantity.sku, "");
        assert_eq!(quantity.qty, 2.0);
    }

    #[test]
    fn status_codes_round_trip() {
        for code in [1, 2, 4, 5, 6, 7, 8, 9] {
            assert_eq!(OrderStatus::from_code(code).unwrap().code(), code);
        }
        assert_eq!(OrderStatus::from_code(3), None);
    }

    #[test]
    fn product_decodes_nested_fields() {
        let product: Product = serde_json::from_value(json!({
            "title": "Bubble slide",
            "sku": "9201B",
            "id": 312176,
            "qty": 0.0,
            "categories": { "primary_id": 48785, "more_categories": [{ "id": 67812 }] },
            "images": { "primary": "https://cdn.example/1.jpg" },
            "prices": { "price": { "Price": 1399.0, "Claim": 0 }, "retail": 1899.0, "sell": 1399.0 },
            "url": "https://shop.example/p/1",
            "attributes": []
        }))
        .unwrap();

        assert_eq!(product.sku, "9201B");
        assert_eq!(product.categories.unwrap().more_categories[0].id, 67812);
        assert_eq!(product.prices.unwrap().sell, Some(1399.0));
        assert!(product.extra.contains_key("attributes"));
    }

    #[test]
    fn category_tree_decodes() {
        let categories: Vec<Category> = serde_json::from_value(json!([{
            "Id": -3408,
            "Text": "category",
            "Type": 5,
            "Children": [{ "Id": 1, "Text": "child", "Type": 5, "Children": [] }],
            "Data": null,
            "Permalink": "https://shop.example/c/1"
        }]))
        .unwrap();

        assert_eq!(categories[0].kind, 5);
        assert_eq!(categories[0].children[0].text, "child");
    }
}
