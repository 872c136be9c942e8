//! Request parameter assembly for the storefront API.
//!
//! Parameters are ordered `(key, value)` pairs. Later values override earlier
//! ones for the same key while keeping the key's original position, which is
//! how the store's endpoints have always been called.

use serde_json::{Map, Value};

use crate::models::OrderUpdate;

pub type Params = Vec<(String, String)>;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Merge `overrides` into `base`, replacing values of keys already present.
pub fn merge<K: AsRef<str>, V: AsRef<str>>(mut base: Params, overrides: &[(K, V)]) -> Params {
    for (key, value) in overrides {
        let (key, value) = (key.as_ref(), value.as_ref());
        match base.iter_mut().find(|(existing, _)| existing == key) {
            Some(slot) => slot.1 = value.to_string(),
            None => base.push((key.to_string(), value.to_string())),
        }
    }
    base
}

/// Default paging merged with caller-supplied query parameters.
pub fn paged<K: AsRef<str>, V: AsRef<str>>(query: &[(K, V)]) -> Params {
    merge(
        vec![
            ("page".to_string(), DEFAULT_PAGE.to_string()),
            ("page_size".to_string(), DEFAULT_PAGE_SIZE.to_string()),
        ],
        query,
    )
}

/// Store credentials followed by the request's own parameters.
pub fn authenticated<K: AsRef<str>, V: AsRef<str>>(
    store_id: &str,
    token: &str,
    params: &[(K, V)],
) -> Params {
    merge(
        vec![
            ("store_id".to_string(), store_id.to_string()),
            ("token".to_string(), token.to_string()),
        ],
        params,
    )
}

/// Form fields of an order update. List values use indexed keys
/// (`order_notes[0]`, `order_notes[1]`, ...).
pub fn order_update_form(id: i64, email: &str, update: &OrderUpdate) -> Params {
    let mut form = vec![
        ("order_id".to_string(), id.to_string()),
        ("email_address".to_string(), email.to_string()),
    ];
    if let Some(status) = update.order_status_type {
        form.push(("order_status_type".to_string(), status.to_string()));
    }
    if let Some(total) = update.total_price {
        form.push(("total_price".to_string(), total.to_string()));
    }
    if let Some(number) = &update.invoice_number {
        form.push(("invoice_number".to_string(), number.clone()));
    }
    if let Some(url) = &update.invoice_url {
        form.push(("invoice_url".to_string(), url.clone()));
    }
    for (i, note) in update.order_notes.iter().enumerate() {
        form.push((format!("order_notes[{i}]"), note.clone()));
    }
    if let Some(code) = &update.tracking_code {
        form.push(("tracking_code".to_string(), code.clone()));
    }
    form
}

/// JSON body of a product upsert. Caller fields win over the defaults.
pub fn product_update_body(store_id: &str, token: &str, sku: &str, data: &Map<String, Value>) -> Value {
    let mut body = Map::new();
    body.insert("store_id".into(), Value::from(store_id));
    body.insert("token".into(), Value::from(token));
    body.insert("sku".into(), Value::from(sku));
    body.insert("is_override_existing_product".into(), Value::Bool(true));
    body.insert("is_restore_deleted_items".into(), Value::Bool(false));
    for (key, value) in data {
        body.insert(key.clone(), value.clone());
    }
    Value::Object(body)
}

/// The three navigation documents of a store website.
pub fn navigation_urls(websites_url: &str, store_id: &str) -> [String; 3] {
    let base = websites_url.replace("{store_id}", store_id);
    ["top", "main", "bottom"].map(|part| format!("{base}/navigation_{part}.json"))
}

/// Navigation files are served with a UTF-8 byte order mark.
pub fn strip_bom(body: &str) -> &str {
    body.strip_prefix('\u{feff}').unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn pairs(params: &Params) -> Vec<(&str, &str)> {
        params.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }

    #[test]
    fn paged_defaults() {
        let empty: [(&str, &str); 0] = [];
        assert_eq!(pairs(&paged(&empty)), vec![("page", "1"), ("page_size", "20")]);
    }

    #[test]
    fn query_overrides_paging_in_place() {
        let params = paged(&[("page_size", "50"), ("OrderID", "42")]);
        assert_eq!(
            pairs(&params),
            vec![("page", "1"), ("page_size", "50"), ("OrderID", "42")]
        );
    }

    #[test]
    fn credentials_come_first() {
        let params = authenticated("77", "secret", &paged(&[("sku", "9201B")]));
        assert_eq!(
            pairs(&params),
            vec![
                ("store_id", "77"),
                ("token", "secret"),
                ("page", "1"),
                ("page_size", "20"),
                ("sku", "9201B"),
            ]
        );
    }

    #[test]
    fn order_update_skips_unset_fields() {
        let update = OrderUpdate {
            order_status_type: Some(6),
            order_notes: vec!["packed".into(), "shipped".into()],
            tracking_code: Some("TRK1".into()),
            ..OrderUpdate::default()
        };
        let form = order_update_form(9, "a@b.co", &update);
        assert_eq!(
            pairs(&form),
            vec![
                ("order_id", "9"),
                ("email_address", "a@b.co"),
                ("order_status_type", "6"),
                ("order_notes[0]", "packed"),
                ("order_notes[1]", "shipped"),
                ("tracking_code", "TRK1"),
            ]
        );
    }

    #[test]
    fn product_update_lets_caller_override_flags() {
        let data = json!({ "qty": 3, "is_restore_deleted_items": true });
        let body = product_update_body("77", "secret", "9201B", data.as_object().unwrap());
        assert_eq!(body["sku"], "9201B");
        assert_eq!(body["is_override_existing_product"], true);
        assert_eq!(body["is_restore_deleted_items"], true);
        assert_eq!(body["qty"], 3);
    }

    #[test]
    fn navigation_urls_use_store_subdomain() {
        let urls = navigation_urls("https://{store_id}.websites.cashcow.co.il", "77");
        assert_eq!(urls[0], "https://77.websites.cashcow.co.il/navigation_top.json");
        assert_eq!(urls[2], "https://77.websites.cashcow.co.il/navigation_bottom.json");
    }

    #[test]
    fn bom_is_stripped_once() {
        assert_eq!(strip_bom("\u{feff}[1]"), "[1]");
        assert_eq!(strip_bom("[1]"), "[1]");
    }
}
