//! Handlers for the `/shipments` resource.
//!
//! Exposes the field schema, dry-run validation of a shipment record, and
//! positional encoding of a record into carrier tokens.

use axum::extract::State;
use axum::Json;
use parcelgate_core::shipment::encoder::tokens;
use parcelgate_core::shipment::labels::{hint, label};
use parcelgate_core::shipment::lists::{options_for, OptionEntry};
use parcelgate_core::shipment::{ShipmentField, ShipmentRecord, Violation};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// One positional field as shown to clients.
#[derive(Debug, Serialize)]
pub struct FieldDescriptor {
    pub position: usize,
    pub name: ShipmentField,
    pub default: &'static str,
    pub numeric: bool,
    pub label: Option<&'static str>,
    pub hint: Option<&'static str>,
    pub options: Option<&'static [OptionEntry]>,
}

/// Result of a dry-run validation.
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub valid: bool,
    pub violations: Vec<Violation>,
}

/// Encoded tokens, with any violations reported alongside.
#[derive(Debug, Serialize)]
pub struct EncodeResponse {
    pub tokens: Vec<String>,
    pub violations: Vec<Violation>,
}

/// GET /api/v1/shipments/schema
///
/// All fields in declared order with their default, numeric classification,
/// form label, hint and option list.
pub async fn schema(State(state): State<AppState>) -> Json<DataResponse<Vec<FieldDescriptor>>> {
    let fields = ShipmentField::ALL
        .into_iter()
        .map(|field| FieldDescriptor {
            position: field.index(),
            name: field,
            default: field.default_value(),
            numeric: state.catalog.is_numeric(field),
            label: label(field),
            hint: hint(field),
            options: options_for(field),
        })
        .collect();

    Json(DataResponse { data: fields })
}

/// POST /api/v1/shipments/validate
///
/// Validate a field map against the rule catalog. Fields not supplied keep
/// their defaults. Returns 400 on unknown field names or non-scalar values.
pub async fn validate(
    State(state): State<AppState>,
    Json(body): Json<Map<String, Value>>,
) -> AppResult<Json<DataResponse<ValidationResponse>>> {
    let record = ShipmentRecord::from_map(&body)?;
    let violations = state.catalog.validate(&record);

    tracing::debug!(
        supplied = body.len(),
        violations = violations.len(),
        "Validated shipment record"
    );

    Ok(Json(DataResponse {
        data: ValidationResponse {
            valid: violations.is_empty(),
            violations,
        },
    }))
}

/// POST /api/v1/shipments/encode
///
/// Encode a field map into positional tokens. Encoding does not depend on
/// validation; violations are returned next to the tokens.
pub async fn encode(
    State(state): State<AppState>,
    Json(body): Json<Map<String, Value>>,
) -> AppResult<Json<DataResponse<EncodeResponse>>> {
    let record = ShipmentRecord::from_map(&body)?;
    let encoded = state.catalog.encode(&record);
    let violations = state.catalog.validate(&record);

    if !violations.is_empty() {
        tracing::warn!(
            violations = violations.len(),
            "Encoded shipment record that fails validation"
        );
    }

    Ok(Json(DataResponse {
        data: EncodeResponse {
            tokens: tokens(&encoded),
            violations,
        },
    }))
}
