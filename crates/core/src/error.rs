#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown shipment field: {0}")]
    UnknownField(String),

    #[error("Unsupported value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Invalid rule catalog: {0}")]
    Catalog(String),
}
