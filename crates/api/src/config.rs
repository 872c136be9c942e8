use parcelgate_storefront::api::DEFAULT_API_URL;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Storefront credentials; `None` disables the storefront routes.
    pub storefront: Option<StorefrontConfig>,
}

/// Credentials and endpoint of the merchant storefront API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub store_id: String,
    pub token: String,
    pub api_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                          |
    /// |------------------------|----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                        |
    /// | `PORT`                 | `3000`                           |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`          |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                             |
    /// | `CASHCOW_STORE_ID`     | unset (storefront disabled)      |
    /// | `CASHCOW_TOKEN`        | unset (storefront disabled)      |
    /// | `CASHCOW_API_URL`      | `https://api.cashcow.co.il/Api`  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let storefront = StorefrontConfig::from_parts(
            std::env::var("CASHCOW_STORE_ID").ok(),
            std::env::var("CASHCOW_TOKEN").ok(),
            std::env::var("CASHCOW_API_URL").ok(),
        );

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storefront,
        }
    }
}

impl StorefrontConfig {
    /// Both store id and token must be present and non-blank.
    pub fn from_parts(
        store_id: Option<String>,
        token: Option<String>,
        api_url: Option<String>,
    ) -> Option<Self> {
        let store_id = store_id.filter(|s| !s.trim().is_empty())?;
        let token = token.filter(|s| !s.trim().is_empty())?;
        Some(Self {
            store_id,
            token,
            api_url: api_url
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
