use rust_decimal::Decimal;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have sensible defaults suitable for
/// local development. In production, override via environment variables.
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
    /// Base URL prefixed onto stored image paths in API responses.
    pub asset_base_url: String,
    /// Local directory served at `/static`; product image uploads land in
    /// `<static_dir>/public`.
    pub static_dir: String,
    /// GST percentage applied to cart and order totals.
    pub tax_rate_percent: Decimal,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `ASSET_BASE_URL`       | `http://localhost:3000/`   |
    /// | `STATIC_DIR`           | `static`                   |
    /// | `TAX_RATE_PERCENT`     | `18`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let asset_base_url =
            std::env::var("ASSET_BASE_URL").unwrap_or_else(|_| "http://localhost:3000/".into());

        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());

        let tax_rate_percent: Decimal = std::env::var("TAX_RATE_PERCENT")
            .unwrap_or_else(|_| "18".into())
            .parse()
            .expect("TAX_RATE_PERCENT must be a valid decimal");

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            asset_base_url,
            static_dir,
            tax_rate_percent,
            jwt,
        }
    }

    /// Directory where uploaded product images are written.
    pub fn upload_dir(&self) -> String {
        format!("{}/public", self.static_dir)
    }

    /// Absolute URL for a stored image path.
    pub fn image_url(&self, path: &str) -> String {
        format!("{}{}", self.asset_base_url, path)
    }
}
