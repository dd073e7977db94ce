use std::env;
use std::net::SocketAddr;
use anyhow::{Context, Result};
use zeroize::Zeroizing;

/// The longest accepted token lifetime: one year.
pub const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365;

/// The application's configuration.
#[derive(Clone)]
pub struct Config {
    /// The address the reference backend listens on.
    pub bind_addr: SocketAddr,
    /// The base URL the API clients send requests to.
    pub api_base_url: String,
    /// The lifetime of an issued bearer token in hours.
    pub token_ttl_hours: i64,
    /// The email of the administrator account seeded at startup.
    pub seed_admin_email: String,
    /// The password of the administrator account seeded at startup.
    pub seed_admin_password: Zeroizing<String>,
}

impl Config {
    /// Creates a new `Config` from environment variables.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `Config`.
    pub fn from_env() -> Result<Self> {
        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .context("BIND_ADDR must be a socket address (e.g. 127.0.0.1:8080)")?;

        let token_ttl_hours = env::var("TOKEN_TTL_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .context("Invalid TOKEN_TTL_HOURS")?;

        let config = Self {
            bind_addr,
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| format!("http://{}", bind_addr)),
            token_ttl_hours,
            seed_admin_email: env::var("SEED_ADMIN_EMAIL")
                .unwrap_or_else(|_| "yoga@studio.com".to_string()),
            seed_admin_password: Zeroizing::new(
                env::var("SEED_ADMIN_PASSWORD").unwrap_or_else(|_| "test!1234".to_string()),
            ),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks values that parse but make no sense.
    pub fn validate(&self) -> Result<()> {
        if self.token_ttl_hours <= 0 {
            anyhow::bail!("TOKEN_TTL_HOURS must be positive");
        }
        if self.token_ttl_hours > MAX_TOKEN_TTL_HOURS {
            anyhow::bail!("TOKEN_TTL_HOURS must be at most {}", MAX_TOKEN_TTL_HOURS);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let bind_addr = SocketAddr::from(([127, 0, 0, 1], 8080));
        Self {
            bind_addr,
            api_base_url: format!("http://{}", bind_addr),
            token_ttl_hours: 24,
            seed_admin_email: "yoga@studio.com".to_string(),
            seed_admin_password: Zeroizing::new("test!1234".to_string()),
        }
    }
}
