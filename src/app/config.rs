/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set in .env")]
    Missing(&'static str),
    #[error("{name} is invalid: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Centralized environment configuration.
/// All env vars and defaults are defined here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection URL. Required.
    pub database_url: String,

    /// Base URL used when building hypermedia links.
    /// Default: http://localhost:3000
    pub app_url: String,

    /// Socket address the HTTP server binds to.
    /// Default: 0.0.0.0:3000
    pub bind_address: String,

    /// Upper bound of the SQLite connection pool.
    /// Default: 5
    pub database_max_connections: u32,
}

impl Config {
    /// Build config from environment variables.
    /// Returns an error if required vars are missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let app_url =
            std::env::var("APP_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let raw_connections =
            std::env::var("DATABASE_MAX_CONNECTIONS").unwrap_or_else(|_| "5".to_string());
        let database_max_connections = raw_connections
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or(ConfigError::Invalid {
                name: "DATABASE_MAX_CONNECTIONS",
                value: raw_connections.clone(),
            })?;

        Ok(Self {
            database_url,
            app_url,
            bind_address,
            database_max_connections,
        })
    }

    /// Returns the base URL without trailing slash, for building links.
    pub fn app_url_base(&self) -> &str {
        self.app_url.trim_end_matches('/')
    }

    /// Config for tests. Uses in-memory database URL.
    pub fn for_tests() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            app_url: "http://localhost:3000".to_string(),
            bind_address: "127.0.0.1:0".to_string(),
            database_max_connections: 1,
        }
    }
}
