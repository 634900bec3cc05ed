use sea_orm::ConnectOptions;
use std::time::Duration;
use tracing::log::LevelFilter;

#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or_default};

/// PostgreSQL connection pool settings.
///
/// Built by hand with [`PostgresConfig::new`] or, with the `config` feature,
/// loaded from the environment.
#[derive(Clone, Debug)]
pub struct PostgresConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// How long a request may wait for a pooled connection, in seconds
    pub acquire_timeout_secs: u64,

    /// Connection idle timeout in seconds
    pub idle_timeout_secs: u64,

    /// Enable SQL statement logging
    pub sqlx_logging: bool,
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Build a URL from individual connection parameters.
    pub fn from_parts(host: &str, port: u16, database: &str, user: &str, password: &str) -> Self {
        let credentials = if password.is_empty() {
            user.to_string()
        } else {
            format!("{}:{}", user, password)
        };

        Self::new(format!(
            "postgres://{}@{}:{}/{}",
            credentials, host, port, database
        ))
    }

    pub fn into_connect_options(self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(&self.url);
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(self.idle_timeout_secs))
            .sqlx_logging(self.sqlx_logging)
            .sqlx_logging_level(LevelFilter::Debug);
        opt
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The URL with any password replaced by `***`, safe for logs.
    pub fn redacted_url(&self) -> String {
        let Some((scheme, rest)) = self.url.split_once("://") else {
            return self.url.clone();
        };
        let Some((userinfo, host)) = rest.rsplit_once('@') else {
            return self.url.clone();
        };
        match userinfo.split_once(':') {
            Some((user, _)) => format!("{}://{}:***@{}", scheme, user, host),
            None => self.url.clone(),
        }
    }
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 8,
            acquire_timeout_secs: 8,
            idle_timeout_secs: 300,
            sqlx_logging: true,
        }
    }
}

/// Environment variables:
/// - `DATABASE_URL`; when unset the URL is built from `DB_HOST` (localhost),
///   `DB_PORT` (5432), `DB_NAME` (items), `DB_USER` (postgres), `DB_PASSWORD` (empty)
/// - `DB_MAX_CONNECTIONS` (10), `DB_MIN_CONNECTIONS` (1)
/// - `DB_CONNECT_TIMEOUT_SECS` (8), `DB_ACQUIRE_TIMEOUT_SECS` (8), `DB_IDLE_TIMEOUT_SECS` (300)
/// - `DB_SQLX_LOGGING` (true)
#[cfg(feature = "config")]
impl FromEnv for PostgresConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base = match std::env::var("DATABASE_URL") {
            Ok(url) => Self::new(url),
            Err(_) => Self::from_parts(
                &env_or_default("DB_HOST", "localhost"),
                env_parse_or_default("DB_PORT", "5432")?,
                &env_or_default("DB_NAME", "items"),
                &env_or_default("DB_USER", "postgres"),
                &env_or_default("DB_PASSWORD", ""),
            ),
        };

        Ok(Self {
            max_connections: env_parse_or_default("DB_MAX_CONNECTIONS", "10")?,
            min_connections: env_parse_or_default("DB_MIN_CONNECTIONS", "1")?,
            connect_timeout_secs: env_parse_or_default("DB_CONNECT_TIMEOUT_SECS", "8")?,
            acquire_timeout_secs: env_parse_or_default("DB_ACQUIRE_TIMEOUT_SECS", "8")?,
            idle_timeout_secs: env_parse_or_default("DB_IDLE_TIMEOUT_SECS", "300")?,
            sqlx_logging: env_parse_or_default("DB_SQLX_LOGGING", "true")?,
            ..base
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_config_new_uses_default_pool() {
        let config = PostgresConfig::new("postgres://localhost/items");
        assert_eq!(config.url(), "postgres://localhost/items");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 1);
    }

    #[test]
    fn test_postgres_config_from_parts() {
        let config = PostgresConfig::from_parts("db", 5433, "items", "app", "secret");
        assert_eq!(config.url(), "postgres://app:secret@db:5433/items");

        let config = PostgresConfig::from_parts("localhost", 5432, "items", "postgres", "");
        assert_eq!(config.url(), "postgres://postgres@localhost:5432/items");
    }

    #[test]
    fn test_redacted_url_hides_password() {
        let config = PostgresConfig::new("postgres://app:secret@db:5432/items");
        assert_eq!(config.redacted_url(), "postgres://app:***@db:5432/items");

        let config = PostgresConfig::new("postgres://app@db:5432/items");
        assert_eq!(config.redacted_url(), "postgres://app@db:5432/items");
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_postgres_config_from_env_url() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/testdb")),
                ("DB_MAX_CONNECTIONS", Some("20")),
            ],
            || {
                let config = PostgresConfig::from_env().unwrap();
                assert_eq!(config.url(), "postgres://localhost/testdb");
                assert_eq!(config.max_connections, 20);
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_postgres_config_from_env_parts() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", None),
                ("DB_HOST", Some("pg")),
                ("DB_PORT", Some("6543")),
                ("DB_NAME", Some("warehouse")),
                ("DB_USER", Some("clerk")),
                ("DB_PASSWORD", Some("pw")),
            ],
            || {
                let config = PostgresConfig::from_env().unwrap();
                assert_eq!(config.url(), "postgres://clerk:pw@pg:6543/warehouse");
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_postgres_config_from_env_invalid_number() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/testdb")),
                ("DB_MAX_CONNECTIONS", Some("invalid")),
            ],
            || {
                let err = PostgresConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("DB_MAX_CONNECTIONS"));
            },
        );
    }
}
