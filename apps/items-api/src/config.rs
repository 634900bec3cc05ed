use axum_helpers::StatusPolicy;
use core_config::{AppInfo, FromEnv, app_info, env_parse_or_default, server::ServerConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// HTTP status used for service envelopes (`ENVELOPE_HTTP_STATUS`)
    pub status_policy: StatusPolicy,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // DATABASE_URL or DB_* parts
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let status_policy = env_parse_or_default("ENVELOPE_HTTP_STATUS", "mirror")?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            status_policy,
        })
    }
}
