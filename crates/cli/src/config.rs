use anyhow::{Context, Result};

/// Log output format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Pool size (default: `5`).
    pub max_connections: u32,
    /// Apply pending migrations before running the command (default: `false`).
    pub run_migrations: bool,
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default    |
    /// |----------------------|------------|
    /// | `DATABASE_URL`       | (required) |
    /// | `DB_MAX_CONNECTIONS` | `5`        |
    /// | `RUN_MIGRATIONS`     | `false`    |
    /// | `LOG_FORMAT`         | `text`     |
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let max_connections: u32 = lookup("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|| "5".into())
            .parse()
            .context("DB_MAX_CONNECTIONS must be a valid u32")?;

        let run_migrations: bool = lookup("RUN_MIGRATIONS")
            .unwrap_or_else(|| "false".into())
            .parse()
            .context("RUN_MIGRATIONS must be true or false")?;

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => anyhow::bail!("LOG_FORMAT must be text or json, got {other:?}"),
        };

        Ok(Self {
            database_url,
            max_connections,
            run_migrations,
            log_format,
        })
    }
}
