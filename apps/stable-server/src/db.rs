use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::DatabaseConfig;

/// Open the connection pool described by `cfg`.
///
/// In-memory `SQLite` is pinned to a single connection: every new connection would
/// otherwise see its own empty database.
///
/// # Errors
/// Fails when the database cannot be reached.
pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let dsn = redact_credentials_in_dsn(&cfg.dsn);

    let mut opts = ConnectOptions::new(cfg.dsn.clone());
    opts.max_connections(cfg.max_connections)
        .connect_timeout(cfg.connect_timeout)
        .sqlx_logging(cfg.sqlx_logging);
    if cfg.is_in_memory() {
        opts.max_connections(1).min_connections(1);
    }

    info!(dsn = %dsn, max_connections = cfg.max_connections, "Connecting to database");
    Database::connect(opts)
        .await
        .with_context(|| format!("failed to connect to database '{dsn}'"))
}

/// Mask the password of a DSN for logs and config dumps.
#[must_use]
pub fn redact_credentials_in_dsn(dsn: &str) -> String {
    if !dsn.contains('@') {
        return dsn.to_owned();
    }
    match url::Url::parse(dsn) {
        Ok(mut parsed) => {
            if parsed.password().is_some() {
                let _ = parsed.set_password(Some("***"));
            }
            parsed.to_string()
        }
        Err(_) => "***".to_owned(),
    }
}
