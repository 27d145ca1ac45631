//! MySQL database layer
//!
//! Connection pooling and the SQLx-backed user repository.

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use tracing::info;

use qp_shared::config::DatabaseConfig;

use crate::InfrastructureError;

pub mod mysql;

pub use mysql::MySqlUserRepository;

/// Create a MySQL connection pool from configuration
pub async fn connect_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    info!(
        "Connecting MySQL pool (max {} connections)",
        config.max_connections
    );

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .connect(&config.url)
        .await
        .map_err(InfrastructureError::Database)?;

    info!("MySQL pool connected");
    Ok(pool)
}
