//! Pool construction and schema migrations.
//!
//! The catalog keeps no state of its own beyond Postgres: `init_pool` runs
//! once at startup and the resulting handle is threaded through `AppState`
//! into every service call. Migrations are applied eagerly here so a schema
//! mismatch fails the boot instead of the first listing request.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connect to Postgres and bring the catalog schema up to date.
/// `DB_MAX_CONNECTIONS` overrides the pool size.
///
/// # Errors
///
/// Returns an error if the connection cannot be established or a migration
/// fails.
pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let max_connections = std::env::var("DB_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(DEFAULT_MAX_CONNECTIONS);

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;

    Ok(pool)
}
