/// Database connection and migrations
use crate::config::DatabaseSettings;
use crate::error::Result;
use sqlx::postgres::{PgPool, PgPoolOptions};

/// Open a connection pool against the configured PostgreSQL instance
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&settings.url())
        .await?;

    tracing::info!("Database connection established");
    Ok(pool)
}

/// Run database migrations
///
/// Migrations are embedded for reliability across different execution
/// contexts. Each file is idempotent, so re-running on startup is safe.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    const MIGRATIONS: &[(&str, &str)] = &[
        (
            "create_roles",
            include_str!("../migrations/0001_create_roles.sql"),
        ),
        (
            "create_users",
            include_str!("../migrations/0002_create_users.sql"),
        ),
        (
            "seed_roles",
            include_str!("../migrations/0003_seed_roles.sql"),
        ),
    ];

    for (name, sql) in MIGRATIONS {
        tracing::info!("Running migration: {}", name);
        sqlx::raw_sql(sql).execute(pool).await?;
    }

    tracing::info!("All migrations completed");
    Ok(())
}
