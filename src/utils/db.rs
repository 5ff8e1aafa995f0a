use anyhow::{Context, Result, anyhow};
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::{PgConnection, r2d2};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConn<'db> = &'db mut PooledConnection<ConnectionManager<PgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn build_pool(database_url: &str, max_size: u32) -> Result<DbPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(max_size)
        .build(manager)
        .context("Failed to build database pool")?;

    Ok(pool)
}

pub fn get_conn(pool: r2d2::Pool<ConnectionManager<PgConnection>>)->Result<PooledConnection<ConnectionManager<PgConnection>>> {
    let conn = pool.get().context("Failed to acquire database connection")?;

    Ok(conn)
}

/// Runs every embedded migration not yet recorded in `__diesel_schema_migrations`.
/// Returns the versions applied by this call.
pub fn run_migrations(conn: &mut PgConnection) -> Result<Vec<String>> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow!("Failed to run migrations: {}", e))?;

    let versions: Vec<String> = applied.iter().map(|version| version.to_string()).collect();
    for version in &versions {
        tracing::info!("Applied migration {}", version);
    }

    Ok(versions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::migration::{Migration, MigrationSource};
    use diesel::pg::Pg;

    #[test]
    fn test_both_tables_are_embedded() {
        let migrations = MigrationSource::<Pg>::migrations(&MIGRATIONS).unwrap();
        let mut names: Vec<String> = migrations.iter().map(|m| m.name().to_string()).collect();
        names.sort();

        assert_eq!(
            names,
            vec![
                "2024-09-16-182300_create_users".to_string(),
                "2024-09-16-182301_create_expenses".to_string(),
            ]
        );
    }

    #[test]
    fn test_expenses_schema_enforces_positive_amounts() {
        let sql = include_str!("../../migrations/2024-09-16-182301_create_expenses/up.sql");
        assert!(sql.contains("CHECK (amount > 0)"));
        assert!(sql.contains("ON DELETE CASCADE"));
    }
}
