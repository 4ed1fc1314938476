use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Transaction;

use crate::errors::AppError;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(database_path: &str) -> Result<DbPool> {
    let manager = build_manager(SqliteConnectionManager::file(database_path));
    build_pool(manager)
}

pub fn create_memory_pool() -> Result<DbPool> {
    // An in-memory database lives and dies with its connection, so the pool
    // is capped at a single slot that every checkout reuses.
    let manager = build_manager(SqliteConnectionManager::memory());
    r2d2::Pool::builder()
        .max_size(1)
        .build(manager)
        .context("Failed to create in-memory database pool")
}

fn build_manager(manager: SqliteConnectionManager) -> SqliteConnectionManager {
    // Entry rows cascade from tournament deletion; SQLite only honors the
    // foreign keys if the pragma is set per connection.
    manager.with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"))
}

fn build_pool(manager: SqliteConnectionManager) -> Result<DbPool> {
    r2d2::Pool::builder()
        .build(manager)
        .context("Failed to create database connection pool")
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn, AppError> {
    Ok(pool.get()?)
}

/// Unit of work: runs `operation` inside a transaction, committing on `Ok`.
/// On any error path the transaction is dropped uncommitted, which rolls
/// back every write made inside it.
pub fn run_in_transaction<T, F>(conn: &mut DbConn, operation: F) -> Result<T, AppError>
where
    F: FnOnce(&Transaction) -> Result<T, AppError>,
{
    let tx = conn.transaction().map_err(AppError::from)?;
    let value = operation(&tx)?;
    tx.commit().map_err(AppError::from)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::setup;

    fn test_conn() -> DbConn {
        let pool = create_memory_pool().unwrap();
        let mut conn = pool.get().unwrap();
        setup::init_database(&mut conn).unwrap();
        conn
    }

    fn count_players(conn: &DbConn) -> i64 {
        conn.query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn test_commit_on_success() {
        let mut conn = test_conn();

        run_in_transaction(&mut conn, |tx| {
            tx.execute("INSERT INTO players (name) VALUES ('Alice')", [])?;
            Ok(())
        })
        .unwrap();

        assert_eq!(count_players(&conn), 1);
    }

    #[test]
    fn test_rollback_on_failure() {
        let mut conn = test_conn();

        let result: Result<(), AppError> = run_in_transaction(&mut conn, |tx| {
            tx.execute("INSERT INTO players (name) VALUES ('Alice')", [])?;
            Err(AppError::Validation("forced failure".to_string()))
        });

        assert!(result.is_err());
        assert_eq!(count_players(&conn), 0);
    }
}
