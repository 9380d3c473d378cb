use anyhow::{Context, Result};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use uuid::Uuid;

use super::schema::{SCHEMA, TEST_DATA};

/// SQLite in-memory database identifier
const MEMORY_DB_PATH: &str = ":memory:";

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

/// Database wrapper with connection pooling support
#[derive(Clone)]
pub struct Database {
    pub pool: DbPool,
}

impl Database {
    /// Create a new database connection pool
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let manager = Self::create_connection_manager(path);
        let pool = Pool::new(manager).context("Failed to create database connection pool")?;
        Ok(Self { pool })
    }

    /// Create appropriate connection manager based on path
    ///
    /// # Arguments
    /// * `path` - Database file path or ":memory:" for an in-memory database
    fn create_connection_manager<P: AsRef<Path>>(path: P) -> SqliteConnectionManager {
        let path_str = path.as_ref().to_string_lossy();
        let trimmed_path = path_str.trim();

        let manager = if trimmed_path.eq_ignore_ascii_case(MEMORY_DB_PATH) {
            // A plain :memory: open would give every pooled connection its
            // own private database. A named shared-cache URI keeps all
            // connections in the pool on the same in-memory database.
            SqliteConnectionManager::file(Self::memory_uri())
        } else {
            SqliteConnectionManager::file(path)
        };

        manager.with_init(|conn| {
            conn.execute_batch("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
        })
    }

    fn memory_uri() -> String {
        format!("file:stride-mem-{}?mode=memory&cache=shared", Uuid::new_v4())
    }

    /// Create an in-memory database pool with the schema applied
    /// (useful for testing)
    pub fn in_memory() -> Result<Self> {
        let db = Self::new(MEMORY_DB_PATH)?;
        db.initialize()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub fn initialize(&self) -> Result<()> {
        let conn = self.connection()?;
        conn.execute_batch(SCHEMA)
            .context("Failed to initialize database schema")?;
        Ok(())
    }

    /// Seed the database with test data
    pub fn seed_test_data(&self) -> Result<()> {
        let conn = self.connection()?;
        conn.execute_batch(TEST_DATA)
            .context("Failed to seed test data")?;
        Ok(())
    }

    /// Get a connection from the pool
    pub fn connection(&self) -> Result<DbConnection> {
        self.pool
            .get()
            .context("Failed to get database connection from pool")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_creation() {
        let db = Database::in_memory().expect("Failed to create database");

        let conn = db.connection().expect("Failed to get connection");
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .expect("Failed to prepare statement");

        let tables: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .expect("Failed to query tables")
            .collect::<Result<Vec<_>, _>>()
            .expect("Failed to collect tables");

        assert!(tables.contains(&"users".to_string()));
        assert!(tables.contains(&"activities".to_string()));
        assert!(tables.contains(&"comments".to_string()));
        assert!(tables.contains(&"kudos".to_string()));
        assert!(tables.contains(&"followers".to_string()));
    }

    #[test]
    fn test_schema_is_shared_across_pooled_connections() {
        let db = Database::in_memory().expect("Failed to create database");
        db.seed_test_data().expect("Failed to seed test data");

        // Hold one connection so the next get() hands out a different one
        let held = db.connection().expect("Failed to get first connection");
        let other = db.connection().expect("Failed to get second connection");

        let users: i32 = other
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .expect("Failed to count users");
        assert_eq!(users, 8);
        drop(held);
    }

    #[test]
    fn test_seed_test_data() {
        let db = Database::in_memory().expect("Failed to create database");
        db.seed_test_data().expect("Failed to seed test data");

        let conn = db.connection().expect("Failed to get connection");
        let users: i32 = conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .expect("Failed to count users");
        let activities: i32 = conn
            .query_row("SELECT COUNT(*) FROM activities", [], |row| row.get(0))
            .expect("Failed to count activities");

        assert_eq!(users, 8);
        assert_eq!(activities, 37);
    }

    #[test]
    fn test_seed_is_idempotent() {
        let db = Database::in_memory().expect("Failed to create database");
        db.seed_test_data().expect("Failed to seed test data");
        db.seed_test_data().expect("Failed to re-seed test data");

        let conn = db.connection().expect("Failed to get connection");
        let users: i32 = conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .expect("Failed to count users");
        assert_eq!(users, 8);
    }
}
