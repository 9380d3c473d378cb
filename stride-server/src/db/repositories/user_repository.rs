use anyhow::{Context, Result};

use stride_types::User;

use crate::db::DbPool;

pub struct UserRepository {
    pool: DbPool,
}

impl UserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a new user
    pub fn create(&self, user: &User) -> Result<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO users (id, username, join_date) VALUES (?, ?, ?)",
            (
                user.id.to_string(),
                &user.username,
                user.join_date.to_rfc3339(),
            ),
        )
        .context("Failed to create user")?;
        Ok(())
    }

    /// Count all users. Deliberately trivial: this is the query the
    /// worker-pool benchmark hammers.
    pub fn count(&self) -> Result<i64> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(count)
    }
}
