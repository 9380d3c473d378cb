use anyhow::{Context, Result};
use chrono::Utc;
use uuid::Uuid;

use crate::db::DbPool;

pub struct FollowerRepository {
    pool: DbPool,
}

impl FollowerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Follow a user. Re-following is a no-op (one edge per ordered pair).
    pub fn follow(&self, follower_id: &Uuid, followed_id: &Uuid) -> Result<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT OR IGNORE INTO followers (follower_id, followed_id, created_at)
             VALUES (?, ?, ?)",
            (
                follower_id.to_string(),
                followed_id.to_string(),
                Utc::now().to_rfc3339(),
            ),
        )
        .context("Failed to follow user")?;
        Ok(())
    }

    /// Count incoming follower edges for a user
    pub fn follower_count(&self, user_id: &Uuid) -> Result<i64> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM followers WHERE followed_id = ?",
            [user_id.to_string()],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}
