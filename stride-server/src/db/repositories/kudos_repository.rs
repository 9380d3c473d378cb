use anyhow::{Context, Result};
use uuid::Uuid;

use stride_types::Kudos;

use crate::db::DbPool;

pub struct KudosRepository {
    pool: DbPool,
}

impl KudosRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Give kudos to an activity. A second kudos from the same user on
    /// the same activity is ignored.
    pub fn add(&self, kudos: &Kudos) -> Result<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT OR IGNORE INTO kudos (id, activity_id, author_id, created_at)
             VALUES (?, ?, ?, ?)",
            (
                kudos.id.to_string(),
                kudos.activity_id.to_string(),
                kudos.author_id.to_string(),
                kudos.created_at.to_rfc3339(),
            ),
        )
        .context("Failed to add kudos")?;
        Ok(())
    }

    /// Count kudos on an activity
    pub fn count_for_activity(&self, activity_id: &Uuid) -> Result<i64> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM kudos WHERE activity_id = ?",
            [activity_id.to_string()],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}
