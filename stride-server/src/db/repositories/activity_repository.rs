use anyhow::{Context, Result};
use uuid::Uuid;

use stride_types::Activity;

use crate::db::DbPool;

pub struct ActivityRepository {
    pool: DbPool,
}

impl ActivityRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Record a new activity
    pub fn create(&self, activity: &Activity) -> Result<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO activities (id, user_id, activity_type, distance_m, duration_sec, elevation_gain_m, start_time)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            (
                activity.id.to_string(),
                activity.user_id.to_string(),
                &activity.activity_type,
                activity.distance_m,
                activity.duration_sec,
                activity.elevation_gain_m,
                activity.start_time.to_rfc3339(),
            ),
        )
        .context("Failed to create activity")?;
        Ok(())
    }

    /// Count activities recorded by a user
    pub fn count_for_user(&self, user_id: &Uuid) -> Result<i64> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM activities WHERE user_id = ?",
            [user_id.to_string()],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}
