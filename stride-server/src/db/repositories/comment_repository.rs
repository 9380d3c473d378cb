use anyhow::{Context, Result};
use uuid::Uuid;

use stride_types::Comment;

use crate::db::DbPool;

pub struct CommentRepository {
    pool: DbPool,
}

impl CommentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Add a comment to an activity
    pub fn add(&self, comment: &Comment) -> Result<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO comments (id, activity_id, author_id, content, created_at)
             VALUES (?, ?, ?, ?, ?)",
            (
                comment.id.to_string(),
                comment.activity_id.to_string(),
                comment.author_id.to_string(),
                &comment.content,
                comment.created_at.to_rfc3339(),
            ),
        )
        .context("Failed to add comment")?;
        Ok(())
    }

    /// Count comments on an activity
    pub fn count_for_activity(&self, activity_id: &Uuid) -> Result<i64> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM comments WHERE activity_id = ?",
            [activity_id.to_string()],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}
