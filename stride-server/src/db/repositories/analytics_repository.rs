use anyhow::Result;
use chrono::{DateTime, Utc};

use stride_types::{
    ActivityLevel, DistanceLeader, InfluentialUser, MonthlyStats, SocialActivity, TypePerformance,
    UserActivityLevel,
};

use crate::db::DbPool;

/// Read-only aggregation views over the activity dataset.
///
/// Every operation is a single grouped query against the current data;
/// nothing is cached or mutated. Ties on the aggregate value are broken
/// by username (and activity id where needed) so repeated calls against
/// an unchanged dataset return identical row orders.
pub struct AnalyticsRepository {
    pool: DbPool,
}

impl AnalyticsRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Top 10 users by lifetime distance. Users whose activities carry no
    /// positive distance (none at all, all zero, or all NULL) are excluded.
    pub fn top_distance_users(&self) -> Result<Vec<DistanceLeader>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT u.username, SUM(a.distance_m) AS total_distance
             FROM users u
             JOIN activities a ON a.user_id = u.id
             GROUP BY u.id
             HAVING total_distance > 0
             ORDER BY total_distance DESC, u.username ASC
             LIMIT 10",
        )?;

        let leaders = stmt
            .query_map([], |row| {
                Ok(DistanceLeader {
                    username: row.get(0)?,
                    total_distance: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(leaders)
    }

    /// Activities with at least one interaction, scored by distinct
    /// comment plus distinct kudos count. The double LEFT JOIN fans out
    /// to comments x kudos rows per activity; DISTINCT keeps the counts
    /// honest.
    pub fn social_activities(&self) -> Result<Vec<SocialActivity>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT u.username,
                    COUNT(DISTINCT c.id) AS comments_count,
                    COUNT(DISTINCT k.id) AS kudos_count,
                    COUNT(DISTINCT c.id) + COUNT(DISTINCT k.id) AS engagement_score
             FROM activities a
             JOIN users u ON a.user_id = u.id
             LEFT JOIN comments c ON c.activity_id = a.id
             LEFT JOIN kudos k ON k.activity_id = a.id
             GROUP BY a.id
             HAVING engagement_score > 0
             ORDER BY engagement_score DESC, u.username ASC, a.id ASC",
        )?;

        let activities = stmt
            .query_map([], |row| {
                Ok(SocialActivity {
                    user_username: row.get(0)?,
                    comments_count: row.get(1)?,
                    kudos_count: row.get(2)?,
                    engagement_score: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(activities)
    }

    /// Per-month activity count, distance sum and mean duration, in
    /// chronological order. The grouping key is start_time truncated to
    /// the first instant of its calendar month; months without
    /// activities are simply absent.
    pub fn monthly_activity_stats(&self) -> Result<Vec<MonthlyStats>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT strftime('%Y-%m-01T00:00:00Z', start_time) AS month,
                    COUNT(*) AS total_activities,
                    SUM(distance_m) AS total_distance,
                    AVG(duration_sec) AS avg_duration
             FROM activities
             GROUP BY month
             ORDER BY month ASC",
        )?;

        let stats = stmt
            .query_map([], |row| {
                Ok(MonthlyStats {
                    month: row.get::<_, String>(0)?.parse::<DateTime<Utc>>().unwrap(),
                    total_activities: row.get(1)?,
                    total_distance: row.get(2)?,
                    avg_duration: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(stats)
    }

    /// Users with at least 2 incoming follower edges
    pub fn influential_users(&self) -> Result<Vec<InfluentialUser>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT u.username, COUNT(f.follower_id) AS followers_count
             FROM users u
             JOIN followers f ON f.followed_id = u.id
             GROUP BY u.id
             HAVING followers_count >= 2
             ORDER BY followers_count DESC, u.username ASC",
        )?;

        let users = stmt
            .query_map([], |row| {
                Ok(InfluentialUser {
                    username: row.get(0)?,
                    followers_count: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(users)
    }

    /// Mean distance, peak elevation gain and record count per raw
    /// activity_type value (no case folding). NULL distances and
    /// elevations are skipped by the aggregates; a group with no
    /// distances at all sorts last.
    pub fn activity_type_performance(&self) -> Result<Vec<TypePerformance>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT activity_type,
                    AVG(distance_m) AS avg_distance,
                    MAX(elevation_gain_m) AS max_elevation,
                    COUNT(*) AS record_count
             FROM activities
             GROUP BY activity_type
             ORDER BY avg_distance DESC, activity_type ASC",
        )?;

        let performance = stmt
            .query_map([], |row| {
                Ok(TypePerformance {
                    activity_type: row.get(0)?,
                    avg_distance: row.get(1)?,
                    max_elevation: row.get(2)?,
                    record_count: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(performance)
    }

    /// Every user with their activity count and tier. The threshold
    /// ladder is evaluated top-down, first match wins.
    pub fn user_activity_levels(&self) -> Result<Vec<UserActivityLevel>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT u.username,
                    COUNT(a.id) AS activities_count,
                    CASE
                        WHEN COUNT(a.id) >= 10 THEN 'Pro Athlete'
                        WHEN COUNT(a.id) >= 3 THEN 'Active'
                        ELSE 'Beginner'
                    END AS status
             FROM users u
             LEFT JOIN activities a ON a.user_id = u.id
             GROUP BY u.id
             ORDER BY u.username ASC",
        )?;

        let levels = stmt
            .query_map([], |row| {
                let status: String = row.get(2)?;
                Ok(UserActivityLevel {
                    username: row.get(0)?,
                    activities_count: row.get(1)?,
                    status: ActivityLevel::parse(&status).unwrap(),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(levels)
    }
}
