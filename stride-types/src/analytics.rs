//! Typed result rows for the analytics views.
//!
//! The serialized field names are a compatibility contract with the
//! downstream chart builders; renaming one breaks every consumer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::ActivityLevel;
use crate::models::datetime_format;

/// One leaderboard row: a user and their lifetime distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceLeader {
    pub username: String,
    pub total_distance: f64,
}

/// Engagement counts for a single activity.
///
/// `user__username` keeps the dotted-path spelling the chart layer
/// expects for fields reached through a join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialActivity {
    #[serde(rename = "user__username")]
    pub user_username: String,
    pub comments_count: i64,
    pub kudos_count: i64,
    pub engagement_score: i64,
}

/// Per-month aggregate. `month` is the first instant of the calendar
/// month; `total_distance` is None when no activity that month carried
/// a distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStats {
    #[serde(with = "datetime_format")]
    pub month: DateTime<Utc>,
    pub total_activities: i64,
    pub total_distance: Option<f64>,
    pub avg_duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluentialUser {
    pub username: String,
    pub followers_count: i64,
}

/// Aggregate performance for one raw activity type value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypePerformance {
    pub activity_type: String,
    pub avg_distance: Option<f64>,
    pub max_elevation: Option<f64>,
    pub record_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserActivityLevel {
    pub username: String,
    pub activities_count: i64,
    pub status: ActivityLevel,
}
