use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::{
    api::{ApiError, ApiResult},
    db::repositories::AnalyticsRepository,
    state::AppState,
    stats,
};

/// Serialize typed result rows into the JSON record shape the
/// summarizer and the chart layer consume.
fn rows_to_records<T: Serialize>(rows: &[T]) -> Result<Vec<Value>, ApiError> {
    rows.iter()
        .map(|row| {
            serde_json::to_value(row)
                .map_err(|e| ApiError::InternalError(format!("Failed to serialize row: {}", e)))
        })
        .collect()
}

/// Shared response envelope: the dataset itself, per-column summary
/// statistics, and an optional per-group breakdown. An empty dataset is
/// a valid state, not an error.
fn analytics_response(
    records: Vec<Value>,
    stats_columns: &[&str],
    group_by: Option<&str>,
) -> Json<Value> {
    if records.is_empty() {
        return Json(json!({
            "message": "No data available",
            "statistics": {},
        }));
    }

    let statistics = stats::summarize(&records, stats_columns);
    let grouped_analysis =
        group_by.and_then(|column| stats::grouped_means(&records, column, stats_columns));

    Json(json!({
        "dataset": records,
        "statistics": statistics,
        "grouped_analysis": grouped_analysis,
    }))
}

/// GET /analytics/leaderboard - Top users by lifetime distance
pub async fn leaderboard(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let repo = AnalyticsRepository::new(state.db.pool.clone());
    let rows = repo.top_distance_users()?;
    Ok(analytics_response(
        rows_to_records(&rows)?,
        &["total_distance"],
        None,
    ))
}

/// GET /analytics/social-engagement - Activities ranked by interactions
pub async fn social_engagement(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let repo = AnalyticsRepository::new(state.db.pool.clone());
    let rows = repo.social_activities()?;
    Ok(analytics_response(
        rows_to_records(&rows)?,
        &["engagement_score", "comments_count", "kudos_count"],
        None,
    ))
}

/// GET /analytics/monthly-trends - Per-month volume and duration
pub async fn monthly_trends(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let repo = AnalyticsRepository::new(state.db.pool.clone());
    let rows = repo.monthly_activity_stats()?;
    Ok(analytics_response(
        rows_to_records(&rows)?,
        &["total_distance", "avg_duration"],
        None,
    ))
}

/// GET /analytics/influencers - Users with enough followers
pub async fn influencers(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let repo = AnalyticsRepository::new(state.db.pool.clone());
    let rows = repo.influential_users()?;
    Ok(analytics_response(
        rows_to_records(&rows)?,
        &["followers_count"],
        None,
    ))
}

/// GET /analytics/activity-performance - Aggregates per activity type
pub async fn activity_performance(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let repo = AnalyticsRepository::new(state.db.pool.clone());
    let rows = repo.activity_type_performance()?;
    Ok(analytics_response(
        rows_to_records(&rows)?,
        &["avg_distance", "max_elevation"],
        None,
    ))
}

/// GET /analytics/user-levels - Tier classification, grouped by status
pub async fn user_levels(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let repo = AnalyticsRepository::new(state.db.pool.clone());
    let rows = repo.user_activity_levels()?;
    Ok(analytics_response(
        rows_to_records(&rows)?,
        &["activities_count"],
        Some("status"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    fn seeded_state() -> AppState {
        let db = Database::in_memory().expect("Failed to create test database");
        db.seed_test_data().expect("Failed to seed test data");
        AppState::new(db)
    }

    #[tokio::test]
    async fn leaderboard_envelope_contains_dataset_and_statistics() {
        let state = seeded_state();
        let Json(body) = leaderboard(State(state)).await.expect("handler failed");

        let dataset = body["dataset"].as_array().expect("dataset missing");
        assert_eq!(dataset.len(), 5);
        assert_eq!(dataset[0]["username"], "ada");
        assert!(body["statistics"]["total_distance"]["mean"].is_number());
        assert_eq!(body["grouped_analysis"], Value::Null);
    }

    #[tokio::test]
    async fn user_levels_include_grouped_analysis_by_status() {
        let state = seeded_state();
        let Json(body) = user_levels(State(state)).await.expect("handler failed");

        let grouped = &body["grouped_analysis"]["activities_count"];
        assert!(grouped["Pro Athlete"].is_number());
        assert!(grouped["Beginner"].is_number());
    }

    #[tokio::test]
    async fn empty_dataset_returns_no_data_message() {
        let db = Database::in_memory().expect("Failed to create test database");
        let state = AppState::new(db);
        let Json(body) = influencers(State(state)).await.expect("handler failed");

        assert_eq!(body["message"], "No data available");
        assert_eq!(body["statistics"], json!({}));
        assert!(body.get("dataset").is_none());
    }

    #[tokio::test]
    async fn social_engagement_keeps_dotted_username_field() {
        let state = seeded_state();
        let Json(body) = social_engagement(State(state)).await.expect("handler failed");

        let dataset = body["dataset"].as_array().expect("dataset missing");
        assert!(dataset[0]["user__username"].is_string());
    }
}
