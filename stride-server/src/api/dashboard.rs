use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    api::{ApiError, ApiResult},
    benchmark,
    db::repositories::AnalyticsRepository,
    state::AppState,
};

/// Upper bound on benchmark request counts; the sweep runs the full
/// workload once per worker-pool size.
const MAX_BENCHMARK_REQUESTS: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DashboardMode {
    Plotly,
    Bokeh,
    Benchmark,
}

impl DashboardMode {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "plotly" => Some(DashboardMode::Plotly),
            "bokeh" => Some(DashboardMode::Bokeh),
            "benchmark" => Some(DashboardMode::Benchmark),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            DashboardMode::Plotly => "plotly",
            DashboardMode::Bokeh => "bokeh",
            DashboardMode::Benchmark => "benchmark",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    mode: Option<String>,
    #[serde(default = "default_top_n")]
    top_n: i64,
    #[serde(default)]
    min_dist: f64,
    #[serde(default = "default_n_requests")]
    n_requests: usize,
}

fn default_top_n() -> i64 {
    10
}

fn default_n_requests() -> usize {
    100
}

/// GET /dashboard?mode=&top_n=&min_dist=&n_requests=
///
/// Chart modes return the chart-ready data sources for all six views;
/// rendering itself happens downstream. Benchmark mode runs the
/// worker-pool sweep instead.
pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<Json<Value>> {
    let mode = match query.mode.as_deref() {
        None => DashboardMode::Plotly,
        Some(raw) => DashboardMode::parse(raw)
            .ok_or_else(|| ApiError::BadRequest(format!("Unknown dashboard mode: {}", raw)))?,
    };

    match mode {
        DashboardMode::Benchmark => benchmark_response(&state, query.n_requests).await,
        _ => chart_response(&state, mode, &query),
    }
}

async fn benchmark_response(state: &AppState, n_requests: usize) -> ApiResult<Json<Value>> {
    if n_requests == 0 || n_requests > MAX_BENCHMARK_REQUESTS {
        return Err(ApiError::BadRequest(format!(
            "n_requests must be between 1 and {}",
            MAX_BENCHMARK_REQUESTS
        )));
    }

    let pool = state.db.pool.clone();
    let points = tokio::task::spawn_blocking(move || benchmark::run_experiment(&pool, n_requests))
        .await
        .map_err(|e| ApiError::InternalError(format!("Benchmark task failed: {}", e)))??;

    let best = benchmark::best_point(&points)
        .ok_or_else(|| ApiError::InternalError("Benchmark produced no sweep points".to_string()))?;

    Ok(Json(json!({
        "mode": "benchmark",
        "n_requests": n_requests,
        "results": points,
        "best_threads": best.threads,
        "min_time": round3(best.duration_secs),
    })))
}

fn chart_response(
    state: &AppState,
    mode: DashboardMode,
    query: &DashboardQuery,
) -> ApiResult<Json<Value>> {
    if query.top_n < 1 {
        return Err(ApiError::BadRequest(
            "top_n must be a positive integer".to_string(),
        ));
    }
    if !query.min_dist.is_finite() || query.min_dist < 0.0 {
        return Err(ApiError::BadRequest(
            "min_dist must be a non-negative number".to_string(),
        ));
    }

    let repo = AnalyticsRepository::new(state.db.pool.clone());

    let mut leaderboard = repo.top_distance_users()?;
    leaderboard.retain(|row| row.total_distance >= query.min_dist);
    leaderboard.truncate(query.top_n as usize);

    let monthly = repo.monthly_activity_stats()?;
    let monthly_distances: Vec<f64> = monthly
        .iter()
        .filter_map(|row| row.total_distance)
        .collect();

    let mut stats = json!({
        "avg_monthly_dist": 0.0,
        "max_monthly_dist": 0.0,
    });
    if !monthly_distances.is_empty() {
        let sum: f64 = monthly_distances.iter().sum();
        let max = monthly_distances.iter().cloned().fold(f64::MIN, f64::max);
        stats["avg_monthly_dist"] = json!(round1(sum / monthly_distances.len() as f64));
        stats["max_monthly_dist"] = json!(round1(max));
    }

    Ok(Json(json!({
        "mode": mode.as_str(),
        "params": {
            "top_n": query.top_n,
            "min_dist": query.min_dist,
        },
        "stats": stats,
        "charts": {
            "leaderboard": leaderboard,
            "social": repo.social_activities()?,
            "monthly": monthly,
            "influencers": repo.influential_users()?,
            "types": repo.activity_type_performance()?,
            "levels": repo.user_activity_levels()?,
        },
    })))
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
