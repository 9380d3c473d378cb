// Integration tests for the analytics pipeline: repository views feeding
// the summary-statistics layer, the way the HTTP handlers compose them.

use chrono::TimeZone;
use uuid::Uuid;

use stride_server::db::repositories::{
    ActivityRepository, AnalyticsRepository, CommentRepository, KudosRepository, UserRepository,
};
use stride_server::db::Database;
use stride_server::stats;
use stride_types::{Activity, ActivityLevel, Comment, Kudos, User};

fn ts(year: i32, month: u32, day: u32) -> chrono::DateTime<chrono::Utc> {
    chrono::Utc
        .with_ymd_and_hms(year, month, day, 8, 0, 0)
        .unwrap()
}

fn add_user(repo: &UserRepository, username: &str) -> Uuid {
    let user = User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        join_date: ts(2024, 1, 1),
    };
    repo.create(&user).expect("Failed to create user");
    user.id
}

fn add_activity(repo: &ActivityRepository, user_id: Uuid, distance_m: Option<f64>, day: u32) {
    let activity = Activity {
        id: Uuid::new_v4(),
        user_id,
        activity_type: "Run".to_string(),
        distance_m,
        duration_sec: 1800.0,
        elevation_gain_m: None,
        start_time: ts(2024, 4, day),
    };
    repo.create(&activity).expect("Failed to create activity");
}

#[test]
fn leaderboard_and_levels_for_contrasting_users() {
    // User A: few long activities. User B: many short ones.
    let db = Database::in_memory().expect("Failed to create database");
    let users = UserRepository::new(db.pool.clone());
    let activities = ActivityRepository::new(db.pool.clone());
    let analytics = AnalyticsRepository::new(db.pool.clone());

    let a = add_user(&users, "a");
    let b = add_user(&users, "b");

    for _ in 0..5 {
        add_activity(&activities, a, Some(240.0), 3);
    }
    for _ in 0..12 {
        add_activity(&activities, b, Some(500.0 / 12.0), 5);
    }

    let leaders = analytics.top_distance_users().expect("query failed");
    assert_eq!(leaders.len(), 2);
    assert_eq!(leaders[0].username, "a");
    assert!((leaders[0].total_distance - 1200.0).abs() < 1e-9);
    assert_eq!(leaders[1].username, "b");
    assert!((leaders[1].total_distance - 500.0).abs() < 1e-9);

    let levels = analytics.user_activity_levels().expect("query failed");
    let status_of = |name: &str| {
        levels
            .iter()
            .find(|l| l.username == name)
            .map(|l| l.status)
            .expect("user missing")
    };
    assert_eq!(status_of("a"), ActivityLevel::Active);
    assert_eq!(status_of("b"), ActivityLevel::ProAthlete);
}

#[test]
fn seeded_views_flow_into_summary_statistics() {
    let db = Database::in_memory().expect("Failed to create database");
    db.seed_test_data().expect("Failed to seed test data");
    let analytics = AnalyticsRepository::new(db.pool.clone());

    let leaders = analytics.top_distance_users().expect("query failed");
    let records: Vec<serde_json::Value> = leaders
        .iter()
        .map(|row| serde_json::to_value(row).expect("serialize failed"))
        .collect();

    let statistics = stats::summarize(&records, &["total_distance"]);
    let s = &statistics["total_distance"];
    assert_eq!(s.max, 224597.0);
    assert_eq!(s.min, 8300.0);
    assert!(s.mean > s.min && s.mean < s.max);
    assert!(s.std_dev.is_some());

    let levels = analytics.user_activity_levels().expect("query failed");
    let level_records: Vec<serde_json::Value> = levels
        .iter()
        .map(|row| serde_json::to_value(row).expect("serialize failed"))
        .collect();

    let grouped = stats::grouped_means(&level_records, "status", &["activities_count"])
        .expect("grouped analysis missing");
    let by_status = &grouped["activities_count"];
    // ada 12 and hana 10 average to 11
    assert!((by_status["Pro Athlete"] - 11.0).abs() < 1e-9);
    // boris 5, chen 3, gus 4
    assert!((by_status["Active"] - 4.0).abs() < 1e-9);
}

#[test]
fn engagement_pipeline_counts_each_interaction_once() {
    let db = Database::in_memory().expect("Failed to create database");
    let users = UserRepository::new(db.pool.clone());
    let activities = ActivityRepository::new(db.pool.clone());
    let comments = CommentRepository::new(db.pool.clone());
    let kudos = KudosRepository::new(db.pool.clone());
    let analytics = AnalyticsRepository::new(db.pool.clone());

    let athlete = add_user(&users, "athlete");
    let fans: Vec<Uuid> = (0..3).map(|i| add_user(&users, &format!("fan{i}"))).collect();

    let activity = Activity {
        id: Uuid::new_v4(),
        user_id: athlete,
        activity_type: "Ride".to_string(),
        distance_m: Some(42000.0),
        duration_sec: 6300.0,
        elevation_gain_m: Some(380.0),
        start_time: ts(2024, 2, 14),
    };
    activities.create(&activity).expect("Failed to create activity");

    for fan in &fans {
        comments
            .add(&Comment {
                id: Uuid::new_v4(),
                activity_id: activity.id,
                author_id: *fan,
                content: "chapeau".to_string(),
                created_at: ts(2024, 2, 15),
            })
            .expect("Failed to add comment");
    }
    for fan in fans.iter().take(2) {
        kudos
            .add(&Kudos {
                id: Uuid::new_v4(),
                activity_id: activity.id,
                author_id: *fan,
                created_at: ts(2024, 2, 15),
            })
            .expect("Failed to add kudos");
    }

    let social = analytics.social_activities().expect("query failed");
    assert_eq!(social.len(), 1);
    assert_eq!(social[0].comments_count, 3);
    assert_eq!(social[0].kudos_count, 2);
    assert_eq!(social[0].engagement_score, 5);
}
