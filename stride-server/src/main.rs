use axum::{routing::get, Router};
use std::net::SocketAddr;
use stride_server::state::AppState;
use stride_server::{api, config, db};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stride_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load settings
    let settings = config::Settings::new().expect("Failed to load settings");

    // Initialize database
    let db = db::Database::new(&settings.database.path).expect("Failed to create database");

    db.initialize()
        .expect("Failed to initialize database schema");

    // Always seed test data for development
    db.seed_test_data().expect("Failed to seed test data");
    tracing::info!("Test data seeded successfully");

    tracing::info!("Database initialized successfully");

    // Create application state
    let state = AppState::new(db);

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(health_check))
        // Analytics routes
        .route("/analytics/leaderboard", get(api::analytics::leaderboard))
        .route(
            "/analytics/social-engagement",
            get(api::analytics::social_engagement),
        )
        .route(
            "/analytics/monthly-trends",
            get(api::analytics::monthly_trends),
        )
        .route("/analytics/influencers", get(api::analytics::influencers))
        .route(
            "/analytics/activity-performance",
            get(api::analytics::activity_performance),
        )
        .route("/analytics/user-levels", get(api::analytics::user_levels))
        // Dashboard route
        .route("/dashboard", get(api::dashboard::dashboard))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .expect("Failed to parse server address");
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app).await.expect("Server error");
}

async fn health_check() -> &'static str {
    "OK"
}
