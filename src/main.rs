//! Campaign Site Backend
//!
//! JSON API for the campaign website and its admin panel, backed by SQLite, plus
//! optional serving of the built single-page site.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod models;
mod ordering;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, Method},
    middleware,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;
use errors::AppError;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting campaign site backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);
    match &config.static_dir {
        Some(dir) => tracing::info!("Serving site bundle from {:?}", dir),
        None => tracing::info!("No CAMPAIGN_STATIC_DIR set, serving the API only"),
    }

    if config.admin_password.is_none() {
        tracing::warn!(
            "No admin password configured (CAMPAIGN_ADMIN_PASSWORD). Admin routes are open!"
        );
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    match repo.purge_expired_sessions().await {
        Ok(0) => {}
        Ok(n) => tracing::info!("Purged {} expired admin sessions", n),
        Err(e) => tracing::warn!("Failed to purge expired sessions: {}", e),
    }

    let state = AppState {
        repo,
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // Same policy the site's edge function used
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_LENGTH])
        .max_age(Duration::from_secs(600));

    let gate_enabled = state.config.admin_password.is_some();
    let gate_repo = state.repo.clone();

    // Read by the public page, written by its contact forms
    let public_routes = Router::new()
        .route("/site-content", get(api::get_site_content))
        .route("/news", get(api::list_news))
        .route("/videos", get(api::list_videos))
        .route("/articles", get(api::list_articles))
        .route("/volunteers", post(api::create_volunteer))
        .route("/tickets", post(api::create_ticket))
        .route("/ideas", post(api::create_idea))
        .route("/auth/login", post(api::login));

    // Admin panel only
    let admin_routes = Router::new()
        .route("/site-content", post(api::save_site_content))
        .route("/news", post(api::create_news))
        .route("/news/{id}", delete(api::delete_news))
        .route("/videos", post(api::create_video))
        .route("/videos/{id}", delete(api::delete_video))
        .route("/articles", post(api::create_article))
        .route("/articles/{id}", delete(api::delete_article))
        .route("/volunteers", get(api::list_volunteers))
        .route("/tickets", get(api::list_tickets))
        .route("/ideas", get(api::list_ideas))
        .route("/auth/session", get(api::session_status))
        .route("/auth/logout", post(api::logout))
        .route_layer(middleware::from_fn(move |req, next| {
            auth::admin_auth_layer(gate_enabled, gate_repo.clone(), req, next)
        }));

    let health_routes = Router::new().route("/health", get(health_check));

    let router = Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .merge(health_routes);

    // The bundle routes `/` and `/admin` itself, so every unknown path gets index.html
    let router = match &state.config.static_dir {
        Some(dir) => router.fallback_service(
            ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
        ),
        None => router.fallback(not_found),
    };

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
