pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod gallery;
pub mod lightbox;
pub mod media;
pub mod middleware;
pub mod models;
pub mod rate_limit;
pub mod repository;
pub mod routes;
pub mod state;
pub mod views;
pub mod workflow;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use sqlx::PgPool;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::media::FsMediaStore;
use crate::middleware::auth_redirect::redirect_unauthorized;
use crate::rate_limit::LoginRateLimiter;
use crate::repository::{PgProfileRepository, PgProjectRepository};
use crate::state::{AppState, SharedState};

/// Wire the PostgreSQL repositories and on-disk media store into the router.
pub fn build_app(pool: PgPool, config: Config) -> Router {
    let state: SharedState = Arc::new(AppState {
        projects: Arc::new(PgProjectRepository::new(pool.clone())),
        profile: Arc::new(PgProfileRepository::new(pool)),
        media: Arc::new(FsMediaStore::new(config.site_root.clone())),
        login_limiter: LoginRateLimiter::new(),
        config,
    });
    build_router(state)
}

pub fn build_router(state: SharedState) -> Router {
    let assets_dir = state.config.site_root.join("assets");
    let max_body_size = state.config.max_body_size;

    // Admin routes sit outside RequestBodyLimitLayer; the form reads at most max_body_size
    let admin = views::admin_routes().layer(axum::middleware::from_fn(redirect_unauthorized));

    Router::new()
        .merge(views::public_routes())
        .merge(routes::api_routes())
        .merge(routes::auth_routes())
        .nest_service("/assets", ServeDir::new(assets_dir))
        .nest_service("/static", ServeDir::new("static"))
        .route("/health", axum::routing::get(health))
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .merge(admin)
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
