pub mod auth;
pub mod projects;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;
use crate::views;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/v1/projects", get(projects::list))
        .route("/api/v1/projects/{id}", get(projects::get))
}

pub fn auth_routes() -> Router<SharedState> {
    Router::new()
        .route(
            "/admin/login",
            get(views::auth::login_page).post(auth::login),
        )
        .route("/admin/logout", post(auth::logout))
}
