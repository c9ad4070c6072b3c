pub mod auth;
pub mod home;
pub mod projects;

use axum::response::Redirect;
use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

/// Pages anyone can see.
pub fn public_routes() -> Router<SharedState> {
    Router::new().route("/", get(home::index))
}

/// Admin pages; callers wrap these in the login redirect.
pub fn admin_routes() -> Router<SharedState> {
    Router::new()
        .route("/admin", get(|| async { Redirect::to("/admin/projects") }))
        .route(
            "/admin/projects",
            get(projects::index).post(projects::submit),
        )
}
