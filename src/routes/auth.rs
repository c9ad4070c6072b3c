use std::net::SocketAddr;

use askama::Template;
use axum::extract::{ConnectInfo, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::auth::jwt::{encode_token, Claims, SESSION_HOURS};
use crate::auth::{password, SESSION_COOKIE};
use crate::error::AppError;
use crate::state::SharedState;
use crate::views::auth::LoginTemplate;

#[derive(Deserialize)]
pub struct LoginForm {
    pub password: String,
}

fn session_cookie(token: &str) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token.to_string()))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::hours(SESSION_HOURS))
        .build()
}

fn login_error(status: StatusCode, error: String) -> Response {
    let template = LoginTemplate { error: Some(error) };
    (status, Html(template.render().unwrap_or_default())).into_response()
}

pub async fn login(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let ip = addr.ip();

    if let Err(retry_after) = state.login_limiter.check(ip) {
        tracing::warn!(%ip, "Admin login rate limited");
        return Ok(login_error(
            StatusCode::TOO_MANY_REQUESTS,
            format!("Too many attempts. Try again in {retry_after} seconds."),
        ));
    }

    let valid = password::verify_admin(&form.password, &state.config.admin_password_hash)
        .map_err(AppError::Internal)?;
    if !valid {
        state.login_limiter.record_failure(ip);
        tracing::info!(%ip, "Admin login failed");
        return Ok(login_error(
            StatusCode::UNAUTHORIZED,
            "Invalid password".to_string(),
        ));
    }

    state.login_limiter.reset(ip);
    let token = encode_token(&Claims::admin(), &state.config.jwt_secret)
        .map_err(AppError::Internal)?;

    tracing::info!(%ip, "Admin logged in");
    Ok((jar.add(session_cookie(&token)), Redirect::to("/admin/projects")).into_response())
}

pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let cleared = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .max_age(time::Duration::ZERO)
        .build();
    (jar.add(cleared), Redirect::to("/admin/login"))
}
