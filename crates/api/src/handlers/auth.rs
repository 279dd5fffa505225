use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use time::Duration as TimeDuration;

use crate::auth::{issue_token, verify_password, AuthConfig, CurrentUser, SESSION_COOKIE};
use crate::error::{ApiError, ApiResult};
use crate::handlers::users::UserDto;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserDto,
}

fn session_cookie(token: String, config: &AuthConfig) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(TimeDuration::hours(config.session_ttl_hours))
        .build()
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> ApiResult<(CookieJar, Json<LoginResponse>)> {
    // Same 401 for unknown email and wrong password; never a cookie.
    let user = state
        .store
        .find_user_by_email(&req.email)
        .ok_or(ApiError::Unauthenticated("Invalid credentials"))?;
    if !verify_password(&req.password, &user.password_hash) {
        return Err(ApiError::Unauthenticated("Invalid credentials"));
    }
    let token = issue_token(user.id, user.role, &state.auth)
        .map_err(|err| anyhow::anyhow!("failed to issue session token: {err}"))?;
    tracing::info!(user_id = %user.id, "login");
    let jar = jar.add(session_cookie(token, &state.auth));
    Ok((jar, Json(LoginResponse { user: user.into() })))
}

pub async fn logout(jar: CookieJar) -> (CookieJar, Json<Value>) {
    // Client-side invalidation only: the token itself stays valid until
    // expiry, there is no server-side revocation list.
    let jar = jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build());
    (jar, Json(json!({ "msg": "Logged out successfully" })))
}

pub async fn current_user(
    user: CurrentUser,
    State(state): State<AppState>,
) -> ApiResult<Json<UserDto>> {
    let record = state
        .store
        .find_user(user.user_id)
        .ok_or(ApiError::Unauthenticated("User not found"))?;
    Ok(Json(record.into()))
}
