//! Session authentication as an axum extractor.
//!
//! Handlers that take a [`CurrentUser`] argument reject the request with
//! 401 before their body runs: missing cookie, bad or expired token, and
//! a token whose user no longer exists all fail closed here.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use entity::Role;

use crate::auth::{self, CurrentUser, SESSION_COOKIE};
use crate::error::ApiError;
use crate::state::AppState;

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or(ApiError::Unauthenticated("No token, authorization denied"))?;
        let claims = auth::decode_token(&token, &state.auth)
            .map_err(|_| ApiError::Unauthenticated("Token is not valid"))?;
        let user = state
            .store
            .find_user(claims.sub)
            .ok_or(ApiError::Unauthenticated("User not found"))?;
        Ok(CurrentUser {
            user_id: user.id,
            role: user.role,
        })
    }
}

/// Declarative route gating: reject with 403 unless the caller's role is
/// in the allowed set.
pub fn require_role(user: &CurrentUser, allowed: &[Role]) -> Result<(), ApiError> {
    if allowed.contains(&user.role) {
        Ok(())
    } else {
        Err(ApiError::Forbidden("Access denied"))
    }
}

pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
pub const HR_ONLY: &[Role] = &[Role::Hr];
