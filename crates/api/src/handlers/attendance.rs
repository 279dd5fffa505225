use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use entity::AttendanceRecord;
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LocationRequest {
    pub location: Option<String>,
}

pub async fn list_attendance(
    user: CurrentUser,
    State(state): State<AppState>,
) -> Json<Vec<AttendanceRecord>> {
    Json(state.store.attendance_for(&user))
}

pub async fn check_in(
    user: CurrentUser,
    State(state): State<AppState>,
    Json(req): Json<LocationRequest>,
) -> ApiResult<(StatusCode, Json<AttendanceRecord>)> {
    let record = state
        .store
        .check_in(user.user_id, req.location, Utc::now())?;
    tracing::info!(user_id = %user.user_id, "checked in");
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn check_out(
    user: CurrentUser,
    State(state): State<AppState>,
    Json(req): Json<LocationRequest>,
) -> ApiResult<Json<AttendanceRecord>> {
    let record = state
        .store
        .check_out(user.user_id, req.location, Utc::now())?;
    tracing::info!(user_id = %user.user_id, "checked out");
    Ok(Json(record))
}
