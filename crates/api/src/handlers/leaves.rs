use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, Utc};
use entity::{LeaveRequest, LeaveStatus};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::extract::{require_role, ADMIN_ONLY, HR_ONLY};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitLeaveRequest {
    pub reason: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct HrDecisionRequest {
    pub approved: bool,
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AdminDecisionRequest {
    pub status: LeaveStatus,
    pub comment: Option<String>,
}

pub async fn list_leaves(
    user: CurrentUser,
    State(state): State<AppState>,
) -> Json<Vec<LeaveRequest>> {
    Json(state.store.leaves_for(&user))
}

pub async fn submit_leave(
    user: CurrentUser,
    State(state): State<AppState>,
    Json(req): Json<SubmitLeaveRequest>,
) -> ApiResult<(StatusCode, Json<LeaveRequest>)> {
    if req.end_date < req.start_date {
        return Err(ApiError::InvalidInput(
            "endDate must not be before startDate".into(),
        ));
    }
    let leave = state.store.submit_leave(
        user.user_id,
        req.reason,
        req.start_date,
        req.end_date,
        Utc::now(),
    );
    tracing::info!(leave_id = %leave.id, user_id = %user.user_id, "leave submitted");
    Ok((StatusCode::CREATED, Json(leave)))
}

pub async fn hr_decision(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(leave_id): Path<Uuid>,
    Json(req): Json<HrDecisionRequest>,
) -> ApiResult<Json<LeaveRequest>> {
    require_role(&user, HR_ONLY)?;
    let leave = state
        .store
        .hr_decision(leave_id, req.approved, req.comment, Utc::now())?;
    tracing::info!(leave_id = %leave.id, approved = req.approved, "HR leave decision");
    Ok(Json(leave))
}

pub async fn admin_decision(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(leave_id): Path<Uuid>,
    Json(req): Json<AdminDecisionRequest>,
) -> ApiResult<Json<LeaveRequest>> {
    require_role(&user, ADMIN_ONLY)?;
    if req.status == LeaveStatus::Pending {
        return Err(ApiError::InvalidInput(
            "status must be approved or rejected".into(),
        ));
    }
    let leave = state
        .store
        .admin_decision(leave_id, req.status, req.comment, Utc::now())?;
    tracing::info!(leave_id = %leave.id, status = ?leave.status, "admin leave decision");
    Ok(Json(leave))
}
