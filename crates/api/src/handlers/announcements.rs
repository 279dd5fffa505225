use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, Utc};
use entity::Announcement;
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::extract::{require_role, ADMIN_ONLY};
use crate::state::AppState;
use crate::store::NewAnnouncement;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

pub async fn active_announcements(
    _user: CurrentUser,
    State(state): State<AppState>,
) -> Json<Vec<Announcement>> {
    let today = Utc::now().date_naive();
    Json(state.store.active_announcements(today))
}

pub async fn all_announcements(
    user: CurrentUser,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Announcement>>> {
    require_role(&user, ADMIN_ONLY)?;
    Ok(Json(state.store.all_announcements()))
}

pub async fn create_announcement(
    user: CurrentUser,
    State(state): State<AppState>,
    Json(req): Json<CreateAnnouncementRequest>,
) -> ApiResult<(StatusCode, Json<Announcement>)> {
    require_role(&user, ADMIN_ONLY)?;
    if req.end_date < req.start_date {
        return Err(ApiError::InvalidInput(
            "endDate must not be before startDate".into(),
        ));
    }
    let announcement = state.store.create_announcement(
        NewAnnouncement {
            title: req.title,
            description: req.description,
            start_date: req.start_date,
            end_date: req.end_date,
        },
        user.user_id,
        Utc::now(),
    );
    tracing::info!(announcement_id = %announcement.id, "announcement created");
    Ok((StatusCode::CREATED, Json(announcement)))
}
