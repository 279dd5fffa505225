use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, NaiveDate, Utc};
use entity::{Role, User};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::{hash_password, CurrentUser};
use crate::error::{ApiError, ApiResult};
use crate::extract::{require_role, ADMIN_ONLY};
use crate::state::AppState;
use crate::store::{NewUser, ProfilePatch};

/// Directory view of a user: what any authenticated caller may see.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub position: String,
    pub join_date: NaiveDate,
    pub avatar: Option<String>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            department: user.department,
            position: user.position,
            join_date: user.join_date,
            avatar: user.avatar,
        }
    }
}

/// The caller's own record, profile fields included. Never exposes the
/// password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub position: String,
    pub join_date: NaiveDate,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for ProfileDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            department: user.department,
            position: user.position,
            join_date: user.join_date,
            phone: user.phone,
            address: user.address,
            bio: user.bio,
            skills: user.skills,
            avatar: user.avatar,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub department: String,
    pub position: String,
    pub join_date: NaiveDate,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub avatar: Option<String>,
}

pub async fn list_users(
    _user: CurrentUser,
    State(state): State<AppState>,
) -> Json<Vec<UserDto>> {
    let users = state.store.list_users();
    Json(users.into_iter().map(UserDto::from).collect())
}

pub async fn create_user(
    user: CurrentUser,
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    require_role(&user, ADMIN_ONLY)?;
    if req.password.is_empty() {
        return Err(ApiError::InvalidInput("password must not be empty".into()));
    }
    let password_hash = hash_password(&req.password)
        .map_err(|err| anyhow::anyhow!("password hash failed: {err}"))?;
    let created = state.store.insert_user(
        NewUser {
            name: req.name,
            email: req.email,
            password_hash,
            role: req.role,
            department: req.department,
            position: req.position,
            join_date: req.join_date,
        },
        Utc::now(),
    )?;
    tracing::info!(user_id = %created.id, "user created");
    Ok((StatusCode::CREATED, Json(UserDto::from(created))))
}

pub async fn get_profile(
    user: CurrentUser,
    State(state): State<AppState>,
) -> ApiResult<Json<ProfileDto>> {
    let record = state
        .store
        .find_user(user.user_id)
        .ok_or(ApiError::NotFound("User"))?;
    Ok(Json(ProfileDto::from(record)))
}

pub async fn update_profile(
    user: CurrentUser,
    State(state): State<AppState>,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileDto>> {
    let patch = ProfilePatch {
        name: req.name,
        phone: req.phone,
        address: req.address,
        bio: req.bio,
        skills: req.skills,
        avatar: req.avatar,
    };
    let updated = state.store.update_profile(user.user_id, patch, Utc::now())?;
    Ok(Json(ProfileDto::from(updated)))
}
