use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, Utc};
use entity::{Task, TaskPriority, TaskStatus};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::extract::{require_role, ADMIN_ONLY};
use crate::state::AppState;
use crate::store::{NewTask, TaskPatch};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksQuery {
    pub assigned_to: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub assigned_to: Uuid,
    pub due_date: NaiveDate,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assigned_to: Option<Uuid>,
    pub due_date: Option<NaiveDate>,
}

pub async fn list_tasks(
    _user: CurrentUser,
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> Json<Vec<Task>> {
    Json(state.store.list_tasks(query.assigned_to))
}

pub async fn create_task(
    user: CurrentUser,
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    require_role(&user, ADMIN_ONLY)?;
    let task = state.store.create_task(
        NewTask {
            title: req.title,
            description: req.description,
            priority: req.priority,
            assigned_to: req.assigned_to,
            due_date: req.due_date,
        },
        Utc::now(),
    )?;
    tracing::info!(task_id = %task.id, assigned_to = %task.assigned_to, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// Assignee or admin only. The store drops everything but `status` from
/// non-admin patches, so a smuggled `assignedTo` is a no-op.
pub async fn update_task(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(task_id): Path<Uuid>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<Task>> {
    let patch = TaskPatch {
        title: req.title,
        description: req.description,
        status: req.status,
        priority: req.priority,
        assigned_to: req.assigned_to,
        due_date: req.due_date,
    };
    let task = state.store.update_task(task_id, &user, patch, Utc::now())?;
    Ok(Json(task))
}
