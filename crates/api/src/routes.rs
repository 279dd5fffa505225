use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{announcements, attendance, auth, leaves, tasks, users};
use crate::state::AppState;

/// The full `/api` surface. Layers (trace, CORS, compression) are the
/// binary's concern so tests can drive this router directly.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::current_user))
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/users/profile",
            get(users::get_profile).put(users::update_profile),
        )
        .route("/api/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route("/api/tasks/{id}", put(tasks::update_task))
        .route(
            "/api/leaves",
            get(leaves::list_leaves).post(leaves::submit_leave),
        )
        .route("/api/leaves/{id}/hr", put(leaves::hr_decision))
        .route("/api/leaves/{id}/admin", put(leaves::admin_decision))
        .route("/api/attendance", get(attendance::list_attendance))
        .route("/api/attendance/check-in", post(attendance::check_in))
        .route("/api/attendance/check-out", post(attendance::check_out))
        .route(
            "/api/announcements",
            get(announcements::active_announcements).post(announcements::create_announcement),
        )
        .route(
            "/api/announcements/all",
            get(announcements::all_announcements),
        )
        .with_state(state)
}
