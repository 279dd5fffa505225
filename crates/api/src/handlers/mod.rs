pub mod announcements;
pub mod attendance;
pub mod auth;
pub mod leaves;
pub mod tasks;
pub mod users;
