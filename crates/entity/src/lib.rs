pub mod announcement;
pub mod attendance;
pub mod leave;
pub mod task;
pub mod user;

pub use announcement::Announcement;
pub use attendance::AttendanceRecord;
pub use leave::{LeaveRequest, LeaveStatus};
pub use task::{Task, TaskPriority, TaskStatus};
pub use user::{Role, User};
