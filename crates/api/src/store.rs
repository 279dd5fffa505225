//! In-memory domain stores.
//!
//! Each entity lives in a flat vector behind its own `RwLock`; every
//! invariant (unique email, one check-in per user per day, the leave
//! state machine) is enforced here, inside a single lock acquisition,
//! so handlers stay free of read-modify-write races. State is wiped on
//! restart by design; durability is out of scope.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, NaiveDate, Utc};
use entity::{
    Announcement, AttendanceRecord, LeaveRequest, LeaveStatus, Role, Task, TaskPriority,
    TaskStatus, User,
};
use thiserror::Error;
use uuid::Uuid;

use crate::auth::CurrentUser;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum StoreError {
    #[error("email is already in use")]
    DuplicateEmail,
    #[error("already checked in today")]
    AlreadyCheckedIn,
    #[error("no active check-in found")]
    NoActiveCheckIn,
    #[error("leave has not been approved by HR")]
    HrReviewPending,
    #[error("leave has already been reviewed by HR")]
    AlreadyReviewed,
    #[error("leave decision is final")]
    AlreadyFinalized,
    #[error("not assigned to this task")]
    NotTaskAssignee,
    #[error("user not found")]
    UserNotFound,
    #[error("task not found")]
    TaskNotFound,
    #[error("leave not found")]
    LeaveNotFound,
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Clone, Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub department: String,
    pub position: String,
    pub join_date: NaiveDate,
}

/// Self-service profile fields. Everything else on a user record
/// (email, role, department, position) is not editable through here.
#[derive(Clone, Debug, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub avatar: Option<String>,
}

#[derive(Clone, Debug)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub assigned_to: Uuid,
    pub due_date: NaiveDate,
}

#[derive(Clone, Debug, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assigned_to: Option<Uuid>,
    pub due_date: Option<NaiveDate>,
}

#[derive(Clone, Debug)]
pub struct NewAnnouncement {
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Default)]
pub struct HrStore {
    users: RwLock<Vec<User>>,
    attendance: RwLock<Vec<AttendanceRecord>>,
    leaves: RwLock<Vec<LeaveRequest>>,
    tasks: RwLock<Vec<Task>>,
    announcements: RwLock<Vec<Announcement>>,
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl HrStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- users ----

    pub fn insert_user(&self, new: NewUser, now: DateTime<Utc>) -> StoreResult<User> {
        let mut users = write(&self.users);
        let email = new.email.trim().to_lowercase();
        if users.iter().any(|u| u.email == email) {
            return Err(StoreError::DuplicateEmail);
        }
        let user = User {
            id: Uuid::new_v4(),
            name: new.name,
            email,
            password_hash: new.password_hash,
            role: new.role,
            department: new.department,
            position: new.position,
            join_date: new.join_date,
            phone: None,
            address: None,
            bio: None,
            skills: Vec::new(),
            avatar: None,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    pub fn find_user(&self, id: Uuid) -> Option<User> {
        read(&self.users).iter().find(|u| u.id == id).cloned()
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<User> {
        let email = email.trim().to_lowercase();
        read(&self.users).iter().find(|u| u.email == email).cloned()
    }

    pub fn list_users(&self) -> Vec<User> {
        read(&self.users).clone()
    }

    pub fn update_profile(
        &self,
        user_id: Uuid,
        patch: ProfilePatch,
        now: DateTime<Utc>,
    ) -> StoreResult<User> {
        let mut users = write(&self.users);
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(StoreError::UserNotFound)?;
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(phone) = patch.phone {
            user.phone = Some(phone);
        }
        if let Some(address) = patch.address {
            user.address = Some(address);
        }
        if let Some(bio) = patch.bio {
            user.bio = Some(bio);
        }
        if let Some(skills) = patch.skills {
            user.skills = skills;
        }
        if let Some(avatar) = patch.avatar {
            user.avatar = Some(avatar);
        }
        user.updated_at = now;
        Ok(user.clone())
    }

    // ---- attendance ----

    /// Opens today's work session. Refuses when any record already exists
    /// for the caller's current calendar day, which keeps the at-most-one
    /// open record invariant and also blocks re-check-in after check-out.
    pub fn check_in(
        &self,
        user_id: Uuid,
        location: Option<String>,
        now: DateTime<Utc>,
    ) -> StoreResult<AttendanceRecord> {
        let today = now.date_naive();
        let mut attendance = write(&self.attendance);
        if attendance
            .iter()
            .any(|r| r.user_id == user_id && r.date == today)
        {
            return Err(StoreError::AlreadyCheckedIn);
        }
        let record = AttendanceRecord {
            id: Uuid::new_v4(),
            user_id,
            date: today,
            check_in: now,
            check_out: None,
            check_in_location: location,
            check_out_location: None,
        };
        attendance.push(record.clone());
        Ok(record)
    }

    pub fn check_out(
        &self,
        user_id: Uuid,
        location: Option<String>,
        now: DateTime<Utc>,
    ) -> StoreResult<AttendanceRecord> {
        let today = now.date_naive();
        let mut attendance = write(&self.attendance);
        let record = attendance
            .iter_mut()
            .find(|r| r.user_id == user_id && r.date == today && r.is_open())
            .ok_or(StoreError::NoActiveCheckIn)?;
        record.check_out = Some(now);
        record.check_out_location = location;
        Ok(record.clone())
    }

    /// Admins see every record, everyone else only their own.
    pub fn attendance_for(&self, viewer: &CurrentUser) -> Vec<AttendanceRecord> {
        read(&self.attendance)
            .iter()
            .filter(|r| viewer.is_admin() || r.user_id == viewer.user_id)
            .cloned()
            .collect()
    }

    // ---- leaves ----

    pub fn submit_leave(
        &self,
        user_id: Uuid,
        reason: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        now: DateTime<Utc>,
    ) -> LeaveRequest {
        let leave = LeaveRequest {
            id: Uuid::new_v4(),
            user_id,
            reason,
            start_date,
            end_date,
            status: LeaveStatus::Pending,
            hr_approved: None,
            hr_comment: None,
            admin_comment: None,
            created_at: now,
            updated_at: now,
        };
        write(&self.leaves).push(leave.clone());
        leave
    }

    /// First-stage HR review. One-shot: a request can be reviewed once.
    /// Rejection is terminal; approval hands the request to the admin stage.
    pub fn hr_decision(
        &self,
        leave_id: Uuid,
        approved: bool,
        comment: Option<String>,
        now: DateTime<Utc>,
    ) -> StoreResult<LeaveRequest> {
        let mut leaves = write(&self.leaves);
        let leave = leaves
            .iter_mut()
            .find(|l| l.id == leave_id)
            .ok_or(StoreError::LeaveNotFound)?;
        if leave.hr_approved.is_some() {
            return Err(StoreError::AlreadyReviewed);
        }
        leave.hr_approved = Some(approved);
        leave.hr_comment = comment;
        if !approved {
            leave.status = LeaveStatus::Rejected;
        }
        leave.updated_at = now;
        Ok(leave.clone())
    }

    /// Final admin decision, only reachable after HR approval and only once.
    pub fn admin_decision(
        &self,
        leave_id: Uuid,
        status: LeaveStatus,
        comment: Option<String>,
        now: DateTime<Utc>,
    ) -> StoreResult<LeaveRequest> {
        let mut leaves = write(&self.leaves);
        let leave = leaves
            .iter_mut()
            .find(|l| l.id == leave_id)
            .ok_or(StoreError::LeaveNotFound)?;
        if leave.hr_approved != Some(true) {
            return Err(StoreError::HrReviewPending);
        }
        if leave.is_final() {
            return Err(StoreError::AlreadyFinalized);
        }
        leave.status = status;
        leave.admin_comment = comment;
        leave.updated_at = now;
        Ok(leave.clone())
    }

    /// Role-scoped view: employees see their own requests, HR sees what
    /// still needs (or failed) its review, admins see the HR-approved queue.
    pub fn leaves_for(&self, viewer: &CurrentUser) -> Vec<LeaveRequest> {
        read(&self.leaves)
            .iter()
            .filter(|l| match viewer.role {
                Role::Admin => l.hr_approved == Some(true),
                Role::Hr => l.hr_approved != Some(true),
                Role::Employee => l.user_id == viewer.user_id,
            })
            .cloned()
            .collect()
    }

    // ---- tasks ----

    /// New tasks always start pending, whatever the caller sent.
    pub fn create_task(&self, new: NewTask, now: DateTime<Utc>) -> StoreResult<Task> {
        if self.find_user(new.assigned_to).is_none() {
            return Err(StoreError::UserNotFound);
        }
        let task = Task {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            status: TaskStatus::Pending,
            priority: new.priority,
            assigned_to: new.assigned_to,
            due_date: new.due_date,
            created_at: now,
            updated_at: now,
        };
        write(&self.tasks).push(task.clone());
        Ok(task)
    }

    /// Assignees may move a task between statuses (reopening included);
    /// every other field in the patch is silently dropped for them.
    /// Admins may change anything, reassignment included.
    pub fn update_task(
        &self,
        task_id: Uuid,
        actor: &CurrentUser,
        patch: TaskPatch,
        now: DateTime<Utc>,
    ) -> StoreResult<Task> {
        if let Some(assignee) = patch.assigned_to {
            if actor.is_admin() && self.find_user(assignee).is_none() {
                return Err(StoreError::UserNotFound);
            }
        }
        let mut tasks = write(&self.tasks);
        let task = tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or(StoreError::TaskNotFound)?;
        if !actor.is_admin() && task.assigned_to != actor.user_id {
            return Err(StoreError::NotTaskAssignee);
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        if actor.is_admin() {
            if let Some(title) = patch.title {
                task.title = title;
            }
            if let Some(description) = patch.description {
                task.description = description;
            }
            if let Some(priority) = patch.priority {
                task.priority = priority;
            }
            if let Some(assigned_to) = patch.assigned_to {
                task.assigned_to = assigned_to;
            }
            if let Some(due_date) = patch.due_date {
                task.due_date = due_date;
            }
        }
        task.updated_at = now;
        Ok(task.clone())
    }

    pub fn list_tasks(&self, assigned_to: Option<Uuid>) -> Vec<Task> {
        read(&self.tasks)
            .iter()
            .filter(|t| assigned_to.is_none_or(|id| t.assigned_to == id))
            .cloned()
            .collect()
    }

    // ---- announcements ----

    pub fn create_announcement(
        &self,
        new: NewAnnouncement,
        created_by: Uuid,
        now: DateTime<Utc>,
    ) -> Announcement {
        let announcement = Announcement {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            start_date: new.start_date,
            end_date: new.end_date,
            created_at: now,
            created_by,
        };
        write(&self.announcements).push(announcement.clone());
        announcement
    }

    pub fn active_announcements(&self, today: NaiveDate) -> Vec<Announcement> {
        read(&self.announcements)
            .iter()
            .filter(|a| a.is_active(today))
            .cloned()
            .collect()
    }

    pub fn all_announcements(&self) -> Vec<Announcement> {
        read(&self.announcements).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn actor(user_id: Uuid, role: Role) -> CurrentUser {
        CurrentUser { user_id, role }
    }

    fn seed_user(store: &HrStore, role: Role, email: &str) -> User {
        store
            .insert_user(
                NewUser {
                    name: "Test User".into(),
                    email: email.into(),
                    password_hash: "x".into(),
                    role,
                    department: "QA".into(),
                    position: "Engineer".into(),
                    join_date: NaiveDate::from_ymd_opt(2022, 1, 5).unwrap(),
                },
                at(2023, 1, 1, 9),
            )
            .unwrap()
    }

    #[test]
    fn duplicate_email_is_rejected_case_insensitively() {
        let store = HrStore::new();
        seed_user(&store, Role::Employee, "jo@company.test");
        let err = store
            .insert_user(
                NewUser {
                    name: "Other".into(),
                    email: "JO@Company.Test".into(),
                    password_hash: "x".into(),
                    role: Role::Employee,
                    department: "QA".into(),
                    position: "Engineer".into(),
                    join_date: NaiveDate::from_ymd_opt(2022, 1, 5).unwrap(),
                },
                at(2023, 1, 2, 9),
            )
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateEmail);
    }

    #[test]
    fn second_check_in_same_day_is_rejected() {
        let store = HrStore::new();
        let user = seed_user(&store, Role::Employee, "a@company.test");
        store.check_in(user.id, None, at(2023, 10, 2, 9)).unwrap();
        let err = store
            .check_in(user.id, None, at(2023, 10, 2, 13))
            .unwrap_err();
        assert_eq!(err, StoreError::AlreadyCheckedIn);
        // Next calendar day opens a fresh session.
        store.check_in(user.id, None, at(2023, 10, 3, 9)).unwrap();
    }

    #[test]
    fn check_in_after_check_out_same_day_is_rejected() {
        let store = HrStore::new();
        let user = seed_user(&store, Role::Employee, "a@company.test");
        store.check_in(user.id, None, at(2023, 10, 2, 9)).unwrap();
        store.check_out(user.id, None, at(2023, 10, 2, 17)).unwrap();
        let err = store
            .check_in(user.id, None, at(2023, 10, 2, 18))
            .unwrap_err();
        assert_eq!(err, StoreError::AlreadyCheckedIn);
    }

    #[test]
    fn check_out_without_open_session_fails() {
        let store = HrStore::new();
        let user = seed_user(&store, Role::Employee, "a@company.test");
        let err = store
            .check_out(user.id, None, at(2023, 10, 2, 17))
            .unwrap_err();
        assert_eq!(err, StoreError::NoActiveCheckIn);
        // Yesterday's open session does not satisfy today's check-out.
        store.check_in(user.id, None, at(2023, 10, 3, 9)).unwrap();
        let err = store
            .check_out(user.id, None, at(2023, 10, 4, 17))
            .unwrap_err();
        assert_eq!(err, StoreError::NoActiveCheckIn);
    }

    #[test]
    fn at_most_one_open_record_per_user_per_day() {
        let store = HrStore::new();
        let user = seed_user(&store, Role::Employee, "a@company.test");
        for day in 2..5 {
            let _ = store.check_in(user.id, None, at(2023, 10, day, 9));
            let _ = store.check_in(user.id, None, at(2023, 10, day, 10));
        }
        let viewer = actor(user.id, Role::Employee);
        for day in 2..5 {
            let date = NaiveDate::from_ymd_opt(2023, 10, day).unwrap();
            let open = store
                .attendance_for(&viewer)
                .into_iter()
                .filter(|r| r.date == date && r.is_open())
                .count();
            assert!(open <= 1, "day {day} has {open} open records");
        }
    }

    #[test]
    fn admin_decision_requires_hr_approval_first() {
        let store = HrStore::new();
        let user = seed_user(&store, Role::Employee, "a@company.test");
        let leave = store.submit_leave(
            user.id,
            "Personal".into(),
            NaiveDate::from_ymd_opt(2023, 10, 15).unwrap(),
            NaiveDate::from_ymd_opt(2023, 10, 15).unwrap(),
            at(2023, 10, 1, 9),
        );
        let err = store
            .admin_decision(leave.id, LeaveStatus::Approved, None, at(2023, 10, 2, 9))
            .unwrap_err();
        assert_eq!(err, StoreError::HrReviewPending);

        store
            .hr_decision(leave.id, true, Some("ok".into()), at(2023, 10, 2, 10))
            .unwrap();
        let decided = store
            .admin_decision(leave.id, LeaveStatus::Approved, None, at(2023, 10, 2, 11))
            .unwrap();
        assert_eq!(decided.status, LeaveStatus::Approved);
        assert_eq!(decided.hr_approved, Some(true));
    }

    #[test]
    fn hr_rejection_is_terminal() {
        let store = HrStore::new();
        let user = seed_user(&store, Role::Employee, "a@company.test");
        let leave = store.submit_leave(
            user.id,
            "Trip".into(),
            NaiveDate::from_ymd_opt(2023, 11, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 11, 3).unwrap(),
            at(2023, 10, 1, 9),
        );
        let rejected = store
            .hr_decision(leave.id, false, Some("no cover".into()), at(2023, 10, 2, 9))
            .unwrap();
        assert_eq!(rejected.status, LeaveStatus::Rejected);

        let err = store
            .hr_decision(leave.id, true, None, at(2023, 10, 3, 9))
            .unwrap_err();
        assert_eq!(err, StoreError::AlreadyReviewed);
        let err = store
            .admin_decision(leave.id, LeaveStatus::Approved, None, at(2023, 10, 3, 9))
            .unwrap_err();
        assert_eq!(err, StoreError::HrReviewPending);
    }

    #[test]
    fn admin_decision_is_one_shot() {
        let store = HrStore::new();
        let user = seed_user(&store, Role::Employee, "a@company.test");
        let leave = store.submit_leave(
            user.id,
            "Trip".into(),
            NaiveDate::from_ymd_opt(2023, 11, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 11, 3).unwrap(),
            at(2023, 10, 1, 9),
        );
        store
            .hr_decision(leave.id, true, None, at(2023, 10, 2, 9))
            .unwrap();
        store
            .admin_decision(leave.id, LeaveStatus::Rejected, None, at(2023, 10, 3, 9))
            .unwrap();
        let err = store
            .admin_decision(leave.id, LeaveStatus::Approved, None, at(2023, 10, 4, 9))
            .unwrap_err();
        assert_eq!(err, StoreError::AlreadyFinalized);
    }

    #[test]
    fn leave_listing_is_role_scoped() {
        let store = HrStore::new();
        let alice = seed_user(&store, Role::Employee, "alice@company.test");
        let bob = seed_user(&store, Role::Employee, "bob@company.test");
        let a = store.submit_leave(
            alice.id,
            "A".into(),
            NaiveDate::from_ymd_opt(2023, 11, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 11, 1).unwrap(),
            at(2023, 10, 1, 9),
        );
        store.submit_leave(
            bob.id,
            "B".into(),
            NaiveDate::from_ymd_opt(2023, 11, 2).unwrap(),
            NaiveDate::from_ymd_opt(2023, 11, 2).unwrap(),
            at(2023, 10, 1, 10),
        );
        store
            .hr_decision(a.id, true, None, at(2023, 10, 2, 9))
            .unwrap();

        let admin_view = store.leaves_for(&actor(Uuid::new_v4(), Role::Admin));
        assert_eq!(admin_view.len(), 1);
        assert_eq!(admin_view[0].id, a.id);

        let hr_view = store.leaves_for(&actor(Uuid::new_v4(), Role::Hr));
        assert_eq!(hr_view.len(), 1);
        assert_eq!(hr_view[0].user_id, bob.id);

        let alice_view = store.leaves_for(&actor(alice.id, Role::Employee));
        assert_eq!(alice_view.len(), 1);
        assert_eq!(alice_view[0].id, a.id);
    }

    #[test]
    fn non_admin_task_patch_only_applies_status() {
        let store = HrStore::new();
        let assignee = seed_user(&store, Role::Employee, "a@company.test");
        let other = seed_user(&store, Role::Employee, "b@company.test");
        let task = store
            .create_task(
                NewTask {
                    title: "Ship report".into(),
                    description: "Quarterly numbers".into(),
                    priority: TaskPriority::High,
                    assigned_to: assignee.id,
                    due_date: NaiveDate::from_ymd_opt(2023, 12, 1).unwrap(),
                },
                at(2023, 10, 1, 9),
            )
            .unwrap();
        assert_eq!(task.status, TaskStatus::Pending);

        let patch = TaskPatch {
            status: Some(TaskStatus::InProgress),
            title: Some("hijacked".into()),
            assigned_to: Some(other.id),
            ..TaskPatch::default()
        };
        let updated = store
            .update_task(
                task.id,
                &actor(assignee.id, Role::Employee),
                patch,
                at(2023, 10, 2, 9),
            )
            .unwrap();
        assert_eq!(updated.status, TaskStatus::InProgress);
        assert_eq!(updated.title, "Ship report");
        assert_eq!(updated.assigned_to, assignee.id);

        let err = store
            .update_task(
                task.id,
                &actor(other.id, Role::Employee),
                TaskPatch {
                    status: Some(TaskStatus::Completed),
                    ..TaskPatch::default()
                },
                at(2023, 10, 2, 10),
            )
            .unwrap_err();
        assert_eq!(err, StoreError::NotTaskAssignee);
    }

    #[test]
    fn admin_can_reassign_and_reopen_tasks() {
        let store = HrStore::new();
        let admin = seed_user(&store, Role::Admin, "admin@company.test");
        let a = seed_user(&store, Role::Employee, "a@company.test");
        let b = seed_user(&store, Role::Employee, "b@company.test");
        let task = store
            .create_task(
                NewTask {
                    title: "Audit".into(),
                    description: "Access review".into(),
                    priority: TaskPriority::Medium,
                    assigned_to: a.id,
                    due_date: NaiveDate::from_ymd_opt(2023, 12, 1).unwrap(),
                },
                at(2023, 10, 1, 9),
            )
            .unwrap();
        let updated = store
            .update_task(
                task.id,
                &actor(admin.id, Role::Admin),
                TaskPatch {
                    status: Some(TaskStatus::Completed),
                    assigned_to: Some(b.id),
                    ..TaskPatch::default()
                },
                at(2023, 10, 2, 9),
            )
            .unwrap();
        assert_eq!(updated.assigned_to, b.id);
        assert_eq!(updated.status, TaskStatus::Completed);

        // Reopen is allowed, transitions are bidirectional.
        let reopened = store
            .update_task(
                task.id,
                &actor(b.id, Role::Employee),
                TaskPatch {
                    status: Some(TaskStatus::Pending),
                    ..TaskPatch::default()
                },
                at(2023, 10, 3, 9),
            )
            .unwrap();
        assert_eq!(reopened.status, TaskStatus::Pending);
    }

    #[test]
    fn announcements_filter_by_active_window() {
        let store = HrStore::new();
        let admin = seed_user(&store, Role::Admin, "admin@company.test");
        let now = at(2023, 10, 1, 9);
        store.create_announcement(
            NewAnnouncement {
                title: "Holiday party".into(),
                description: "RSVP".into(),
                start_date: NaiveDate::from_ymd_opt(2023, 12, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2023, 12, 20).unwrap(),
            },
            admin.id,
            now,
        );
        store.create_announcement(
            NewAnnouncement {
                title: "Open enrollment".into(),
                description: "Benefits".into(),
                start_date: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2023, 10, 31).unwrap(),
            },
            admin.id,
            now,
        );
        let today = NaiveDate::from_ymd_opt(2023, 10, 15).unwrap();
        let active = store.active_announcements(today);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title, "Open enrollment");
        assert_eq!(store.all_announcements().len(), 2);
    }
}
