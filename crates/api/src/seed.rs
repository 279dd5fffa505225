//! Demo fixtures. The stores are process-lifetime only, so the server
//! seeds a small company on startup to keep every list endpoint useful
//! out of the box.

use anyhow::{anyhow, Context};
use chrono::{Duration, NaiveDate, Utc};
use entity::{Role, TaskPriority, User};

use crate::auth::hash_password;
use crate::store::{HrStore, NewAnnouncement, NewTask, NewUser};

pub struct SeededDemo {
    pub users: Vec<User>,
}

impl SeededDemo {
    pub fn user_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }
}

const DEMO_USERS: [(&str, &str, &str, Role, &str, &str, (i32, u32, u32)); 5] = [
    (
        "Avery Quinn",
        "admin@company.test",
        "admin123",
        Role::Admin,
        "Management",
        "IT Director",
        (2020, 1, 15),
    ),
    (
        "Sarah Wilson",
        "sarah@company.test",
        "sarah123",
        Role::Hr,
        "Human Resources",
        "HR Manager",
        (2021, 2, 15),
    ),
    (
        "John Doe",
        "john@company.test",
        "john123",
        Role::Employee,
        "Development",
        "Senior Developer",
        (2021, 3, 10),
    ),
    (
        "Michael Brown",
        "michael@company.test",
        "michael123",
        Role::Employee,
        "QA",
        "Test Engineer",
        (2022, 1, 5),
    ),
    (
        "Emily Johnson",
        "emily@company.test",
        "emily123",
        Role::Employee,
        "Support",
        "Technical Support",
        (2022, 4, 18),
    ),
];

pub fn seed_demo_data(store: &HrStore) -> anyhow::Result<SeededDemo> {
    let now = Utc::now();
    let mut users = Vec::new();
    for (name, email, password, role, department, position, (y, m, d)) in DEMO_USERS {
        let join_date = NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| anyhow!("invalid demo join date for {email}"))?;
        let password_hash =
            hash_password(password).map_err(|err| anyhow!("hashing {email}: {err}"))?;
        let user = store
            .insert_user(
                NewUser {
                    name: name.into(),
                    email: email.into(),
                    password_hash,
                    role,
                    department: department.into(),
                    position: position.into(),
                    join_date,
                },
                now,
            )
            .with_context(|| format!("seeding {email}"))?;
        users.push(user);
    }
    let seeded = SeededDemo { users };

    let admin = seeded
        .user_email("admin@company.test")
        .ok_or_else(|| anyhow!("missing seeded admin"))?;
    let john = seeded
        .user_email("john@company.test")
        .ok_or_else(|| anyhow!("missing seeded John"))?;
    let michael = seeded
        .user_email("michael@company.test")
        .ok_or_else(|| anyhow!("missing seeded Michael"))?;

    let today = now.date_naive();
    store.create_task(
        NewTask {
            title: "Prepare release notes".into(),
            description: "Summarize the sprint for the all-hands.".into(),
            priority: TaskPriority::High,
            assigned_to: john.id,
            due_date: today + Duration::days(7),
        },
        now,
    )?;
    store.create_task(
        NewTask {
            title: "Regression pass on login".into(),
            description: "Cover the new session expiry path.".into(),
            priority: TaskPriority::Medium,
            assigned_to: michael.id,
            due_date: today + Duration::days(3),
        },
        now,
    )?;

    // One leave still waiting on HR, one already cleared for admin review.
    store.submit_leave(
        john.id,
        "Personal".into(),
        today + Duration::days(14),
        today + Duration::days(15),
        now,
    );
    let cleared = store.submit_leave(
        michael.id,
        "Family visit".into(),
        today + Duration::days(20),
        today + Duration::days(24),
        now,
    );
    store.hr_decision(cleared.id, true, Some("Coverage arranged".into()), now)?;

    // Yesterday's completed session for John.
    let yesterday = now - Duration::days(1);
    store.check_in(john.id, Some("Office".into()), yesterday)?;
    store.check_out(john.id, Some("Office".into()), yesterday + Duration::hours(8))?;

    store.create_announcement(
        NewAnnouncement {
            title: "Open enrollment".into(),
            description: "Benefits elections close at the end of the window.".into(),
            start_date: today - Duration::days(3),
            end_date: today + Duration::days(11),
        },
        admin.id,
        now,
    );
    store.create_announcement(
        NewAnnouncement {
            title: "Office closure".into(),
            description: "The office was closed for deep cleaning.".into(),
            start_date: today - Duration::days(30),
            end_date: today - Duration::days(28),
        },
        admin.id,
        now,
    );

    Ok(seeded)
}
