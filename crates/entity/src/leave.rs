use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

/// A leave request moving through the two-stage HR -> admin approval flow.
///
/// `hr_approved` is tri-state: `None` until HR reviews, then `Some(true)`
/// (admin may finalize) or `Some(false)` (terminal, `status` is `Rejected`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub reason: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
    pub hr_approved: Option<bool>,
    pub hr_comment: Option<String>,
    pub admin_comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LeaveRequest {
    /// Terminal once rejected at either stage or finally decided by admin.
    pub fn is_final(&self) -> bool {
        self.status != LeaveStatus::Pending
    }
}
