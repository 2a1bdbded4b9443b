use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Assignment Types
// ============================================================================

/// An assignment as held by the application once it has been accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: Uuid,
    pub assignment_name: String,
    pub course_id: String,
    pub due_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Record forwarded by the add-assignment dialog. Field names serialize in
/// camelCase and the due date as a bare ISO calendar date ("YYYY-MM-DD"),
/// never a datetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssignment {
    pub assignment_name: String,
    pub course_id: String,
    pub due_date: NaiveDate,
}

// ============================================================================
// Tests
// ============================================================================
