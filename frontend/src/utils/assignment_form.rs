//! Draft state and validation for the add-assignment dialog.
//!
//! The validator is a pure function over a draft snapshot: every check runs
//! on every attempt, and each attempt produces a fresh error set instead of
//! mutating the one from the previous attempt.

use chrono::NaiveDate;
use serde::Serialize;
use shared::NewAssignment;
use thiserror::Error;

/// In-progress assignment record backing the dialog's inputs. Raw control
/// values are stored as-is; nothing is trimmed or coerced. Serializes in the
/// same camelCase shape as the completed record so console output of a
/// rejected attempt reads like the record it would have produced, with an
/// unset due date left out rather than rendered as null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDraft {
    pub assignment_name: String,
    pub course_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

/// Per-field validation failure. The `Display` strings are the exact
/// messages rendered beneath the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Missing assignment name")]
    MissingAssignmentName,
    #[error("Missing course ID")]
    MissingCourseId,
    #[error("Missing due date")]
    MissingDueDate,
    #[error("Invalid due date")]
    InvalidDueDate,
}

/// One error slot per form field. A submit attempt replaces the whole set;
/// editing a field clears only that field's slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub assignment_name: Option<FieldError>,
    pub course_id: Option<FieldError>,
    pub due_date: Option<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.assignment_name.is_none() && self.course_id.is_none() && self.due_date.is_none()
    }
}

/// Validate a draft ahead of submission.
///
/// All three checks run on every attempt. A prior `InvalidDueDate` from the
/// date control is consulted rather than re-derived: the control owns format
/// checking, so its verdict stands until the field is edited again. Returns
/// the completed record when every check passes.
pub fn validate(
    draft: &AssignmentDraft,
    prior: &ValidationErrors,
) -> Result<NewAssignment, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if draft.assignment_name.is_empty() {
        errors.assignment_name = Some(FieldError::MissingAssignmentName);
    }
    if draft.course_id.is_empty() {
        errors.course_id = Some(FieldError::MissingCourseId);
    }
    if prior.due_date == Some(FieldError::InvalidDueDate) {
        errors.due_date = Some(FieldError::InvalidDueDate);
    } else if draft.due_date.is_none() {
        errors.due_date = Some(FieldError::MissingDueDate);
    }

    match (errors.is_empty(), draft.due_date) {
        (true, Some(due_date)) => Ok(NewAssignment {
            assignment_name: draft.assignment_name.clone(),
            course_id: draft.course_id.clone(),
            due_date,
        }),
        _ => Err(errors),
    }
}
