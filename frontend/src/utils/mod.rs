pub mod assignment_form;
pub mod date;

pub use assignment_form::{validate, AssignmentDraft, FieldError, ValidationErrors};
pub use date::{format_iso_date, parse_date_input, DATE_INPUT_FORMAT};
