use chrono::NaiveDate;
use gloo_console::log;
use leptos::*;
use shared::NewAssignment;

use crate::utils::{
    format_iso_date, parse_date_input, validate, AssignmentDraft, FieldError, ValidationErrors,
};

/// Trigger button plus modal form for creating a new assignment.
///
/// The component owns the in-progress draft and its validation errors. The
/// caller only supplies `on_add`, which receives the completed record; the
/// component does not wait on or observe whatever `on_add` does with it.
#[component]
pub fn AddAssignment(#[prop(into)] on_add: Callback<NewAssignment>) -> impl IntoView {
    let open = create_rw_signal(false);

    // Draft fields hold raw control values; nothing is trimmed or coerced.
    let assignment_name = create_rw_signal(String::new());
    let course_id = create_rw_signal(String::new());
    let due_date = create_rw_signal(Option::<NaiveDate>::None);
    let errors = create_rw_signal(ValidationErrors::default());

    // Closing keeps the draft: reopening shows the prior partial input.
    let close = move |_| open.set(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = AssignmentDraft {
            assignment_name: assignment_name.get(),
            course_id: course_id.get(),
            due_date: due_date.get(),
        };

        match validate(&draft, &errors.get()) {
            Ok(record) => {
                log!("Submitting new assignment:");
                log!(serde_json::to_string(&record).unwrap_or_default());
                on_add.call(record);
                assignment_name.set(String::new());
                course_id.set(String::new());
                due_date.set(None);
                errors.set(ValidationErrors::default());
                open.set(false);
            }
            Err(fresh) => {
                log!("Form is invalid");
                log!(serde_json::to_string(&draft).unwrap_or_default());
                errors.set(fresh);
            }
        }
    };

    view! {
        <button class="btn btn-primary" on:click=move |_| open.set(true)>
            "Add assignment"
        </button>

        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=close>
                <div class="modal" on:click=|e| e.stop_propagation()>
                    <div class="modal-header">
                        <h3 class="modal-title">"Add assignment"</h3>
                        <button class="modal-close" on:click=close>"×"</button>
                    </div>

                    <form on:submit=on_submit>
                        <div style="padding: 1rem;">
                            <p style="margin-bottom: 1rem; color: var(--text-muted);">
                                "Enter the assignment name, due date, and the course it is for."
                            </p>

                            <div class="form-group">
                                <label class="form-label" for="assignment-name">"Assignment Name"</label>
                                <input
                                    type="text"
                                    id="assignment-name"
                                    class="form-input"
                                    prop:value=move || assignment_name.get()
                                    on:input=move |ev| {
                                        assignment_name.set(event_target_value(&ev));
                                        errors.update(|e| e.assignment_name = None);
                                    }
                                />
                                {move || errors.get().assignment_name.map(|e| view! {
                                    <small style="color: var(--error-color, #dc3545);">{e.to_string()}</small>
                                })}
                            </div>

                            <div class="form-group">
                                <label class="form-label" for="course-id">"Course ID"</label>
                                <input
                                    type="number"
                                    id="course-id"
                                    class="form-input"
                                    prop:value=move || course_id.get()
                                    on:input=move |ev| {
                                        course_id.set(event_target_value(&ev));
                                        errors.update(|e| e.course_id = None);
                                    }
                                />
                                {move || errors.get().course_id.map(|e| view! {
                                    <small style="color: var(--error-color, #dc3545);">{e.to_string()}</small>
                                })}
                            </div>

                            <div class="form-group">
                                <label class="form-label" for="due-date">"Due Date"</label>
                                <input
                                    type="date"
                                    id="due-date"
                                    class="form-input"
                                    prop:value=move || due_date.get().map(format_iso_date).unwrap_or_default()
                                    on:input=move |ev| {
                                        match parse_date_input(&event_target_value(&ev)) {
                                            Some(date) => {
                                                log!("date is valid:", format_iso_date(date));
                                                due_date.set(Some(date));
                                                errors.update(|e| e.due_date = None);
                                            }
                                            None => {
                                                // Stored date stays as it was.
                                                errors.update(|e| {
                                                    e.due_date = Some(FieldError::InvalidDueDate)
                                                });
                                            }
                                        }
                                    }
                                />
                                {move || errors.get().due_date.map(|e| view! {
                                    <small style="color: var(--error-color, #dc3545);">{e.to_string()}</small>
                                })}
                            </div>
                        </div>

                        <div class="modal-footer">
                            <button type="button" class="btn btn-outline" on:click=close>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn-primary">
                                "Add"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
