use chrono::Utc;
use leptos::*;
use shared::{Assignment, NewAssignment};
use uuid::Uuid;

use crate::components::add_assignment::AddAssignment;
use crate::utils::format_iso_date;

/// Build the application-side assignment for an accepted submission.
fn accept_assignment(record: NewAssignment) -> Assignment {
    Assignment {
        id: Uuid::new_v4(),
        assignment_name: record.assignment_name,
        course_id: record.course_id,
        due_date: record.due_date,
        created_at: Utc::now(),
    }
}

#[component]
pub fn AssignmentsPage() -> impl IntoView {
    let assignments = create_rw_signal(Vec::<Assignment>::new());
    let success = create_rw_signal(Option::<String>::None);

    let on_add = move |record: NewAssignment| {
        let assignment = accept_assignment(record);
        success.set(Some(format!(
            "Added \"{}\"",
            assignment.assignment_name
        )));
        assignments.update(|list| list.push(assignment));
    };

    let on_remove = move |assignment_id: Uuid| {
        assignments.update(|list| list.retain(|a| a.id != assignment_id));
    };

    view! {
        <div class="dashboard-header">
            <h1 class="dashboard-title">"Assignments"</h1>
            <AddAssignment on_add=on_add />
        </div>

        {move || success.get().map(|s| view! {
            <div class="alert alert-success">{s}
                <button
                    class="alert-dismiss"
                    on:click=move |_| success.set(None)
                >"×"</button>
            </div>
        })}

        {move || {
            let list = assignments.get();
            if list.is_empty() {
                view! {
                    <div class="empty-state">
                        <p>"No assignments yet. Add your first one to get started."</p>
                    </div>
                }.into_view()
            } else {
                view! {
                    <ul style="list-style: none; padding: 0; margin-top: 0.5rem;">
                        {list.into_iter().map(|assignment| {
                            let assignment_id = assignment.id;
                            view! {
                                <li style="display: flex; justify-content: space-between; align-items: center; padding: 0.5rem 0; border-bottom: 1px solid var(--border-color, #dee2e6);">
                                    <div>
                                        <span style="font-weight: 500;">{assignment.assignment_name.clone()}</span>
                                        <span style="color: var(--text-muted); margin-left: 0.5rem;">
                                            {format!("Course {}", assignment.course_id)}
                                        </span>
                                    </div>
                                    <div style="display: flex; align-items: center; gap: 0.5rem;">
                                        <span>{format!("Due {}", format_iso_date(assignment.due_date))}</span>
                                        <button
                                            type="button"
                                            class="btn btn-outline"
                                            style="padding: 0.125rem 0.5rem; font-size: 0.75rem;"
                                            on:click=move |_| on_remove(assignment_id)
                                        >
                                            "Remove"
                                        </button>
                                    </div>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }.into_view()
            }
        }}
    }
}
