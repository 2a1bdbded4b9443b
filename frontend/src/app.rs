use leptos::*;

use crate::pages::assignments::AssignmentsPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="container navbar-content">
                <a href="/" class="navbar-brand">"Homework Tracker"</a>
            </div>
        </nav>
        <main>
            <div class="container">
                <AssignmentsPage />
            </div>
        </main>
    }
}
