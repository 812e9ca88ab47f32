use contracts::enums::Role;
use leptos::prelude::*;

use crate::layout::topbar::Topbar;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireRole;

#[component]
pub fn PatientPage() -> impl IntoView {
    view! {
        <RequireRole roles=vec![Role::Patient]>
            <Topbar />
            <PatientHome />
        </RequireRole>
    }
}

#[component]
fn PatientHome() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let username = move || {
        auth_state
            .get()
            .identity
            .map(|me| me.username)
            .unwrap_or_default()
    };

    view! {
        <main class="page">
            <h1>"Patient dashboard"</h1>
            <p>{move || format!("Welcome, {}.", username())}</p>
            <p class="small">"Book appointments and review your medical record from here."</p>
        </main>
    }
}
