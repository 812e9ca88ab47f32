use contracts::enums::Role;
use leptos::prelude::*;

use crate::layout::topbar::Topbar;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireRole;

#[component]
pub fn ReceptionistPage() -> impl IntoView {
    view! {
        <RequireRole roles=vec![Role::Receptionist]>
            <Topbar />
            <ReceptionistHome />
        </RequireRole>
    }
}

#[component]
fn ReceptionistHome() -> impl IntoView {
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
            <h1>"Reception desk"</h1>
            <p>{move || format!("Welcome, {}.", username())}</p>
            <p class="small">"Schedule appointments on behalf of patients from here."</p>
        </main>
    }
}
