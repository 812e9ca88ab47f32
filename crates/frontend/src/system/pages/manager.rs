use contracts::enums::Role;
use leptos::prelude::*;

use crate::layout::topbar::Topbar;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireRole;

#[component]
pub fn ManagerPage() -> impl IntoView {
    view! {
        <RequireRole roles=vec![Role::PracticeManager]>
            <Topbar />
            <ManagerHome />
        </RequireRole>
    }
}

#[component]
fn ManagerHome() -> impl IntoView {
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
            <h1>"Practice management"</h1>
            <p>{move || format!("Welcome, {}.", username())}</p>
            <p class="small">"Practice-wide activity and audit trails are reviewed from here."</p>
        </main>
    }
}
