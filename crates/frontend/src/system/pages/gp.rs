use contracts::enums::Role;
use leptos::prelude::*;

use crate::layout::topbar::Topbar;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireRole;

#[component]
pub fn GpPage() -> impl IntoView {
    view! {
        <RequireRole roles=vec![Role::Gp]>
            <Topbar />
            <GpHome />
        </RequireRole>
    }
}

#[component]
fn GpHome() -> impl IntoView {
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
            <h1>"GP dashboard"</h1>
            <p>{move || format!("Welcome, Dr {}.", username())}</p>
            <p class="small">"Your appointments and patient records are managed from here."</p>
        </main>
    }
}
