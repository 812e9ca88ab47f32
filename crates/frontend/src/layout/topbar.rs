use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::system::auth::context::{use_auth, AuthState};
use crate::system::auth::guard::ENTRY_PAGE;
use crate::system::auth::{api, storage::Session};

/// Header strip with the signed-in user's name and role, and a logout
/// button. Falls back to the cached session fields while the identity is
/// still loading.
#[component]
pub fn Topbar() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let whoami = move || {
        let session = Session::browser();
        let state = auth_state.get();
        let username = state
            .identity
            .as_ref()
            .map(|me| me.username.clone())
            .or_else(|| session.cached_username())
            .unwrap_or_else(|| "user".to_string());
        let role = state
            .identity
            .as_ref()
            .and_then(|me| me.role.clone())
            .or_else(|| session.cached_role())
            .unwrap_or_default()
            .to_uppercase();
        if role.is_empty() {
            username
        } else {
            format!("{} ({})", username, role)
        }
    };

    let on_logout = move |_| {
        api::logout(&Session::browser());
        set_auth_state.set(AuthState::default());
        navigate(ENTRY_PAGE, NavigateOptions::default());
    };

    view! {
        <header class="topbar">
            <span class="whoami">{whoami}</span>
            <button class="btn" on:click=on_logout>"Log out"</button>
        </header>
    }
}
