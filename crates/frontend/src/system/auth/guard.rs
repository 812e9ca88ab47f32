use contracts::enums::Role;
use contracts::system::auth::Identity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use super::api;
use super::context::{use_auth, AuthState};
use super::storage::{Session, SessionStore};
use crate::shared::errors::ApiError;

/// Unauthenticated landing page, target of every logout redirect
pub const ENTRY_PAGE: &str = "/";

/// The landing route for a role. Unknown roles fall back to the entry page.
pub fn role_home(role: Role) -> &'static str {
    match role {
        Role::Patient => "/patient",
        Role::Gp => "/gp",
        Role::Receptionist => "/receptionist",
        Role::PracticeManager => "/manager",
        Role::Unknown => ENTRY_PAGE,
    }
}

/// Outcome of the authentication gate. Navigation is the caller's job.
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    Authorized(Identity),
    Redirect(&'static str),
}

/// Gate a protected page.
///
/// A missing token redirects to the entry page without touching the network.
/// Any identity-fetch failure counts as an authentication failure: the
/// session is cleared and the user goes back to the entry page, whatever the
/// cause. A signed-in user with a role outside `allowed` is sent to their
/// own landing page instead; their session stays intact.
pub async fn require_auth<S: SessionStore>(session: &Session<S>, allowed: &[Role]) -> Gate {
    if session.token().is_empty() {
        return Gate::Redirect(ENTRY_PAGE);
    }

    let fetched = api::fetch_me(session).await;
    settle(session, fetched, allowed)
}

/// Resolve the gate once the identity fetch has completed
fn settle<S: SessionStore>(
    session: &Session<S>,
    fetched: Result<Identity, ApiError>,
    allowed: &[Role],
) -> Gate {
    match fetched {
        Ok(me) => screen(me, allowed),
        Err(err) => {
            log::warn!("identity fetch failed, signing out: {}", err);
            session.clear();
            Gate::Redirect(ENTRY_PAGE)
        }
    }
}

/// Role screening once an identity has been fetched
fn screen(me: Identity, allowed: &[Role]) -> Gate {
    if !allowed.is_empty() && !allowed.contains(&me.role()) {
        return Gate::Redirect(role_home(me.role()));
    }
    Gate::Authorized(me)
}

/// Wraps a protected page.
///
/// Children render only once the gate admits the user; on any redirect
/// outcome the browser is navigated to the gate's target.
#[component]
pub fn RequireRole(#[prop(optional)] roles: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    let (authorized, set_authorized) = create_signal(false);
    let (_, set_auth_state) = use_auth();
    let navigate = use_navigate();

    create_effect(move |_| {
        let roles = roles.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let session = Session::browser();
            match require_auth(&session, &roles).await {
                Gate::Authorized(me) => {
                    set_auth_state.set(AuthState { identity: Some(me) });
                    set_authorized.set(true);
                }
                Gate::Redirect(target) => {
                    navigate(target, NavigateOptions::default());
                }
            }
        });
    });

    view! {
        <Show
            when=move || authorized.get()
            fallback=|| view! { <div class="loading">"Checking access..."</div> }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn identity(role: &str) -> Identity {
        serde_json::from_value(json!({"id": 1, "username": "alice", "role": role})).unwrap()
    }

    #[test]
    fn missing_token_redirects_to_entry_without_network() {
        let session = Session::in_memory();
        let gate = futures::executor::block_on(require_auth(&session, &[]));
        assert_eq!(gate, Gate::Redirect(ENTRY_PAGE));
    }

    #[test]
    fn fetch_failure_clears_session_and_redirects() {
        let session = Session::in_memory();
        session.set_token("expired");
        session.remember_identity(&identity("GP"));

        let err = ApiError::Transport("connection refused".to_string());
        let gate = settle(&session, Err(err), &[Role::Gp]);

        assert_eq!(gate, Gate::Redirect(ENTRY_PAGE));
        assert_eq!(session.token(), "");
        assert_eq!(session.cached_username(), None);
    }

    #[test]
    fn matching_role_is_authorized() {
        let me = identity("GP");
        assert_eq!(screen(me.clone(), &[Role::Gp]), Gate::Authorized(me));
    }

    #[test]
    fn role_check_is_case_insensitive() {
        let me = identity("gp");
        assert_eq!(screen(me.clone(), &[Role::Gp]), Gate::Authorized(me));
    }

    #[test]
    fn wrong_role_goes_to_own_landing_page() {
        let gate = screen(identity("patient"), &[Role::Gp]);
        assert_eq!(gate, Gate::Redirect("/patient"));
    }

    #[test]
    fn no_role_restriction_admits_any_identity() {
        let me = identity("RECEPTIONIST");
        assert_eq!(screen(me.clone(), &[]), Gate::Authorized(me));
    }

    #[test]
    fn unknown_role_mismatch_falls_back_to_entry() {
        let gate = screen(identity("admin"), &[Role::Gp]);
        assert_eq!(gate, Gate::Redirect(ENTRY_PAGE));
    }

    #[test]
    fn role_home_covers_every_role() {
        assert_eq!(role_home(Role::Patient), "/patient");
        assert_eq!(role_home(Role::Gp), "/gp");
        assert_eq!(role_home(Role::Receptionist), "/receptionist");
        assert_eq!(role_home(Role::PracticeManager), "/manager");
        assert_eq!(role_home(Role::Unknown), ENTRY_PAGE);
    }
}
