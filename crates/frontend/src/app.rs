use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Auth state is provided to the whole app via context.
    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
