use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::system::pages::gp::GpPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::manager::ManagerPage;
use crate::system::pages::patient::PatientPage;
use crate::system::pages::receptionist::ReceptionistPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    // Unknown paths fall back to the entry page.
    view! {
        <Router>
            <Routes fallback=|| view! { <LoginPage /> }>
                <Route path=path!("/") view=LoginPage />
                <Route path=path!("/patient") view=PatientPage />
                <Route path=path!("/gp") view=GpPage />
                <Route path=path!("/receptionist") view=ReceptionistPage />
                <Route path=path!("/manager") view=ManagerPage />
            </Routes>
        </Router>
    }
}
