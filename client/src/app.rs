//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use portal::seed::DemoRecords;
use portal::{PortalConfig, SessionView};

use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::state::workspace::load_workspace_or_empty;

/// Root application component.
///
/// Seeds the workspace, provides all shared state contexts, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = PortalConfig::default();
    let workspace = load_workspace_or_empty(&DemoRecords, &config);

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let session = RwSignal::new(SessionView::new());
    let catalog = RwSignal::new(workspace.catalog);
    let training = RwSignal::new(workspace.training);
    let ui = RwSignal::new(UiState::default());

    provide_context(config);
    provide_context(auth);
    provide_context(session);
    provide_context(catalog);
    provide_context(training);
    provide_context(ui);

    view! {
        <Title text="Resident Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
