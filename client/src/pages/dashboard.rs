//! Dashboard page: sidebar navigation plus the active section's view.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. `SessionView` decides which panel
//! renders; the panels read the catalog and profile from context, so their
//! state survives switching sections.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use portal::{Section, SessionView};

use crate::components::overview_panel::OverviewPanel;
use crate::components::profile_panel::ProfilePanel;
use crate::components::records_panel::RecordsPanel;
use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;

/// Body text for sections that have no view of their own.
fn placeholder_text(section: Section) -> String {
    format!("{} is not available yet.", section.label())
}

/// Dashboard page. Redirects to `/login` if nobody is signed in.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<RwSignal<SessionView>>();
    let ui = expect_context::<RwSignal<UiState>>();

    install_unauth_redirect(auth, use_navigate());

    let active = move || session.get().current();
    let toggle_sidebar = move |_| ui.update(|u| u.sidebar_open = !u.sidebar_open);

    view! {
        <Show when=move || auth.get().is_signed_in()>
            <div class="workspace">
                <Sidebar/>
                <main class="workspace__main">
                    <div class="workspace__header">
                        <button class="btn workspace__sidebar-trigger" on:click=toggle_sidebar title="Toggle sidebar">
                            "☰"
                        </button>
                        {move || active().heading().map(|h| view! { <h2 class="workspace__heading">{h}</h2> })}
                    </div>
                    {move || match active() {
                        Section::Overview => view! { <OverviewPanel/> }.into_any(),
                        Section::Records => view! { <RecordsPanel/> }.into_any(),
                        Section::Profile => view! { <ProfilePanel/> }.into_any(),
                        other => view! {
                            <div class="workspace__placeholder">
                                <p>{placeholder_text(other)}</p>
                            </div>
                        }
                            .into_any(),
                    }}
                </main>
            </div>
        </Show>
    }
}
