//! Workspace sidebar: section menu, user footer, and sign-out.
//!
//! ARCHITECTURE
//! ============
//! The sidebar is the only writer of `SessionView`. Sign-out forwards the
//! session's logout signal to a terminator that clears `AuthState`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use portal::{Section, SessionView};

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<RwSignal<SessionView>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let select = move |section: Section| {
        session.update(|s| s.select(section));
        ui.update(|u| u.sidebar_open = false);
    };

    let on_logout = move |_| {
        session.get_untracked().logout(&|| auth.update(|a| a.user = None));
        session.set(SessionView::new());
        navigate("/login", NavigateOptions::default());
    };

    let user_name = move || auth.get().user.map(|u| u.name).unwrap_or_default();
    let user_year = move || auth.get().user.map(|u| u.year).unwrap_or_default();
    let initials = move || auth.get().user.map(|u| u.initials()).unwrap_or_default();

    view! {
        <aside class="sidebar" class:sidebar--open=move || ui.get().sidebar_open>
            <div class="sidebar__header">
                <div class="sidebar__logo">"⚕"</div>
                <div>
                    <h2 class="sidebar__title">"Resident Portal"</h2>
                    <p class="sidebar__subtitle">"Medical Training"</p>
                </div>
            </div>

            <nav class="sidebar__menu">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button
                                class="sidebar__item"
                                class:sidebar__item--active=move || session.get().is_active(section)
                                on:click=move |_| select(section)
                            >
                                {section.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="sidebar__footer">
                <div class="sidebar__user">
                    <span class="avatar avatar--small">{initials}</span>
                    <div class="sidebar__user-text">
                        <p class="sidebar__user-name">{user_name}</p>
                        <p class="sidebar__user-year">{user_year}</p>
                    </div>
                </div>
                <button class="btn btn--ghost sidebar__logout" on:click=on_logout>
                    "Sign Out"
                </button>
            </div>
        </aside>
    }
}
