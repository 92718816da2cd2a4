//! Overview section: welcome card, stat cards, and recent activity.

#[cfg(test)]
#[path = "overview_panel_test.rs"]
mod overview_panel_test;

use leptos::prelude::*;
use portal::overview::{ActivityItem, ActivityKind, OverviewSummary, recent_activity};
use portal::{PortalConfig, RecordCatalog};

use crate::components::status_badge::StatusBadge;
use crate::state::auth::AuthState;

/// One headline counter card.
#[derive(Clone, Debug, PartialEq, Eq)]
struct StatCard {
    title: &'static str,
    value: String,
    description: &'static str,
}

fn stat_cards(summary: &OverviewSummary) -> [StatCard; 4] {
    [
        StatCard {
            title: "Total Cases",
            value: summary.total_cases.to_string(),
            description: "Clinical cases documented",
        },
        StatCard {
            title: "Procedures Completed",
            value: summary.procedures_completed.to_string(),
            description: "Successful supervised procedures",
        },
        StatCard {
            title: "Hours Logged",
            value: format!("{:.1}", summary.hours_logged),
            description: "Procedural hours",
        },
        StatCard {
            title: "Pending Reviews",
            value: summary.pending_reviews.to_string(),
            description: "Records and reflections awaiting review",
        },
    ]
}

fn activity_icon(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Patient => "activity__icon--patient",
        ActivityKind::Procedure => "activity__icon--procedure",
        ActivityKind::Case => "activity__icon--case",
    }
}

#[component]
pub fn OverviewPanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let catalog = expect_context::<RwSignal<RecordCatalog>>();
    let config = expect_context::<PortalConfig>();
    let limit = config.recent_activity_limit;

    let cards = move || catalog.with(|c| stat_cards(&OverviewSummary::from_catalog(c)));
    let activity = move || catalog.with(|c| recent_activity(c, limit));

    let user_name = move || auth.get().user.map(|u| u.name).unwrap_or_default();
    let user_summary = move || auth.get().user.map(|u| u.summary_line()).unwrap_or_default();
    let user_year = move || auth.get().user.map(|u| u.year).unwrap_or_default();
    let initials = move || auth.get().user.map(|u| u.initials()).unwrap_or_default();

    view! {
        <div class="overview">
            <section class="card overview__welcome">
                <div>
                    <h1>"Welcome back, " {user_name}</h1>
                    <p class="muted">{user_summary}</p>
                </div>
                <div class="overview__badges">
                    <span class="badge badge--outline">{user_year}</span>
                    <span class="avatar">{initials}</span>
                </div>
            </section>

            <div class="overview__stats">
                {move || {
                    cards()
                        .into_iter()
                        .map(|card| {
                            view! {
                                <div class="card stat-card">
                                    <p class="stat-card__title">{card.title}</p>
                                    <p class="stat-card__value">{card.value}</p>
                                    <p class="stat-card__description">{card.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <section class="card">
                <h3>"Recent Activity"</h3>
                <p class="muted">"Your latest cases, procedures, and training activities"</p>
                <ul class="activity">
                    {move || activity().into_iter().map(activity_row).collect::<Vec<_>>()}
                </ul>
            </section>
        </div>
    }
}

fn activity_row(item: ActivityItem) -> impl IntoView {
    view! {
        <li class="activity__item">
            <span class=format!("activity__icon {}", activity_icon(item.kind))></span>
            <div class="activity__text">
                <p class="activity__title">{item.title}</p>
                <p class="muted">{item.id} " · " {item.date}</p>
            </div>
            <StatusBadge tag=item.status/>
        </li>
    }
}
