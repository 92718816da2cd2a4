//! Profile section: personal details and training progress tabs.

#[cfg(test)]
#[path = "profile_panel_test.rs"]
mod profile_panel_test;

use leptos::prelude::*;
use portal::UserProfile;
use portal::profile::{
    Achievement, LearningGoal, ProfileTab, RotationProgress, TrainingProgress, priority_class, rotation_class,
};

use crate::components::status_badge::Badge;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Label/value rows of the read-only personal information card.
fn info_rows(user: &UserProfile) -> [(&'static str, String); 5] {
    [
        ("Full Name", user.name.clone()),
        ("Email", user.email.clone()),
        ("Training Year", user.year.clone()),
        ("Specialty", user.specialty.clone()),
        ("Institution", user.institution.clone()),
    ]
}

fn weeks_label(rotation: &RotationProgress) -> String {
    format!("{} / {} weeks", rotation.completed_weeks, rotation.total_weeks)
}

fn priority_label(priority: &str) -> String {
    format!("{priority} priority")
}

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let training = expect_context::<RwSignal<TrainingProgress>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let active = move || ui.get().profile_tab;

    view! {
        <div class="profile">
            <div class="tabs" role="tablist">
                {ProfileTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="tabs__trigger"
                                role="tab"
                                class:tabs__trigger--active=move || active() == tab
                                on:click=move |_| ui.update(|u| u.profile_tab = tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            {move || match active() {
                ProfileTab::Profile => {
                    let rows = auth.get().user.as_ref().map(info_rows);
                    view! {
                        <section class="card">
                            <h3>"Personal Information"</h3>
                            <dl class="profile__info">
                                {rows
                                    .into_iter()
                                    .flatten()
                                    .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                                    .collect::<Vec<_>>()}
                            </dl>
                        </section>
                    }
                    .into_any()
                }
                ProfileTab::Progress => {
                    let rotations = training.with(|t| t.rotations.clone());
                    view! {
                        <section class="card">
                            <h3>"Rotation Progress"</h3>
                            <ul class="profile__list">
                                {rotations.into_iter().map(rotation_row).collect::<Vec<_>>()}
                            </ul>
                        </section>
                    }
                    .into_any()
                }
                ProfileTab::Achievements => {
                    let achievements = training.with(|t| t.achievements.clone());
                    view! {
                        <section class="card">
                            <h3>"Achievements"</h3>
                            <ul class="profile__list">
                                {achievements.into_iter().map(achievement_row).collect::<Vec<_>>()}
                            </ul>
                        </section>
                    }
                    .into_any()
                }
                ProfileTab::Goals => {
                    let goals = training.with(|t| t.goals.clone());
                    view! {
                        <section class="card">
                            <h3>"Learning Goals"</h3>
                            <ul class="profile__list">
                                {goals.into_iter().map(goal_row).collect::<Vec<_>>()}
                            </ul>
                        </section>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

fn progress_bar(percent: f64) -> impl IntoView {
    view! {
        <div class="progress">
            <div class="progress__fill" style=format!("width: {percent:.0}%")></div>
        </div>
    }
}

fn rotation_row(rotation: RotationProgress) -> impl IntoView {
    let class = rotation_class(&rotation.status);
    let weeks = weeks_label(&rotation);
    let percent = rotation.percent();
    view! {
        <li class="profile__item">
            <div class="profile__item-head">
                <span>{rotation.name}</span>
                <Badge variant=class label=rotation.status.replace('_', " ")/>
            </div>
            {progress_bar(percent)}
            <p class="muted">{weeks}</p>
        </li>
    }
}

fn achievement_row(achievement: Achievement) -> impl IntoView {
    view! {
        <li class="profile__item">
            <p class="profile__item-title">{achievement.title}</p>
            <p class="muted">{achievement.description}</p>
            <p class="muted">{achievement.date}</p>
        </li>
    }
}

fn goal_row(goal: LearningGoal) -> impl IntoView {
    let class = priority_class(&goal.priority);
    let label = priority_label(&goal.priority);
    view! {
        <li class="profile__item">
            <div class="profile__item-head">
                <span>{goal.goal}</span>
                <Badge variant=class label=label/>
            </div>
            {progress_bar(f64::from(goal.progress))}
            <p class="muted">"Target: " {goal.target_date} " · " {goal.progress} "%"</p>
        </li>
    }
}
