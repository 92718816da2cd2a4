//! Login page with the demo email + password form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in is local: the core's `DemoAuthenticator` accepts any non-blank
//! pair and returns the demo profile, which is stored in `AuthState`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use portal::SessionView;
use portal::auth::{AuthError, Credentials, DemoAuthenticator};

use crate::state::auth::AuthState;

/// Build credentials from raw form input. The email is trimmed; the password
/// is kept as typed.
fn validate_login_input(email: &str, password: &str) -> Result<Credentials, AuthError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    Ok(Credentials::new(email, password))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<RwSignal<SessionView>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = validate_login_input(&email.get(), &password.get())
            .and_then(|credentials| DemoAuthenticator.sign_in(&credentials));
        match result {
            Ok(user) => {
                leptos::logging::log!("signed in as {}", user.name);
                info.set(String::new());
                password.set(String::new());
                session.set(SessionView::new());
                auth.update(|a| a.user = Some(user));
                navigate("/", NavigateOptions::default());
            }
            Err(e) => info.set(e.to_string()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Resident Portal"</h1>
                <p class="login-card__subtitle">"Sign in to access your Sagis Resident account"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="email">"Email"</label>
                    <input
                        id="email"
                        class="login-input"
                        type="email"
                        placeholder="your.email@hospital.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__hint">"Demo credentials: Use any email and password to log in"</p>
            </div>
        </div>
    }
}
