//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the dashboard route guard and user-aware components (sidebar
//! footer, overview welcome card, profile view).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use portal::UserProfile;

/// Authentication state tracking the signed-in resident, if any.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<UserProfile>,
}

impl AuthState {
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
