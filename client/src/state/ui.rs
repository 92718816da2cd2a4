//! Local UI chrome state (mobile sidebar, profile tabs).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the core's session and
//! catalog state so layout controls can evolve independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use portal::profile::ProfileTab;

/// UI state for the sidebar drawer and profile tabs.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Sidebar drawer visibility on narrow screens.
    pub sidebar_open: bool,
    pub profile_tab: ProfileTab,
}
