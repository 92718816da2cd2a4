//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render workspace chrome and section panels while reading and
//! writing shared state from Leptos context providers.

pub mod overview_panel;
pub mod profile_panel;
pub mod records_panel;
pub mod sidebar;
pub mod status_badge;
