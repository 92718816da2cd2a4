//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `ui`, `workspace`) so components can
//! depend on small focused models. Navigation and record state are the
//! `portal` core types themselves, provided as signals by `App`.

pub mod auth;
pub mod ui;
pub mod workspace;
