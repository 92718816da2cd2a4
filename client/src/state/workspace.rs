//! Workspace data loaded once at app start.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` calls [`load_workspace`] with the demo source and provides the
//! resulting catalog and training data as signals. A failed load leaves the
//! workspace empty instead of blocking the UI.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use portal::profile::TrainingProgress;
use portal::seed::{RecordSource, SeedError};
use portal::{PortalConfig, RecordCatalog};

/// Catalog plus profile display data, as seeded.
#[derive(Clone, Debug, Default)]
pub struct WorkspaceData {
    pub catalog: RecordCatalog,
    pub training: TrainingProgress,
}

/// Load seed data from `source` and build the catalog.
///
/// # Errors
///
/// Propagates [`SeedError`] from the source or from catalog validation.
pub fn load_workspace<S: RecordSource + ?Sized>(source: &S, config: &PortalConfig) -> Result<WorkspaceData, SeedError> {
    let mut seed = source.load()?;
    let training = std::mem::take(&mut seed.training);
    let catalog = RecordCatalog::from_seed(seed, config)?;
    Ok(WorkspaceData { catalog, training })
}

/// Like [`load_workspace`], but logs failures and falls back to an empty
/// workspace.
pub fn load_workspace_or_empty<S: RecordSource + ?Sized>(source: &S, config: &PortalConfig) -> WorkspaceData {
    match load_workspace(source, config) {
        Ok(data) => data,
        Err(e) => {
            leptos::logging::warn!("workspace seed failed: {e}");
            WorkspaceData { catalog: RecordCatalog::new(config.search), training: TrainingProgress::default() }
        }
    }
}
