//! Debug panel registry
//!
//! Owned, ordered collection of panels. Subsystems receive a `&mut` to the
//! registry and register their panels during setup; there is no global.

use hashbrown::HashMap;

use super::panel::{DebugPanel, RegistrationError};
use crate::overlay::OverlayHost;

/// Registry of debug panels, in registration order
#[derive(Debug, Default)]
pub struct DebugMenuRegistry {
    panels: Vec<DebugPanel>,
    /// Panel name -> index into `panels`
    by_name: HashMap<String, usize>,
}

impl DebugMenuRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a panel, rejecting duplicate names.
    ///
    /// Returns the stored panel so the caller can keep registering items.
    pub fn add_panel(&mut self, panel: DebugPanel) -> Result<&mut DebugPanel, RegistrationError> {
        if self.by_name.contains_key(panel.name()) {
            let err = RegistrationError::DuplicatePanel(panel.name().to_string());
            tracing::error!("debug: {}", err);
            return Err(err);
        }

        let index = self.panels.len();
        tracing::debug!("debug: registered panel '{}'", panel.name());
        self.by_name.insert(panel.name().to_string(), index);
        self.panels.push(panel);
        Ok(&mut self.panels[index])
    }

    pub fn panel(&self, name: &str) -> Option<&DebugPanel> {
        self.by_name.get(name).map(|&i| &self.panels[i])
    }

    pub fn panel_mut(&mut self, name: &str) -> Option<&mut DebugPanel> {
        self.by_name.get(name).map(|&i| &mut self.panels[i])
    }

    /// Position of a panel in registration order
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn panel_at(&self, index: usize) -> Option<&DebugPanel> {
        self.panels.get(index)
    }

    pub fn panel_at_mut(&mut self, index: usize) -> Option<&mut DebugPanel> {
        self.panels.get_mut(index)
    }

    pub fn panels(&self) -> &[DebugPanel] {
        &self.panels
    }

    pub fn panels_mut(&mut self) -> &mut [DebugPanel] {
        &mut self.panels
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Destroy every panel's overlay subtree and drop all panels
    pub fn teardown(&mut self, host: &mut dyn OverlayHost) {
        for panel in &mut self.panels {
            panel.teardown_gui(host);
        }
        tracing::debug!("debug: registry torn down ({} panels)", self.panels.len());
        self.panels.clear();
        self.by_name.clear();
    }
}
