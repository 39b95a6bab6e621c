//! Debug panels
//!
//! A panel is a named, ordered group of items shown as one page. It owns
//! its items, a [`PanelPresentation`] for the live overlay and a
//! [`PanelLayout`] deciding how both backends lay the items out.

mod layout;
mod presentation;

pub use layout::{
    DefaultLayout, PanelLayout, build_default_items, find_item_mut, render_all_inline,
};
pub use presentation::{ItemVisual, PanelPresentation, PresentationState};

use super::handler::DebugContext;
use super::item::DebugItem;
use crate::authoring::InlineEditor;
use crate::overlay::{NodeId, OverlayHost, OverlayStyle};

/// Wiring mistakes made while registering items or panels
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// Two items with the same name in one panel
    #[error("item '{item}' is already registered in panel '{panel}'")]
    DuplicateItem { panel: String, item: String },

    /// Two panels with the same name in one registry
    #[error("panel '{0}' is already registered")]
    DuplicatePanel(String),
}

/// A named, ordered collection of debug items
pub struct DebugPanel {
    name: String,
    items: Vec<DebugItem>,
    presentation: PanelPresentation,
    layout: Box<dyn PanelLayout>,
}

impl std::fmt::Debug for DebugPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebugPanel")
            .field("name", &self.name)
            .field("items", &self.items)
            .field("presentation", &self.presentation)
            .finish()
    }
}

impl DebugPanel {
    /// Create an empty panel with the default layout
    pub fn new(name: &str) -> Self {
        Self::with_layout(name, DefaultLayout)
    }

    /// Create an empty panel with a custom layout
    pub fn with_layout(name: &str, layout: impl PanelLayout + 'static) -> Self {
        Self {
            name: name.to_string(),
            items: Vec::new(),
            presentation: PanelPresentation::new(),
            layout: Box::new(layout),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Append an item, rejecting duplicate names
    pub fn try_register(&mut self, item: DebugItem) -> Result<(), RegistrationError> {
        if self.items.iter().any(|existing| existing.name() == item.name()) {
            return Err(RegistrationError::DuplicateItem {
                panel: self.name.clone(),
                item: item.name().to_string(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Append an item.
    ///
    /// A duplicate name is a wiring bug: it panics in debug builds and is
    /// logged and dropped in release builds.
    pub fn register(&mut self, item: DebugItem) {
        if let Err(err) = self.try_register(item) {
            tracing::error!("debug: {}", err);
            debug_assert!(false, "{}", err);
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// True when the panel has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_at(&self, index: usize) -> Option<&DebugItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[DebugItem] {
        &self.items
    }

    /// Look up an item by name
    pub fn item(&self, name: &str) -> Option<&DebugItem> {
        self.items.iter().find(|item| item.name() == name)
    }

    pub fn item_mut(&mut self, name: &str) -> Option<&mut DebugItem> {
        find_item_mut(&mut self.items, name)
    }

    /// Remove every item. Call [`rebuild_gui`](Self::rebuild_gui) after
    /// re-registering to refresh a built panel.
    pub fn clear_items(&mut self) {
        self.items.clear();
    }

    /// Re-apply every handler's clamp (e.g. after the pipeline changed)
    pub fn clamp_all(&mut self, ctx: &DebugContext<'_>) {
        for item in &mut self.items {
            item.clamp_values(ctx);
        }
    }

    // =========================================================================
    // Live overlay
    // =========================================================================

    pub fn presentation(&self) -> &PanelPresentation {
        &self.presentation
    }

    pub fn set_style(&mut self, style: OverlayStyle) {
        self.presentation.set_style(style);
    }

    /// Build the panel's overlay subtree under `parent`
    pub fn build_gui(&mut self, host: &mut dyn OverlayHost, parent: NodeId) {
        self.presentation
            .build(&self.name, &self.items, self.layout.as_ref(), host, parent);
    }

    /// Rebuild the overlay subtree after the item list changed shape
    pub fn rebuild_gui(&mut self, host: &mut dyn OverlayHost) {
        self.presentation
            .rebuild(&self.name, &self.items, self.layout.as_ref(), host);
    }

    /// Destroy the overlay subtree
    pub fn teardown_gui(&mut self, host: &mut dyn OverlayHost) {
        self.presentation.teardown(host);
    }

    pub fn set_selected(&mut self, host: &mut dyn OverlayHost, value: bool) {
        self.presentation.set_selected(host, &self.items, value);
    }

    pub fn reset_selection(&mut self, host: &mut dyn OverlayHost) {
        self.presentation.reset_selection(host);
    }

    pub fn next_item(&mut self, host: &mut dyn OverlayHost) {
        self.presentation.next_item(host);
    }

    pub fn previous_item(&mut self, host: &mut dyn OverlayHost) {
        self.presentation.previous_item(host);
    }

    pub fn on_move_horizontal(
        &mut self,
        host: &mut dyn OverlayHost,
        ctx: &DebugContext<'_>,
        delta: f32,
    ) {
        self.presentation
            .on_move_horizontal(host, &mut self.items, ctx, delta);
    }

    pub fn on_move_vertical(&mut self, host: &mut dyn OverlayHost, delta: f32) {
        self.presentation.on_move_vertical(host, delta);
    }

    pub fn on_validate(&mut self, host: &mut dyn OverlayHost, ctx: &DebugContext<'_>) {
        self.presentation.on_validate(host, &mut self.items, ctx);
    }

    /// Per-frame refresh of dynamic items
    pub fn update(&mut self, host: &mut dyn OverlayHost) {
        self.presentation.update(host, &self.items);
    }

    /// Refresh every built control, e.g. after edits from the authoring view
    pub fn refresh_gui(&mut self, host: &mut dyn OverlayHost) {
        self.presentation.refresh_all(host, &self.items);
    }

    /// Item behind the current selection
    pub fn selected_debug_item(&self) -> Option<&DebugItem> {
        self.presentation
            .selected_item_index()
            .and_then(|index| self.items.get(index))
    }

    // =========================================================================
    // Authoring view
    // =========================================================================

    /// Draw the authoring view. Returns `true` if any value changed.
    pub fn on_editor_gui(&mut self, editor: &mut dyn InlineEditor, ctx: &DebugContext<'_>) -> bool {
        self.layout.render_inline(&mut self.items, editor, ctx)
    }
}
