//! Selection and navigation state for one panel's live overlay

use super::layout::PanelLayout;
use crate::debug::handler::DebugContext;
use crate::debug::item::DebugItem;
use crate::overlay::{NodeId, OverlayHost, OverlayStyle};

/// Overlay control built for one item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemVisual {
    /// Index of the item in its panel
    pub item_index: usize,
    /// Value control node
    pub node: NodeId,
    /// Refreshed by every `update`
    pub dynamic: bool,
}

/// Observable presentation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationState {
    /// No item is selected
    Empty,
    /// Panel is in the background; the selection is remembered
    Inactive(usize),
    /// Panel is in the foreground with the visual at this index highlighted
    ActiveSelected(usize),
}

/// Live-overlay state for one panel.
///
/// Selection indexes the visual list, not the item list, so editor-only
/// items (which have no visual) never shift the selection.
#[derive(Debug, Default)]
pub struct PanelPresentation {
    root: Option<NodeId>,
    visuals: Vec<ItemVisual>,
    selected: Option<usize>,
    active: bool,
    style: OverlayStyle,
}

impl PanelPresentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn visuals(&self) -> &[ItemVisual] {
        &self.visuals
    }

    /// Selected position in the visual list
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Item index behind the current selection
    pub fn selected_item_index(&self) -> Option<usize> {
        self.selected
            .and_then(|i| self.visuals.get(i))
            .map(|visual| visual.item_index)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn state(&self) -> PresentationState {
        match self.selected {
            None => PresentationState::Empty,
            Some(i) if self.active => PresentationState::ActiveSelected(i),
            Some(i) => PresentationState::Inactive(i),
        }
    }

    pub fn style(&self) -> OverlayStyle {
        self.style
    }

    pub fn set_style(&mut self, style: OverlayStyle) {
        self.style = style;
    }

    /// Root handle, if it still exists in `host`
    fn live_root(&self, host: &dyn OverlayHost) -> Option<NodeId> {
        match self.root {
            Some(root) if host.is_alive(root) => Some(root),
            Some(_) => {
                tracing::trace!("debug: panel root destroyed, ignoring call");
                None
            }
            None => None,
        }
    }

    /// Build the panel subtree under `parent`.
    ///
    /// The new root starts hidden until the panel is selected. Building over
    /// an existing root replaces it.
    pub fn build(
        &mut self,
        title: &str,
        items: &[DebugItem],
        layout: &dyn PanelLayout,
        host: &mut dyn OverlayHost,
        parent: NodeId,
    ) {
        if let Some(old) = self.live_root(host) {
            host.destroy(old);
        }
        let root = host.create_container(Some(parent), title, self.style.spacing);
        host.set_active(root, self.active);
        self.root = Some(root);
        self.visuals = layout.build_items(title, items, host, root, &self.style);
        self.reclamp_selection(host);
    }

    /// Discard the visuals under the current root and build them again.
    ///
    /// A selection past the end of the new list is pulled back to the last
    /// item.
    pub fn rebuild(
        &mut self,
        title: &str,
        items: &[DebugItem],
        layout: &dyn PanelLayout,
        host: &mut dyn OverlayHost,
    ) {
        let Some(root) = self.live_root(host) else {
            return;
        };
        host.destroy_children(root);
        self.visuals = layout.build_items(title, items, host, root, &self.style);
        self.reclamp_selection(host);
    }

    fn reclamp_selection(&mut self, host: &mut dyn OverlayHost) {
        let count = self.visuals.len();
        self.selected = match self.selected {
            Some(_) if count == 0 => None,
            Some(i) => Some(i.min(count - 1)),
            None => None,
        };
        if let Some(visual) = self.selected.and_then(|i| self.visuals.get(i)) {
            host.set_highlighted(visual.node, true);
        }
    }

    /// Destroy the subtree; every later call is a no-op until the next build
    pub fn teardown(&mut self, host: &mut dyn OverlayHost) {
        if let Some(root) = self.root.take() {
            host.destroy(root);
        }
        self.visuals.clear();
    }

    fn select(&mut self, host: &mut dyn OverlayHost, index: Option<usize>) {
        if let Some(old) = self.selected.and_then(|i| self.visuals.get(i)) {
            host.set_highlighted(old.node, false);
        }
        self.selected = index;
        if let Some(new) = self.selected.and_then(|i| self.visuals.get(i)) {
            host.set_highlighted(new.node, true);
        }
    }

    /// Drop the selection; the next activation picks the default target again
    pub fn reset_selection(&mut self, host: &mut dyn OverlayHost) {
        self.select(host, None);
    }

    /// Bring the panel to the foreground or send it to the background.
    ///
    /// The first activation selects the first steppable item, or the first
    /// item if none can step; later activations restore the remembered
    /// selection.
    pub fn set_selected(&mut self, host: &mut dyn OverlayHost, items: &[DebugItem], value: bool) {
        let Some(root) = self.live_root(host) else {
            return;
        };
        host.set_active(root, value);
        self.active = value;
        if !value {
            return;
        }

        match self.selected {
            Some(index) => self.select(host, Some(index)),
            None => {
                if self.visuals.is_empty() {
                    return;
                }
                // Display-only panels still get a selection to navigate from
                let target = self
                    .visuals
                    .iter()
                    .position(|visual| {
                        items
                            .get(visual.item_index)
                            .is_some_and(|item| item.is_steppable())
                    })
                    .unwrap_or(0);
                self.select(host, Some(target));
            }
        }
    }

    /// Select the next visual, wrapping to the first
    pub fn next_item(&mut self, host: &mut dyn OverlayHost) {
        if self.live_root(host).is_none() {
            return;
        }
        let count = self.visuals.len();
        if count == 0 {
            return;
        }
        let next = match self.selected {
            Some(i) if i < count => (i + 1) % count,
            _ => 0,
        };
        self.select(host, Some(next));
    }

    /// Select the previous visual, wrapping to the last
    pub fn previous_item(&mut self, host: &mut dyn OverlayHost) {
        if self.live_root(host).is_none() {
            return;
        }
        let count = self.visuals.len();
        if count == 0 {
            return;
        }
        let previous = match self.selected {
            Some(i) if i > 0 && i < count => i - 1,
            _ => count - 1,
        };
        self.select(host, Some(previous));
    }

    /// Selected visual and its item, unless the item is read-only
    fn editable_selection<'i>(
        &self,
        items: &'i mut [DebugItem],
    ) -> Option<(ItemVisual, &'i mut DebugItem)> {
        let visual = *self.selected.and_then(|i| self.visuals.get(i))?;
        let item = items.get_mut(visual.item_index)?;
        if item.is_read_only() {
            return None;
        }
        Some((visual, item))
    }

    /// Step the selected item: positive `delta` increments, anything else
    /// decrements.
    pub fn on_move_horizontal(
        &mut self,
        host: &mut dyn OverlayHost,
        items: &mut [DebugItem],
        ctx: &DebugContext<'_>,
        delta: f32,
    ) {
        if self.live_root(host).is_none() {
            return;
        }
        let Some((visual, item)) = self.editable_selection(items) else {
            return;
        };
        if delta > 0.0 {
            item.increment(ctx);
        } else {
            item.decrement(ctx);
        }
        host.set_value_text(visual.node, &item.display_text());
    }

    /// Navigate the list: positive `delta` moves up, anything else moves down
    pub fn on_move_vertical(&mut self, host: &mut dyn OverlayHost, delta: f32) {
        if delta > 0.0 {
            self.previous_item(host);
        } else {
            self.next_item(host);
        }
    }

    /// Re-validate the selected item
    pub fn on_validate(
        &mut self,
        host: &mut dyn OverlayHost,
        items: &mut [DebugItem],
        ctx: &DebugContext<'_>,
    ) {
        if self.live_root(host).is_none() {
            return;
        }
        let Some((visual, item)) = self.editable_selection(items) else {
            return;
        };
        item.validate(ctx);
        host.set_value_text(visual.node, &item.display_text());
    }

    /// Per-frame refresh of dynamic items
    pub fn update(&mut self, host: &mut dyn OverlayHost, items: &[DebugItem]) {
        if self.live_root(host).is_none() {
            return;
        }
        for visual in self.visuals.iter().filter(|v| v.dynamic) {
            if let Some(item) = items.get(visual.item_index) {
                host.set_value_text(visual.node, &item.display_text());
            }
        }
    }

    /// Refresh every visual, dynamic or not
    pub fn refresh_all(&mut self, host: &mut dyn OverlayHost, items: &[DebugItem]) {
        if self.live_root(host).is_none() {
            return;
        }
        for visual in &self.visuals {
            if let Some(item) = items.get(visual.item_index) {
                host.set_value_text(visual.node, &item.display_text());
            }
        }
    }
}
