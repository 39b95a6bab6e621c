//! Debug menu state
//!
//! [`DebugMenu`] owns the panel registry, the menu root in the live overlay
//! and the foreground panel. Front ends feed it one [`DebugInput`] per frame
//! and then call [`DebugMenu::update`], so a frame's edits are visible in
//! the same frame's dynamic refresh.

use super::handler::DebugContext;
use super::input::DebugInput;
use super::panel::DebugPanel;
use super::registry::DebugMenuRegistry;
use crate::authoring::InlineEditor;
use crate::config::OverlayConfig;
use crate::overlay::{NodeId, OverlayHost, OverlayStyle};

/// Name of the menu's root container
pub const MENU_ROOT_NAME: &str = "DebugMenu";

/// Process-wide debug menu
#[derive(Debug, Default)]
pub struct DebugMenu {
    registry: DebugMenuRegistry,
    root: Option<NodeId>,
    active_panel: usize,
    visible: bool,
    style: OverlayStyle,
}

impl DebugMenu {
    /// Create a hidden menu with an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hidden menu over an existing registry
    pub fn with_registry(registry: DebugMenuRegistry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }

    /// Apply overlay settings. Takes effect on the next [`build_gui`](Self::build_gui).
    pub fn apply_config(&mut self, config: &OverlayConfig) {
        self.style = config.style();
        self.visible = config.start_visible;
    }

    pub fn registry(&self) -> &DebugMenuRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut DebugMenuRegistry {
        &mut self.registry
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Index of the foreground panel, `None` when no panel is registered
    pub fn active_panel_index(&self) -> Option<usize> {
        (self.active_panel < self.registry.len()).then_some(self.active_panel)
    }

    pub fn active_panel(&self) -> Option<&DebugPanel> {
        self.registry.panel_at(self.active_panel)
    }

    fn active_panel_mut(&mut self) -> Option<&mut DebugPanel> {
        self.registry.panel_at_mut(self.active_panel)
    }

    fn live_root(&self, host: &dyn OverlayHost) -> Option<NodeId> {
        self.root.filter(|root| host.is_alive(*root))
    }

    // =========================================================================
    // Building
    // =========================================================================

    /// Build the menu root and every panel's subtree.
    ///
    /// Calling it again replaces the previous overlay, e.g. after panels were
    /// added to the registry.
    pub fn build_gui(&mut self, host: &mut dyn OverlayHost) {
        if let Some(old) = self.live_root(host) {
            host.destroy(old);
        }

        let root = host.create_container(None, MENU_ROOT_NAME, self.style.spacing);
        host.set_active(root, self.visible);
        self.root = Some(root);

        if self.active_panel >= self.registry.len() {
            self.active_panel = 0;
        }
        let active = self.active_panel;
        let style = self.style;
        for (index, panel) in self.registry.panels_mut().iter_mut().enumerate() {
            panel.set_style(style);
            panel.build_gui(host, root);
            panel.set_selected(host, index == active);
        }
        tracing::debug!("debug: built menu with {} panels", self.registry.len());
    }

    /// Rebuild one panel after its item list changed shape
    pub fn rebuild_panel(&mut self, host: &mut dyn OverlayHost, name: &str) {
        match self.registry.panel_mut(name) {
            Some(panel) => panel.rebuild_gui(host),
            None => tracing::debug!("debug: no panel '{}' to rebuild", name),
        }
    }

    /// Destroy the menu overlay and drop every panel
    pub fn teardown(&mut self, host: &mut dyn OverlayHost) {
        self.registry.teardown(host);
        if let Some(root) = self.root.take() {
            host.destroy(root);
        }
        self.active_panel = 0;
    }

    // =========================================================================
    // Visibility and panel switching
    // =========================================================================

    pub fn set_visible(&mut self, host: &mut dyn OverlayHost, visible: bool) {
        self.visible = visible;
        if let Some(root) = self.live_root(host) {
            host.set_active(root, visible);
        }
    }

    pub fn toggle(&mut self, host: &mut dyn OverlayHost) {
        self.set_visible(host, !self.visible);
    }

    /// Bring the panel at `index` to the foreground
    pub fn set_active_panel(&mut self, host: &mut dyn OverlayHost, index: usize) {
        if index >= self.registry.len() || index == self.active_panel {
            return;
        }
        if let Some(panel) = self.active_panel_mut() {
            panel.set_selected(host, false);
        }
        self.active_panel = index;
        if let Some(panel) = self.active_panel_mut() {
            panel.set_selected(host, true);
        }
    }

    /// Switch to the next panel, wrapping to the first
    pub fn next_panel(&mut self, host: &mut dyn OverlayHost) {
        let count = self.registry.len();
        if count > 1 {
            self.set_active_panel(host, (self.active_panel + 1) % count);
        }
    }

    /// Switch to the previous panel, wrapping to the last
    pub fn previous_panel(&mut self, host: &mut dyn OverlayHost) {
        let count = self.registry.len();
        if count > 1 {
            self.set_active_panel(host, (self.active_panel + count - 1) % count);
        }
    }

    // =========================================================================
    // Per-frame
    // =========================================================================

    /// Route one frame of input.
    ///
    /// Everything except the visibility toggle is ignored while the menu is
    /// hidden.
    pub fn handle_input(
        &mut self,
        host: &mut dyn OverlayHost,
        ctx: &DebugContext<'_>,
        input: &DebugInput,
    ) {
        if input.toggle_menu {
            self.toggle(host);
        }
        if !self.visible {
            return;
        }

        if input.next_panel {
            self.next_panel(host);
        } else if input.previous_panel {
            self.previous_panel(host);
        }

        let Some(panel) = self.active_panel_mut() else {
            return;
        };
        if input.vertical != 0.0 {
            panel.on_move_vertical(host, input.vertical);
        }
        if input.horizontal != 0.0 {
            panel.on_move_horizontal(host, ctx, input.horizontal);
        }
        if input.validate {
            panel.on_validate(host, ctx);
        }
    }

    /// Refresh dynamic items of every panel
    pub fn update(&mut self, host: &mut dyn OverlayHost) {
        for panel in self.registry.panels_mut() {
            panel.update(host);
        }
    }

    /// Re-clamp every item against `ctx` and refresh the overlay, for when
    /// live bounds changed without any navigation input.
    pub fn clamp_all(&mut self, host: &mut dyn OverlayHost, ctx: &DebugContext<'_>) {
        for panel in self.registry.panels_mut() {
            panel.clamp_all(ctx);
            panel.refresh_gui(host);
        }
    }

    /// Draw the authoring view of the named panel.
    ///
    /// Returns `true` if any value changed; the live overlay is refreshed in
    /// that case so both backends agree.
    pub fn on_editor_gui(
        &mut self,
        host: &mut dyn OverlayHost,
        name: &str,
        editor: &mut dyn InlineEditor,
        ctx: &DebugContext<'_>,
    ) -> bool {
        let Some(panel) = self.registry.panel_mut(name) else {
            return false;
        };
        let changed = panel.on_editor_gui(editor, ctx);
        if changed {
            panel.refresh_gui(host);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::debug::{
        DebugItem, DebugItemFlags, DefaultHandler, DynamicBoundedHandler, ValueAccessor,
    };
    use crate::overlay::{NodeKind, VisualTree};
    use crate::test_utils::{
        FakePipeline, RecordingEditor, ScriptedEdit, scenario_panel, toggle_panel,
    };

    fn menu_with_panels(names: &[&str]) -> DebugMenu {
        let mut menu = DebugMenu::new();
        for name in names {
            menu.registry_mut().add_panel(toggle_panel(name, 2)).unwrap();
        }
        menu
    }

    #[test]
    fn test_build_activates_first_panel_only() {
        let mut tree = VisualTree::new();
        let mut menu = menu_with_panels(&["A", "B"]);
        menu.build_gui(&mut tree);

        let panels = menu.registry().panels();
        assert!(panels[0].presentation().is_active());
        assert!(!panels[1].presentation().is_active());
        assert_eq!(menu.active_panel_index(), Some(0));

        let root = menu.root().unwrap();
        assert_eq!(tree.children(root).len(), 2);
        assert!(!tree.get(root).unwrap().active);
    }

    #[test]
    fn test_panel_switching_wraps() {
        let mut tree = VisualTree::new();
        let mut menu = menu_with_panels(&["A", "B", "C"]);
        menu.build_gui(&mut tree);

        menu.previous_panel(&mut tree);
        assert_eq!(menu.active_panel().map(|p| p.name()), Some("C"));
        menu.next_panel(&mut tree);
        assert_eq!(menu.active_panel().map(|p| p.name()), Some("A"));
        menu.next_panel(&mut tree);
        assert_eq!(menu.active_panel().map(|p| p.name()), Some("B"));

        let panels = menu.registry().panels();
        assert!(!panels[0].presentation().is_active());
        assert!(panels[1].presentation().is_active());
    }

    #[test]
    fn test_hidden_menu_ignores_navigation() {
        let mut tree = VisualTree::new();
        let mut menu = DebugMenu::new();
        let (panel, values) = scenario_panel();
        menu.registry_mut().add_panel(panel).unwrap();
        menu.build_gui(&mut tree);
        let ctx = DebugContext::detached();

        menu.handle_input(
            &mut tree,
            &ctx,
            &DebugInput {
                horizontal: 1.0,
                ..DebugInput::default()
            },
        );
        assert!(!values.a.get());

        menu.handle_input(
            &mut tree,
            &ctx,
            &DebugInput {
                toggle_menu: true,
                horizontal: 1.0,
                ..DebugInput::default()
            },
        );
        assert!(menu.is_visible());
        assert!(values.a.get());
        assert!(tree.get(menu.root().unwrap()).unwrap().active);
    }

    #[test]
    fn test_input_routes_to_active_panel() {
        let mut tree = VisualTree::new();
        let mut menu = DebugMenu::new();
        menu.registry_mut().add_panel(toggle_panel("Other", 1)).unwrap();
        let (panel, values) = scenario_panel();
        menu.registry_mut().add_panel(panel).unwrap();
        menu.apply_config(&OverlayConfig {
            start_visible: true,
            ..OverlayConfig::default()
        });
        menu.build_gui(&mut tree);
        let ctx = DebugContext::detached();

        // Switch to "Lighting", move down to B, step it twice
        menu.handle_input(
            &mut tree,
            &ctx,
            &DebugInput {
                next_panel: true,
                vertical: -1.0,
                ..DebugInput::default()
            },
        );
        for _ in 0..2 {
            menu.handle_input(
                &mut tree,
                &ctx,
                &DebugInput {
                    horizontal: 1.0,
                    ..DebugInput::default()
                },
            );
        }
        assert_eq!(values.b.get(), 2);
        assert!(!values.a.get());

        // Idle frames step nothing
        menu.handle_input(&mut tree, &ctx, &DebugInput::default());
        assert_eq!(values.b.get(), 2);
    }

    #[test]
    fn test_update_refreshes_every_panel() {
        let mut tree = VisualTree::new();
        let mut menu = DebugMenu::new();
        let (mut panel, values) = scenario_panel();
        panel.register(DebugItem::new(
            "B live",
            ValueAccessor::from_cell(Rc::clone(&values.b)),
            DebugItemFlags::READ_ONLY | DebugItemFlags::DYNAMIC,
            DefaultHandler,
        ));
        menu.registry_mut().add_panel(toggle_panel("Front", 1)).unwrap();
        menu.registry_mut().add_panel(panel).unwrap();
        menu.build_gui(&mut tree);

        values.b.set(3);
        menu.update(&mut tree);

        let live = menu.registry().panel("Lighting").unwrap().presentation().visuals()[3].node;
        match &tree.get(live).unwrap().kind {
            NodeKind::ValueControl { value, .. } => assert_eq!(value, "3"),
            other => panic!("unexpected node {:?}", other),
        }
    }

    #[test]
    fn test_clamp_all_follows_shrinking_pipeline() {
        let mut tree = VisualTree::new();
        let mut menu = DebugMenu::new();
        let index = Rc::new(Cell::new(3u32));
        let mut panel = DebugPanel::new("Shadows");
        panel.register(DebugItem::new(
            "Atlas",
            ValueAccessor::from_cell(Rc::clone(&index)),
            DebugItemFlags::empty(),
            DynamicBoundedHandler::shadow_atlas_index(4),
        ));
        menu.registry_mut().add_panel(panel).unwrap();
        menu.build_gui(&mut tree);

        let pipeline = FakePipeline::new(4, 1);
        menu.clamp_all(&mut tree, &DebugContext::new(&pipeline));
        assert_eq!(index.get(), 3);

        pipeline.atlas_count.set(2);
        menu.clamp_all(&mut tree, &DebugContext::new(&pipeline));
        assert_eq!(index.get(), 1);

        let node = menu.active_panel().unwrap().presentation().visuals()[0].node;
        match &tree.get(node).unwrap().kind {
            NodeKind::ValueControl { value, .. } => assert_eq!(value, "1"),
            other => panic!("unexpected node {:?}", other),
        }
    }

    #[test]
    fn test_editor_gui_refreshes_overlay() {
        let mut tree = VisualTree::new();
        let mut menu = DebugMenu::new();
        let (panel, values) = scenario_panel();
        menu.registry_mut().add_panel(panel).unwrap();
        menu.build_gui(&mut tree);

        let mut editor = RecordingEditor::editing("A", ScriptedEdit::Toggle);
        let ctx = DebugContext::detached();
        assert!(menu.on_editor_gui(&mut tree, "Lighting", &mut editor, &ctx));
        assert!(values.a.get());

        let node = menu.active_panel().unwrap().presentation().visuals()[0].node;
        match &tree.get(node).unwrap().kind {
            NodeKind::ValueControl { value, .. } => assert_eq!(value, "On"),
            other => panic!("unexpected node {:?}", other),
        }

        assert!(!menu.on_editor_gui(&mut tree, "Missing", &mut editor, &ctx));
    }

    #[test]
    fn test_teardown_then_stale_calls() {
        let mut tree = VisualTree::new();
        let mut menu = menu_with_panels(&["A", "B"]);
        menu.build_gui(&mut tree);
        menu.teardown(&mut tree);

        assert!(tree.is_empty());
        assert!(menu.active_panel_index().is_none());
        menu.toggle(&mut tree);
        menu.next_panel(&mut tree);
        menu.update(&mut tree);
        menu.handle_input(
            &mut tree,
            &DebugContext::detached(),
            &DebugInput {
                vertical: 1.0,
                ..DebugInput::default()
            },
        );
        assert!(menu.is_visible());
    }

    #[test]
    fn test_empty_menu_is_inert() {
        let mut tree = VisualTree::new();
        let mut menu = DebugMenu::new();
        menu.build_gui(&mut tree);
        menu.next_panel(&mut tree);
        menu.previous_panel(&mut tree);
        menu.set_visible(&mut tree, true);
        menu.handle_input(
            &mut tree,
            &DebugContext::detached(),
            &DebugInput {
                horizontal: 1.0,
                validate: true,
                ..DebugInput::default()
            },
        );
        assert!(menu.active_panel().is_none());
        assert_eq!(tree.len(), 1);
    }
}
