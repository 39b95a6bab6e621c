//! Integration tests for the debug menu
//!
//! Drives a full menu (lighting panel plus a stats panel) frame by frame
//! through the public API, against both presentation backends.


#[cfg(test)]
pub(crate) mod test_utils {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::debug::{
        DebugInput, DebugItem, DebugItemFlags, DebugMenu, DebugPanel, DefaultHandler,
        ValueAccessor,
    };
    use crate::lighting::{LightingDebugSettings, register_lighting_panel};
    use crate::overlay::{NodeId, NodeKind, VisualTree};

    pub const STATS_PANEL: &str = "Stats";

    /// Everything a test frame loop needs
    pub struct Harness {
        pub menu: DebugMenu,
        pub tree: VisualTree,
        pub settings: Rc<RefCell<LightingDebugSettings>>,
        pub frame: Rc<Cell<u32>>,
    }

    /// Menu with the lighting panel first and a read-only stats panel second
    pub fn harness() -> Harness {
        let settings = Rc::new(RefCell::new(LightingDebugSettings::default()));
        let frame = Rc::new(Cell::new(0u32));
        let mut menu = DebugMenu::new();
        register_lighting_panel(menu.registry_mut(), &settings).unwrap();

        let mut stats = DebugPanel::new(STATS_PANEL);
        stats.register(DebugItem::new(
            "Frame",
            ValueAccessor::from_cell(Rc::clone(&frame)),
            DebugItemFlags::READ_ONLY | DebugItemFlags::DYNAMIC,
            DefaultHandler,
        ));
        stats.register(DebugItem::new(
            "Atlas Index",
            ValueAccessor::field(&settings, |s| s.shadow_atlas_index, |s, v| {
                s.shadow_atlas_index = v
            }),
            DebugItemFlags::READ_ONLY | DebugItemFlags::DYNAMIC,
            DefaultHandler,
        ));
        menu.registry_mut().add_panel(stats).unwrap();

        let mut tree = VisualTree::new();
        menu.build_gui(&mut tree);
        Harness {
            menu,
            tree,
            settings,
            frame,
        }
    }

    pub fn horizontal(value: f32) -> DebugInput {
        DebugInput {
            horizontal: value,
            ..DebugInput::default()
        }
    }

    pub fn vertical(value: f32) -> DebugInput {
        DebugInput {
            vertical: value,
            ..DebugInput::default()
        }
    }

    pub fn toggle() -> DebugInput {
        DebugInput {
            toggle_menu: true,
            ..DebugInput::default()
        }
    }

    /// Value text of a value-control node
    pub fn node_value(tree: &VisualTree, node: NodeId) -> Option<String> {
        match &tree.get(node)?.kind {
            NodeKind::ValueControl { value, .. } => Some(value.clone()),
            _ => None,
        }
    }
}
