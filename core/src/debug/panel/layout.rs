//! Per-panel layout customisation

use super::presentation::ItemVisual;
use crate::authoring::InlineEditor;
use crate::debug::handler::DebugContext;
use crate::debug::item::DebugItem;
use crate::overlay::{NodeId, OverlayHost, OverlayStyle};

/// How a panel lays out its items in both presentation backends.
///
/// The defaults list every item in registration order; panels override
/// either method for custom layouts.
pub trait PanelLayout {
    /// Build the live-overlay children of `root`, returning one visual per
    /// navigable item in navigation order
    fn build_items(
        &self,
        title: &str,
        items: &[DebugItem],
        host: &mut dyn OverlayHost,
        root: NodeId,
        style: &OverlayStyle,
    ) -> Vec<ItemVisual> {
        build_default_items(title, items, host, root, style)
    }

    /// Draw the authoring view. Returns `true` if any value changed.
    fn render_inline(
        &mut self,
        items: &mut [DebugItem],
        editor: &mut dyn InlineEditor,
        ctx: &DebugContext<'_>,
    ) -> bool {
        render_all_inline(items, editor, ctx)
    }
}

/// Layout listing every item
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLayout;

impl PanelLayout for DefaultLayout {}

/// Title element plus one control per item, skipping editor-only items
pub fn build_default_items(
    title: &str,
    items: &[DebugItem],
    host: &mut dyn OverlayHost,
    root: NodeId,
    style: &OverlayStyle,
) -> Vec<ItemVisual> {
    host.create_text(root, &format!("{} Title", title), title, style.title);

    items
        .iter()
        .enumerate()
        .filter(|(_, item)| !item.is_editor_only())
        .map(|(item_index, item)| ItemVisual {
            item_index,
            node: item
                .handler()
                .build(item.name(), item.value(), host, root, style.item),
            dynamic: item.is_dynamic(),
        })
        .collect()
}

/// Every item in a vertical group
pub fn render_all_inline(
    items: &mut [DebugItem],
    editor: &mut dyn InlineEditor,
    ctx: &DebugContext<'_>,
) -> bool {
    let mut changed = false;
    editor.vertical_group(&mut |editor| {
        for item in items.iter_mut() {
            changed |= item.render_inline(editor, ctx);
        }
    });
    changed
}

/// Look up an item by name for custom layouts
pub fn find_item_mut<'a>(items: &'a mut [DebugItem], name: &str) -> Option<&'a mut DebugItem> {
    items.iter_mut().find(|item| item.name() == name)
}
