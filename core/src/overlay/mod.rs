//! Live overlay host interface
//!
//! The live overlay is a retained visual tree living inside the running
//! application. The debug menu only needs a handful of operations from it,
//! collected in [`OverlayHost`]. [`VisualTree`] is the in-memory host used by
//! the viewer and the tests, and [`paint`] draws it with egui.

mod paint;
mod tree;

pub use paint::paint_overlay;
pub use tree::{Node, NodeKind, VisualTree};

/// Handle to a node in an overlay host.
///
/// Handles carry a generation so a handle to a destroyed node never aliases a
/// node created later in the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

/// Text styling for overlay labels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self { font_size: 12.0 }
    }
}

/// Styling applied when a panel builds its overlay subtree
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub title: TextStyle,
    pub item: TextStyle,
    /// Vertical spacing between rows
    pub spacing: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            title: TextStyle { font_size: 14.0 },
            item: TextStyle::default(),
            spacing: 5.0,
        }
    }
}

/// Operations the debug menu consumes from a live overlay.
///
/// Every method tolerates handles to destroyed nodes by doing nothing.
pub trait OverlayHost {
    /// Create a vertical auto-layout container under `parent` (or a new root)
    fn create_container(&mut self, parent: Option<NodeId>, name: &str, spacing: f32) -> NodeId;

    /// Create a static text element
    fn create_text(&mut self, parent: NodeId, name: &str, text: &str, style: TextStyle) -> NodeId;

    /// Create a labeled control showing a value
    fn create_value_control(
        &mut self,
        parent: NodeId,
        label: &str,
        value_text: &str,
        style: TextStyle,
    ) -> NodeId;

    /// Replace the value text of a value control (or the text of a text node)
    fn set_value_text(&mut self, node: NodeId, text: &str);

    /// Toggle the selection highlight of a node
    fn set_highlighted(&mut self, node: NodeId, highlighted: bool);

    /// Show or hide a node and its subtree
    fn set_active(&mut self, node: NodeId, active: bool);

    /// Destroy every child of `node`, keeping `node` itself
    fn destroy_children(&mut self, node: NodeId);

    /// Destroy `node` and its subtree
    fn destroy(&mut self, node: NodeId);

    /// Whether `node` still exists
    fn is_alive(&self, node: NodeId) -> bool;
}
