//! Retained in-memory overlay tree

use smallvec::SmallVec;

use super::{NodeId, OverlayHost, TextStyle};

/// What a node displays
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Vertical auto-layout container
    Container { spacing: f32 },
    /// Static text
    Text { text: String, style: TextStyle },
    /// Label plus a value that can be refreshed
    ValueControl {
        label: String,
        value: String,
        style: TextStyle,
    },
}

/// A node of the overlay tree
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: SmallVec<[NodeId; 8]>,
    pub active: bool,
    pub highlighted: bool,
}

struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Generational arena of overlay nodes
#[derive(Default)]
pub struct VisualTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    roots: Vec<NodeId>,
}

impl VisualTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a live node
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Top-level nodes, in creation order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Children of a node, in creation order (empty for dead handles)
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// Find a direct child by name
    pub fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|child| self.get(*child).is_some_and(|node| node.name == name))
    }

    /// Whether the node and all of its ancestors are active
    pub fn is_active_in_hierarchy(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            match self.get(node_id) {
                Some(node) if node.active => current = node.parent,
                _ => return false,
            }
        }
        true
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.node.is_some()).count()
    }

    /// Whether the tree holds no nodes
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&mut self, parent: Option<NodeId>, name: &str, kind: NodeKind) -> NodeId {
        // A dead parent turns the node into a root rather than dangling
        let parent = parent.filter(|p| self.is_alive(*p));
        let node = Node {
            name: name.to_string(),
            kind,
            parent,
            children: SmallVec::new(),
            active: true,
            highlighted: false,
        };

        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.node = Some(node);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId {
                    index,
                    generation: 0,
                }
            }
        };

        match parent.and_then(|p| self.get_mut(p)) {
            Some(parent_node) => parent_node.children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    fn release(&mut self, id: NodeId) {
        let children = match self.get(id) {
            Some(node) => node.children.clone(),
            None => return,
        };
        for child in children {
            self.release(child);
        }
        if let Some(slot) = self.slots.get_mut(id.index as usize) {
            slot.node = None;
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(id.index);
        }
    }
}

impl OverlayHost for VisualTree {
    fn create_container(&mut self, parent: Option<NodeId>, name: &str, spacing: f32) -> NodeId {
        self.insert(parent, name, NodeKind::Container { spacing })
    }

    fn create_text(&mut self, parent: NodeId, name: &str, text: &str, style: TextStyle) -> NodeId {
        self.insert(
            Some(parent),
            name,
            NodeKind::Text {
                text: text.to_string(),
                style,
            },
        )
    }

    fn create_value_control(
        &mut self,
        parent: NodeId,
        label: &str,
        value_text: &str,
        style: TextStyle,
    ) -> NodeId {
        self.insert(
            Some(parent),
            label,
            NodeKind::ValueControl {
                label: label.to_string(),
                value: value_text.to_string(),
                style,
            },
        )
    }

    fn set_value_text(&mut self, node: NodeId, text: &str) {
        if let Some(node) = self.get_mut(node) {
            match &mut node.kind {
                NodeKind::ValueControl { value, .. } => {
                    value.clear();
                    value.push_str(text);
                }
                NodeKind::Text { text: current, .. } => {
                    current.clear();
                    current.push_str(text);
                }
                NodeKind::Container { .. } => {}
            }
        }
    }

    fn set_highlighted(&mut self, node: NodeId, highlighted: bool) {
        if let Some(node) = self.get_mut(node) {
            node.highlighted = highlighted;
        }
    }

    fn set_active(&mut self, node: NodeId, active: bool) {
        if let Some(node) = self.get_mut(node) {
            node.active = active;
        }
    }

    fn destroy_children(&mut self, node: NodeId) {
        let children = match self.get_mut(node) {
            Some(node) => std::mem::take(&mut node.children),
            None => return,
        };
        for child in children {
            self.release(child);
        }
    }

    fn destroy(&mut self, node: NodeId) {
        let parent = match self.get(node) {
            Some(n) => n.parent,
            None => return,
        };
        match parent.and_then(|p| self.get_mut(p)) {
            Some(parent_node) => parent_node.children.retain(|c| *c != node),
            None => self.roots.retain(|r| *r != node),
        }
        self.release(node);
    }

    fn is_alive(&self, node: NodeId) -> bool {
        self.get(node).is_some()
    }
}
