//! egui rendering of a [`VisualTree`]

use super::{NodeId, NodeKind, VisualTree};

const HIGHLIGHT_FILL: egui::Color32 = egui::Color32::from_rgb(60, 90, 140);

/// Draw the subtree rooted at `root` into `ui`.
///
/// Inactive nodes and their subtrees are skipped, as are dead handles.
pub fn paint_overlay(ui: &mut egui::Ui, tree: &VisualTree, root: NodeId) {
    let Some(node) = tree.get(root) else {
        return;
    };
    if !node.active {
        return;
    }

    match &node.kind {
        NodeKind::Container { spacing } => {
            ui.vertical(|ui| {
                ui.spacing_mut().item_spacing.y = *spacing;
                for child in tree.children(root) {
                    paint_overlay(ui, tree, *child);
                }
            });
        }
        NodeKind::Text { text, style } => {
            ui.label(egui::RichText::new(text).size(style.font_size).strong());
        }
        NodeKind::ValueControl {
            label,
            value,
            style,
        } => {
            let fill = if node.highlighted {
                HIGHLIGHT_FILL
            } else {
                egui::Color32::TRANSPARENT
            };
            egui::Frame::new()
                .fill(fill)
                .inner_margin(2.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(label).size(style.font_size));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(egui::RichText::new(value).size(style.font_size).monospace());
                        });
                    });
                });
        }
    }
}
