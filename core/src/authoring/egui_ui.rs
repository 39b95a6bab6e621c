//! [`InlineEditor`] for egui

use std::ops::RangeInclusive;

use super::InlineEditor;

impl InlineEditor for egui::Ui {
    fn vertical_group(&mut self, add_contents: &mut dyn FnMut(&mut dyn InlineEditor)) {
        self.vertical(|ui| add_contents(ui));
    }

    fn indented(&mut self, id: &str, add_contents: &mut dyn FnMut(&mut dyn InlineEditor)) {
        self.indent(id, |ui| add_contents(ui));
    }

    fn toggle(&mut self, label: &str, value: &mut bool) -> bool {
        self.checkbox(value, label).changed()
    }

    fn enum_dropdown(&mut self, label: &str, options: &[String], selected: &mut usize) -> bool {
        let mut changed = false;
        let current = options.get(*selected).map_or("?", String::as_str);
        egui::ComboBox::from_label(label)
            .selected_text(current)
            .show_ui(self, |ui| {
                for (i, option) in options.iter().enumerate() {
                    changed |= ui.selectable_value(selected, i, option.as_str()).changed();
                }
            });
        changed
    }

    fn int_field(&mut self, label: &str, value: &mut i64, range: RangeInclusive<i64>) -> bool {
        self.add(egui::Slider::new(value, range).text(label))
            .changed()
    }

    fn float_field(
        &mut self,
        label: &str,
        value: &mut f32,
        range: Option<RangeInclusive<f32>>,
    ) -> bool {
        match range {
            Some(range) => self
                .add(egui::Slider::new(value, range).text(label))
                .changed(),
            None => {
                self.horizontal(|ui| {
                    ui.label(label);
                    ui.add(egui::DragValue::new(value).speed(0.01)).changed()
                })
                .inner
            }
        }
    }

    fn label(&mut self, label: &str, text: &str) {
        self.horizontal(|ui| {
            ui.label(label);
            // Dimmed for display-only values
            ui.weak(text);
        });
    }
}
