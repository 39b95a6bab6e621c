//! Authoring-tool immediate-mode view
//!
//! Handlers render themselves through [`InlineEditor`], a narrow slice of an
//! immediate-mode UI. The egui implementation lives in [`egui_ui`]; tests use
//! a recording fake.

mod egui_ui;

use std::ops::RangeInclusive;

/// Immediate-mode drawing primitives the authoring view needs.
///
/// Each edit method returns `true` when the user changed the value this frame.
pub trait InlineEditor {
    /// Lay out `add_contents` in a vertical group
    fn vertical_group(&mut self, add_contents: &mut dyn FnMut(&mut dyn InlineEditor));

    /// Lay out `add_contents` one indentation level deeper
    fn indented(&mut self, id: &str, add_contents: &mut dyn FnMut(&mut dyn InlineEditor));

    fn toggle(&mut self, label: &str, value: &mut bool) -> bool;

    /// Dropdown over `options`, `selected` indexes into it
    fn enum_dropdown(&mut self, label: &str, options: &[String], selected: &mut usize) -> bool;

    fn int_field(&mut self, label: &str, value: &mut i64, range: RangeInclusive<i64>) -> bool;

    /// Float editor, a slider when `range` is given
    fn float_field(
        &mut self,
        label: &str,
        value: &mut f32,
        range: Option<RangeInclusive<f32>>,
    ) -> bool;

    /// Display-only row
    fn label(&mut self, label: &str, text: &str);
}
