//! Tests for item handlers

#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::debug::types::DebugEnum;
use crate::test_utils::{EditorCall, FakePipeline, RecordingEditor, ScriptedEdit};

fn u32_cell(v: u32) -> (Rc<Cell<u32>>, ValueAccessor) {
    let cell = Rc::new(Cell::new(v));
    let accessor = ValueAccessor::from_cell(Rc::clone(&cell));
    (cell, accessor)
}

fn i32_cell(v: i32) -> (Rc<Cell<i32>>, ValueAccessor) {
    let cell = Rc::new(Cell::new(v));
    let accessor = ValueAccessor::from_cell(Rc::clone(&cell));
    (cell, accessor)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Quality {
    Low = 1,
    Medium = 4,
    High = 9,
}

impl DebugEnum for Quality {
    fn variants() -> &'static [Self] {
        &[Quality::Low, Quality::Medium, Quality::High]
    }
    fn name(self) -> &'static str {
        match self {
            Quality::Low => "Low",
            Quality::Medium => "Medium",
            Quality::High => "High",
        }
    }
    fn ordinal(self) -> i32 {
        self as i32
    }
}

// =========================================================================
// Bounded integers
// =========================================================================

#[test]
fn test_increment_saturates_at_max() {
    let ctx = DebugContext::detached();
    let mut handler = BoundedIntHandler::new(0, 3);
    let (cell, accessor) = i32_cell(3);

    handler.on_increment(&accessor, &ctx);
    assert_eq!(cell.get(), 3);

    cell.set(0);
    handler.on_decrement(&accessor, &ctx);
    assert_eq!(cell.get(), 0);
}

#[test]
fn test_increment_steps_within_range() {
    let ctx = DebugContext::detached();
    let mut handler = BoundedIntHandler::new(0, 10).with_step(4);
    let (cell, accessor) = i32_cell(4);

    handler.on_increment(&accessor, &ctx);
    assert_eq!(cell.get(), 8);
    handler.on_increment(&accessor, &ctx);
    assert_eq!(cell.get(), 10);
}

#[test]
fn test_clamp_is_idempotent() {
    let ctx = DebugContext::detached();
    for start in [-100, -1, 0, 2, 5, 6, 1000] {
        let mut handler = BoundedIntHandler::new(-1, 5);
        let (cell, accessor) = i32_cell(start);
        handler.clamp_values(&accessor, &ctx);
        let once = cell.get();
        handler.clamp_values(&accessor, &ctx);
        assert_eq!(cell.get(), once, "start value {}", start);
        assert!((-1..=5).contains(&once));
    }
}

#[test]
fn test_unsigned_decrement_does_not_underflow() {
    let ctx = DebugContext::detached();
    let mut handler = BoundedIntHandler::new(0, 7);
    let (cell, accessor) = u32_cell(0);
    handler.on_decrement(&accessor, &ctx);
    assert_eq!(cell.get(), 0);
}

#[test]
fn test_validate_clamps_out_of_range() {
    let ctx = DebugContext::detached();
    let mut handler = BoundedIntHandler::new(2, 6);
    let (cell, accessor) = i32_cell(40);
    handler.on_validate(&accessor, &ctx);
    assert_eq!(cell.get(), 6);
}

#[test]
fn test_reversed_bounds_keep_min_below_max() {
    let handler = BoundedIntHandler::new(8, 2);
    assert_eq!(handler.bounds().min, 2);
    assert_eq!(handler.bounds().max, 8);
}

// =========================================================================
// Floats
// =========================================================================

#[test]
fn test_float_step_and_clamp() {
    let ctx = DebugContext::detached();
    let mut handler = BoundedFloatHandler::new(0.0, 1.0).with_step(0.25);
    let cell = Rc::new(Cell::new(0.9f32));
    let accessor = ValueAccessor::from_cell(Rc::clone(&cell));

    handler.on_increment(&accessor, &ctx);
    assert_eq!(cell.get(), 1.0);
    handler.on_decrement(&accessor, &ctx);
    assert_eq!(cell.get(), 0.75);

    cell.set(f32::NAN);
    handler.clamp_values(&accessor, &ctx);
    assert_eq!(cell.get(), 0.0);
}

// =========================================================================
// Toggle and enum
// =========================================================================

#[test]
fn test_toggle_flips_both_directions() {
    let ctx = DebugContext::detached();
    let mut handler = ToggleHandler;
    let cell = Rc::new(Cell::new(false));
    let accessor = ValueAccessor::from_cell(Rc::clone(&cell));

    handler.on_increment(&accessor, &ctx);
    assert!(cell.get());
    handler.on_decrement(&accessor, &ctx);
    assert!(!cell.get());
}

#[test]
fn test_enum_wraps_through_ordinals() {
    let ctx = DebugContext::detached();
    let mut handler = EnumHandler::for_enum::<Quality>();
    let cell = Rc::new(Cell::new(Quality::High as i32));
    let accessor = ValueAccessor::new(
        {
            let cell = Rc::clone(&cell);
            move || DebugValue::Enum(cell.get())
        },
        {
            let cell = Rc::clone(&cell);
            move |v| cell.set(v.as_i64() as i32)
        },
    );

    handler.on_increment(&accessor, &ctx);
    assert_eq!(cell.get(), Quality::Low as i32);
    handler.on_decrement(&accessor, &ctx);
    assert_eq!(cell.get(), Quality::High as i32);
    handler.on_decrement(&accessor, &ctx);
    assert_eq!(cell.get(), Quality::Medium as i32);
    assert_eq!(handler.format_value(DebugValue::Enum(4)), "Medium");
}

#[test]
fn test_enum_clamp_resets_unknown_ordinal() {
    let ctx = DebugContext::detached();
    let mut handler = EnumHandler::new(
        vec!["A".to_string(), "B".to_string(), "orphan".to_string()],
        vec![10, 20],
    );
    assert_eq!(handler.format_value(DebugValue::Enum(20)), "B");

    let (cell, accessor) = i32_cell(15);
    handler.clamp_values(&accessor, &ctx);
    assert_eq!(cell.get(), 10);
}

#[test]
fn test_enum_dropdown_selection_writes_ordinal() {
    let ctx = DebugContext::detached();
    let mut handler = EnumHandler::for_enum::<Quality>();
    let (cell, accessor) = i32_cell(Quality::Low as i32);
    let mut editor = RecordingEditor::editing("quality", ScriptedEdit::Select(2));

    assert!(handler.render_inline("quality", &accessor, &mut editor, &ctx));
    assert_eq!(cell.get(), Quality::High as i32);
}

#[test]
fn test_default_handler_is_display_only() {
    let ctx = DebugContext::detached();
    let mut handler = DefaultHandler;
    let (cell, accessor) = u32_cell(5);
    handler.on_increment(&accessor, &ctx);
    handler.on_decrement(&accessor, &ctx);
    assert_eq!(cell.get(), 5);
    assert!(!handler.is_steppable());
}

// =========================================================================
// Dynamic bounds
// =========================================================================

#[test]
fn test_dynamic_bound_recomputes_on_clamp() {
    let pipeline = FakePipeline::new(5, 0);
    let ctx = DebugContext::new(&pipeline);
    let mut handler = DynamicBoundedHandler::shadow_atlas_index(0);
    let (cell, accessor) = u32_cell(4);

    handler.clamp_values(&accessor, &ctx);
    assert_eq!(handler.bounds().max, 4);
    assert_eq!(cell.get(), 4);

    pipeline.atlas_count.set(2);
    handler.clamp_values(&accessor, &ctx);
    assert_eq!(handler.bounds().max, 1);
    assert_eq!(cell.get(), 1);
}

#[test]
fn test_dynamic_bound_zero_count_is_degenerate() {
    let pipeline = FakePipeline::new(3, 0);
    let ctx = DebugContext::new(&pipeline);
    let mut handler = DynamicBoundedHandler::shadow_index(8);
    let (cell, accessor) = u32_cell(6);

    handler.clamp_values(&accessor, &ctx);
    assert!(handler.is_degenerate());
    assert_eq!(handler.bounds().min, 0);
    assert_eq!(handler.bounds().max, 0);
    assert_eq!(cell.get(), 0);

    handler.on_increment(&accessor, &ctx);
    assert_eq!(cell.get(), 0);

    pipeline.shadow_count.set(3);
    handler.on_increment(&accessor, &ctx);
    assert!(!handler.is_degenerate());
    assert_eq!(cell.get(), 1);
}

#[test]
fn test_degenerate_range_formats_like_authoring_view() {
    let pipeline = FakePipeline::new(1, 0);
    let ctx = DebugContext::new(&pipeline);
    let mut handler = DynamicBoundedHandler::shadow_index(2);
    let (_, accessor) = u32_cell(0);

    assert_eq!(handler.format_value(accessor.get()), "0");
    handler.clamp_values(&accessor, &ctx);
    assert_eq!(handler.format_value(accessor.get()), "none");

    let mut editor = RecordingEditor::new();
    handler.render_inline("Shadow", &accessor, &mut editor, &ctx);
    assert_eq!(
        editor.calls,
        [EditorCall::Label("Shadow".to_string(), "none".to_string())]
    );

    pipeline.shadow_count.set(2);
    handler.clamp_values(&accessor, &ctx);
    assert_eq!(handler.format_value(accessor.get()), "0");
}

#[test]
fn test_dynamic_bound_without_pipeline_keeps_last_range() {
    let pipeline = FakePipeline::new(4, 0);
    let mut handler = DynamicBoundedHandler::shadow_atlas_index(0);
    let (cell, accessor) = u32_cell(0);

    handler.clamp_values(&accessor, &DebugContext::new(&pipeline));
    assert_eq!(handler.bounds().max, 3);

    cell.set(10);
    handler.clamp_values(&accessor, &DebugContext::detached());
    assert_eq!(handler.bounds().max, 3);
    assert_eq!(cell.get(), 3);
}

#[test]
fn test_dynamic_render_refreshes_range() {
    let pipeline = FakePipeline::new(6, 0);
    let ctx = DebugContext::new(&pipeline);
    let mut handler = DynamicBoundedHandler::shadow_atlas_index(0);
    let (_cell, accessor) = u32_cell(0);
    let mut editor = RecordingEditor::new();

    handler.render_inline("atlas", &accessor, &mut editor, &ctx);
    assert_eq!(
        editor.calls,
        vec![EditorCall::Int("atlas".to_string(), 0..=5)]
    );
}
