//! Range-bounded numeric handlers

use std::fmt;

use super::{DebugContext, ItemHandler, RenderPipelineStats};
use crate::authoring::InlineEditor;
use crate::debug::accessor::ValueAccessor;
use crate::debug::types::{Bounds, DebugValue};

/// Integer handler enforcing a static `[min, max]` range.
///
/// Works for both signed and unsigned items: the value is widened to i64,
/// stepped with saturation and written back in the same variant.
#[derive(Debug, Clone, Copy)]
pub struct BoundedIntHandler {
    bounds: Bounds<i64>,
    step: i64,
}

impl BoundedIntHandler {
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            bounds: Bounds::new(min, max),
            step: 1,
        }
    }

    /// Use a step other than 1 (zero or negative steps are treated as 1)
    pub fn with_step(mut self, step: i64) -> Self {
        self.step = step.max(1);
        self
    }

    pub fn bounds(&self) -> Bounds<i64> {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Bounds<i64>) {
        self.bounds = bounds;
    }

    fn write(&self, accessor: &ValueAccessor, current: DebugValue, value: i64) {
        let next = current.with_i64(self.bounds.clamp(value));
        if next != current {
            accessor.set(next);
        }
    }
}

impl ItemHandler for BoundedIntHandler {
    fn render_inline(
        &mut self,
        label: &str,
        accessor: &ValueAccessor,
        editor: &mut dyn InlineEditor,
        _ctx: &DebugContext<'_>,
    ) -> bool {
        let current = accessor.get();
        let mut value = current.as_i64();
        if editor.int_field(label, &mut value, self.bounds.min..=self.bounds.max) {
            self.write(accessor, current, value);
            true
        } else {
            false
        }
    }

    fn on_increment(&mut self, accessor: &ValueAccessor, _ctx: &DebugContext<'_>) {
        let current = accessor.get();
        self.write(accessor, current, current.as_i64().saturating_add(self.step));
    }

    fn on_decrement(&mut self, accessor: &ValueAccessor, _ctx: &DebugContext<'_>) {
        let current = accessor.get();
        self.write(accessor, current, current.as_i64().saturating_sub(self.step));
    }

    fn clamp_values(&mut self, accessor: &ValueAccessor, _ctx: &DebugContext<'_>) {
        let current = accessor.get();
        self.write(accessor, current, current.as_i64());
    }
}

/// Float handler enforcing a static `[min, max]` range with a fixed step
#[derive(Debug, Clone, Copy)]
pub struct BoundedFloatHandler {
    bounds: Bounds<f32>,
    step: f32,
}

impl BoundedFloatHandler {
    /// Create a handler; the default step is a hundredth of the range
    pub fn new(min: f32, max: f32) -> Self {
        let bounds = Bounds::new(min, max);
        let step = ((bounds.max - bounds.min) / 100.0).max(f32::EPSILON);
        Self { bounds, step }
    }

    pub fn with_step(mut self, step: f32) -> Self {
        if step.is_finite() && step > 0.0 {
            self.step = step;
        }
        self
    }

    pub fn bounds(&self) -> Bounds<f32> {
        self.bounds
    }

    fn coerce(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.bounds.min
        } else {
            self.bounds.clamp(value)
        }
    }

    fn write(&self, accessor: &ValueAccessor, value: f32) {
        accessor.set(DebugValue::F32(self.coerce(value)));
    }
}

impl ItemHandler for BoundedFloatHandler {
    fn render_inline(
        &mut self,
        label: &str,
        accessor: &ValueAccessor,
        editor: &mut dyn InlineEditor,
        _ctx: &DebugContext<'_>,
    ) -> bool {
        let mut value = accessor.get().as_f32();
        if editor.float_field(label, &mut value, Some(self.bounds.min..=self.bounds.max)) {
            self.write(accessor, value);
            true
        } else {
            false
        }
    }

    fn on_increment(&mut self, accessor: &ValueAccessor, _ctx: &DebugContext<'_>) {
        self.write(accessor, accessor.get().as_f32() + self.step);
    }

    fn on_decrement(&mut self, accessor: &ValueAccessor, _ctx: &DebugContext<'_>) {
        self.write(accessor, accessor.get().as_f32() - self.step);
    }

    fn clamp_values(&mut self, accessor: &ValueAccessor, _ctx: &DebugContext<'_>) {
        let current = accessor.get().as_f32();
        let coerced = self.coerce(current);
        if coerced.to_bits() != current.to_bits() {
            accessor.set(DebugValue::F32(coerced));
        }
    }
}

type MaxSource = Box<dyn Fn(&dyn RenderPipelineStats) -> i64>;

/// Shown in both views while a dynamic range has no valid position
const EMPTY_RANGE_TEXT: &str = "none";

/// Integer handler whose upper bound is re-read from the live pipeline
/// every time the value is stepped, validated or drawn.
///
/// A recomputed maximum below `min` produces a degenerate range: the bound
/// collapses onto `min` and [`is_degenerate`](Self::is_degenerate) reports it.
pub struct DynamicBoundedHandler {
    inner: BoundedIntHandler,
    min: i64,
    max_source: MaxSource,
    degenerate: bool,
}

impl fmt::Debug for DynamicBoundedHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicBoundedHandler")
            .field("bounds", &self.inner.bounds())
            .field("degenerate", &self.degenerate)
            .finish()
    }
}

impl DynamicBoundedHandler {
    /// Create a handler starting at `[min, initial_max]` that recomputes its
    /// maximum with `max_source` whenever a pipeline is available.
    pub fn new(
        min: i64,
        initial_max: i64,
        max_source: impl Fn(&dyn RenderPipelineStats) -> i64 + 'static,
    ) -> Self {
        Self {
            inner: BoundedIntHandler::new(min, initial_max.max(min)),
            min,
            max_source: Box::new(max_source),
            degenerate: initial_max < min,
        }
    }

    pub fn bounds(&self) -> Bounds<i64> {
        self.inner.bounds()
    }

    /// True when the last recomputed maximum was below `min`
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    fn refresh_bounds(&mut self, ctx: &DebugContext<'_>) {
        let Some(pipeline) = ctx.pipeline() else {
            tracing::debug!("debug: no pipeline for dynamic bound, keeping last range");
            return;
        };
        let max = (self.max_source)(pipeline);
        self.degenerate = max < self.min;
        self.inner.set_bounds(Bounds::new(self.min, max.max(self.min)));
    }
}

impl ItemHandler for DynamicBoundedHandler {
    fn format_value(&self, value: DebugValue) -> String {
        if self.degenerate {
            return EMPTY_RANGE_TEXT.to_string();
        }
        self.inner.format_value(value)
    }

    fn render_inline(
        &mut self,
        label: &str,
        accessor: &ValueAccessor,
        editor: &mut dyn InlineEditor,
        ctx: &DebugContext<'_>,
    ) -> bool {
        self.refresh_bounds(ctx);
        if self.degenerate {
            editor.label(label, EMPTY_RANGE_TEXT);
            return false;
        }
        self.inner.render_inline(label, accessor, editor, ctx)
    }

    fn on_increment(&mut self, accessor: &ValueAccessor, ctx: &DebugContext<'_>) {
        self.refresh_bounds(ctx);
        self.inner.on_increment(accessor, ctx);
    }

    fn on_decrement(&mut self, accessor: &ValueAccessor, ctx: &DebugContext<'_>) {
        self.refresh_bounds(ctx);
        self.inner.on_decrement(accessor, ctx);
    }

    fn clamp_values(&mut self, accessor: &ValueAccessor, ctx: &DebugContext<'_>) {
        self.refresh_bounds(ctx);
        self.inner.clamp_values(accessor, ctx);
    }
}
