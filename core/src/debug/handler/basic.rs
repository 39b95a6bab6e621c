//! Display-only, boolean and enum handlers

use super::{DebugContext, ItemHandler};
use crate::authoring::InlineEditor;
use crate::debug::accessor::ValueAccessor;
use crate::debug::types::{DebugEnum, DebugValue};

/// Display-only handler; stepping does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHandler;

impl ItemHandler for DefaultHandler {
    fn render_inline(
        &mut self,
        label: &str,
        accessor: &ValueAccessor,
        editor: &mut dyn InlineEditor,
        _ctx: &DebugContext<'_>,
    ) -> bool {
        editor.label(label, &self.format_value(accessor.get()));
        false
    }

    fn on_increment(&mut self, _accessor: &ValueAccessor, _ctx: &DebugContext<'_>) {}

    fn on_decrement(&mut self, _accessor: &ValueAccessor, _ctx: &DebugContext<'_>) {}

    fn is_steppable(&self) -> bool {
        false
    }
}

/// Boolean handler; both directions flip the value
#[derive(Debug, Clone, Copy, Default)]
pub struct ToggleHandler;

impl ToggleHandler {
    fn flip(accessor: &ValueAccessor) {
        let value = accessor.get().as_bool();
        accessor.set(DebugValue::Bool(!value));
    }
}

impl ItemHandler for ToggleHandler {
    fn render_inline(
        &mut self,
        label: &str,
        accessor: &ValueAccessor,
        editor: &mut dyn InlineEditor,
        _ctx: &DebugContext<'_>,
    ) -> bool {
        let mut value = accessor.get().as_bool();
        if editor.toggle(label, &mut value) {
            accessor.set(DebugValue::Bool(value));
            true
        } else {
            false
        }
    }

    fn on_increment(&mut self, accessor: &ValueAccessor, _ctx: &DebugContext<'_>) {
        Self::flip(accessor);
    }

    fn on_decrement(&mut self, accessor: &ValueAccessor, _ctx: &DebugContext<'_>) {
        Self::flip(accessor);
    }
}

/// Handler cycling through a fixed set of ordinals
#[derive(Debug, Clone)]
pub struct EnumHandler {
    names: Vec<String>,
    values: Vec<i32>,
}

impl EnumHandler {
    /// Create a handler from parallel name/ordinal lists.
    ///
    /// Extra entries on the longer list are dropped.
    pub fn new(mut names: Vec<String>, mut values: Vec<i32>) -> Self {
        if names.len() != values.len() {
            tracing::warn!(
                "debug: enum handler given {} names for {} values, truncating",
                names.len(),
                values.len()
            );
            let len = names.len().min(values.len());
            names.truncate(len);
            values.truncate(len);
        }
        Self { names, values }
    }

    /// Create a handler listing every variant of `E`
    pub fn for_enum<E: DebugEnum>() -> Self {
        let variants = E::variants();
        Self {
            names: variants.iter().map(|v| v.name().to_string()).collect(),
            values: variants.iter().map(|v| v.ordinal()).collect(),
        }
    }

    /// Position of `ordinal` in the variant list, if known
    fn position(&self, ordinal: i64) -> Option<usize> {
        self.values.iter().position(|v| i64::from(*v) == ordinal)
    }

    fn step(&self, accessor: &ValueAccessor, forward: bool) {
        let len = self.values.len();
        if len == 0 {
            return;
        }
        let current = accessor.get();
        // An unknown ordinal starts from the first variant
        let next = match self.position(current.as_i64()) {
            Some(pos) if forward => (pos + 1) % len,
            Some(pos) => (pos + len - 1) % len,
            None => 0,
        };
        accessor.set(current.with_i64(i64::from(self.values[next])));
    }
}

impl ItemHandler for EnumHandler {
    fn format_value(&self, value: DebugValue) -> String {
        self.position(value.as_i64())
            .and_then(|pos| self.names.get(pos))
            .cloned()
            .unwrap_or_else(|| value.as_i64().to_string())
    }

    fn render_inline(
        &mut self,
        label: &str,
        accessor: &ValueAccessor,
        editor: &mut dyn InlineEditor,
        _ctx: &DebugContext<'_>,
    ) -> bool {
        let current = accessor.get();
        let mut selected = self.position(current.as_i64()).unwrap_or(0);
        if editor.enum_dropdown(label, &self.names, &mut selected)
            && let Some(value) = self.values.get(selected)
        {
            accessor.set(current.with_i64(i64::from(*value)));
            return true;
        }
        false
    }

    fn on_increment(&mut self, accessor: &ValueAccessor, _ctx: &DebugContext<'_>) {
        self.step(accessor, true);
    }

    fn on_decrement(&mut self, accessor: &ValueAccessor, _ctx: &DebugContext<'_>) {
        self.step(accessor, false);
    }

    fn clamp_values(&mut self, accessor: &ValueAccessor, _ctx: &DebugContext<'_>) {
        let current = accessor.get();
        if self.position(current.as_i64()).is_none()
            && let Some(first) = self.values.first()
        {
            accessor.set(current.with_i64(i64::from(*first)));
        }
    }
}
