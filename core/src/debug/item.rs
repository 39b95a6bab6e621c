//! Debug items: one inspectable external value plus its handler

use std::fmt;

use super::accessor::ValueAccessor;
use super::handler::{DebugContext, DefaultHandler, ItemHandler, ToggleHandler};
use super::types::{DebugValue, ValueKind};
use crate::authoring::InlineEditor;

bitflags::bitflags! {
    /// Per-item behaviour flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DebugItemFlags: u8 {
        /// Shown in the authoring view only, skipped by the live overlay
        const EDITOR_ONLY = 0b0000_0001;
        /// Never edited through navigation input
        const READ_ONLY = 0b0000_0010;
        /// Live overlay text refreshed every frame
        const DYNAMIC = 0b0000_0100;
    }
}

/// A registered debug item
pub struct DebugItem {
    name: String,
    accessor: ValueAccessor,
    flags: DebugItemFlags,
    handler: Box<dyn ItemHandler>,
}

impl fmt::Debug for DebugItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugItem")
            .field("name", &self.name)
            .field("flags", &self.flags)
            .field("value", &self.accessor.get())
            .finish()
    }
}

impl DebugItem {
    /// Create an item owning `handler`
    pub fn new(
        name: &str,
        accessor: ValueAccessor,
        flags: DebugItemFlags,
        handler: impl ItemHandler + 'static,
    ) -> Self {
        Self::with_boxed_handler(name, accessor, flags, Box::new(handler))
    }

    /// Create an item from an already boxed handler
    pub fn with_boxed_handler(
        name: &str,
        accessor: ValueAccessor,
        flags: DebugItemFlags,
        handler: Box<dyn ItemHandler>,
    ) -> Self {
        Self {
            name: name.to_string(),
            accessor,
            flags,
            handler,
        }
    }

    /// Create an item with the handler matching its current value kind:
    /// booleans toggle, everything else is display-only.
    pub fn with_default_handler(name: &str, accessor: ValueAccessor, flags: DebugItemFlags) -> Self {
        let handler: Box<dyn ItemHandler> = match accessor.get().kind() {
            ValueKind::Bool => Box::new(ToggleHandler),
            _ => Box::new(DefaultHandler),
        };
        Self::with_boxed_handler(name, accessor, flags, handler)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn flags(&self) -> DebugItemFlags {
        self.flags
    }

    pub fn is_read_only(&self) -> bool {
        self.flags.contains(DebugItemFlags::READ_ONLY)
    }

    pub fn is_editor_only(&self) -> bool {
        self.flags.contains(DebugItemFlags::EDITOR_ONLY)
    }

    pub fn is_dynamic(&self) -> bool {
        self.flags.contains(DebugItemFlags::DYNAMIC)
    }

    /// Whether navigation input can step this item
    pub fn is_steppable(&self) -> bool {
        !self.is_read_only() && self.handler.is_steppable()
    }

    /// Current external value
    pub fn value(&self) -> DebugValue {
        self.accessor.get()
    }

    /// Write a value, then let the handler coerce it into range
    pub fn set_value(&mut self, value: DebugValue, ctx: &DebugContext<'_>) {
        if self.is_read_only() {
            tracing::debug!("debug: ignoring write to read-only item '{}'", self.name);
            return;
        }
        self.accessor.set(value);
        self.handler.on_validate(&self.accessor, ctx);
    }

    pub fn handler(&self) -> &dyn ItemHandler {
        self.handler.as_ref()
    }

    /// Live overlay text for the current value
    pub fn display_text(&self) -> String {
        self.handler.format_value(self.accessor.get())
    }

    pub(crate) fn increment(&mut self, ctx: &DebugContext<'_>) {
        if !self.is_read_only() {
            self.handler.on_increment(&self.accessor, ctx);
        }
    }

    pub(crate) fn decrement(&mut self, ctx: &DebugContext<'_>) {
        if !self.is_read_only() {
            self.handler.on_decrement(&self.accessor, ctx);
        }
    }

    pub(crate) fn validate(&mut self, ctx: &DebugContext<'_>) {
        if !self.is_read_only() {
            self.handler.on_validate(&self.accessor, ctx);
        }
    }

    /// Re-apply the handler's clamp to the current value
    pub fn clamp_values(&mut self, ctx: &DebugContext<'_>) {
        self.handler.clamp_values(&self.accessor, ctx);
    }

    /// Draw this item into the authoring view.
    ///
    /// Read-only items are shown as labels. Returns `true` if the value changed.
    pub fn render_inline(&mut self, editor: &mut dyn InlineEditor, ctx: &DebugContext<'_>) -> bool {
        if self.is_read_only() {
            editor.label(&self.name, &self.display_text());
            return false;
        }
        let changed = self
            .handler
            .render_inline(&self.name, &self.accessor, editor, ctx);
        if changed {
            // Direct entry can land outside the range
            self.handler.on_validate(&self.accessor, ctx);
        }
        changed
    }
}

/// Build an item whose handler comes from `handler_factory`
pub fn create_item<H, F>(
    name: &str,
    accessor: ValueAccessor,
    flags: DebugItemFlags,
    handler_factory: F,
) -> DebugItem
where
    H: ItemHandler + 'static,
    F: FnOnce() -> H,
{
    DebugItem::new(name, accessor, flags, handler_factory())
}
