//! Item handlers
//!
//! A handler is the per-item strategy that knows how to present, step,
//! validate and clamp one value. The presentation layer only talks to
//! [`ItemHandler`], so it never inspects the concrete value type.
//!
//! Handlers never fail: anything out of range is coerced back into range.

mod basic;
mod bounded;
mod shadow;
mod tests;

pub use basic::{DefaultHandler, EnumHandler, ToggleHandler};
pub use bounded::{BoundedFloatHandler, BoundedIntHandler, DynamicBoundedHandler};

use super::accessor::ValueAccessor;
use super::types::DebugValue;
use crate::authoring::InlineEditor;
use crate::overlay::{NodeId, OverlayHost, TextStyle};

/// Live counters exposed by the active rendering pipeline
pub trait RenderPipelineStats {
    /// Number of slots currently allocated in the shadow atlas
    fn shadow_atlas_count(&self) -> u32;

    /// Number of shadow-casting lights processed this frame
    fn current_shadow_count(&self) -> u32;
}

/// Capabilities handed to handlers on every call.
///
/// Dynamic handlers read live bounds from here instead of from a global.
#[derive(Clone, Copy, Default)]
pub struct DebugContext<'a> {
    pipeline: Option<&'a dyn RenderPipelineStats>,
}

impl<'a> DebugContext<'a> {
    /// Context bound to a live pipeline
    pub fn new(pipeline: &'a dyn RenderPipelineStats) -> Self {
        Self {
            pipeline: Some(pipeline),
        }
    }

    /// Context with no pipeline (e.g. between pipeline teardown and rebuild)
    pub fn detached() -> Self {
        Self { pipeline: None }
    }

    pub fn pipeline(&self) -> Option<&'a dyn RenderPipelineStats> {
        self.pipeline
    }
}

/// Strategy for presenting and editing one debug item
pub trait ItemHandler {
    /// Build the live-overlay control for this item under `parent`
    fn build(
        &self,
        label: &str,
        value: DebugValue,
        host: &mut dyn OverlayHost,
        parent: NodeId,
        style: TextStyle,
    ) -> NodeId {
        host.create_value_control(parent, label, &self.format_value(value), style)
    }

    /// Text shown for `value` in the live overlay
    fn format_value(&self, value: DebugValue) -> String {
        value.to_string()
    }

    /// Draw an inline editor for the item into the authoring view.
    ///
    /// Returns `true` if the value was written.
    fn render_inline(
        &mut self,
        label: &str,
        accessor: &ValueAccessor,
        editor: &mut dyn InlineEditor,
        ctx: &DebugContext<'_>,
    ) -> bool;

    /// Step the value up once
    fn on_increment(&mut self, accessor: &ValueAccessor, ctx: &DebugContext<'_>);

    /// Step the value down once
    fn on_decrement(&mut self, accessor: &ValueAccessor, ctx: &DebugContext<'_>);

    /// Re-check the value after an edit that may have left it out of range
    fn on_validate(&mut self, accessor: &ValueAccessor, ctx: &DebugContext<'_>) {
        self.clamp_values(accessor, ctx);
    }

    /// Coerce the current value into the handler's legal range
    fn clamp_values(&mut self, _accessor: &ValueAccessor, _ctx: &DebugContext<'_>) {}

    /// Whether increment/decrement do anything for this handler
    fn is_steppable(&self) -> bool {
        true
    }
}
