//! DebugMenu Core - runtime debug menu framework
//!
//! Registers named panels of tweakable values and presents them two ways:
//! as a live overlay navigated with a gamepad or keyboard, and as an
//! immediate-mode authoring view.
//!
//! # Architecture
//!
//! - [`DebugMenu`] - Panel registry, foreground panel and per-frame input
//! - [`DebugPanel`] - Ordered items plus their overlay presentation
//! - [`ItemHandler`] - Per-kind behaviour: clamping, stepping and drawing
//! - [`OverlayHost`] - Retained visual tree the overlay is built into
//! - [`InlineEditor`] - Immediate-mode UI the authoring view draws through
//! - [`lighting`] - The lighting debug panel

pub mod authoring;
pub mod config;
pub mod debug;
#[cfg(test)]
mod integration;
pub mod lighting;
pub mod overlay;
#[cfg(test)]
pub mod test_utils;

pub use authoring::InlineEditor;
pub use config::{Config, ConfigError};
pub use overlay::{NodeId, OverlayHost, OverlayStyle, VisualTree, paint_overlay};

// Re-export debug menu types
pub use debug::{
    AxisRepeat, DebugContext, DebugInput, DebugItem, DebugItemFlags, DebugMenu,
    DebugMenuRegistry, DebugPanel, DebugValue, ItemHandler, RegistrationError,
    RenderPipelineStats, ValueAccessor,
};
