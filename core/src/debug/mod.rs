//! Debug menu framework
//!
//! Exposes values owned by other subsystems as navigable, editable items
//! grouped into panels.
//!
//! # Overview
//!
//! - [`ValueAccessor`] - type-erased get/set pair over one external value
//! - [`ItemHandler`] - per-item strategy (toggle, enum, bounded numbers, ...)
//! - [`DebugItem`] - name + accessor + flags + owned handler
//! - [`DebugPanel`] - ordered, named items plus their live-overlay state
//! - [`DebugMenuRegistry`] / [`DebugMenu`] - owned panel collection and the
//!   menu that routes input to the foreground panel
//!
//! Panels render into two independent backends: the live overlay (an
//! [`OverlayHost`](crate::overlay::OverlayHost) tree navigated with
//! [`DebugInput`]) and the authoring view (an immediate-mode
//! [`InlineEditor`](crate::authoring::InlineEditor)).
//!
//! # Usage
//!
//! ```rust,ignore
//! let settings = Rc::new(Cell::new(false));
//! let mut panel = DebugPanel::new("Rendering");
//! panel.register(create_item(
//!     "Wireframe",
//!     ValueAccessor::from_cell(Rc::clone(&settings)),
//!     DebugItemFlags::empty(),
//!     || ToggleHandler,
//! ));
//! menu.registry_mut().add_panel(panel)?;
//! menu.build_gui(&mut tree);
//! ```
//!
//! # Error Policy
//!
//! - Wiring mistakes (duplicate names) fail fast in development builds
//! - Calls on a torn-down overlay are ignored
//! - Out-of-range values are clamped, never rejected

pub mod accessor;
pub mod handler;
pub mod input;
pub mod item;
pub mod menu;
pub mod panel;
pub mod registry;
pub mod types;

// Re-export commonly used types
pub use accessor::ValueAccessor;
pub use handler::{
    BoundedFloatHandler, BoundedIntHandler, DebugContext, DefaultHandler, DynamicBoundedHandler,
    EnumHandler, ItemHandler, RenderPipelineStats, ToggleHandler,
};
pub use input::{AxisRepeat, DebugInput};
pub use item::{DebugItem, DebugItemFlags, create_item};
pub use menu::DebugMenu;
pub use panel::{
    DebugPanel, DefaultLayout, ItemVisual, PanelLayout, PanelPresentation, PresentationState,
    RegistrationError,
};
pub use registry::DebugMenuRegistry;
pub use types::{Bounds, DebugEnum, DebugValue, FromDebugValue, ValueKind};
