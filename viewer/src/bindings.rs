//! Keyboard bindings for menu navigation

use debugmenu_core::config::InputConfig;
use debugmenu_core::{AxisRepeat, DebugInput};
use eframe::egui;

/// Resolve a configured key name, ignoring case
pub fn parse_key(name: &str) -> Option<egui::Key> {
    egui::Key::ALL
        .iter()
        .copied()
        .find(|key| key.name().eq_ignore_ascii_case(name))
}

/// Keys resolved from [`InputConfig`] plus the axis repeat state.
///
/// Arrow keys drive both axes; unknown key names leave their action unbound.
#[derive(Debug)]
pub struct KeyBindings {
    toggle: Option<egui::Key>,
    validate: Option<egui::Key>,
    next_panel: Option<egui::Key>,
    previous_panel: Option<egui::Key>,
    horizontal: AxisRepeat,
    vertical: AxisRepeat,
}

impl KeyBindings {
    pub fn from_config(config: &InputConfig) -> Self {
        let resolve = |action: &str, name: &str| {
            let key = parse_key(name);
            if key.is_none() {
                tracing::warn!("Unknown key '{}' for {}, action unbound", name, action);
            }
            key
        };
        Self {
            toggle: resolve("toggle", &config.toggle_key),
            validate: resolve("validate", &config.validate_key),
            next_panel: resolve("next panel", &config.next_panel_key),
            previous_panel: resolve("previous panel", &config.previous_panel_key),
            horizontal: AxisRepeat::from_config(config),
            vertical: AxisRepeat::from_config(config),
        }
    }

    /// Sample this frame's navigation input
    pub fn poll(&mut self, input: &egui::InputState) -> DebugInput {
        let pressed = |key: Option<egui::Key>| key.is_some_and(|k| input.key_pressed(k));
        let axis = |positive: egui::Key, negative: egui::Key| {
            (i8::from(input.key_down(positive)) - i8::from(input.key_down(negative))) as f32
        };

        let dt = input.stable_dt;
        DebugInput {
            toggle_menu: pressed(self.toggle),
            next_panel: pressed(self.next_panel),
            previous_panel: pressed(self.previous_panel),
            horizontal: self
                .horizontal
                .update(axis(egui::Key::ArrowRight, egui::Key::ArrowLeft), dt),
            vertical: self
                .vertical
                .update(axis(egui::Key::ArrowUp, egui::Key::ArrowDown), dt),
            validate: pressed(self.validate),
        }
    }
}
