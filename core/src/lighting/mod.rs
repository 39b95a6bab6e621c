//! Lighting debug panel
//!
//! Shadow and lighting debug settings exposed as the "Lighting" panel. The
//! live overlay lists every item; the authoring view only shows the items
//! relevant to the current modes (see [`LightingLayout`]).

mod settings;

pub use settings::{
    FullScreenDebugMode, LightingDebugMode, LightingDebugSettings, ShadowMapDebugMode, TileDebug,
};

use std::cell::RefCell;
use std::rc::Rc;

use crate::authoring::InlineEditor;
use crate::debug::panel::find_item_mut;
use crate::debug::{
    BoundedFloatHandler, DebugContext, DebugEnum, DebugItem, DebugItemFlags, DebugMenuRegistry,
    DebugPanel, DynamicBoundedHandler, EnumHandler, PanelLayout, RegistrationError, ToggleHandler,
    ValueAccessor,
};

/// Name of the lighting panel
pub const PANEL_NAME: &str = "Lighting";

/// Item names, in registration order
pub mod keys {
    pub const ENABLE_SHADOWS: &str = "Enable Shadows";
    pub const SHADOW_DEBUG_MODE: &str = "Shadow Debug Mode";
    pub const SHADOW_SELECTION: &str = "Use Selection";
    pub const SHADOW_MAP_INDEX: &str = "Shadow Map Index";
    pub const SHADOW_ATLAS_INDEX: &str = "Shadow Atlas Index";
    pub const SHADOW_MIN_VALUE: &str = "Shadow Range Min";
    pub const SHADOW_MAX_VALUE: &str = "Shadow Range Max";
    pub const LIGHTING_DEBUG_MODE: &str = "Lighting Debug Mode";
    pub const OVERRIDE_SMOOTHNESS: &str = "Override Smoothness";
    pub const OVERRIDE_SMOOTHNESS_VALUE: &str = "Override Smoothness Value";
    pub const FULL_SCREEN_DEBUG_MODE: &str = "Fullscreen Debug Mode";
    pub const TILE_DEBUG: &str = "Tile Debug";
    pub const DISPLAY_SKY_REFLECTION: &str = "Display Sky Reflection";
    pub const SKY_REFLECTION_MIPMAP: &str = "Sky Reflection Mipmap";
}

/// Register the lighting panel, bound to `settings`
pub fn register_lighting_panel(
    registry: &mut DebugMenuRegistry,
    settings: &Rc<RefCell<LightingDebugSettings>>,
) -> Result<(), RegistrationError> {
    let mut panel = DebugPanel::with_layout(PANEL_NAME, LightingLayout);
    let none = DebugItemFlags::empty();

    let items = [
        DebugItem::new(
            keys::ENABLE_SHADOWS,
            ValueAccessor::field(settings, |s| s.enable_shadows, |s, v| s.enable_shadows = v),
            none,
            ToggleHandler,
        ),
        DebugItem::new(
            keys::SHADOW_DEBUG_MODE,
            ValueAccessor::enum_field(
                settings,
                |s| s.shadow_debug_mode,
                |s, v| s.shadow_debug_mode = v,
            ),
            none,
            EnumHandler::for_enum::<ShadowMapDebugMode>(),
        ),
        DebugItem::new(
            keys::SHADOW_SELECTION,
            ValueAccessor::field(
                settings,
                |s| s.shadow_debug_use_selection,
                |s, v| s.shadow_debug_use_selection = v,
            ),
            none,
            ToggleHandler,
        ),
        DebugItem::new(
            keys::SHADOW_MAP_INDEX,
            ValueAccessor::field(settings, |s| s.shadow_map_index, |s, v| s.shadow_map_index = v),
            none,
            DynamicBoundedHandler::shadow_index(0),
        ),
        DebugItem::new(
            keys::SHADOW_ATLAS_INDEX,
            ValueAccessor::field(
                settings,
                |s| s.shadow_atlas_index,
                |s, v| s.shadow_atlas_index = v,
            ),
            none,
            DynamicBoundedHandler::shadow_atlas_index(0),
        ),
        DebugItem::new(
            keys::SHADOW_MIN_VALUE,
            ValueAccessor::field(settings, |s| s.shadow_min_value, |s, v| s.shadow_min_value = v),
            none,
            BoundedFloatHandler::new(0.0, 1.0).with_step(0.01),
        ),
        DebugItem::new(
            keys::SHADOW_MAX_VALUE,
            ValueAccessor::field(settings, |s| s.shadow_max_value, |s, v| s.shadow_max_value = v),
            none,
            BoundedFloatHandler::new(0.0, 1.0).with_step(0.01),
        ),
        DebugItem::new(
            keys::LIGHTING_DEBUG_MODE,
            ValueAccessor::enum_field(
                settings,
                |s| s.lighting_debug_mode,
                |s, v| s.lighting_debug_mode = v,
            ),
            none,
            EnumHandler::for_enum::<LightingDebugMode>(),
        ),
        DebugItem::new(
            keys::OVERRIDE_SMOOTHNESS,
            ValueAccessor::field(
                settings,
                |s| s.override_smoothness,
                |s, v| s.override_smoothness = v,
            ),
            none,
            ToggleHandler,
        ),
        DebugItem::new(
            keys::OVERRIDE_SMOOTHNESS_VALUE,
            ValueAccessor::field(
                settings,
                |s| s.override_smoothness_value,
                |s, v| s.override_smoothness_value = v,
            ),
            none,
            BoundedFloatHandler::new(0.0, 1.0).with_step(0.05),
        ),
        DebugItem::new(
            keys::FULL_SCREEN_DEBUG_MODE,
            ValueAccessor::enum_field(
                settings,
                |s| s.full_screen_debug_mode,
                |s, v| s.full_screen_debug_mode = v,
            ),
            none,
            EnumHandler::for_enum::<FullScreenDebugMode>(),
        ),
        DebugItem::new(
            keys::TILE_DEBUG,
            ValueAccessor::enum_field(settings, |s| s.tile_debug, |s, v| s.tile_debug = v),
            none,
            EnumHandler::for_enum::<TileDebug>(),
        ),
        DebugItem::new(
            keys::DISPLAY_SKY_REFLECTION,
            ValueAccessor::field(
                settings,
                |s| s.display_sky_reflection,
                |s, v| s.display_sky_reflection = v,
            ),
            none,
            ToggleHandler,
        ),
        DebugItem::new(
            keys::SKY_REFLECTION_MIPMAP,
            ValueAccessor::field(
                settings,
                |s| s.sky_reflection_mipmap,
                |s, v| s.sky_reflection_mipmap = v,
            ),
            none,
            BoundedFloatHandler::new(0.0, 1.0).with_step(0.05),
        ),
    ];
    for item in items {
        panel.try_register(item)?;
    }

    registry.add_panel(panel)?;
    Ok(())
}

/// Authoring layout showing only the items relevant to the current modes.
///
/// - Shadow map index: shadow map visualisation without selection
/// - Shadow atlas index: atlas visualisation
/// - Smoothness override: specular lighting (value only when enabled)
/// - Sky reflection mip: sky reflection displayed
#[derive(Debug, Clone, Copy, Default)]
pub struct LightingLayout;

impl PanelLayout for LightingLayout {
    fn render_inline(
        &mut self,
        items: &mut [DebugItem],
        editor: &mut dyn InlineEditor,
        ctx: &DebugContext<'_>,
    ) -> bool {
        let mut changed = false;
        editor.vertical_group(&mut |editor| {
            changed |= draw(items, keys::ENABLE_SHADOWS, editor, ctx);

            changed |= draw(items, keys::SHADOW_DEBUG_MODE, editor, ctx);
            let shadow_mode = enum_value::<ShadowMapDebugMode>(items, keys::SHADOW_DEBUG_MODE);
            if shadow_mode == Some(ShadowMapDebugMode::VisualizeShadowMap) {
                editor.indented("shadow_map", &mut |editor| {
                    changed |= draw(items, keys::SHADOW_SELECTION, editor, ctx);
                    if !bool_value(items, keys::SHADOW_SELECTION) {
                        changed |= draw(items, keys::SHADOW_MAP_INDEX, editor, ctx);
                    }
                });
            }
            if shadow_mode == Some(ShadowMapDebugMode::VisualizeAtlas) {
                editor.indented("shadow_atlas", &mut |editor| {
                    changed |= draw(items, keys::SHADOW_ATLAS_INDEX, editor, ctx);
                });
            }
            changed |= draw(items, keys::SHADOW_MIN_VALUE, editor, ctx);
            changed |= draw(items, keys::SHADOW_MAX_VALUE, editor, ctx);

            changed |= draw(items, keys::LIGHTING_DEBUG_MODE, editor, ctx);
            let lighting_mode = enum_value::<LightingDebugMode>(items, keys::LIGHTING_DEBUG_MODE);
            if lighting_mode == Some(LightingDebugMode::SpecularLighting) {
                editor.indented("smoothness", &mut |editor| {
                    changed |= draw(items, keys::OVERRIDE_SMOOTHNESS, editor, ctx);
                    if bool_value(items, keys::OVERRIDE_SMOOTHNESS) {
                        changed |= draw(items, keys::OVERRIDE_SMOOTHNESS_VALUE, editor, ctx);
                    }
                });
            }

            changed |= draw(items, keys::FULL_SCREEN_DEBUG_MODE, editor, ctx);
            changed |= draw(items, keys::TILE_DEBUG, editor, ctx);

            changed |= draw(items, keys::DISPLAY_SKY_REFLECTION, editor, ctx);
            if bool_value(items, keys::DISPLAY_SKY_REFLECTION) {
                editor.indented("sky_reflection", &mut |editor| {
                    changed |= draw(items, keys::SKY_REFLECTION_MIPMAP, editor, ctx);
                });
            }
        });
        changed
    }
}

fn draw(
    items: &mut [DebugItem],
    name: &str,
    editor: &mut dyn InlineEditor,
    ctx: &DebugContext<'_>,
) -> bool {
    match find_item_mut(items, name) {
        Some(item) => item.render_inline(editor, ctx),
        None => {
            tracing::trace!("debug: lighting item '{}' not registered", name);
            false
        }
    }
}

fn bool_value(items: &[DebugItem], name: &str) -> bool {
    items
        .iter()
        .find(|item| item.name() == name)
        .is_some_and(|item| item.value().as_bool())
}

fn enum_value<E: DebugEnum>(items: &[DebugItem], name: &str) -> Option<E> {
    items
        .iter()
        .find(|item| item.name() == name)
        .and_then(|item| E::from_ordinal(item.value().as_i64() as i32))
}
