//! Lighting debug settings and their modes

use crate::debug::DebugEnum;

/// Shadow map visualisation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowMapDebugMode {
    #[default]
    None = 0,
    VisualizeAtlas = 1,
    VisualizeShadowMap = 2,
}

impl DebugEnum for ShadowMapDebugMode {
    fn variants() -> &'static [Self] {
        &[Self::None, Self::VisualizeAtlas, Self::VisualizeShadowMap]
    }

    fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::VisualizeAtlas => "Visualize Atlas",
            Self::VisualizeShadowMap => "Visualize Shadow Map",
        }
    }

    fn ordinal(self) -> i32 {
        self as i32
    }
}

/// Lighting term isolated on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightingDebugMode {
    #[default]
    None = 0,
    DiffuseLighting = 1,
    SpecularLighting = 2,
}

impl DebugEnum for LightingDebugMode {
    fn variants() -> &'static [Self] {
        &[Self::None, Self::DiffuseLighting, Self::SpecularLighting]
    }

    fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::DiffuseLighting => "Diffuse Lighting",
            Self::SpecularLighting => "Specular Lighting",
        }
    }

    fn ordinal(self) -> i32 {
        self as i32
    }
}

/// Intermediate buffer shown full screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FullScreenDebugMode {
    #[default]
    None = 0,
    Ssao = 1,
    DeferredShadows = 2,
    ColorPyramid = 3,
    DepthPyramid = 4,
}

impl DebugEnum for FullScreenDebugMode {
    fn variants() -> &'static [Self] {
        &[
            Self::None,
            Self::Ssao,
            Self::DeferredShadows,
            Self::ColorPyramid,
            Self::DepthPyramid,
        ]
    }

    fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Ssao => "SSAO",
            Self::DeferredShadows => "Deferred Shadows",
            Self::ColorPyramid => "Color Pyramid",
            Self::DepthPyramid => "Depth Pyramid",
        }
    }

    fn ordinal(self) -> i32 {
        self as i32
    }
}

/// Light categories drawn by the tile debug view.
///
/// Ordinals are bit masks: punctual = 1, area = 2, environment = 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileDebug {
    #[default]
    None = 0,
    Punctual = 1,
    Area = 2,
    AreaAndPunctual = 3,
    Environment = 4,
    EnvironmentAndPunctual = 5,
    EnvironmentAndArea = 6,
    All = 7,
}

impl DebugEnum for TileDebug {
    fn variants() -> &'static [Self] {
        &[
            Self::None,
            Self::Punctual,
            Self::Area,
            Self::AreaAndPunctual,
            Self::Environment,
            Self::EnvironmentAndPunctual,
            Self::EnvironmentAndArea,
            Self::All,
        ]
    }

    fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Punctual => "Punctual",
            Self::Area => "Area",
            Self::AreaAndPunctual => "Area and Punctual",
            Self::Environment => "Environment",
            Self::EnvironmentAndPunctual => "Environment and Punctual",
            Self::EnvironmentAndArea => "Environment and Area",
            Self::All => "All",
        }
    }

    fn ordinal(self) -> i32 {
        self as i32
    }
}

/// Lighting debug state read by the renderer every frame
#[derive(Debug, Clone, PartialEq)]
pub struct LightingDebugSettings {
    pub enable_shadows: bool,
    pub shadow_debug_mode: ShadowMapDebugMode,
    /// Visualise the shadow map of the selected light instead of by index
    pub shadow_debug_use_selection: bool,
    pub shadow_map_index: u32,
    pub shadow_atlas_index: u32,
    /// Remap range for shadow map visualisation
    pub shadow_min_value: f32,
    pub shadow_max_value: f32,
    pub lighting_debug_mode: LightingDebugMode,
    pub override_smoothness: bool,
    pub override_smoothness_value: f32,
    pub full_screen_debug_mode: FullScreenDebugMode,
    pub tile_debug: TileDebug,
    pub display_sky_reflection: bool,
    /// Normalised mip level of the sky reflection probe
    pub sky_reflection_mipmap: f32,
}

impl Default for LightingDebugSettings {
    fn default() -> Self {
        Self {
            enable_shadows: true,
            shadow_debug_mode: ShadowMapDebugMode::None,
            shadow_debug_use_selection: false,
            shadow_map_index: 0,
            shadow_atlas_index: 0,
            shadow_min_value: 0.0,
            shadow_max_value: 1.0,
            lighting_debug_mode: LightingDebugMode::None,
            override_smoothness: false,
            override_smoothness_value: 0.5,
            full_screen_debug_mode: FullScreenDebugMode::None,
            tile_debug: TileDebug::None,
            display_sky_reflection: false,
            sky_reflection_mipmap: 0.0,
        }
    }
}

impl LightingDebugSettings {
    /// True if any debug visualisation is active
    pub fn is_debug_display_enabled(&self) -> bool {
        self.shadow_debug_mode != ShadowMapDebugMode::None
            || self.lighting_debug_mode != LightingDebugMode::None
            || self.full_screen_debug_mode != FullScreenDebugMode::None
            || self.tile_debug != TileDebug::None
            || self.display_sky_reflection
    }

    /// Smoothness the lighting pass should use, if overridden
    pub fn smoothness_override(&self) -> Option<f32> {
        (self.lighting_debug_mode == LightingDebugMode::SpecularLighting
            && self.override_smoothness)
            .then_some(self.override_smoothness_value)
    }
}
