//! Simulated render pipeline feeding live bounds to the menu

use debugmenu_core::RenderPipelineStats;

/// Number of atlas slots the simulated renderer allocates
const ATLAS_SLOTS: u32 = 4;
/// Maximum shadow-casting lights in the simulated scene
const MAX_SHADOW_LIGHTS: u32 = 4;
/// Seconds between changes of the visible light count
const LIGHT_CYCLE_SECS: f32 = 2.0;

/// Renderer stand-in whose shadow count changes over time
#[derive(Debug, Default)]
pub struct SimulatedPipeline {
    elapsed: f32,
    shadows_enabled: bool,
}

impl SimulatedPipeline {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            shadows_enabled: true,
        }
    }

    /// Advance the simulation; disabled shadows process no lights
    pub fn advance(&mut self, dt: f32, shadows_enabled: bool) {
        self.elapsed += dt;
        self.shadows_enabled = shadows_enabled;
    }
}

impl RenderPipelineStats for SimulatedPipeline {
    fn shadow_atlas_count(&self) -> u32 {
        ATLAS_SLOTS
    }

    fn current_shadow_count(&self) -> u32 {
        if !self.shadows_enabled {
            return 0;
        }
        // Lights walk in and out of view: 1, 2, .., MAX, 1, ..
        let step = (self.elapsed / LIGHT_CYCLE_SECS) as u32;
        1 + step % MAX_SHADOW_LIGHTS
    }
}
