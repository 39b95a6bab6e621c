//! Shadow debug handlers bounded by live pipeline counts

use super::{DynamicBoundedHandler, RenderPipelineStats};

impl DynamicBoundedHandler {
    /// Index into the shadow atlas: `[0, shadow_atlas_count - 1]`
    pub fn shadow_atlas_index(initial_max: u32) -> Self {
        Self::new(0, i64::from(initial_max), |pipeline: &dyn RenderPipelineStats| {
            i64::from(pipeline.shadow_atlas_count()) - 1
        })
    }

    /// Index of a shadow-casting light: `[0, current_shadow_count - 1]`
    pub fn shadow_index(initial_max: u32) -> Self {
        Self::new(0, i64::from(initial_max), |pipeline: &dyn RenderPipelineStats| {
            i64::from(pipeline.current_shadow_count()) - 1
        })
    }
}
