//! Viewer application state and main loop

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use debugmenu_core::config::Config;
use debugmenu_core::lighting::{LightingDebugSettings, register_lighting_panel};
use debugmenu_core::{
    DebugContext, DebugItem, DebugItemFlags, DebugMenu, DebugPanel, RegistrationError,
    RenderPipelineStats, ValueAccessor, VisualTree, paint_overlay,
};
use eframe::egui;
use thiserror::Error;

use crate::bindings::KeyBindings;
use crate::pipeline::SimulatedPipeline;

/// Name of the read-only frame statistics panel
const STATS_PANEL: &str = "Stats";

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Panel registration failed: {0}")]
    Registration(#[from] RegistrationError),
    #[error("Event loop error: {0}")]
    EventLoop(String),
}

/// Values mirrored into the stats panel every frame
#[derive(Debug, Default)]
struct FrameStats {
    frame: Rc<Cell<u32>>,
    frame_time_ms: Rc<Cell<f32>>,
    shadow_count: Rc<Cell<u32>>,
}

impl FrameStats {
    fn panel(&self) -> DebugPanel {
        let flags = DebugItemFlags::READ_ONLY | DebugItemFlags::DYNAMIC;
        let mut panel = DebugPanel::new(STATS_PANEL);
        panel.register(DebugItem::with_default_handler(
            "Frame",
            ValueAccessor::from_cell(Rc::clone(&self.frame)),
            flags,
        ));
        panel.register(DebugItem::with_default_handler(
            "Frame Time (ms)",
            ValueAccessor::from_cell(Rc::clone(&self.frame_time_ms)),
            flags,
        ));
        panel.register(DebugItem::with_default_handler(
            "Shadow Lights",
            ValueAccessor::from_cell(Rc::clone(&self.shadow_count)),
            flags,
        ));
        panel
    }
}

/// Viewer application state
pub struct ViewerApp {
    config: Config,
    menu: DebugMenu,
    tree: VisualTree,
    bindings: KeyBindings,
    pipeline: SimulatedPipeline,
    settings: Rc<RefCell<LightingDebugSettings>>,
    stats: FrameStats,
}

impl ViewerApp {
    pub fn new(config: Config) -> Result<Self, ViewerError> {
        let settings = Rc::new(RefCell::new(LightingDebugSettings::default()));
        let stats = FrameStats::default();

        let mut menu = DebugMenu::new();
        menu.apply_config(&config.overlay);
        register_lighting_panel(menu.registry_mut(), &settings)?;
        menu.registry_mut().add_panel(stats.panel())?;

        let mut tree = VisualTree::new();
        menu.build_gui(&mut tree);
        tracing::info!("Registered {} debug panels", menu.registry().len());

        Ok(Self {
            bindings: KeyBindings::from_config(&config.input),
            config,
            menu,
            tree,
            pipeline: SimulatedPipeline::new(),
            settings,
            stats,
        })
    }

    /// Advance the simulation and mirror its numbers into the stats panel.
    ///
    /// A change in the live shadow count re-clamps every item, so indices
    /// never sit past the new range until the next edit.
    fn step_simulation(&mut self, dt: f32) {
        let enable_shadows = self.settings.borrow().enable_shadows;
        self.pipeline.advance(dt, enable_shadows);

        let shadow_count = self.pipeline.current_shadow_count();
        let bounds_changed = shadow_count != self.stats.shadow_count.get();
        self.stats.frame.set(self.stats.frame.get().wrapping_add(1));
        self.stats.frame_time_ms.set(dt * 1000.0);
        self.stats.shadow_count.set(shadow_count);

        if bounds_changed {
            tracing::debug!("Shadow count changed to {}, re-clamping", shadow_count);
            let ctx = DebugContext::new(&self.pipeline);
            self.menu.clamp_all(&mut self.tree, &ctx);
        }
    }

    /// Authoring view: one collapsible section per panel
    fn show_authoring(&mut self, ui: &mut egui::Ui) {
        let ctx = DebugContext::new(&self.pipeline);
        let names: Vec<String> = self
            .menu
            .registry()
            .panels()
            .iter()
            .map(|panel| panel.name().to_string())
            .collect();

        egui::ScrollArea::vertical().show(ui, |ui| {
            for name in &names {
                egui::CollapsingHeader::new(name.as_str())
                    .default_open(true)
                    .show(ui, |ui| {
                        self.menu.on_editor_gui(&mut self.tree, name, ui, &ctx);
                    });
            }
        });
    }

    /// Stand-in for the rendered frame: a summary of what the renderer would draw
    fn show_scene(&self, ui: &mut egui::Ui) {
        let settings = self.settings.borrow();
        ui.heading("Simulated scene");
        ui.label(format!(
            "Shadows: {} ({} lights)",
            if settings.enable_shadows { "on" } else { "off" },
            self.pipeline.current_shadow_count()
        ));
        if settings.is_debug_display_enabled() {
            ui.label(format!("Debug view: {:?}", settings.shadow_debug_mode));
            ui.label(format!("Lighting: {:?}", settings.lighting_debug_mode));
            ui.label(format!("Full screen: {:?}", settings.full_screen_debug_mode));
            ui.label(format!("Tiles: {:?}", settings.tile_debug));
        }
        if let Some(smoothness) = settings.smoothness_override() {
            ui.label(format!("Smoothness override: {:.2}", smoothness));
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = ctx.input(|i| i.stable_dt);
        self.step_simulation(dt);

        // Input first, then the dynamic refresh, so edits show this frame
        let input = ctx.input(|i| self.bindings.poll(i));
        let debug_ctx = DebugContext::new(&self.pipeline);
        self.menu.handle_input(&mut self.tree, &debug_ctx, &input);
        self.menu.update(&mut self.tree);

        if self.config.authoring.enabled {
            egui::SidePanel::right("authoring")
                .resizable(true)
                .default_width(320.0)
                .show(ctx, |ui| self.show_authoring(ui));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_scene(ui);
            if self.menu.is_visible()
                && let Some(root) = self.menu.root()
            {
                paint_overlay(ui, &self.tree, root);
            }
        });

        ctx.request_repaint();
    }
}

/// Run the viewer window
pub fn run(config: Config) -> Result<(), ViewerError> {
    tracing::info!("Starting debug menu viewer");

    let app = ViewerApp::new(config)?;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Debug Menu Viewer")
            .with_inner_size([960.0, 540.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Debug Menu Viewer",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| ViewerError::EventLoop(format!("eframe error: {}", e)))?;

    Ok(())
}
