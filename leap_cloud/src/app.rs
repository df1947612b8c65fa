//! Top-level application state and the render loop.
//!
//! `AppState` owns the `AnimationState` plus the little bit of UI state the
//! engine does not care about (which theme preset is active).  It applies
//! window controls, ticks the engine once per frame and lends the result to
//! the visualizer as a [`FrameView`].

use std::sync::Arc;

use cloud_morph::{AnimationState, AppSignal, Rgb, ScaleCell};
use cloud_shapes::ShapeKind;
use tracing::info;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::gesture::spawn_gesture_source;
use crate::visualizer::{FrameView, Visualizer};

// ════════════════════════════════════════════════════════════════════════════
// Controls
// ════════════════════════════════════════════════════════════════════════════

/// Scene-level commands from the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Shape(ShapeKind),
    NextTheme,
    Quit,
}

/// Hues (degrees) of the theme presets cycled by `C`.  The configured theme
/// comes first; these follow it.
pub const THEME_HUES: [f32; 6] = [330.0, 50.0, 110.0, 265.0, 15.0, 191.0];

pub fn theme_preset(i: usize) -> Rgb {
    Rgb::from_hsv(THEME_HUES[i % THEME_HUES.len()], 1.0, 1.0)
}

// ════════════════════════════════════════════════════════════════════════════
// AppState
// ════════════════════════════════════════════════════════════════════════════

pub struct AppState {
    cloud:        AnimationState,
    /// `None` while the configured theme is showing.
    theme_preset: Option<usize>,
    configured:   Rgb,
    /// Reused between frames.
    positions:    Vec<f32>,
}

impl AppState {
    pub fn new(cfg: &AppConfig) -> Result<Self, AppError> {
        let theme = cfg.theme_color()?;
        let cloud = match cfg.seed {
            Some(seed) => AnimationState::seeded(cfg.morph.clone(), cfg.shape, theme, seed)?,
            None       => AnimationState::new(cfg.morph.clone(), cfg.shape, theme)?,
        };
        let mut positions = Vec::with_capacity(cfg.morph.particle_count * 3);
        cloud.fill_particle_buffer(&mut positions);

        Ok(AppState {
            cloud,
            theme_preset: None,
            configured:   theme,
            positions,
        })
    }

    /// Apply one control.  Returns false when the app should quit.
    pub fn handle_control(&mut self, control: Control) -> bool {
        match control {
            Control::Shape(kind) => {
                self.cloud.set_shape(kind);
            }
            Control::NextTheme => {
                let next = self.theme_preset.map_or(0, |i| i + 1);
                // Wrap back to the configured colour after the last preset.
                if next >= THEME_HUES.len() {
                    self.theme_preset = None;
                    self.cloud.set_theme(self.configured);
                } else {
                    self.theme_preset = Some(next);
                    self.cloud.set_theme(theme_preset(next));
                }
            }
            Control::Quit => {
                info!("quit requested");
                return false;
            }
        }
        true
    }

    /// Advance one frame.
    pub fn tick(&mut self) -> AppSignal {
        let signal = self.cloud.tick();
        self.cloud.fill_particle_buffer(&mut self.positions);
        signal
    }

    pub fn frame(&self) -> FrameView<'_> {
        FrameView {
            positions:     &self.positions,
            sprites:       self.cloud.sprites(),
            rotation:      self.cloud.rotation(),
            theme:         self.cloud.theme(),
            particle_size: self.cloud.config().particle_size,
            signal:        self.cloud.signal(),
            shape:         self.cloud.shape(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn target_handle(&self) -> Arc<ScaleCell> { self.cloud.target_handle() }
    pub fn cloud(&self)         -> &AnimationState { &self.cloud }
}

// ════════════════════════════════════════════════════════════════════════════
// run(): the main application loop
// ════════════════════════════════════════════════════════════════════════════

/// Run the full application.
///
/// Creates the engine, the gesture source (simulation by default, hardware
/// with `--features leap`) and the window, then drives the
/// input/tick/render loop at ~60 fps until the window closes.
pub fn run(cfg: AppConfig) -> Result<(), AppError> {
    let mut app = AppState::new(&cfg)?;

    #[cfg(feature = "leap")]
    let sim_tx = {
        spawn_gesture_source(crate::gesture::LeapGestureSource, app.target_handle());
        None
    };
    #[cfg(not(feature = "leap"))]
    let sim_tx = {
        let (tx, rx) = std::sync::mpsc::channel();
        spawn_gesture_source(crate::gesture::SimGestureSource::new(rx), app.target_handle());
        Some(tx)
    };

    let mut vis = Visualizer::new(sim_tx)?;
    info!(shape = %cfg.shape, theme = %cfg.theme, "window open");

    while vis.is_open() {
        for control in vis.poll_input() {
            if !app.handle_control(control) {
                return Ok(());
            }
        }
        app.tick();
        vis.render(&app.frame())?;
    }

    Ok(())
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
