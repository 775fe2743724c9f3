use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use horologe_engine::camera::{PerspectiveCamera, TrackballControls};
use horologe_engine::core::{App as EngineApp, AppControl, FrameCtx};
use horologe_engine::device::GpuInit;
use horologe_engine::geometry::MeshLibrary;
use horologe_engine::input::Key;
use horologe_engine::render::MeshRenderer;
use horologe_engine::scene::Scene;
use horologe_engine::window::{Runtime, RuntimeConfig};

use crate::compose::{compose_clock, ClockDisplayState};
use crate::config::ClockConfig;
use crate::error::ConfigError;
use crate::stop::StopHandle;
use crate::ticks::TickLayout;
use crate::time::{SystemClock, TimeSource};

// ── ClockApplication ──────────────────────────────────────────────────────

/// Top-level clock builder.
///
/// ```rust,ignore
/// ClockApplication::new()
///     .title("Hamburg / Chisinau")
///     .size(900.0, 900.0)
///     .front_utc_offset(1)
///     .back_zone_offset(1)
///     .run()?;
/// ```
pub struct ClockApplication {
    title: String,
    width: f64,
    height: f64,
    config: ClockConfig,
    time_source: Option<Box<dyn TimeSource>>,
    stop: StopHandle,
}

impl ClockApplication {
    pub fn new() -> Self {
        Self {
            title: "horologe".to_string(),
            width: 900.0,
            height: 900.0,
            config: ClockConfig::default(),
            time_source: None,
            stop: StopHandle::new(),
        }
    }

    /// Set the window title prefix. The current time is appended each second.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Zone of the front face, in hours from UTC.
    pub fn front_utc_offset(mut self, hours: i32) -> Self {
        self.config.front_utc_offset_hours = hours;
        self
    }

    /// How many hours ahead of the front face the back face runs.
    pub fn back_zone_offset(mut self, hours: i32) -> Self {
        self.config.back_zone_offset_hours = hours;
        self
    }

    pub fn tick_layout(mut self, layout: TickLayout) -> Self {
        self.config.tick_layout = layout;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ClockConfig) -> Self {
        self.config = config;
        self
    }

    /// Read time from `source` instead of the system clock.
    ///
    /// The source reports front-face time; `front_utc_offset` is ignored.
    pub fn time_source(mut self, source: impl TimeSource + 'static) -> Self {
        self.time_source = Some(Box::new(source));
        self
    }

    /// A handle that stops the clock when triggered.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Validates the configuration and runs until the window closes, Escape
    /// is pressed or the stop handle fires.
    pub fn run(self) -> Result<()> {
        let config = RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
        };
        let state = self.into_state().context("invalid clock configuration")?;

        log::info!(
            "starting clock (front UTC{:+}, back UTC{:+})",
            state.config.front_utc_offset_hours,
            state.config.back_utc_offset_hours()
        );

        Runtime::run(config, GpuInit::default(), state)
    }

    fn into_state(self) -> Result<ClockState, ConfigError> {
        self.config.validate()?;
        let time: Box<dyn TimeSource> = match self.time_source {
            Some(source) => source,
            None => Box::new(SystemClock::new(self.config.front_utc_offset_hours)?),
        };
        Ok(ClockState::new(self.title, self.config, time, self.stop))
    }
}

impl Default for ClockApplication {
    fn default() -> Self {
        Self::new()
    }
}

// ── ClockState ────────────────────────────────────────────────────────────

/// Internal state that implements `horologe_engine::core::App`.
struct ClockState {
    title: String,
    config: ClockConfig,
    time: Box<dyn TimeSource>,
    stop: StopHandle,

    scene: Scene,
    meshes: MeshLibrary,
    display: ClockDisplayState,

    camera: PerspectiveCamera,
    controls: TrackballControls,
    renderer: MeshRenderer,

    title_dirty: bool,
}

impl ClockState {
    fn new(title: String, config: ClockConfig, time: Box<dyn TimeSource>, stop: StopHandle) -> Self {
        let mut scene = Scene::new();
        let mut meshes = MeshLibrary::new();
        let mut display = compose_clock(&mut scene, &mut meshes, &config);
        display.apply_initial(&mut scene, time.now());

        let camera = PerspectiveCamera::default();
        let controls = TrackballControls::new(&camera);

        Self {
            title,
            config,
            time,
            stop,
            scene,
            meshes,
            display,
            camera,
            controls,
            renderer: MeshRenderer::new(),
            title_dirty: true,
        }
    }

    /// Samples the clock and steps the hands on a second boundary.
    fn advance(&mut self) -> bool {
        let sample = self.time.now();
        let stepped = self.display.tick(&mut self.scene, sample);
        self.title_dirty |= stepped;
        stepped
    }

    fn window_title(&self) -> String {
        let front = self.time.now();
        let back = front.shift_hours(self.display.back_zone_offset_hours());
        format!("{} · {front} / {back}", self.title)
    }
}

impl EngineApp for ClockState {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.stop.is_stopped() || ctx.input_frame.key_pressed(Key::Escape) {
            log::info!("clock stopped");
            return AppControl::Exit;
        }

        if ctx.time.frame_index == 0 {
            log::debug!("first frame after {:?}", ctx.time.elapsed);
        }

        self.advance();
        if std::mem::take(&mut self.title_dirty) {
            ctx.runtime.set_title(self.window_title());
        }

        // ── Camera ────────────────────────────────────────────────────────
        let (w, h) = ctx.window.logical_size();
        self.camera.set_viewport(w, h);
        self.controls.handle_input(ctx.input, ctx.input_frame);
        self.controls.update(&mut self.camera, h);

        // ── Render ────────────────────────────────────────────────────────
        let view_projection = self.camera.view_projection();
        let scene = &self.scene;
        let meshes = &self.meshes;
        let renderer = &mut self.renderer;

        ctx.render(self.config.palette.background, |rctx, target| {
            renderer.render(rctx, target, scene, meshes, view_projection);
        })
    }
}
