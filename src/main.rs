//! Raging Sea - an animated ocean surface
//!
//! A coarse cross-hatched swell with layered detail ripples, shaded from a
//! depth color to a surface color, with every knob on a live debug panel.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window, WindowId},
};

use ragingsea::camera::OrbitControls;
use ragingsea::cli::Args;
use ragingsea::error::{RenderError, RenderResult};
use ragingsea::frame::{self, FrameClock};
use ragingsea::gui::DebugPanel;
use ragingsea::ocean::OceanSystem;
use ragingsea::params::{OrbitSettings, RenderConfig, WaveParameters};
use ragingsea::rendering::{RenderSystem, WaveUniforms};

/// Event wait while there is nothing to draw (minimized window)
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Everything tied to the open window
struct Viewer {
    window: Arc<Window>,
    render_system: RenderSystem,
    panel: DebugPanel,
    controls: OrbitControls,
}

/// Main application state
struct App {
    config: RenderConfig,
    ocean: OceanSystem,
    viewer: Option<Viewer>,
    clock: FrameClock,
    vsync: bool,

    /// Startup failure, reported after the event loop exits
    fatal: Option<RenderError>,
}

impl App {
    fn new(config: RenderConfig, params: WaveParameters, vsync: bool) -> Self {
        let ocean = OceanSystem::new(&config, params);
        Self {
            config,
            ocean,
            viewer: None,
            clock: FrameClock::new(),
            vsync,
            fatal: None,
        }
    }

    fn create_viewer(&self, event_loop: &ActiveEventLoop) -> RenderResult<Viewer> {
        let window_attributes = Window::default_attributes()
            .with_title("Raging Sea")
            .with_inner_size(LogicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));
        let window = Arc::new(event_loop.create_window(window_attributes)?);

        let size = self
            .config
            .surface_size(window.inner_size(), window.scale_factor());
        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.ocean.grid,
            size,
            self.vsync,
        ))?;
        let panel = DebugPanel::new(
            &window,
            &render_system.device,
            render_system.format(),
            self.config.panel_open,
        );

        Ok(Viewer {
            window,
            render_system,
            panel,
            controls: OrbitControls::new(OrbitSettings::default()),
        })
    }

    /// Nothing to draw until the window exists and has a visible size
    fn is_idle(&self) -> bool {
        match &self.viewer {
            Some(viewer) => {
                let size = viewer.window.inner_size();
                size.width == 0 || size.height == 0
            }
            None => true,
        }
    }

    /// Render a single frame; returns false when the loop should stop
    fn render_frame(&mut self) -> bool {
        if self.is_idle() {
            return true;
        }
        let Some(viewer) = self.viewer.as_mut() else {
            return true;
        };

        let (time_s, _) = self.clock.tick();

        viewer.controls.camera.update();
        let view_proj = viewer
            .controls
            .camera
            .view_proj(viewer.render_system.aspect_ratio());

        // The panel edits the bundle before this frame's uniforms are packed
        let pixels_per_point = self.config.pixel_ratio(viewer.window.scale_factor()) as f32;
        let panel_frame = viewer
            .panel
            .run(&viewer.window, self.ocean.params_mut(), pixels_per_point);
        let uniforms = WaveUniforms::new(view_proj, self.ocean.params(), time_s);
        viewer.render_system.update_uniforms(&uniforms);

        let size = viewer.render_system.size();
        let size_in_pixels = [size.width, size.height];

        let panel = &mut viewer.panel;
        let result = viewer
            .render_system
            .render(|device, queue, encoder, view| {
                panel.paint(panel_frame, device, queue, encoder, view, size_in_pixels);
            });

        match result {
            Ok(()) => true,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                viewer.render_system.reconfigure();
                true
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                false
            }
            Err(e) => {
                log::warn!("Frame skipped: {:?}", e);
                true
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.viewer.is_some() {
            return; // Already initialized
        }

        match self.create_viewer(event_loop) {
            Ok(viewer) => {
                log::info!("Raging Sea is running (ESC to quit)");
                self.viewer = Some(viewer);
            }
            Err(e) => {
                self.fatal = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(viewer) = self.viewer.as_mut() else {
            return;
        };

        let consumed = viewer.panel.on_window_event(&viewer.window, &event);

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(physical_size) => {
                let size = self
                    .config
                    .surface_size(physical_size, viewer.window.scale_factor());
                viewer.render_system.resize(size);
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                let size = self
                    .config
                    .surface_size(viewer.window.inner_size(), scale_factor);
                viewer.render_system.resize(size);
            }
            ref pointer @ (WindowEvent::MouseInput { .. }
            | WindowEvent::CursorMoved { .. }
            | WindowEvent::CursorLeft { .. }
            | WindowEvent::MouseWheel { .. }) => {
                // Cursor coordinates are physical window pixels
                let height = viewer.window.inner_size().height as f32;
                if consumed || viewer.panel.wants_pointer() {
                    viewer.controls.cancel_drag();
                    // Keep the cursor position current so the next drag starts cleanly
                    if let WindowEvent::CursorMoved { position, .. } = pointer {
                        viewer.controls.cursor_moved(*position, height);
                    }
                } else {
                    viewer.controls.handle_event(pointer, height);
                }
            }
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.render_config();
    let params = args.wave_parameters();

    let mut pacer = frame::pacer_for(config.max_fps);
    let mut app = App::new(config, params, pacer.wants_vsync());
    let mut event_loop = EventLoop::new()?;

    loop {
        let timeout = if app.is_idle() { IDLE_POLL } else { Duration::ZERO };
        if let PumpStatus::Exit(code) = event_loop.pump_app_events(Some(timeout), &mut app) {
            if let Some(e) = app.fatal.take() {
                return Err(e.into());
            }
            log::info!("Event loop exited ({})", code);
            break;
        }

        if !app.render_frame() {
            break;
        }
        pacer.wait_for_next_frame();
    }

    Ok(())
}
