//! Debug panel: live controls for the wave parameters.

use egui::epaint::ClippedPrimitive;
use egui::TexturesDelta;
use egui_wgpu::ScreenDescriptor;
use winit::event::WindowEvent;
use winit::window::Window;

use crate::ocean::SrgbColor;
use crate::params::{controls, ControlSpec, WaveParameters};

const PANEL_WIDTH: f32 = 340.0;

/// Tessellated panel output waiting to be painted
pub struct PanelFrame {
    paint_jobs: Vec<ClippedPrimitive>,
    textures_delta: TexturesDelta,
    pixels_per_point: f32,
}

impl PanelFrame {
    fn tessellate(ctx: &egui::Context, output: egui::FullOutput) -> Self {
        Self {
            paint_jobs: ctx.tessellate(output.shapes, output.pixels_per_point),
            textures_delta: output.textures_delta,
            pixels_per_point: output.pixels_per_point,
        }
    }

    /// Screen description for painting at the density this frame was tessellated for
    pub fn screen_descriptor(&self, size_in_pixels: [u32; 2]) -> ScreenDescriptor {
        ScreenDescriptor {
            size_in_pixels,
            pixels_per_point: self.pixels_per_point,
        }
    }
}

/// egui context, winit input state and wgpu renderer for the debug panel
pub struct DebugPanel {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
    open: bool,
}

impl DebugPanel {
    pub fn new(
        window: &Window,
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        open: bool,
    ) -> Self {
        let ctx = egui::Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            window.theme(),
            Some(device.limits().max_texture_dimension_2d as usize),
        );
        // The panel pass has no depth attachment
        let renderer = egui_wgpu::Renderer::new(device, format, None, 1, false);

        Self {
            ctx,
            state,
            renderer,
            open,
        }
    }

    /// Forward a window event; returns true when the panel consumed it
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Whether the pointer is over the panel or dragging one of its widgets
    pub fn wants_pointer(&self) -> bool {
        self.ctx.wants_pointer_input() || self.ctx.is_pointer_over_area()
    }

    /// Lay out the panel for this frame, editing `params` in place.
    ///
    /// `pixels_per_point` is the (capped) density of the render surface.
    pub fn run(
        &mut self,
        window: &Window,
        params: &mut WaveParameters,
        pixels_per_point: f32,
    ) -> PanelFrame {
        let mut raw_input = self.state.take_egui_input(window);
        set_native_density(&mut raw_input, pixels_per_point);
        let open = self.open;
        let mut changed = false;
        let mut full_output = self.ctx.run(raw_input, |ctx| {
            changed |= show_panel(ctx, params, open);
        });
        if changed {
            log::trace!("Wave parameters edited: {:?}", params);
        }
        let platform_output = std::mem::take(&mut full_output.platform_output);
        self.state.handle_platform_output(window, platform_output);

        PanelFrame::tessellate(&self.ctx, full_output)
    }

    /// Record the panel pass on top of `view`
    pub fn paint(
        &mut self,
        frame: PanelFrame,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        size_in_pixels: [u32; 2],
    ) {
        let screen = frame.screen_descriptor(size_in_pixels);
        for (id, image_delta) in &frame.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, image_delta);
        }

        let user_buffers =
            self.renderer
                .update_buffers(device, queue, encoder, &frame.paint_jobs, &screen);
        if !user_buffers.is_empty() {
            queue.submit(user_buffers);
        }

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Debug Panel Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                })
                .forget_lifetime();
            self.renderer
                .render(&mut render_pass, &frame.paint_jobs, &screen);
        }

        for id in &frame.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}

/// Lay out and rasterize at the render surface density, which may be capped
/// below the display's. Pointer positions stay in logical points.
fn set_native_density(raw_input: &mut egui::RawInput, pixels_per_point: f32) {
    raw_input
        .viewports
        .entry(raw_input.viewport_id)
        .or_default()
        .native_pixels_per_point = Some(pixels_per_point);
}

/// Top-level panel window with the three control folders
pub fn show_panel(ctx: &egui::Context, params: &mut WaveParameters, open: bool) -> bool {
    let mut changed = false;
    egui::Window::new("Controls")
        .default_open(open)
        .default_width(PANEL_WIDTH)
        .anchor(egui::Align2::RIGHT_TOP, [-8.0, 8.0])
        .resizable(false)
        .show(ctx, |ui| {
            changed = draw_controls(ui, params, open);
        });
    changed
}

/// All parameter widgets; returns true if any value changed
pub fn draw_controls(ui: &mut egui::Ui, params: &mut WaveParameters, open: bool) -> bool {
    let mut changed = false;

    egui::CollapsingHeader::new("waveControls")
        .default_open(open)
        .show(ui, |ui| {
            changed |= slider(ui, &mut params.waves_elevation, controls::WAVES_ELEVATION);
            changed |= slider(ui, &mut params.waves_frequency[0], controls::WAVES_FREQUENCY_X);
            changed |= slider(ui, &mut params.waves_frequency[1], controls::WAVES_FREQUENCY_Y);
            changed |= slider(ui, &mut params.waves_speed, controls::WAVES_SPEED);
        });

    egui::CollapsingHeader::new("smallWavesControls")
        .default_open(open)
        .show(ui, |ui| {
            changed |= slider(
                ui,
                &mut params.small_waves_elevation,
                controls::SMALL_WAVES_ELEVATION,
            );
            changed |= slider(
                ui,
                &mut params.small_waves_frequency,
                controls::SMALL_WAVES_FREQUENCY,
            );
            changed |= slider(ui, &mut params.small_waves_speed, controls::SMALL_WAVES_SPEED);
            changed |= slider(
                ui,
                &mut params.small_waves_iterations,
                controls::SMALL_WAVES_ITERATIONS,
            );
        });

    egui::CollapsingHeader::new("wavesColorsAndShapes")
        .default_open(open)
        .show(ui, |ui| {
            changed |= color(ui, &mut params.depth_color, "Depth Color");
            changed |= color(ui, &mut params.surface_color, "Surface Color");
            changed |= slider(ui, &mut params.color_offset, controls::COLOR_OFFSET);
            changed |= slider(ui, &mut params.color_multiplier, controls::COLOR_MULTIPLIER);
        });

    if changed {
        params.clamp_to_controls();
    }
    changed
}

fn slider(ui: &mut egui::Ui, value: &mut f32, spec: ControlSpec) -> bool {
    ui.add(
        egui::Slider::new(value, spec.range())
            .step_by(spec.step as f64)
            .max_decimals(4)
            .text(spec.label),
    )
    .changed()
}

fn color(ui: &mut egui::Ui, value: &mut SrgbColor, label: &str) -> bool {
    ui.horizontal(|ui| {
        let changed = ui.color_edit_button_srgb(&mut value.0).changed();
        ui.label(label);
        changed
    })
    .inner
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_once(params: &mut WaveParameters, open: bool) -> bool {
        let ctx = egui::Context::default();
        let mut changed = false;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            changed = show_panel(ctx, params, open);
        });
        changed
    }

    #[test]
    fn test_panel_without_input_leaves_params() {
        for open in [false, true] {
            let mut params = WaveParameters::default();
            let changed = run_once(&mut params, open);
            assert!(!changed);
            assert_eq!(params, WaveParameters::default());
        }
    }

    #[test]
    fn test_controls_draw_in_any_panel_state() {
        let ctx = egui::Context::default();
        let mut params = WaveParameters::default();
        for _ in 0..3 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    draw_controls(ui, &mut params, true);
                });
            });
        }
        assert_eq!(params, WaveParameters::default());
    }

    const SCREEN: egui::Vec2 = egui::vec2(800.0, 600.0);

    fn input(events: Vec<egui::Event>) -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, SCREEN)),
            events,
            ..Default::default()
        }
    }

    fn button(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    /// Press at `start` and drag to the right edge of the screen
    fn drag_right(params: &mut WaveParameters, start: egui::Pos2) -> bool {
        let ctx = egui::Context::default();
        let end = egui::pos2(SCREEN.x - 1.0, start.y);
        let frames = [
            vec![],
            vec![],
            vec![],
            vec![egui::Event::PointerMoved(start)],
            vec![button(start, true)],
            vec![egui::Event::PointerMoved(egui::pos2(start.x + 40.0, start.y))],
            vec![egui::Event::PointerMoved(end)],
            vec![button(end, false)],
            vec![],
        ];

        let mut changed = false;
        for events in frames {
            let _ = ctx.run(input(events), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    changed |= draw_controls(ui, params, true);
                });
            });
        }
        changed
    }

    #[test]
    fn test_slider_drag_edits_live_params_within_range() {
        let mut edited = Vec::new();
        for y in (0..560).step_by(3) {
            let mut params = WaveParameters::default();
            let changed = drag_right(&mut params, egui::pos2(60.0, y as f32));
            if params != WaveParameters::default() {
                assert!(changed, "edit at y={} was not reported", y);
                let mut clamped = params.clone();
                clamped.clamp_to_controls();
                assert_eq!(params, clamped);
                edited.push(params);
            }
        }

        // Dragging past the end of a rail lands on the control maximum
        assert!(edited
            .iter()
            .any(|p| p.waves_elevation == controls::WAVES_ELEVATION.max));
        assert!(edited
            .iter()
            .any(|p| p.small_waves_iterations == controls::SMALL_WAVES_ITERATIONS.max));
        assert!(edited
            .iter()
            .all(|p| p.small_waves_iterations <= controls::SMALL_WAVES_ITERATIONS.max));
    }

    #[test]
    fn test_frame_paints_at_capped_density() {
        let ctx = egui::Context::default();
        let mut params = WaveParameters::default();
        let mut raw_input = input(vec![]);
        set_native_density(&mut raw_input, 2.0);
        let output = ctx.run(raw_input, |ctx| {
            show_panel(ctx, &mut params, true);
        });
        assert_eq!(output.pixels_per_point, 2.0);

        let frame = PanelFrame::tessellate(&ctx, output);
        assert!(!frame.paint_jobs.is_empty());
        let screen = frame.screen_descriptor([2560, 1440]);
        assert_eq!(screen.pixels_per_point, 2.0);
        assert_eq!(screen.size_in_pixels, [2560, 1440]);
    }
}
