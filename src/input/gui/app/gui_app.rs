use std::time::Instant;

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{info, trace};
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::Window,
};

use crate::core::editor::input::EditorInput;
use crate::core::editor::session::Session;
use crate::core::render::render_frame::RenderStats;
use crate::core::render::theme::Theme;
use crate::core::timing::frame_pacer::FramePacer;
use crate::core::timing::frame_timing::FrameTiming;
use crate::input::gui::app::editor_input::EditorInputState;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    scale_factor: f64,
    presenter: T,
    session: Session,
    theme: Theme,
    input: EditorInputState,
    pacer: FramePacer,
    last_stats: RenderStats,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        session: Session,
        timing: FrameTiming,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            session,
            theme: Theme::default(),
            input: EditorInputState::default(),
            pacer: FramePacer::new(timing.frame_duration(), Instant::now()),
            last_stats: RenderStats::default(),
            egui_ctx,
            egui_state,
        }
    }

    /// Runs until the window is closed or a platform call fails.
    ///
    /// A failure stops the loop and is returned for the caller to report.
    pub fn run(
        mut self,
        event_loop: EventLoop<()>,
        window: &'static Window,
    ) -> Result<(), GuiError> {
        let mut fatal: Option<GuiError> = None;

        event_loop
            .run(|event, elwt| match event {
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    // Forward event to egui first
                    let egui_consumed = self.handle_window_event(window, event);

                    let result = match event {
                        WindowEvent::CloseRequested => {
                            info!("close requested, shutting down");
                            elwt.exit();
                            Ok(())
                        }
                        WindowEvent::RedrawRequested => self.redraw(window),
                        WindowEvent::Resized(size) => self.resize(size.width, size.height),
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            self.scale_factor = *scale_factor;
                            self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                            // Get the new physical size after scale factor change
                            let size = window.inner_size();
                            self.resize(size.width, size.height)
                        }
                        other => {
                            self.handle_editor_event(other, egui_consumed);
                            Ok(())
                        }
                    };

                    if let Err(e) = result {
                        fatal = Some(e);
                        elwt.exit();
                    }
                }
                Event::AboutToWait => {
                    if self.pacer.poll(Instant::now()) {
                        window.request_redraw();
                    }
                    elwt.set_control_flow(ControlFlow::WaitUntil(self.pacer.deadline()));
                }
                _ => {}
            })
            .map_err(GuiError::EventLoop)?;

        match fatal {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn redraw(&mut self, window: &Window) -> Result<(), GuiError> {
        // Skip rendering for invalid size (e.g., minimized window)
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        let mut egui_output = self.update_ui(window);

        // Handle egui platform output (e.g., clipboard, cursor changes)
        self.egui_state
            .handle_platform_output(window, std::mem::take(&mut egui_output.platform_output));

        self.last_stats = self.presenter.render(
            &mut self.session,
            &self.theme,
            egui_output,
            &self.egui_ctx,
        )?;

        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        info!("window resized to {}x{}", width, height);
        self.presenter.resize(width, height)
    }

    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let mut requested: Option<EditorInput> = None;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Debug Panel")
                .default_pos([10.0, 10.0])
                .default_size([220.0, 220.0])
                .show(ctx, |ui| {
                    ui.heading("Bezier Curves");
                    ui.separator();

                    ui.label(format!(
                        "Control points: {}/{}",
                        self.session.point_count(),
                        self.session.capacity()
                    ));
                    ui.label(format!("Sampling step: {:.3}", self.session.step()));
                    ui.label(format!(
                        "Display mode: {}",
                        self.session.display_mode().display_name()
                    ));
                    match self.session.selected() {
                        Some(index) => ui.label(format!("Dragging point {}", index)),
                        None => ui.label("Dragging: none"),
                    };
                    ui.label(format!(
                        "Curve primitives: {}",
                        self.last_stats.curve_primitives
                    ));

                    ui.separator();
                    ui.horizontal(|ui| {
                        if ui.button("Toggle mode").clicked() {
                            requested = Some(EditorInput::ToggleDisplayMode);
                        }
                        if ui.button("Clear points").clicked() {
                            requested = Some(EditorInput::Clear);
                        }
                    });

                    ui.separator();
                    match self.input.cursor() {
                        Some(cursor) => {
                            ui.label(format!("Cursor: ({:.0}, {:.0})", cursor.x, cursor.y))
                        }
                        None => ui.label("Cursor: outside"),
                    };
                    ui.label(format!(
                        "Frame interval: {} ms",
                        self.pacer.interval().as_millis()
                    ));
                    ui.label(format!("Window size: {}x{}", self.width, self.height));
                    ui.label(format!("Scale factor: {:.2}", self.scale_factor));
                });
        });

        if let Some(input) = requested {
            self.apply(input);
        }

        output
    }

    /// Returns true if egui consumed the event (e.g., click on UI element).
    fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(window, event);
        response.consumed
    }

    /// Releases always reach the session so a drag cannot get stuck under the
    /// overlay; other pointer and key input is dropped when egui consumed it.
    fn handle_editor_event(&mut self, event: &WindowEvent, egui_consumed: bool) {
        let input = match event {
            WindowEvent::CursorMoved { position, .. } => {
                let canvas_position = self.presenter.window_to_canvas(*position);
                Some(self.input.cursor_moved(canvas_position))
            }
            WindowEvent::CursorLeft { .. } => {
                self.input.cursor_left();
                None
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if egui_consumed && *state == ElementState::Pressed {
                    None
                } else {
                    self.input.mouse_button(*button, *state)
                }
            }
            WindowEvent::MouseWheel { delta, .. } if !egui_consumed => {
                Some(self.input.mouse_wheel(*delta))
            }
            WindowEvent::KeyboardInput { event, .. } if !egui_consumed => {
                match event.physical_key {
                    PhysicalKey::Code(key_code) => {
                        self.input.key(key_code, event.state, event.repeat)
                    }
                    PhysicalKey::Unidentified(_) => None,
                }
            }
            _ => None,
        };

        if let Some(input) = input {
            self.apply(input);
        }
    }

    fn apply(&mut self, input: EditorInput) {
        let outcome = self.session.apply(input);
        trace!("{:?} -> {:?}", input, outcome);
    }
}
