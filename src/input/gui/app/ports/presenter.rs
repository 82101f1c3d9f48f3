use egui::Context as EguiContext;
use winit::dpi::PhysicalPosition;

use crate::core::data::point::Point;
use crate::core::editor::session::Session;
use crate::core::render::render_frame::RenderStats;
use crate::core::render::theme::Theme;
use crate::input::gui::errors::GuiError;

pub trait GuiPresenterPort {
    /// Draws the session and the egui overlay, then presents the frame.
    fn render(
        &mut self,
        session: &mut Session,
        theme: &Theme,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<RenderStats, GuiError>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError>;
    /// Maps a window position onto the canvas, clamping positions outside it.
    fn window_to_canvas(&self, position: PhysicalPosition<f64>) -> Point;
}
