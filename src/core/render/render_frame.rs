use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::editor::display_mode::DisplayMode;
use crate::core::editor::session::Session;
use crate::core::render::ports::canvas::Canvas;
use crate::core::render::theme::Theme;
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Curve markers or segments drawn.
    pub curve_primitives: usize,
    pub control_points: usize,
}

/// Draws a square of side `size` centred on `position`.
pub fn draw_marker<C: Canvas + ?Sized>(canvas: &mut C, position: Point, size: f32, colour: Colour) {
    let extent = Point::new(size, size);
    canvas.fill_rect(position - extent * 0.5, extent, colour);
}

/// Clears the canvas, draws the sampled curve (once enough control points
/// exist) and then every control point on top.
pub fn render_frame<C: Canvas + ?Sized>(
    session: &mut Session,
    theme: &Theme,
    canvas: &mut C,
) -> RenderStats {
    let marker_size = session.limits().marker_size;
    let mut stats = RenderStats::default();

    canvas.clear(theme.background);

    match session.display_mode() {
        DisplayMode::Markers => {
            if let Some(samples) = session.curve_samples() {
                for sample in samples {
                    draw_marker(canvas, sample, marker_size, theme.curve);
                    stats.curve_primitives += 1;
                }
            }
        }
        DisplayMode::Polyline => {
            if let Some(segments) = session.curve_segments() {
                for (begin, end) in segments {
                    canvas.draw_line(begin, end, theme.curve);
                    stats.curve_primitives += 1;
                }
            }
        }
    }

    for &point in session.control_points() {
        draw_marker(canvas, point, marker_size, theme.control_point);
        stats.control_points += 1;
    }

    trace!(
        "frame: {} curve primitives, {} control points",
        stats.curve_primitives, stats.control_points
    );

    stats
}
