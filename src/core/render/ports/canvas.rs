use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

/// Immediate-mode drawing surface in canvas coordinates.
///
/// Presenting the finished frame is the presenter's job, not the canvas's.
pub trait Canvas {
    fn clear(&mut self, colour: Colour);
    fn fill_rect(&mut self, top_left: Point, size: Point, colour: Colour);
    fn draw_line(&mut self, begin: Point, end: Point, colour: Colour);
}
