use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::render::ports::canvas::Canvas;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameBufferError {
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch {
                width,
                height,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "frame of {} bytes does not match {}x{} RGBA ({} bytes)",
                    actual, width, height, expected
                )
            }
        }
    }
}

impl Error for FrameBufferError {}

/// Software rasterizer over an RGBA8 frame.
///
/// Coordinates are floored to whole pixels and everything outside the frame is
/// clipped.
pub struct FrameBuffer<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Result<Self, FrameBufferError> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;

        if frame.len() != expected {
            return Err(FrameBufferError::SizeMismatch {
                width,
                height,
                expected,
                actual: frame.len(),
            });
        }

        Ok(Self {
            frame,
            width,
            height,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let bytes = &self.frame[index..index + BYTES_PER_PIXEL];

        Some(Colour {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
            a: bytes[3],
        })
    }

    fn put_pixel(&mut self, x: i64, y: i64, rgba: [u8; 4]) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }

        let index = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        self.frame[index..index + BYTES_PER_PIXEL].copy_from_slice(&rgba);
    }

    /// Clips the segment to the frame rectangle (Liang-Barsky).
    fn clip_line(&self, begin: (f64, f64), end: (f64, f64)) -> Option<((i64, i64), (i64, i64))> {
        if self.width == 0 || self.height == 0 {
            return None;
        }

        let max_x = f64::from(self.width - 1);
        let max_y = f64::from(self.height - 1);
        let dx = end.0 - begin.0;
        let dy = end.1 - begin.1;

        let mut t0: f64 = 0.0;
        let mut t1: f64 = 1.0;

        for (p, q) in [
            (-dx, begin.0),
            (dx, max_x - begin.0),
            (-dy, begin.1),
            (dy, max_y - begin.1),
        ] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }

            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }

            if t0 > t1 {
                return None;
            }
        }

        let clipped_begin = (
            (begin.0 + dx * t0).round() as i64,
            (begin.1 + dy * t0).round() as i64,
        );
        let clipped_end = (
            (begin.0 + dx * t1).round() as i64,
            (begin.1 + dy * t1).round() as i64,
        );

        Some((clipped_begin, clipped_end))
    }
}

fn floor_to_pixel(value: f32) -> f64 {
    if value.is_finite() {
        f64::from(value.floor())
    } else {
        0.0
    }
}

impl Canvas for FrameBuffer<'_> {
    fn clear(&mut self, colour: Colour) {
        let rgba = colour.to_rgba();

        for pixel in self.frame.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&rgba);
        }
    }

    fn fill_rect(&mut self, top_left: Point, size: Point, colour: Colour) {
        let rgba = colour.to_rgba();
        let x0 = floor_to_pixel(top_left.x) as i64;
        let y0 = floor_to_pixel(top_left.y) as i64;
        let w = floor_to_pixel(size.x) as i64;
        let h = floor_to_pixel(size.y) as i64;

        if w <= 0 || h <= 0 {
            return;
        }

        let x_begin = x0.max(0);
        let y_begin = y0.max(0);
        let x_end = x0.saturating_add(w).min(i64::from(self.width));
        let y_end = y0.saturating_add(h).min(i64::from(self.height));

        for y in y_begin..y_end {
            for x in x_begin..x_end {
                self.put_pixel(x, y, rgba);
            }
        }
    }

    fn draw_line(&mut self, begin: Point, end: Point, colour: Colour) {
        let rgba = colour.to_rgba();
        let begin = (floor_to_pixel(begin.x), floor_to_pixel(begin.y));
        let end = (floor_to_pixel(end.x), floor_to_pixel(end.y));

        let Some(((mut x, mut y), (x1, y1))) = self.clip_line(begin, end) else {
            return;
        };

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put_pixel(x, y, rgba);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Colour = Colour::from_hex(0xFF0000FF);
    const BLACK: Colour = Colour::from_hex(0x000000FF);

    fn frame(width: u32, height: u32) -> Vec<u8> {
        vec![0; (width * height * 4) as usize]
    }

    fn count_pixels(buffer: &FrameBuffer<'_>, colour: Colour) -> usize {
        let mut count = 0;
        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                if buffer.pixel(x, y) == Some(colour) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_new_rejects_mismatched_length() {
        let mut data = vec![0; 10];

        let result = FrameBuffer::new(&mut data, 2, 2);

        assert_eq!(
            result.err(),
            Some(FrameBufferError::SizeMismatch {
                width: 2,
                height: 2,
                expected: 16,
                actual: 10
            })
        );
    }

    #[test]
    fn test_clear_fills_every_pixel() {
        let mut data = frame(4, 3);
        let mut buffer = FrameBuffer::new(&mut data, 4, 3).unwrap();

        buffer.clear(Colour::from_hex(0x353535FF));

        assert_eq!(count_pixels(&buffer, Colour::from_hex(0x353535FF)), 12);
    }

    #[test]
    fn test_fill_rect_floors_position_and_size() {
        let mut data = frame(20, 20);
        let mut buffer = FrameBuffer::new(&mut data, 20, 20).unwrap();
        buffer.clear(BLACK);

        buffer.fill_rect(Point::new(2.5, 3.9), Point::new(4.7, 2.2), RED);

        assert_eq!(count_pixels(&buffer, RED), 4 * 2);
        assert_eq!(buffer.pixel(2, 3), Some(RED));
        assert_eq!(buffer.pixel(5, 4), Some(RED));
        assert_eq!(buffer.pixel(6, 4), Some(BLACK));
        assert_eq!(buffer.pixel(2, 5), Some(BLACK));
    }

    #[test]
    fn test_fill_rect_marker_covers_fifteen_by_fifteen() {
        let mut data = frame(40, 40);
        let mut buffer = FrameBuffer::new(&mut data, 40, 40).unwrap();
        buffer.clear(BLACK);

        let centre = Point::new(20.0, 20.0);
        let size = Point::new(15.0, 15.0);
        buffer.fill_rect(centre - size * 0.5, size, RED);

        assert_eq!(count_pixels(&buffer, RED), 15 * 15);
        assert_eq!(buffer.pixel(12, 12), Some(RED));
        assert_eq!(buffer.pixel(26, 26), Some(RED));
        assert_eq!(buffer.pixel(27, 27), Some(BLACK));
    }

    #[test]
    fn test_fill_rect_is_clipped_to_frame() {
        let mut data = frame(10, 10);
        let mut buffer = FrameBuffer::new(&mut data, 10, 10).unwrap();
        buffer.clear(BLACK);

        buffer.fill_rect(Point::new(-5.0, 7.0), Point::new(8.0, 8.0), RED);

        assert_eq!(count_pixels(&buffer, RED), 3 * 3);
    }

    #[test]
    fn test_fill_rect_entirely_outside_draws_nothing() {
        let mut data = frame(10, 10);
        let mut buffer = FrameBuffer::new(&mut data, 10, 10).unwrap();
        buffer.clear(BLACK);

        buffer.fill_rect(Point::new(50.0, 50.0), Point::new(8.0, 8.0), RED);
        buffer.fill_rect(Point::new(-50.0, -50.0), Point::new(8.0, 8.0), RED);

        assert_eq!(count_pixels(&buffer, RED), 0);
    }

    #[test]
    fn test_draw_line_horizontal_includes_both_ends() {
        let mut data = frame(10, 10);
        let mut buffer = FrameBuffer::new(&mut data, 10, 10).unwrap();
        buffer.clear(BLACK);

        buffer.draw_line(Point::new(1.0, 5.0), Point::new(8.0, 5.0), RED);

        assert_eq!(count_pixels(&buffer, RED), 8);
        assert_eq!(buffer.pixel(1, 5), Some(RED));
        assert_eq!(buffer.pixel(8, 5), Some(RED));
    }

    #[test]
    fn test_draw_line_diagonal() {
        let mut data = frame(10, 10);
        let mut buffer = FrameBuffer::new(&mut data, 10, 10).unwrap();
        buffer.clear(BLACK);

        buffer.draw_line(Point::new(0.0, 0.0), Point::new(9.0, 9.0), RED);

        assert_eq!(count_pixels(&buffer, RED), 10);
        for i in 0..10 {
            assert_eq!(buffer.pixel(i, i), Some(RED));
        }
    }

    #[test]
    fn test_draw_line_single_point() {
        let mut data = frame(4, 4);
        let mut buffer = FrameBuffer::new(&mut data, 4, 4).unwrap();
        buffer.clear(BLACK);

        buffer.draw_line(Point::new(2.2, 1.8), Point::new(2.9, 1.1), RED);

        assert_eq!(count_pixels(&buffer, RED), 1);
        assert_eq!(buffer.pixel(2, 1), Some(RED));
    }

    #[test]
    fn test_draw_line_partially_outside_is_clipped() {
        let mut data = frame(10, 10);
        let mut buffer = FrameBuffer::new(&mut data, 10, 10).unwrap();
        buffer.clear(BLACK);

        buffer.draw_line(Point::new(-100.0, 4.0), Point::new(100.0, 4.0), RED);

        assert_eq!(count_pixels(&buffer, RED), 10);
    }

    #[test]
    fn test_draw_line_far_outside_draws_nothing() {
        let mut data = frame(10, 10);
        let mut buffer = FrameBuffer::new(&mut data, 10, 10).unwrap();
        buffer.clear(BLACK);

        buffer.draw_line(Point::new(-1.0e9, -5.0), Point::new(1.0e9, -5.0), RED);

        assert_eq!(count_pixels(&buffer, RED), 0);
    }

    #[test]
    fn test_non_finite_coordinates_do_not_panic() {
        let mut data = frame(10, 10);
        let mut buffer = FrameBuffer::new(&mut data, 10, 10).unwrap();

        buffer.draw_line(Point::new(f32::NAN, 0.0), Point::new(5.0, f32::INFINITY), RED);
        buffer.fill_rect(Point::new(f32::NAN, f32::NAN), Point::new(3.0, 3.0), RED);
    }
}
