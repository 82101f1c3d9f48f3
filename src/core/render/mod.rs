//! Per-frame drawing of a [`Session`](crate::core::editor::Session) onto a
//! [`Canvas`].

pub mod frame_buffer;
pub mod ports;
pub mod render_frame;
pub mod theme;

pub use frame_buffer::{FrameBuffer, FrameBufferError};
pub use ports::Canvas;
pub use render_frame::{RenderStats, draw_marker, render_frame};
pub use theme::Theme;
