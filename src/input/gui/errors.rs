use crate::core::render::frame_buffer::FrameBufferError;
use std::error::Error;
use std::fmt;
use winit::error::{EventLoopError, OsError};

/// Platform failures. None of them are recoverable; the caller reports the
/// error and terminates.
#[derive(Debug)]
pub enum GuiError {
    EventLoop(EventLoopError),
    Window(OsError),
    Surface(pixels::Error),
    Resize(pixels::TextureError),
    Render(pixels::Error),
    Frame(FrameBufferError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(e) => write!(f, "event loop failed: {}", e),
            Self::Window(e) => write!(f, "failed to create window: {}", e),
            Self::Surface(e) => write!(f, "failed to create pixels surface: {}", e),
            Self::Resize(e) => write!(f, "failed to resize pixels surface: {}", e),
            Self::Render(e) => write!(f, "failed to render frame: {}", e),
            Self::Frame(e) => write!(f, "failed to draw frame: {}", e),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(e) => Some(e),
            Self::Window(e) => Some(e),
            Self::Surface(e) | Self::Render(e) => Some(e),
            Self::Resize(e) => Some(e),
            Self::Frame(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_error_reports_message_and_source() {
        let error = GuiError::Resize(pixels::TextureError::TextureWidth(0));

        assert!(error.to_string().starts_with("failed to resize pixels surface"));
        assert!(error.source().is_some());
    }
}
