use crate::core::data::point::Point;
use crate::core::editor::input::{EditorInput, ScrollDirection};
use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

pub const TOGGLE_DISPLAY_MODE_KEY: KeyCode = KeyCode::CapsLock;
pub const CLEAR_KEY: KeyCode = KeyCode::KeyC;

/// Translates winit input into [`EditorInput`].
///
/// Cursor positions must already be in canvas coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct EditorInputState {
    cursor: Option<Point>,
}

impl EditorInputState {
    pub fn cursor_moved(&mut self, position: Point) -> EditorInput {
        self.cursor = Some(position);
        EditorInput::PointerMoved(position)
    }

    pub fn cursor_left(&mut self) {
        self.cursor = None;
    }

    /// Presses need a known cursor position; releases never do.
    pub fn mouse_button(&self, button: MouseButton, state: ElementState) -> Option<EditorInput> {
        if button != MouseButton::Left {
            return None;
        }

        match state {
            ElementState::Pressed => self.cursor.map(EditorInput::PointerPressed),
            ElementState::Released => Some(EditorInput::PointerReleased),
        }
    }

    pub fn mouse_wheel(&self, delta: MouseScrollDelta) -> EditorInput {
        let vertical = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(position) => position.y as f32,
        };

        EditorInput::Scroll(ScrollDirection::from_delta(vertical))
    }

    /// Auto-repeated presses are ignored so holding a key toggles once.
    pub fn key(&self, key_code: KeyCode, state: ElementState, repeat: bool) -> Option<EditorInput> {
        if state != ElementState::Pressed || repeat {
            return None;
        }

        match key_code {
            TOGGLE_DISPLAY_MODE_KEY => Some(EditorInput::ToggleDisplayMode),
            CLEAR_KEY => Some(EditorInput::Clear),
            _ => None,
        }
    }

    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }
}
