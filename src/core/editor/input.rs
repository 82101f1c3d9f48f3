use crate::core::data::point::Point;
use crate::core::editor::display_mode::DisplayMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

impl ScrollDirection {
    /// Positive deltas scroll up; zero and negative deltas scroll down.
    #[must_use]
    pub fn from_delta(delta: f32) -> Self {
        if delta > 0.0 { Self::Up } else { Self::Down }
    }
}

/// Input already translated into canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorInput {
    PointerPressed(Point),
    PointerMoved(Point),
    PointerReleased,
    ToggleDisplayMode,
    Scroll(ScrollDirection),
    Clear,
}

/// What a single [`EditorInput`] changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputOutcome {
    Selected(usize),
    Appended(usize),
    Moved(usize),
    Released,
    ModeChanged(DisplayMode),
    StepChanged(f32),
    Cleared,
    Ignored,
}
