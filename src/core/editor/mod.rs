//! Interactive editing state: control points, drag selection, sampling step
//! and display mode.

pub mod display_mode;
pub mod input;
pub mod limits;
pub mod sampling_step;
pub mod session;

pub use display_mode::DisplayMode;
pub use input::{EditorInput, InputOutcome, ScrollDirection};
pub use limits::EditorLimits;
pub use sampling_step::SamplingStep;
pub use session::Session;
