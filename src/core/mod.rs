//! Platform-independent curve editing: geometry, evaluation, editor state,
//! software rasterization and frame pacing.

pub mod curve;
pub mod data;
pub mod editor;
pub mod render;
pub mod timing;
