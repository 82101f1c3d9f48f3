//! GUI input adapter for interactive curve editing.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for framebuffer rendering, and egui for the debug overlay.

pub mod app;
pub mod commands;
pub mod errors;
pub mod window_settings;
