//! Presentation adapters that put rendered frames on screen.

pub mod pixels;
