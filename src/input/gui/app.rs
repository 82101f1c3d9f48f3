//! Windowed editor application: egui overlay, input translation and the
//! paced redraw loop.

pub mod editor_input;
pub mod gui_app;
pub mod ports;
