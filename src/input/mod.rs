//! Input adapters for the curve editor.
//!
//! This module contains adapters that receive input from various sources
//! and translate them into editor inputs.

#[cfg(feature = "gui")]
pub mod gui;
