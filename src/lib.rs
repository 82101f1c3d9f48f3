pub mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use input::gui::errors::GuiError;
#[cfg(feature = "gui")]
pub use input::gui::window_settings::WindowSettings;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
