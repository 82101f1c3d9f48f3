use winit::window::Window;

use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(
        &self,
        window: &'static Window,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Result<T, GuiError>;
}
