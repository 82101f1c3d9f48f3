use std::marker::PhantomData;

use log::info;
use winit::{
    dpi::LogicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::core::editor::limits::EditorLimits;
use crate::core::editor::session::Session;
use crate::core::timing::frame_timing::FrameTiming;
use crate::input::gui::{
    app::{gui_app::GuiApp, ports::presenter::GuiPresenterPort},
    commands::ports::presenter_factory::GuiPresenterFactoryPort,
    errors::GuiError,
    window_settings::WindowSettings,
};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    settings: WindowSettings,
    limits: EditorLimits,
    timing: FrameTiming,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            settings: WindowSettings::default(),
            limits: EditorLimits::default(),
            timing: FrameTiming::default(),
            _phantom: PhantomData,
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: WindowSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn with_limits(mut self, limits: EditorLimits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub fn with_timing(mut self, timing: FrameTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), GuiError> {
        let event_loop = EventLoop::new().map_err(GuiError::EventLoop)?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(self.settings.title.as_str())
                .with_inner_size(LogicalSize::new(
                    self.settings.canvas_width,
                    self.settings.canvas_height,
                ))
                .with_resizable(self.settings.resizable)
                .build(&event_loop)
                .map_err(GuiError::Window)?,
        ));

        let size = window.inner_size();
        info!(
            "opened {}x{} window with a {}x{} canvas at {} fps",
            size.width,
            size.height,
            self.settings.canvas_width,
            self.settings.canvas_height,
            self.timing.target_fps
        );

        let presenter: P = self.presenter_factory.build(
            window,
            self.settings.canvas_width,
            self.settings.canvas_height,
        )?;
        let session = Session::new(self.limits);
        let app = GuiApp::new(window, &event_loop, presenter, session, self.timing);

        app.run(event_loop, window)?;

        info!("window closed");
        Ok(())
    }
}
