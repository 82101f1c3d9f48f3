#[derive(Debug, Clone, PartialEq)]
pub struct WindowSettings {
    pub title: String,
    /// Size of the drawing canvas; the window starts at this logical size and
    /// the canvas is scaled to fit when it is resized.
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub resizable: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Bezier Curves".to_string(),
            canvas_width: 640,
            canvas_height: 480,
            resizable: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WindowSettings;

    #[test]
    fn default_canvas_is_640_by_480() {
        let settings = WindowSettings::default();

        assert_eq!(settings.canvas_width, 640);
        assert_eq!(settings.canvas_height, 480);
        assert!(settings.resizable);
    }
}
