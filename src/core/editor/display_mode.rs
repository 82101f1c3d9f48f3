#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Each curve sample is drawn as a marker.
    #[default]
    Markers,
    /// Consecutive curve samples are joined with line segments.
    Polyline,
}

impl DisplayMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Markers => Self::Polyline,
            Self::Polyline => Self::Markers,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Markers => "Markers",
            Self::Polyline => "Polyline",
        }
    }
}
