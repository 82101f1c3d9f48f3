use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTiming {
    pub target_fps: u32,
}

impl FrameTiming {
    /// Whole milliseconds per frame, rounded down; zero fps means no pacing.
    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        if self.target_fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_millis(u64::from(1000 / self.target_fps))
        }
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self { target_fps: 60 }
    }
}

#[cfg(test)]
mod tests {
    use super::FrameTiming;
    use std::time::Duration;

    #[test]
    fn sixty_fps_paces_at_sixteen_milliseconds() {
        assert_eq!(FrameTiming::default().frame_duration(), Duration::from_millis(16));
    }

    #[test]
    fn zero_fps_disables_pacing() {
        let timing = FrameTiming { target_fps: 0 };

        assert_eq!(timing.frame_duration(), Duration::ZERO);
    }
}
