#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorLimits {
    pub capacity: usize,
    pub marker_size: f32,
    pub initial_step: f32,
    pub step_delta: f32,
    pub min_step: f32,
    pub max_step: f32,
    pub min_curve_points: usize,
}

impl Default for EditorLimits {
    fn default() -> Self {
        Self {
            capacity: 256,
            marker_size: 15.0,
            initial_step: 0.05,
            step_delta: 0.001,
            min_step: 0.001,
            max_step: 1.0,
            min_curve_points: 4,
        }
    }
}
