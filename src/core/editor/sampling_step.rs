use crate::core::editor::limits::EditorLimits;

/// Parametric distance between consecutive curve samples.
///
/// Always within `[min_step, max_step]` of the limits it was built with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingStep {
    value: f32,
    delta: f32,
    min: f32,
    max: f32,
}

impl SamplingStep {
    /// A non-finite `value` falls back to `limits.initial_step`. The lower
    /// bound is never below `f32::EPSILON`, so every step advances `t`.
    #[must_use]
    pub fn new(value: f32, limits: &EditorLimits) -> Self {
        let min = limits.min_step.max(f32::EPSILON);
        let max = limits.max_step.max(min);
        let value = if value.is_finite() {
            value
        } else {
            limits.initial_step
        };

        Self {
            value: value.clamp(min, max),
            delta: limits.step_delta,
            min,
            max,
        }
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn increase(&mut self) {
        self.value = (self.value + self.delta).min(self.max);
    }

    pub fn decrease(&mut self) {
        self.value = (self.value - self.delta).max(self.min);
    }
}
