use crate::core::curve::de_casteljau::sample;
use crate::core::data::point::Point;

/// Curve evaluation with a reusable interpolation workspace.
///
/// Calls borrow the scratch buffer mutably, so evaluations on one evaluator are
/// always sequenced.
#[derive(Debug, Clone)]
pub struct CurveEvaluator {
    scratch: Vec<Point>,
}

impl CurveEvaluator {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            scratch: vec![Point::default(); capacity],
        }
    }

    /// # Panics
    /// Panics if `control_points` is empty.
    pub fn evaluate(&mut self, control_points: &[Point], t: f32) -> Point {
        if self.scratch.len() < control_points.len() {
            self.scratch.resize(control_points.len(), Point::default());
        }

        sample(control_points, &mut self.scratch, t)
    }

    #[cfg(test)]
    #[must_use]
    pub fn scratch_len(&self) -> usize {
        self.scratch.len()
    }
}
