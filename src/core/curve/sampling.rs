use crate::core::curve::evaluator::CurveEvaluator;
use crate::core::curve::parameter_steps::ParameterSteps;
use crate::core::data::point::Point;

/// Lazily evaluated curve samples at `t = step, 2 * step, ..., <= 1.0`.
pub struct CurveSamples<'a> {
    evaluator: &'a mut CurveEvaluator,
    control_points: &'a [Point],
    steps: ParameterSteps,
}

impl<'a> CurveSamples<'a> {
    /// Yields nothing when `control_points` is empty.
    pub fn new(evaluator: &'a mut CurveEvaluator, control_points: &'a [Point], step: f32) -> Self {
        Self {
            evaluator,
            control_points,
            steps: ParameterSteps::new(step),
        }
    }
}

impl Iterator for CurveSamples<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.control_points.is_empty() {
            return None;
        }

        let t = self.steps.next()?;
        Some(self.evaluator.evaluate(self.control_points, t))
    }
}

/// Lazily evaluated segments `(sample(t), sample(t + step))`.
///
/// Both ends are evaluated independently for every segment; the end of the
/// final segment lies past `t = 1.0`.
pub struct CurveSegments<'a> {
    evaluator: &'a mut CurveEvaluator,
    control_points: &'a [Point],
    steps: ParameterSteps,
}

impl<'a> CurveSegments<'a> {
    /// Yields nothing when `control_points` is empty.
    pub fn new(evaluator: &'a mut CurveEvaluator, control_points: &'a [Point], step: f32) -> Self {
        Self {
            evaluator,
            control_points,
            steps: ParameterSteps::new(step),
        }
    }
}

impl Iterator for CurveSegments<'_> {
    type Item = (Point, Point);

    fn next(&mut self) -> Option<(Point, Point)> {
        if self.control_points.is_empty() {
            return None;
        }

        let t = self.steps.next()?;
        let begin = self.evaluator.evaluate(self.control_points, t);
        let end = self
            .evaluator
            .evaluate(self.control_points, t + self.steps.step());

        Some((begin, end))
    }
}
