//! Bézier curve evaluation for an arbitrary number of control points.

pub mod de_casteljau;
pub mod evaluator;
pub mod parameter_steps;
pub mod sampling;

pub use de_casteljau::sample;
pub use evaluator::CurveEvaluator;
pub use parameter_steps::ParameterSteps;
pub use sampling::{CurveSamples, CurveSegments};
