/// Parameter values `step, 2 * step, ...` up to and including 1.0.
///
/// Values are produced by repeated addition, so rounding can drop the final
/// sample at 1.0 for steps that are not exact binary fractions. A step that is
/// not finite and positive yields nothing. A step too small to advance the
/// running value ends the sequence at the value where it stalls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSteps {
    next: f32,
    step: f32,
}

impl ParameterSteps {
    #[must_use]
    pub fn new(step: f32) -> Self {
        Self { next: step, step }
    }

    #[must_use]
    pub fn step(&self) -> f32 {
        self.step
    }
}

impl Iterator for ParameterSteps {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if !(self.step.is_finite() && self.step > 0.0) || self.next > 1.0 {
            return None;
        }

        let t = self.next;
        let advanced = t + self.step;
        self.next = if advanced > t { advanced } else { f32::INFINITY };
        Some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_step_not_zero() {
        let first = ParameterSteps::new(0.1).next();

        assert_eq!(first, Some(0.1));
    }

    #[test]
    fn exact_binary_step_includes_one() {
        let values: Vec<f32> = ParameterSteps::new(0.25).collect();

        assert_eq!(values, vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn step_of_one_yields_single_sample() {
        let values: Vec<f32> = ParameterSteps::new(1.0).collect();

        assert_eq!(values, vec![1.0]);
    }

    #[test]
    fn all_values_lie_in_half_open_unit_interval() {
        for step in [0.001, 0.013, 0.05, 0.3, 0.999] {
            let values: Vec<f32> = ParameterSteps::new(step).collect();
            let upper_bound = (1.0 / step).ceil() as usize;

            assert!(!values.is_empty());
            assert!(values.len() <= upper_bound, "step={step} len={}", values.len());
            assert!(values.iter().all(|t| *t > 0.0 && *t <= 1.0));
            assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn non_positive_or_non_finite_step_yields_nothing() {
        assert_eq!(ParameterSteps::new(0.0).count(), 0);
        assert_eq!(ParameterSteps::new(-0.1).count(), 0);
        assert_eq!(ParameterSteps::new(f32::NAN).count(), 0);
        assert_eq!(ParameterSteps::new(f32::INFINITY).count(), 0);
    }

    #[test]
    fn step_below_rounding_resolution_terminates() {
        const LIMIT: usize = 50_000_000;
        let mut steps = ParameterSteps::new(1e-9);

        let count = steps.by_ref().take(LIMIT).count();

        assert!(count > 0);
        assert!(count < LIMIT, "sequence did not stop within {LIMIT} values");
        assert_eq!(steps.next(), None);
    }
}
