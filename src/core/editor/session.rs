use crate::core::curve::evaluator::CurveEvaluator;
use crate::core::curve::sampling::{CurveSamples, CurveSegments};
use crate::core::data::control_points::ControlPoints;
use crate::core::data::point::Point;
use crate::core::editor::display_mode::DisplayMode;
use crate::core::editor::input::{EditorInput, InputOutcome, ScrollDirection};
use crate::core::editor::limits::EditorLimits;
use crate::core::editor::sampling_step::SamplingStep;
use log::{debug, warn};

/// Editing state for a single curve.
///
/// Owns the control points, the drag selection, the sampling step, the display
/// mode and the evaluator workspace. Inputs are applied one at a time by the
/// loop thread that also renders.
#[derive(Debug, Clone)]
pub struct Session {
    points: ControlPoints,
    selected: Option<usize>,
    step: SamplingStep,
    display_mode: DisplayMode,
    limits: EditorLimits,
    evaluator: CurveEvaluator,
}

impl Session {
    #[must_use]
    pub fn new(limits: EditorLimits) -> Self {
        Self {
            points: ControlPoints::with_capacity(limits.capacity),
            selected: None,
            step: SamplingStep::new(limits.initial_step, &limits),
            display_mode: DisplayMode::default(),
            limits,
            evaluator: CurveEvaluator::with_capacity(limits.capacity),
        }
    }

    pub fn apply(&mut self, input: EditorInput) -> InputOutcome {
        match input {
            EditorInput::PointerPressed(position) => self.press(position),
            EditorInput::PointerMoved(position) => self.drag_to(position),
            EditorInput::PointerReleased => {
                self.selected = None;
                InputOutcome::Released
            }
            EditorInput::ToggleDisplayMode => {
                self.display_mode = self.display_mode.toggled();
                debug!("display mode: {}", self.display_mode.display_name());
                InputOutcome::ModeChanged(self.display_mode)
            }
            EditorInput::Scroll(direction) => {
                match direction {
                    ScrollDirection::Up => self.step.increase(),
                    ScrollDirection::Down => self.step.decrease(),
                }
                debug!("sampling step: {:.3}", self.step.value());
                InputOutcome::StepChanged(self.step.value())
            }
            EditorInput::Clear => {
                self.points.clear();
                self.selected = None;
                debug!("control points cleared");
                InputOutcome::Cleared
            }
        }
    }

    fn press(&mut self, position: Point) -> InputOutcome {
        self.selected = self.points.hit_test(position, self.limits.marker_size);

        if let Some(index) = self.selected {
            debug!("selected control point {}", index);
            return InputOutcome::Selected(index);
        }

        match self.points.try_push(position) {
            Ok(index) => {
                debug!(
                    "appended control point {} at ({:.1}, {:.1})",
                    index, position.x, position.y
                );
                InputOutcome::Appended(index)
            }
            Err(e) => {
                warn!("ignoring press: {}", e);
                InputOutcome::Ignored
            }
        }
    }

    fn drag_to(&mut self, position: Point) -> InputOutcome {
        let Some(index) = self.selected else {
            return InputOutcome::Ignored;
        };

        match self.points.set(index, position) {
            Ok(()) => InputOutcome::Moved(index),
            Err(e) => {
                warn!("dropping stale selection: {}", e);
                self.selected = None;
                InputOutcome::Ignored
            }
        }
    }

    #[must_use]
    pub fn should_render_curve(&self) -> bool {
        !self.points.is_empty() && self.points.len() >= self.limits.min_curve_points
    }

    /// Curve samples for markers mode, or `None` below the point threshold.
    pub fn curve_samples(&mut self) -> Option<CurveSamples<'_>> {
        if !self.should_render_curve() {
            return None;
        }

        Some(CurveSamples::new(
            &mut self.evaluator,
            self.points.as_slice(),
            self.step.value(),
        ))
    }

    /// Curve segments for polyline mode, or `None` below the point threshold.
    pub fn curve_segments(&mut self) -> Option<CurveSegments<'_>> {
        if !self.should_render_curve() {
            return None;
        }

        Some(CurveSegments::new(
            &mut self.evaluator,
            self.points.as_slice(),
            self.step.value(),
        ))
    }

    #[must_use]
    pub fn control_points(&self) -> &[Point] {
        self.points.as_slice()
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.points.capacity()
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn step(&self) -> f32 {
        self.step.value()
    }

    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    #[must_use]
    pub fn limits(&self) -> &EditorLimits {
        &self.limits
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(EditorLimits::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(session: &mut Session, x: f32, y: f32) -> InputOutcome {
        session.apply(EditorInput::PointerPressed(Point::new(x, y)))
    }

    #[test]
    fn new_session_is_empty_with_default_step_and_mode() {
        let session = Session::default();

        assert_eq!(session.point_count(), 0);
        assert_eq!(session.capacity(), 256);
        assert_eq!(session.selected(), None);
        assert_eq!(session.step(), 0.05);
        assert_eq!(session.display_mode(), DisplayMode::Markers);
        assert!(!session.should_render_curve());
    }

    #[test]
    fn three_presses_stay_below_curve_threshold_and_fourth_enables_it() {
        let mut session = Session::default();

        assert_eq!(press(&mut session, 10.0, 10.0), InputOutcome::Appended(0));
        assert_eq!(press(&mut session, 20.0, 20.0), InputOutcome::Appended(1));
        assert_eq!(press(&mut session, 30.0, 30.0), InputOutcome::Appended(2));

        assert_eq!(session.point_count(), 3);
        assert!(!session.should_render_curve());
        assert!(session.curve_samples().is_none());

        assert_eq!(press(&mut session, 40.0, 10.0), InputOutcome::Appended(3));

        assert_eq!(session.point_count(), 4);
        assert!(session.should_render_curve());

        let samples: Vec<Point> = session.curve_samples().unwrap().collect();
        let expected = crate::core::curve::ParameterSteps::new(session.step()).count();
        assert_eq!(samples.len(), expected);
    }

    #[test]
    fn press_on_existing_point_selects_without_appending() {
        let mut session = Session::default();
        press(&mut session, 50.0, 50.0);
        press(&mut session, 200.0, 200.0);

        let outcome = press(&mut session, 200.0, 200.0);

        assert_eq!(outcome, InputOutcome::Selected(1));
        assert_eq!(session.selected(), Some(1));
        assert_eq!(session.point_count(), 2);
    }

    #[test]
    fn press_outside_every_marker_appends_and_clears_selection() {
        let mut session = Session::default();
        press(&mut session, 50.0, 50.0);
        press(&mut session, 50.0, 50.0);
        assert_eq!(session.selected(), Some(0));

        let outcome = press(&mut session, 300.0, 300.0);

        assert_eq!(outcome, InputOutcome::Appended(1));
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn press_at_capacity_outside_markers_is_ignored() {
        let limits = EditorLimits {
            capacity: 2,
            ..EditorLimits::default()
        };
        let mut session = Session::new(limits);
        press(&mut session, 10.0, 10.0);
        press(&mut session, 100.0, 100.0);

        let outcome = press(&mut session, 300.0, 300.0);

        assert_eq!(outcome, InputOutcome::Ignored);
        assert_eq!(session.point_count(), 2);
        assert_eq!(
            session.control_points(),
            &[Point::new(10.0, 10.0), Point::new(100.0, 100.0)]
        );
    }

    #[test]
    fn press_at_capacity_on_a_marker_still_selects() {
        let limits = EditorLimits {
            capacity: 1,
            ..EditorLimits::default()
        };
        let mut session = Session::new(limits);
        press(&mut session, 10.0, 10.0);

        assert_eq!(press(&mut session, 12.0, 8.0), InputOutcome::Selected(0));
    }

    #[test]
    fn drag_moves_selected_point_and_release_clears_selection() {
        let mut session = Session::default();
        press(&mut session, 10.0, 10.0);
        press(&mut session, 60.0, 60.0);

        press(&mut session, 10.0, 10.0);
        let moved = session.apply(EditorInput::PointerMoved(Point::new(100.0, 100.0)));
        let released = session.apply(EditorInput::PointerReleased);

        assert_eq!(moved, InputOutcome::Moved(0));
        assert_eq!(released, InputOutcome::Released);
        assert_eq!(session.control_points()[0], Point::new(100.0, 100.0));
        assert_eq!(session.control_points()[1], Point::new(60.0, 60.0));
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn move_without_selection_is_ignored() {
        let mut session = Session::default();
        press(&mut session, 10.0, 10.0);
        session.apply(EditorInput::PointerReleased);

        let outcome = session.apply(EditorInput::PointerMoved(Point::new(100.0, 100.0)));

        assert_eq!(outcome, InputOutcome::Ignored);
        assert_eq!(session.control_points(), &[Point::new(10.0, 10.0)]);
    }

    #[test]
    fn release_without_selection_is_harmless() {
        let mut session = Session::default();

        assert_eq!(session.apply(EditorInput::PointerReleased), InputOutcome::Released);
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn toggle_inverts_display_mode() {
        let mut session = Session::default();

        assert_eq!(
            session.apply(EditorInput::ToggleDisplayMode),
            InputOutcome::ModeChanged(DisplayMode::Polyline)
        );
        assert_eq!(
            session.apply(EditorInput::ToggleDisplayMode),
            InputOutcome::ModeChanged(DisplayMode::Markers)
        );
    }

    #[test]
    fn scroll_adjusts_step_within_bounds() {
        let mut session = Session::default();

        for _ in 0..2_000 {
            session.apply(EditorInput::Scroll(ScrollDirection::Down));
        }
        assert_eq!(session.step(), 0.001);

        for _ in 0..2_000 {
            session.apply(EditorInput::Scroll(ScrollDirection::Up));
        }
        assert_eq!(session.step(), 1.0);
    }

    #[test]
    fn tiny_step_limits_are_raised_to_a_step_that_advances() {
        let mut session = Session::new(EditorLimits {
            min_step: 1e-9,
            initial_step: 1e-9,
            ..EditorLimits::default()
        });

        assert_eq!(session.step(), f32::EPSILON);

        session.apply(EditorInput::Scroll(ScrollDirection::Down));
        assert_eq!(session.step(), f32::EPSILON);
        assert!(session.step() + 0.5 > 0.5);
    }

    #[test]
    fn clear_empties_points_and_selection() {
        let mut session = Session::default();
        press(&mut session, 10.0, 10.0);
        press(&mut session, 10.0, 10.0);

        assert_eq!(session.apply(EditorInput::Clear), InputOutcome::Cleared);
        assert_eq!(session.point_count(), 0);
        assert_eq!(session.selected(), None);
        assert_eq!(
            session.apply(EditorInput::PointerMoved(Point::new(1.0, 1.0))),
            InputOutcome::Ignored
        );
    }

    #[test]
    fn curve_segments_follow_the_same_gate_as_samples() {
        let mut session = Session::default();
        for x in [10.0, 20.0, 30.0] {
            press(&mut session, x, x * 2.0);
        }
        assert!(session.curve_segments().is_none());

        press(&mut session, 40.0, 10.0);
        assert!(session.curve_segments().is_some());
    }

    #[test]
    fn lower_curve_threshold_renders_two_point_lines() {
        let limits = EditorLimits {
            min_curve_points: 2,
            ..EditorLimits::default()
        };
        let mut session = Session::new(limits);
        press(&mut session, 0.0, 0.0);
        assert!(!session.should_render_curve());

        press(&mut session, 100.0, 0.0);
        let last = session.curve_samples().unwrap().last().unwrap();

        assert!(last.x > 90.0 && last.x <= 100.0, "last={:?}", last);
        assert_eq!(last.y, 0.0);
    }
}
