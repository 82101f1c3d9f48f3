use crate::core::data::point::Point;

/// Evaluates the Bézier curve defined by `control_points` at `t`.
///
/// Each round replaces `working[i]` with the interpolation of `working[i]` and
/// `working[i + 1]`, shrinking the working length by one until a single point
/// remains. `t` is not clamped; values outside `[0, 1]` extrapolate.
///
/// # Panics
/// Panics if `control_points` is empty or if `scratch` is shorter than
/// `control_points`.
#[must_use]
pub fn sample(control_points: &[Point], scratch: &mut [Point], t: f32) -> Point {
    let count = control_points.len();

    assert!(count > 0, "cannot sample a curve without control points");
    assert!(
        scratch.len() >= count,
        "scratch buffer holds {} points but {} control points were given",
        scratch.len(),
        count
    );

    let working = &mut scratch[..count];
    working.copy_from_slice(control_points);

    for len in (2..=count).rev() {
        for i in 0..len - 1 {
            working[i] = working[i].lerp(working[i + 1], t);
        }
    }

    working[0]
}
