use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ControlPointsError {
    CapacityReached { capacity: usize },
    IndexOutOfBounds { index: usize, len: usize },
}

impl fmt::Display for ControlPointsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityReached { capacity } => {
                write!(f, "control point list is full ({} points)", capacity)
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(
                    f,
                    "control point index {} out of bounds for {} points",
                    index, len
                )
            }
        }
    }
}

impl Error for ControlPointsError {}

/// Ordered, capacity-bounded list of control points.
///
/// Insertion order defines the interpolation chain of the curve, so points are
/// only ever appended or moved in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoints {
    points: Vec<Point>,
    capacity: usize,
}

impl ControlPoints {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn try_push(&mut self, point: Point) -> Result<usize, ControlPointsError> {
        if self.is_full() {
            return Err(ControlPointsError::CapacityReached {
                capacity: self.capacity,
            });
        }

        self.points.push(point);
        Ok(self.points.len() - 1)
    }

    pub fn set(&mut self, index: usize, point: Point) -> Result<(), ControlPointsError> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(ControlPointsError::IndexOutOfBounds { index, len })?;

        *slot = point;
        Ok(())
    }

    /// Returns the lowest index whose marker square contains `position`.
    ///
    /// The square has side `marker_size` and is centred on the point; its
    /// edges count as inside.
    #[must_use]
    pub fn hit_test(&self, position: Point, marker_size: f32) -> Option<usize> {
        let half = marker_size * 0.5;

        self.points.iter().position(|point| {
            let begin = Point::new(point.x - half, point.y - half);
            let end = Point::new(begin.x + marker_size, begin.y + marker_size);

            position.x >= begin.x
                && position.x <= end.x
                && position.y >= begin.y
                && position.y <= end.y
        })
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[cfg(test)]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.points.len() >= self.capacity
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
