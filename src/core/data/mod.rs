pub mod colour;
pub mod control_points;
pub mod point;
