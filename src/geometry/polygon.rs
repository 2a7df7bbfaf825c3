use crate::geometry::distances2::dist;
use itertools::Itertools;
use ncollide2d::na::Point2;

/// Signed area of a closed loop by the shoelace formula, positive for counter-clockwise loops.
/// The closing edge from the last to the first point is implied.
pub fn signed_area(points: &[Point2<f64>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    points
        .iter()
        .circular_tuple_windows()
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum::<f64>()
        / 2.0
}

pub fn shoelace_area(points: &[Point2<f64>]) -> f64 {
    signed_area(points).abs()
}

/// Length of the loop including the implied closing edge
pub fn closed_length(points: &[Point2<f64>]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    points
        .iter()
        .circular_tuple_windows()
        .map(|(a, b)| dist(a, b))
        .sum()
}
