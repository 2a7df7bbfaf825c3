//! Measurement of an arbitrary closed airfoil contour, such as a coordinate file read back from
//! disk. Nothing here knows the designation the contour came from; the chord is taken from the
//! edge extremes and the surfaces are split at the leading edge.

use crate::algorithms::{arg_max, interpolate_y};
use crate::closed_polyline::Outline;
use crate::errors::GeometryError;
use crate::geometry::distances2::dist;
use crate::geometry::shapes2::Circle2;
use crate::serialize::Point2f64;
use crate::stations::{SampleCount, StationSequence};
use ncollide2d::na::{Point2, Rotation2, Vector2};
use serde::Serialize;

/// Stations used to probe the surfaces of an analyzed contour
const PROBE_SAMPLES: usize = 400;

#[derive(Debug, Clone, Serialize)]
pub struct ContourSummary {
    #[serde(with = "Point2f64")]
    pub leading_edge: Point2<f64>,

    #[serde(with = "Point2f64")]
    pub trailing_edge: Point2<f64>,

    pub chord: f64,
    pub max_thickness: f64,

    /// Fraction of the chord
    pub max_thickness_location: f64,

    pub max_camber: f64,

    /// Fraction of the chord
    pub camber_position: f64,

    pub area: f64,
    pub perimeter: f64,

    /// Radius of the circle through the leading edge point and its two neighbors, `None` when
    /// they are collinear
    pub leading_edge_radius: Option<f64>,
}

/// Walks the loop from `start` to `end` in one direction, inclusive at both ends
fn walk(points: &[Point2<f64>], start: usize, end: usize, forward: bool) -> Vec<Point2<f64>> {
    let n = points.len();
    let mut result = vec![points[start]];
    let mut i = start;
    while i != end {
        i = if forward { (i + 1) % n } else { (i + n - 1) % n };
        result.push(points[i]);
    }
    result
}

/// Moves a surface into the chord frame: leading edge at the origin, trailing edge on the
/// positive x axis. The result is sorted by x.
fn to_chord_frame(
    surface: &[Point2<f64>],
    leading: &Point2<f64>,
    rotation: &Rotation2<f64>,
) -> Vec<Point2<f64>> {
    let mut moved: Vec<Point2<f64>> = surface
        .iter()
        .map(|p| Point2::from(rotation * (p - leading)))
        .collect();
    moved.sort_by(|a, b| a.x.total_cmp(&b.x));
    moved
}

fn mean_y(points: &[Point2<f64>]) -> f64 {
    points.iter().map(|p| p.y).sum::<f64>() / points.len() as f64
}

/// Measures a closed contour given as a loop of points in any orientation or winding.
///
/// The trailing edge is the point with the largest x and the leading edge is the point farthest
/// from it. Thickness and camber are measured perpendicular to the line between them by
/// interpolating both surfaces, so a cambered section whose nose point sits above the nominal
/// chord line reports a slightly smaller camber than its designation.
pub fn analyze_contour(points: &[Point2<f64>]) -> Result<ContourSummary, GeometryError> {
    let outline = Outline::new(points, None)?;
    let vertices = outline.points();
    let n = vertices.len();

    let xs: Vec<f64> = vertices.iter().map(|p| p.x).collect();
    let te_index = arg_max(&xs).ok_or(GeometryError::NotEnoughPoints {
        needed: 3,
        found: 0,
    })?;
    let trailing_edge = vertices[te_index];

    let distances: Vec<f64> = vertices.iter().map(|p| dist(p, &trailing_edge)).collect();
    let le_index = arg_max(&distances).ok_or(GeometryError::NotEnoughPoints {
        needed: 3,
        found: 0,
    })?;
    let leading_edge = vertices[le_index];

    let chord = dist(&leading_edge, &trailing_edge);
    if chord <= 0.0 || !chord.is_finite() {
        return Err(GeometryError::DegenerateInput {
            field: "chord",
            value: chord,
        });
    }

    let direction: Vector2<f64> = trailing_edge - leading_edge;
    let rotation = Rotation2::new(-direction.y.atan2(direction.x));

    let side_a = to_chord_frame(
        &walk(vertices, le_index, te_index, true),
        &leading_edge,
        &rotation,
    );
    let side_b = to_chord_frame(
        &walk(vertices, le_index, te_index, false),
        &leading_edge,
        &rotation,
    );
    let (upper, lower) = if mean_y(&side_a) >= mean_y(&side_b) {
        (side_a, side_b)
    } else {
        (side_b, side_a)
    };

    let stations = StationSequence::cosine(SampleCount::new(PROBE_SAMPLES));
    let mut thickness = Vec::with_capacity(stations.len());
    let mut camber = Vec::with_capacity(stations.len());
    for x in stations.iter().map(|f| f * chord) {
        let yu = interpolate_y(&upper, x).unwrap_or(0.0);
        let yl = interpolate_y(&lower, x).unwrap_or(0.0);
        thickness.push(yu - yl);
        camber.push((yu + yl) / 2.0);
    }

    let (max_thickness, max_thickness_location) = arg_max(&thickness)
        .map(|i| (thickness[i], stations[i]))
        .unwrap_or((0.0, 0.0));

    let abs_camber: Vec<f64> = camber.iter().map(|c| c.abs()).collect();
    let (max_camber, camber_position) = arg_max(&abs_camber)
        .map(|i| (camber[i], stations[i]))
        .unwrap_or((0.0, 0.0));

    let leading_edge_radius = Circle2::from_three_points(
        &vertices[(le_index + n - 1) % n],
        &leading_edge,
        &vertices[(le_index + 1) % n],
    )
    .map(|c| c.radius());

    Ok(ContourSummary {
        leading_edge,
        trailing_edge,
        chord,
        max_thickness,
        max_thickness_location,
        max_camber,
        camber_position,
        area: outline.area(),
        perimeter: outline.perimeter(),
        leading_edge_radius,
    })
}
