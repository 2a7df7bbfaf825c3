use crate::errors::GeometryError;
use crate::geometry::distances2::dist;
use crate::geometry::polygon::{closed_length, shoelace_area};
use ncollide2d::math::Isometry;
use ncollide2d::na::Point2;
use ncollide2d::query::PointQuery;
use ncollide2d::shape::Polyline;

/// A closed loop of points, such as the outer contour of an airfoil section
pub struct Outline {
    vertices: Vec<Point2<f64>>,
    pub line: Polyline<f64>,
}

impl Outline {
    /// Create a new outline. The provided points will be copied and adjacent duplicates removed.
    /// A last point which repeats the first is dropped; the loop is always treated as closed.
    pub fn new(points: &[Point2<f64>], tol: Option<f64>) -> Result<Outline, GeometryError> {
        let tol_value = tol.unwrap_or(1e-9);
        let mut vertices: Vec<Point2<f64>> = Vec::with_capacity(points.len());

        for p in points.iter() {
            match vertices.last() {
                Some(last) if dist(last, p) < tol_value => {}
                _ => vertices.push(*p),
            }
        }

        while vertices.len() > 1 && dist(&vertices[0], &vertices[vertices.len() - 1]) < tol_value
        {
            vertices.pop();
        }

        if vertices.len() < 3 {
            return Err(GeometryError::NotEnoughPoints {
                needed: 3,
                found: vertices.len(),
            });
        }

        let mut closed = vertices.clone();
        closed.push(vertices[0]);
        let line: Polyline<f64> = Polyline::new(closed, None);

        Ok(Outline { vertices, line })
    }

    /// The distinct vertices of the loop, without the closing point
    pub fn points(&self) -> &[Point2<f64>] {
        &self.vertices
    }

    pub fn area(&self) -> f64 {
        shoelace_area(&self.vertices)
    }

    pub fn perimeter(&self) -> f64 {
        closed_length(&self.vertices)
    }

    /// Shortest distance from a point to the boundary of the loop
    pub fn distance_to(&self, point: &Point2<f64>) -> f64 {
        self.line
            .distance_to_point(&Isometry::identity(), point, false)
    }

    /// The largest distance from any of the given points to the boundary of the loop
    pub fn max_deviation(&self, points: &[Point2<f64>]) -> f64 {
        points
            .iter()
            .map(|p| self.distance_to(p))
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    fn square(closed: bool) -> Vec<Point2<f64>> {
        let mut points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        if closed {
            points.push(Point2::new(0.0, 0.0));
        }
        points
    }

    #[test_case(false)]
    #[test_case(true)]
    fn test_removes_duplicates(closed: bool) {
        let outline = Outline::new(&square(closed), None).unwrap();
        assert_eq!(4, outline.points().len());
        assert_relative_eq!(1.0, outline.area(), epsilon = 1e-12);
        assert_relative_eq!(4.0, outline.perimeter(), epsilon = 1e-12);
    }

    #[test_case(0.5, 0.5, 0.5)]
    #[test_case(0.5, -0.25, 0.25)]
    #[test_case(2.0, 0.5, 1.0)]
    #[test_case(0.0, 1.0, 0.0)]
    fn test_distance_to(x: f64, y: f64, e: f64) {
        let outline = Outline::new(&square(false), None).unwrap();
        assert_relative_eq!(e, outline.distance_to(&Point2::new(x, y)), epsilon = 1e-12);
    }

    #[test]
    fn test_closing_edge_is_measured() {
        // Closest boundary is the implied edge from (0, 1) back to (0, 0)
        let outline = Outline::new(&square(false), None).unwrap();
        assert_relative_eq!(0.1, outline.distance_to(&Point2::new(0.1, 0.5)), epsilon = 1e-12);
    }

    #[test]
    fn test_max_deviation() {
        let outline = Outline::new(&square(false), None).unwrap();
        let points = vec![
            Point2::new(0.5, 0.0),
            Point2::new(1.0, 0.75),
            Point2::new(0.5, 1.2),
        ];
        assert_relative_eq!(0.2, outline.max_deviation(&points), epsilon = 1e-12);
        assert_eq!(0.0, outline.max_deviation(&[]));
    }

    #[test]
    fn test_not_enough_points() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 0.0),
        ];
        assert_eq!(
            Err(GeometryError::NotEnoughPoints {
                needed: 3,
                found: 2
            }),
            Outline::new(&points, None).map(|o| o.points().len())
        );
    }
}
