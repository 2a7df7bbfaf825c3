use ncollide2d::na::{Point2, Vector2};
use ncollide2d::shape::Ball;

#[derive(Debug, Clone)]
pub struct Circle2 {
    pub center: Point2<f64>,
    pub ball: Ball<f64>,
}

impl Circle2 {
    pub fn new(x: f64, y: f64, r: f64) -> Circle2 {
        Circle2 {
            center: Point2::new(x, y),
            ball: Ball::new(r),
        }
    }

    pub fn from_point(center: Point2<f64>, r: f64) -> Circle2 {
        Circle2 {
            center,
            ball: Ball::new(r),
        }
    }

    /// The circle passing through three points, `None` if they are collinear or coincident
    pub fn from_three_points(
        a: &Point2<f64>,
        b: &Point2<f64>,
        c: &Point2<f64>,
    ) -> Option<Circle2> {
        let ab: Vector2<f64> = b - a;
        let ac: Vector2<f64> = c - a;
        let d = 2.0 * (ab.x * ac.y - ab.y * ac.x);
        if d.abs() < 1e-14 {
            return None;
        }

        let ab2 = ab.norm_squared();
        let ac2 = ac.norm_squared();
        let offset = Vector2::new(
            (ac.y * ab2 - ab.y * ac2) / d,
            (ab.x * ac2 - ac.x * ab2) / d,
        );

        Some(Circle2::from_point(a + offset, offset.norm()))
    }

    pub fn radius(&self) -> f64 {
        self.ball.radius
    }
}
