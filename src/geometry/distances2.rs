use ncollide2d::na::{Point2, RealField};

/// Return the distance between two 2D points
pub fn dist<N: RealField + Copy>(a: &Point2<N>, b: &Point2<N>) -> N {
    (a - b).norm()
}
