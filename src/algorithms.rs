use ncollide2d::na::{Point2, RealField};

/// Finds the index of the last element of a sorted slice which is less than or equal to the test
/// value, clamped to the first and last index of the slice.
pub fn preceding_index_search<N: RealField + Copy>(slice: &[N], test_value: N) -> usize {
    if slice.len() <= 1 || slice[1] > test_value {
        return 0;
    }

    let mut a = 1;
    let mut b = slice.len() - 1;
    if slice[b] <= test_value {
        return b;
    }

    while b > a + 1 {
        let check = (a + b) / 2;
        if test_value >= slice[check] {
            a = check;
        } else {
            b = check;
        }
    }
    a
}

/// Index of the largest value, the first one wins on ties. `None` for an empty slice or one that
/// contains only NaN.
pub fn arg_max(values: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, v) in values.iter().enumerate() {
        match best {
            None if !v.is_nan() => best = Some(i),
            Some(b) if *v > values[b] => best = Some(i),
            _ => {}
        }
    }
    best
}

/// Linearly interpolates the y value of a polyline at `x`. The points must be sorted by
/// increasing x; outside their range the end segments are extended.
pub fn interpolate_y(points: &[Point2<f64>], x: f64) -> Option<f64> {
    match points.len() {
        0 => None,
        1 => Some(points[0].y),
        n => {
            let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
            let i = preceding_index_search(&xs, x).min(n - 2);
            let (p0, p1) = (&points[i], &points[i + 1]);
            let dx = p1.x - p0.x;
            if dx.abs() < f64::EPSILON {
                return Some(p0.y);
            }
            Some(p0.y + (x - p0.x) / dx * (p1.y - p0.y))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::prelude::*;
    use test_case::test_case;

    fn naive(slice: &[f64], test_value: f64) -> usize {
        if slice.len() <= 1 || slice[1] > test_value {
            return 0;
        }

        if slice[slice.len() - 1] <= test_value {
            return slice.len() - 1;
        }

        for (i, v) in slice.iter().skip(1).enumerate() {
            if *v > test_value {
                return i;
            }
        }

        slice.len() - 1
    }

    #[test_case(0, -1.0)]
    #[test_case(0, 0.05)]
    #[test_case(1, 0.1)]
    #[test_case(2, 0.25)]
    #[test_case(4, 0.5)]
    fn test_simple_binary_search(e: usize, v: f64) {
        let test = [0.0, 0.1, 0.2, 0.3, 0.4];
        assert_eq!(e, preceding_index_search(&test, v));
    }

    #[test]
    fn test_binary_search_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let count: usize = rng.gen_range(2..200);
            let mut values: Vec<f64> = (0..count).map(|_| rng.gen_range(-10.0..10.0)).collect();
            values.sort_by(|a, b| a.total_cmp(b));

            for _ in 0..100 {
                let test = rng.gen_range(-11.0..11.0);
                assert_eq!(naive(&values, test), preceding_index_search(&values, test));
            }
        }
    }

    #[test_case(&[], None)]
    #[test_case(&[f64::NAN], None)]
    #[test_case(&[1.0], Some(0))]
    #[test_case(&[1.0, 3.0, 2.0], Some(1))]
    #[test_case(&[3.0, 3.0, 2.0], Some(0))]
    #[test_case(&[f64::NAN, -1.0, -2.0], Some(1))]
    fn test_arg_max(values: &[f64], expected: Option<usize>) {
        assert_eq!(expected, arg_max(values));
    }

    #[test_case(0.0, 0.0)]
    #[test_case(0.5, 1.0)]
    #[test_case(1.5, 1.5)]
    #[test_case(2.0, 1.0)]
    #[test_case(3.0, 0.0)]
    fn test_interpolate_y(x: f64, expected: f64) {
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 1.0),
        ];
        assert_relative_eq!(expected, interpolate_y(&points, x).unwrap(), epsilon = 1e-12);
    }
}
