use crate::stations::StationSequence;
use ncollide2d::na::Point2;

pub mod analyze;
pub mod camber;
pub mod generate;
pub mod properties;
pub mod thickness;

/// The camber point and the two surface points belonging to a single chordwise station, in
/// fractions of the chord
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CamberStation {
    pub camber: Point2<f64>,
    pub upper: Point2<f64>,
    pub lower: Point2<f64>,
}

impl CamberStation {
    pub fn new(camber: Point2<f64>, upper: Point2<f64>, lower: Point2<f64>) -> CamberStation {
        CamberStation {
            camber,
            upper,
            lower,
        }
    }
}

/// Mean line ordinates `(x/c, yc/c)`, one per station
#[derive(Debug, Clone, PartialEq)]
pub struct CamberLine {
    pub points: Vec<Point2<f64>>,
}

/// Half thickness `(x/c, yt/c)`, one per station. The section is symmetric about the camber line
/// by this amount.
#[derive(Debug, Clone, PartialEq)]
pub struct ThicknessDistribution {
    pub points: Vec<Point2<f64>>,
}

/// A generated airfoil section. All points are in absolute units (already scaled by the chord) and
/// ordered from the leading edge to the trailing edge, such that `upper[i]`, `lower[i]` and
/// `camber[i]` all belong to station `stations[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct AirfoilGeometry {
    pub name: String,
    pub chord: f64,
    pub stations: StationSequence,
    pub camber: Vec<Point2<f64>>,
    pub upper: Vec<Point2<f64>>,
    pub lower: Vec<Point2<f64>>,
}

impl AirfoilGeometry {
    /// Assemble a geometry from unit chord stations, scaling every point by `chord`
    pub fn from_stations(
        name: &str,
        chord: f64,
        stations: StationSequence,
        camber_stations: &[CamberStation],
    ) -> AirfoilGeometry {
        let scale = |p: &Point2<f64>| Point2::new(p.x * chord, p.y * chord);
        AirfoilGeometry {
            name: name.to_string(),
            chord,
            stations,
            camber: camber_stations.iter().map(|s| scale(&s.camber)).collect(),
            upper: camber_stations.iter().map(|s| scale(&s.upper)).collect(),
            lower: camber_stations.iter().map(|s| scale(&s.lower)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// The camber line in fractions of the chord
    pub fn camber_line(&self) -> CamberLine {
        CamberLine {
            points: self
                .camber
                .iter()
                .map(|p| Point2::new(p.x / self.chord, p.y / self.chord))
                .collect(),
        }
    }

    /// The closed outer contour as a single loop: the upper surface from the trailing edge to the
    /// leading edge, then the lower surface back to the trailing edge. The leading edge point is
    /// shared by both surfaces and appears once.
    pub fn selig_loop(&self) -> Vec<Point2<f64>> {
        let mut result: Vec<Point2<f64>> = self.upper.iter().rev().cloned().collect();
        result.extend(self.lower.iter().skip(1).cloned());
        result
    }
}
