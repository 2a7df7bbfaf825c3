//! Half thickness distributions. The 4-digit and 5-digit families share the classic polynomial,
//! the 6, 7 and 8 series use the modified envelope with an adjustable leading edge and location
//! of maximum thickness.

use super::ThicknessDistribution;
use crate::code::AirfoilCode;
use crate::stations::StationSequence;
use ncollide2d::na::Point2;

/// Coefficients of the 4-digit thickness polynomial for a 20% thick section, using the closed
/// trailing edge variant of the x⁴ term
pub const FOUR_DIGIT_COEFFICIENTS: [f64; 5] = [0.2969, -0.1260, -0.3516, 0.2843, -0.1036];

/// Leading edge radius of the 4-digit polynomial is this factor times the thickness squared
pub const LE_RADIUS_FACTOR: f64 = 1.1019;

/// The thickness ratio the polynomial coefficients are normalized to
const REFERENCE_THICKNESS: f64 = 0.2;

/// Leading edge index of the 4-digit sections; the modified envelope reduces to the same leading
/// edge sharpness at this index
const NORMAL_LE_INDEX: f64 = 6.0;

/// The modified 4-digit envelope. Forward of the maximum thickness the half thickness is
/// `a0 √x + a1 x + a2 x² + a3 x³`, aft of it `d1 s + d2 s² + d3 s³` with `s = 1 - x`. Both
/// pieces reach the maximum at the same point with zero slope and matching curvature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModifiedThickness {
    t: f64,
    le_index: f64,
    max_at: f64,
    a: [f64; 4],
    d: [f64; 3],
}

impl ModifiedThickness {
    /// # Arguments
    ///
    /// * `t` - maximum thickness as a fraction of the chord
    /// * `le_index` - leading edge sharpness, 6 matches the 4-digit sections, smaller is sharper
    /// * `max_at` - chord fraction of the maximum thickness, the envelope is well formed for
    /// values from 0.2 to 0.6
    pub fn new(t: f64, le_index: f64, max_at: f64) -> ModifiedThickness {
        let m = max_at;
        let s = 1.0 - m;

        let a0 = FOUR_DIGIT_COEFFICIENTS[0] * le_index / NORMAL_LE_INDEX;
        let d1 = (2.24 - 5.42 * m + 12.3 * m.powi(2)) / (10.0 * (1.0 - 0.878 * m));
        let d2 = (0.3 - 2.0 * d1 * s) / s.powi(2);
        let d3 = (d1 * s - 0.2) / s.powi(3);

        // Curvature of the aft piece at the max thickness point
        let y2t = 2.0 * d2 + 6.0 * d3 * s;

        let r1 = 0.1 - a0 * m.sqrt();
        let r2 = -a0 / (2.0 * m.sqrt());
        let r3 = y2t + a0 / (4.0 * m.powf(1.5));

        let a3 = (r1 - m * r2 + m.powi(2) * r3 / 2.0) / m.powi(3);
        let a2 = (r3 - 6.0 * a3 * m) / 2.0;
        let a1 = r2 - m * r3 + 3.0 * a3 * m.powi(2);

        ModifiedThickness {
            t,
            le_index,
            max_at,
            a: [a0, a1, a2, a3],
            d: [d1, d2, d3],
        }
    }

    pub fn max_at(&self) -> f64 {
        self.max_at
    }

    pub fn half_thickness(&self, x: f64) -> f64 {
        if x >= 1.0 {
            return 0.0;
        }

        let y = if x <= self.max_at {
            let [a0, a1, a2, a3] = self.a;
            a0 * x.sqrt() + a1 * x + a2 * x.powi(2) + a3 * x.powi(3)
        } else {
            let [d1, d2, d3] = self.d;
            let s = 1.0 - x;
            d1 * s + d2 * s.powi(2) + d3 * s.powi(3)
        };

        (self.t / REFERENCE_THICKNESS * y).max(0.0)
    }

    pub fn leading_edge_radius(&self) -> f64 {
        LE_RADIUS_FACTOR * (self.t * self.le_index / NORMAL_LE_INDEX).powi(2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThicknessForm {
    FourDigit { t: f64 },
    Modified(ModifiedThickness),
}

impl ThicknessForm {
    pub fn for_code(code: &AirfoilCode) -> ThicknessForm {
        match code {
            AirfoilCode::FourDigit(_) | AirfoilCode::FiveDigit(_) => ThicknessForm::FourDigit {
                t: code.thickness(),
            },
            AirfoilCode::SixSeries(c) => ThicknessForm::Modified(ModifiedThickness::new(
                c.thickness(),
                4.0,
                c.min_pressure_position(),
            )),
            AirfoilCode::SevenSeries(c) => ThicknessForm::Modified(ModifiedThickness::new(
                c.thickness(),
                4.0,
                c.max_thickness_position(),
            )),
            AirfoilCode::EightSeries(c) => ThicknessForm::Modified(ModifiedThickness::new(
                c.thickness(),
                3.0,
                c.max_thickness_position(),
            )),
        }
    }

    /// Half thickness `yt` at the chord fraction `x`, measured normal to the camber line. Zero at
    /// and beyond the trailing edge, never negative.
    pub fn half_thickness(&self, x: f64) -> f64 {
        match self {
            ThicknessForm::FourDigit { t } => {
                if x >= 1.0 {
                    return 0.0;
                }
                let [a0, a1, a2, a3, a4] = FOUR_DIGIT_COEFFICIENTS;
                let y = a0 * x.sqrt() + a1 * x + a2 * x.powi(2) + a3 * x.powi(3) + a4 * x.powi(4);
                (t / REFERENCE_THICKNESS * y).max(0.0)
            }
            ThicknessForm::Modified(m) => m.half_thickness(x),
        }
    }

    /// Leading edge radius as a fraction of the chord
    pub fn leading_edge_radius(&self) -> f64 {
        match self {
            ThicknessForm::FourDigit { t } => LE_RADIUS_FACTOR * t.powi(2),
            ThicknessForm::Modified(m) => m.leading_edge_radius(),
        }
    }
}

/// Evaluates the half thickness of the code at every station
pub fn thickness_distribution(code: &AirfoilCode, stations: &StationSequence) -> ThicknessDistribution {
    let form = ThicknessForm::for_code(code);
    ThicknessDistribution {
        points: stations
            .iter()
            .map(|x| Point2::new(*x, form.half_thickness(*x)))
            .collect(),
    }
}
