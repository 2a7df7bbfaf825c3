//! Mean line formulas for each airfoil family. Every mean line is evaluated at a chord fraction
//! from 0.0 to 1.0 and returns to the chord line at both ends.

use super::CamberLine;
use crate::code::AirfoilCode;
use crate::stations::StationSequence;
use ncollide2d::na::Point2;
use std::f64::consts::PI;

/// `v ln|v|`, continuously extended with 0 at v = 0
fn plnp(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v * v.abs().ln()
    }
}

/// `v² ln|v|`, continuously extended with 0 at v = 0
fn sq_ln(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v * v * v.abs().ln()
    }
}

/// The NACA "a" mean line: uniform chordwise loading from the leading edge to `a`, decreasing
/// linearly to zero at the trailing edge, scaled to the ideal lift coefficient `cli`. With
/// `a = 1.0` the loading is uniform over the whole chord.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AMeanLine {
    a: f64,
    cli: f64,
    g: f64,
    h: f64,
}

impl AMeanLine {
    pub fn new(a: f64, cli: f64) -> AMeanLine {
        let (g, h) = if a < 1.0 {
            let g = -(sq_ln(a) / 2.0 - a * a / 4.0 + 0.25) / (1.0 - a);
            let h = (sq_ln(1.0 - a) / 2.0 - (1.0 - a).powi(2) / 4.0) / (1.0 - a) + g;
            (g, h)
        } else {
            (0.0, 0.0)
        };

        AMeanLine { a, cli, g, h }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn cli(&self) -> f64 {
        self.cli
    }

    fn is_uniform(&self) -> bool {
        self.a >= 1.0
    }

    pub fn camber(&self, x: f64) -> f64 {
        if self.is_uniform() {
            return -self.cli / (4.0 * PI) * (plnp(1.0 - x) + plnp(x));
        }

        let a = self.a;
        let k = self.cli / (2.0 * PI * (a + 1.0));
        let bracket = (sq_ln(a - x) / 2.0 - sq_ln(1.0 - x) / 2.0 + (1.0 - x).powi(2) / 4.0
            - (a - x).powi(2) / 4.0)
            / (1.0 - a);

        k * (bracket - plnp(x) + self.g - self.h * x)
    }

    /// Slope of the mean line. The slope is logarithmically infinite at the leading edge (and at
    /// the trailing edge for `a = 1`), where the thickness is zero.
    pub fn slope(&self, x: f64) -> f64 {
        if self.is_uniform() {
            return self.cli / (4.0 * PI) * ((1.0 - x).ln() - x.ln());
        }

        let a = self.a;
        let k = self.cli / (2.0 * PI * (a + 1.0));
        k * ((plnp(1.0 - x) - plnp(a - x)) / (1.0 - a) - x.ln() - 1.0 - self.h)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeanLine {
    /// Symmetric sections, the camber line is the chord line
    Flat,

    /// Two parabolic arcs meeting at the max camber `m` located at `p`
    FourDigit { m: f64, p: f64 },

    /// Cubic forward of `r`, straight line from `r` to the trailing edge
    FiveDigit { r: f64, k1: f64 },

    /// Cubic forward of `r` and a second cubic aft of it, giving a reflexed trailing edge
    FiveDigitReflex { r: f64, k1: f64, k2_k1: f64 },

    /// The a-mean-line used by the 6, 7 and 8 series
    Series(AMeanLine),
}

impl MeanLine {
    /// Selects the mean line definition of the code's family
    pub fn for_code(code: &AirfoilCode) -> MeanLine {
        match code {
            AirfoilCode::FourDigit(c) if c.max_camber_pct() == 0 => MeanLine::Flat,
            AirfoilCode::FourDigit(c) => MeanLine::FourDigit {
                m: c.max_camber(),
                p: c.camber_position(),
            },
            AirfoilCode::FiveDigit(c) if c.design_cl_code() == 0 => MeanLine::Flat,
            AirfoilCode::FiveDigit(c) => {
                let line = c.mean_line();
                match line.k2_k1 {
                    Some(k2_k1) => MeanLine::FiveDigitReflex {
                        r: line.r,
                        k1: line.k1,
                        k2_k1,
                    },
                    None => MeanLine::FiveDigit {
                        r: line.r,
                        k1: line.k1,
                    },
                }
            }
            AirfoilCode::SixSeries(c) if c.design_cl_tenths() == 0 => MeanLine::Flat,
            AirfoilCode::SixSeries(c) => MeanLine::Series(AMeanLine::new(1.0, c.design_cl())),
            AirfoilCode::SevenSeries(c) | AirfoilCode::EightSeries(c) => {
                if c.design_cl_tenths() == 0 {
                    MeanLine::Flat
                } else {
                    MeanLine::Series(AMeanLine::new(
                        c.upper_min_pressure_position(),
                        c.design_cl(),
                    ))
                }
            }
        }
    }

    pub fn camber(&self, x: f64) -> f64 {
        match *self {
            MeanLine::Flat => 0.0,
            MeanLine::FourDigit { m, p } => {
                if x < p {
                    (m / p.powi(2)) * (2.0 * p * x - x.powi(2))
                } else {
                    (m / (1.0 - p).powi(2)) * ((1.0 - 2.0 * p) + 2.0 * p * x - x.powi(2))
                }
            }
            MeanLine::FiveDigit { r, k1 } => {
                if x < r {
                    (k1 / 6.0) * (x.powi(3) - 3.0 * r * x.powi(2) + r.powi(2) * (3.0 - r) * x)
                } else {
                    (k1 * r.powi(3) / 6.0) * (1.0 - x)
                }
            }
            MeanLine::FiveDigitReflex { r, k1, k2_k1 } => {
                let tail = k2_k1 * (1.0 - r).powi(3) * x + r.powi(3) * x - r.powi(3);
                if x < r {
                    (k1 / 6.0) * ((x - r).powi(3) - tail)
                } else {
                    (k1 / 6.0) * (k2_k1 * (x - r).powi(3) - tail)
                }
            }
            MeanLine::Series(line) => line.camber(x),
        }
    }

    /// Analytic derivative dyc/dx of the camber line
    pub fn slope(&self, x: f64) -> f64 {
        match *self {
            MeanLine::Flat => 0.0,
            MeanLine::FourDigit { m, p } => {
                if x < p {
                    2.0 * m / p.powi(2) * (p - x)
                } else {
                    2.0 * m / (1.0 - p).powi(2) * (p - x)
                }
            }
            MeanLine::FiveDigit { r, k1 } => {
                if x < r {
                    (k1 / 6.0) * (3.0 * x.powi(2) - 6.0 * r * x + r.powi(2) * (3.0 - r))
                } else {
                    -k1 * r.powi(3) / 6.0
                }
            }
            MeanLine::FiveDigitReflex { r, k1, k2_k1 } => {
                let tail = k2_k1 * (1.0 - r).powi(3) + r.powi(3);
                if x < r {
                    (k1 / 6.0) * (3.0 * (x - r).powi(2) - tail)
                } else {
                    (k1 / 6.0) * (3.0 * k2_k1 * (x - r).powi(2) - tail)
                }
            }
            MeanLine::Series(line) => line.slope(x),
        }
    }
}

/// Evaluates the mean line of the code at every station
pub fn camber_line(code: &AirfoilCode, stations: &StationSequence) -> CamberLine {
    let line = MeanLine::for_code(code);
    CamberLine {
        points: stations
            .iter()
            .map(|x| Point2::new(*x, line.camber(*x)))
            .collect(),
    }
}
