//! Parsing of NACA designations into validated, family specific parameter records.
//!
//! Every record stores the decoded digits of the designation and exposes the geometric
//! parameters as fractions of the chord. Records can only be built through the validating
//! constructors, so an `AirfoilCode` which exists always describes a physically valid section.

use crate::errors::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const THICKNESS_RANGE: &str = "1..=50 percent of chord";

/// Mean-line constants of the standard NACA 5-digit sections, keyed by the camber position digit.
/// The tabulated `k1` values belong to a design lift coefficient of 0.3.
///
/// (camber position digit, r, k1)
const FIVE_DIGIT_STANDARD: [(u8, f64, f64); 5] = [
    (1, 0.0580, 361.400),
    (2, 0.1260, 51.640),
    (3, 0.2025, 15.957),
    (4, 0.2900, 6.643),
    (5, 0.3910, 3.230),
];

/// Mean-line constants of the reflexed NACA 5-digit sections, also for a design lift of 0.3.
///
/// (camber position digit, r, k1, k2/k1)
const FIVE_DIGIT_REFLEX: [(u8, f64, f64, f64); 4] = [
    (2, 0.1300, 51.990, 0.000764),
    (3, 0.2170, 15.793, 0.00677),
    (4, 0.3180, 6.520, 0.0303),
    (5, 0.4410, 3.191, 0.1355),
];

/// The design lift coefficient the 5-digit tables are tabulated for
pub const FIVE_DIGIT_TABLE_CL: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AirfoilFamily {
    FourDigit,
    FiveDigit,
    SixSeries,
    SevenSeries,
    EightSeries,
}

impl AirfoilFamily {
    pub const ALL: [AirfoilFamily; 5] = [
        AirfoilFamily::FourDigit,
        AirfoilFamily::FiveDigit,
        AirfoilFamily::SixSeries,
        AirfoilFamily::SevenSeries,
        AirfoilFamily::EightSeries,
    ];

    /// The character layout of a designation in this family. `#` is a digit, `@` is a letter
    /// and every other character must appear literally.
    pub fn layout(&self) -> &'static str {
        match self {
            AirfoilFamily::FourDigit => "####",
            AirfoilFamily::FiveDigit => "#####",
            AirfoilFamily::SixSeries => "6#-###",
            AirfoilFamily::SevenSeries => "7##@###",
            AirfoilFamily::EightSeries => "8##@###",
        }
    }
}

impl Display for AirfoilFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AirfoilFamily::FourDigit => "NACA 4-digit",
            AirfoilFamily::FiveDigit => "NACA 5-digit",
            AirfoilFamily::SixSeries => "NACA 6-series",
            AirfoilFamily::SevenSeries => "NACA 7-series",
            AirfoilFamily::EightSeries => "NACA 8-series",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for AirfoilFamily {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        let key = key.strip_prefix("naca").unwrap_or(&key);

        match key {
            "4" | "4digit" | "four" | "fourdigit" => Ok(AirfoilFamily::FourDigit),
            "5" | "5digit" | "five" | "fivedigit" => Ok(AirfoilFamily::FiveDigit),
            "6" | "6series" | "six" | "sixseries" => Ok(AirfoilFamily::SixSeries),
            "7" | "7series" | "seven" | "sevenseries" => Ok(AirfoilFamily::SevenSeries),
            "8" | "8series" | "eight" | "eightseries" => Ok(AirfoilFamily::EightSeries),
            _ => Err(ParseError::UnknownFamily(s.to_string())),
        }
    }
}

/// A NACA 4-digit section of the form MPTT, where M is the maximum camber in percent of the chord,
/// P is the location of the maximum camber in tenths of the chord, and TT is the maximum
/// thickness in percent of the chord.  For example, a NACA 2412 has a 2% camber at 40% of the
/// chord and a max thickness which is 12% of the chord length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourDigitCode {
    max_camber_pct: u8,
    camber_pos_tenths: u8,
    thickness_pct: u8,
}

impl FourDigitCode {
    pub fn new(
        max_camber_pct: u8,
        camber_pos_tenths: u8,
        thickness_pct: u8,
    ) -> Result<FourDigitCode, ParseError> {
        check_digit("max_camber_pct", max_camber_pct, 9)?;
        check_digit("camber_pos_tenths", camber_pos_tenths, 9)?;
        check_thickness(thickness_pct)?;

        // A cambered section needs somewhere to put its camber
        if max_camber_pct > 0 && camber_pos_tenths == 0 {
            return Err(ParseError::OutOfRange {
                field: "camber_pos_tenths",
                value: 0.0,
                valid: "1..=9 when the max camber is non-zero",
            });
        }

        Ok(FourDigitCode {
            max_camber_pct,
            camber_pos_tenths,
            thickness_pct,
        })
    }

    pub fn max_camber_pct(&self) -> u8 {
        self.max_camber_pct
    }

    pub fn camber_pos_tenths(&self) -> u8 {
        self.camber_pos_tenths
    }

    pub fn thickness_pct(&self) -> u8 {
        self.thickness_pct
    }

    /// Max camber as a fraction of the chord (`m`)
    pub fn max_camber(&self) -> f64 {
        self.max_camber_pct as f64 / 100.0
    }

    /// Location of the max camber as a fraction of the chord (`p`)
    pub fn camber_position(&self) -> f64 {
        self.camber_pos_tenths as f64 / 10.0
    }

    pub fn thickness(&self) -> f64 {
        self.thickness_pct as f64 / 100.0
    }
}

/// Constants of a 5-digit mean line, looked up from the fixed tables and already scaled to the
/// design lift coefficient of the section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiveDigitMeanLine {
    /// Chord fraction at which the cubic forward part of the mean line ends
    pub r: f64,
    pub k1: f64,
    /// Ratio k2/k1 for reflexed mean lines, `None` for the standard mean line
    pub k2_k1: Option<f64>,
}

/// A NACA 5-digit section LPQTT: L is the design lift coefficient in units of 0.15, P is the
/// position of the max camber in units of 0.05 of the chord, Q selects a standard (0) or reflexed
/// (1) mean line, and TT is the thickness in percent of the chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FiveDigitCode {
    design_cl_code: u8,
    camber_pos_code: u8,
    reflex: bool,
    thickness_pct: u8,
}

impl FiveDigitCode {
    pub fn new(
        design_cl_code: u8,
        camber_pos_code: u8,
        reflex: bool,
        thickness_pct: u8,
    ) -> Result<FiveDigitCode, ParseError> {
        check_digit("design_cl_code", design_cl_code, 9)?;
        check_thickness(thickness_pct)?;

        let code = FiveDigitCode {
            design_cl_code,
            camber_pos_code,
            reflex,
            thickness_pct,
        };

        // Verifies that the camber position exists in the table for this mean line type
        code.table_entry()?;
        Ok(code)
    }

    pub fn design_cl_code(&self) -> u8 {
        self.design_cl_code
    }

    pub fn camber_pos_code(&self) -> u8 {
        self.camber_pos_code
    }

    pub fn is_reflex(&self) -> bool {
        self.reflex
    }

    pub fn thickness_pct(&self) -> u8 {
        self.thickness_pct
    }

    pub fn design_cl(&self) -> f64 {
        0.15 * self.design_cl_code as f64
    }

    /// Nominal location of the max camber as a fraction of the chord
    pub fn camber_position(&self) -> f64 {
        0.05 * self.camber_pos_code as f64
    }

    pub fn thickness(&self) -> f64 {
        self.thickness_pct as f64 / 100.0
    }

    fn table_entry(&self) -> Result<(f64, f64, Option<f64>), ParseError> {
        let entry = if self.reflex {
            FIVE_DIGIT_REFLEX
                .iter()
                .find(|(key, ..)| *key == self.camber_pos_code)
                .map(|(_, r, k1, k21)| (*r, *k1, Some(*k21)))
        } else {
            FIVE_DIGIT_STANDARD
                .iter()
                .find(|(key, ..)| *key == self.camber_pos_code)
                .map(|(_, r, k1)| (*r, *k1, None))
        };

        entry.ok_or(ParseError::NotInTable {
            field: "camber_pos_code",
            value: self.camber_pos_code,
            table: if self.reflex {
                "reflexed 5-digit mean line"
            } else {
                "standard 5-digit mean line"
            },
        })
    }

    /// The mean line constants with `k1` scaled from the tabulated lift coefficient to the design
    /// lift coefficient of this section
    pub fn mean_line(&self) -> FiveDigitMeanLine {
        // The table was checked at construction
        let (r, k1, k2_k1) = self.table_entry().unwrap_or((0.0, 0.0, None));
        FiveDigitMeanLine {
            r,
            k1: k1 * self.design_cl() / FIVE_DIGIT_TABLE_CL,
            k2_k1,
        }
    }
}

/// A NACA 6-series section of the form 6P-LTT, where P is the chordwise location of minimum
/// pressure in tenths of the chord, L is the design lift coefficient in tenths and TT is the
/// thickness in percent of the chord.  For example, 65-415.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SixSeriesCode {
    min_pressure_tenths: u8,
    design_cl_tenths: u8,
    thickness_pct: u8,
}

impl SixSeriesCode {
    pub fn new(
        min_pressure_tenths: u8,
        design_cl_tenths: u8,
        thickness_pct: u8,
    ) -> Result<SixSeriesCode, ParseError> {
        if !(2..=6).contains(&min_pressure_tenths) {
            return Err(ParseError::OutOfRange {
                field: "min_pressure_tenths",
                value: min_pressure_tenths as f64,
                valid: "2..=6 tenths of chord",
            });
        }
        check_digit("design_cl_tenths", design_cl_tenths, 9)?;
        check_thickness(thickness_pct)?;

        Ok(SixSeriesCode {
            min_pressure_tenths,
            design_cl_tenths,
            thickness_pct,
        })
    }

    pub fn min_pressure_tenths(&self) -> u8 {
        self.min_pressure_tenths
    }

    pub fn design_cl_tenths(&self) -> u8 {
        self.design_cl_tenths
    }

    pub fn thickness_pct(&self) -> u8 {
        self.thickness_pct
    }

    pub fn min_pressure_position(&self) -> f64 {
        self.min_pressure_tenths as f64 / 10.0
    }

    pub fn design_cl(&self) -> f64 {
        self.design_cl_tenths as f64 / 10.0
    }

    pub fn thickness(&self) -> f64 {
        self.thickness_pct as f64 / 100.0
    }
}

/// Field set shared by the 7-series and 8-series designations, of the form SUL@CTT, e.g. 747A315:
/// S is the series, U and L are the locations of minimum pressure on the upper and lower surfaces
/// in tenths of the chord, @ is a letter identifying the thickness and mean line combination, C is
/// the design lift coefficient in tenths and TT is the thickness in percent of the chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesCode {
    upper_min_pressure_tenths: u8,
    lower_min_pressure_tenths: u8,
    letter: char,
    design_cl_tenths: u8,
    thickness_pct: u8,
}

impl SeriesCode {
    pub fn new(
        upper_min_pressure_tenths: u8,
        lower_min_pressure_tenths: u8,
        letter: char,
        design_cl_tenths: u8,
        thickness_pct: u8,
    ) -> Result<SeriesCode, ParseError> {
        for (field, value) in [
            ("upper_min_pressure_tenths", upper_min_pressure_tenths),
            ("lower_min_pressure_tenths", lower_min_pressure_tenths),
        ] {
            if !(1..=9).contains(&value) {
                return Err(ParseError::OutOfRange {
                    field,
                    value: value as f64,
                    valid: "1..=9 tenths of chord",
                });
            }
        }
        check_digit("design_cl_tenths", design_cl_tenths, 9)?;
        check_thickness(thickness_pct)?;

        let code = SeriesCode {
            upper_min_pressure_tenths,
            lower_min_pressure_tenths,
            letter: letter.to_ascii_uppercase(),
            design_cl_tenths,
            thickness_pct,
        };

        let at = code.max_thickness_position();
        if !(0.2..=0.6).contains(&at) {
            return Err(ParseError::OutOfRange {
                field: "max_thickness_position",
                value: at,
                valid: "0.2..=0.6 (mean of the two minimum pressure locations)",
            });
        }

        Ok(code)
    }

    pub fn upper_min_pressure_tenths(&self) -> u8 {
        self.upper_min_pressure_tenths
    }

    pub fn lower_min_pressure_tenths(&self) -> u8 {
        self.lower_min_pressure_tenths
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn design_cl_tenths(&self) -> u8 {
        self.design_cl_tenths
    }

    pub fn thickness_pct(&self) -> u8 {
        self.thickness_pct
    }

    pub fn upper_min_pressure_position(&self) -> f64 {
        self.upper_min_pressure_tenths as f64 / 10.0
    }

    pub fn lower_min_pressure_position(&self) -> f64 {
        self.lower_min_pressure_tenths as f64 / 10.0
    }

    /// Chord fraction of the maximum thickness, taken midway between the upper and lower surface
    /// minimum pressure locations
    pub fn max_thickness_position(&self) -> f64 {
        (self.upper_min_pressure_tenths + self.lower_min_pressure_tenths) as f64 / 20.0
    }

    pub fn design_cl(&self) -> f64 {
        self.design_cl_tenths as f64 / 10.0
    }

    pub fn thickness(&self) -> f64 {
        self.thickness_pct as f64 / 100.0
    }
}

/// A validated airfoil designation: the family tag and its decoded parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AirfoilCode {
    FourDigit(FourDigitCode),
    FiveDigit(FiveDigitCode),
    SixSeries(SixSeriesCode),
    SevenSeries(SeriesCode),
    EightSeries(SeriesCode),
}

impl AirfoilCode {
    pub fn family(&self) -> AirfoilFamily {
        match self {
            AirfoilCode::FourDigit(_) => AirfoilFamily::FourDigit,
            AirfoilCode::FiveDigit(_) => AirfoilFamily::FiveDigit,
            AirfoilCode::SixSeries(_) => AirfoilFamily::SixSeries,
            AirfoilCode::SevenSeries(_) => AirfoilFamily::SevenSeries,
            AirfoilCode::EightSeries(_) => AirfoilFamily::EightSeries,
        }
    }

    /// Maximum thickness as a fraction of the chord
    pub fn thickness(&self) -> f64 {
        match self {
            AirfoilCode::FourDigit(c) => c.thickness(),
            AirfoilCode::FiveDigit(c) => c.thickness(),
            AirfoilCode::SixSeries(c) => c.thickness(),
            AirfoilCode::SevenSeries(c) | AirfoilCode::EightSeries(c) => c.thickness(),
        }
    }

    /// The canonical designation, for instance "2412", "23012", "65-415" or "747A315"
    pub fn designation(&self) -> String {
        match self {
            AirfoilCode::FourDigit(c) => format!(
                "{}{}{:02}",
                c.max_camber_pct, c.camber_pos_tenths, c.thickness_pct
            ),
            AirfoilCode::FiveDigit(c) => format!(
                "{}{}{}{:02}",
                c.design_cl_code, c.camber_pos_code, c.reflex as u8, c.thickness_pct
            ),
            AirfoilCode::SixSeries(c) => format!(
                "6{}-{}{:02}",
                c.min_pressure_tenths, c.design_cl_tenths, c.thickness_pct
            ),
            AirfoilCode::SevenSeries(c) => series_designation(7, c),
            AirfoilCode::EightSeries(c) => series_designation(8, c),
        }
    }
}

impl Display for AirfoilCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "NACA {}", self.designation())
    }
}

/// Detects the family from the layout of the code and parses it
impl FromStr for AirfoilCode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        let code = code
            .strip_prefix("NACA")
            .or_else(|| code.strip_prefix("naca"))
            .unwrap_or(code)
            .trim();

        AirfoilFamily::ALL
            .iter()
            .find(|family| scan(**family, code).is_ok())
            .map(|family| parse(*family, code))
            .unwrap_or_else(|| Err(ParseError::UnrecognizedCode(s.to_string())))
    }
}

fn series_designation(series: u8, c: &SeriesCode) -> String {
    format!(
        "{}{}{}{}{}{:02}",
        series,
        c.upper_min_pressure_tenths,
        c.lower_min_pressure_tenths,
        c.letter,
        c.design_cl_tenths,
        c.thickness_pct
    )
}

fn check_digit(field: &'static str, value: u8, max: u8) -> Result<(), ParseError> {
    if value > max {
        Err(ParseError::OutOfRange {
            field,
            value: value as f64,
            valid: "a single decimal digit",
        })
    } else {
        Ok(())
    }
}

fn check_thickness(thickness_pct: u8) -> Result<(), ParseError> {
    if (1..=50).contains(&thickness_pct) {
        Ok(())
    } else {
        Err(ParseError::OutOfRange {
            field: "thickness_pct",
            value: thickness_pct as f64,
            valid: THICKNESS_RANGE,
        })
    }
}

/// The digits and letters picked out of a code by its family layout
struct Scanned {
    digits: Vec<u8>,
    letter: Option<char>,
}

fn scan(family: AirfoilFamily, code: &str) -> Result<Scanned, ParseError> {
    let layout = family.layout();
    let invalid = || ParseError::InvalidFormat {
        family,
        code: code.to_string(),
        expected: layout,
    };

    if code.chars().count() != layout.chars().count() {
        return Err(invalid());
    }

    let mut scanned = Scanned {
        digits: Vec::new(),
        letter: None,
    };

    for (c, expected) in code.chars().zip(layout.chars()) {
        match expected {
            '#' => scanned
                .digits
                .push(c.to_digit(10).ok_or_else(invalid)? as u8),
            '@' if c.is_ascii_alphabetic() => scanned.letter = Some(c),
            '@' => return Err(invalid()),
            literal if literal != c => return Err(invalid()),
            _ => {}
        }
    }

    Ok(scanned)
}

/// Parses a code in the layout of the given family into a validated `AirfoilCode`.
///
/// # Arguments
///
/// * `family` - the family whose layout and ranges the code is checked against
/// * `raw_code` - the designation without the "NACA" prefix, e.g. "2412" or "63-018".
/// Surrounding whitespace is ignored.
///
/// returns: Result<AirfoilCode, ParseError>
pub fn parse(family: AirfoilFamily, raw_code: &str) -> Result<AirfoilCode, ParseError> {
    let code = raw_code.trim();
    let Scanned { digits: d, letter } = scan(family, code)?;
    let two = |i: usize| d[i] * 10 + d[i + 1];

    match family {
        AirfoilFamily::FourDigit => Ok(AirfoilCode::FourDigit(FourDigitCode::new(
            d[0],
            d[1],
            two(2),
        )?)),
        AirfoilFamily::FiveDigit => {
            let reflex = match d[2] {
                0 => false,
                1 => true,
                other => {
                    return Err(ParseError::OutOfRange {
                        field: "reflex",
                        value: other as f64,
                        valid: "0 (standard) or 1 (reflexed)",
                    })
                }
            };
            Ok(AirfoilCode::FiveDigit(FiveDigitCode::new(
                d[0],
                d[1],
                reflex,
                two(3),
            )?))
        }
        AirfoilFamily::SixSeries => Ok(AirfoilCode::SixSeries(SixSeriesCode::new(
            d[0],
            d[1],
            two(2),
        )?)),
        AirfoilFamily::SevenSeries | AirfoilFamily::EightSeries => {
            let series = SeriesCode::new(d[0], d[1], letter.unwrap_or('A'), d[2], two(3))?;
            if family == AirfoilFamily::SevenSeries {
                Ok(AirfoilCode::SevenSeries(series))
            } else {
                Ok(AirfoilCode::EightSeries(series))
            }
        }
    }
}
