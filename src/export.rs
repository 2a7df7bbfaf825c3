//! Text encodings of a section's closed contour. Both formats list the upper surface from the
//! trailing edge to the leading edge, followed by the lower surface back to the trailing edge,
//! with the shared leading edge point written once.

use crate::airfoil::AirfoilGeometry;
use crate::errors::FormatError;
use ncollide2d::na::Point2;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Selig `.dat`: a name line followed by whitespace separated `x y` pairs
    #[default]
    Dat,

    /// `x,y` header followed by comma separated pairs
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Dat => "dat",
            ExportFormat::Csv => "csv",
        }
    }

    /// Picks the format from a file extension, `None` for anything unrecognized
    pub fn from_path(path: &Path) -> Option<ExportFormat> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|e| e.parse().ok())
    }
}

impl FromStr for ExportFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dat" | "selig" => Ok(ExportFormat::Dat),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// A loop of points read back from text, with the name line of a Selig file if there was one
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    pub name: Option<String>,
    pub points: Vec<Point2<f64>>,
}

pub fn export(geometry: &AirfoilGeometry, format: ExportFormat) -> Result<String, FormatError> {
    match format {
        ExportFormat::Dat => Ok(to_selig(geometry)),
        ExportFormat::Csv => to_csv(geometry),
    }
}

pub fn to_selig(geometry: &AirfoilGeometry) -> String {
    let mut text = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(text, "{}", geometry.name);
    for p in geometry.selig_loop().iter() {
        let _ = writeln!(text, "{:.6} {:.6}", p.x, p.y);
    }
    text
}

pub fn to_csv(geometry: &AirfoilGeometry) -> Result<String, FormatError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["x", "y"])?;
    for p in geometry.selig_loop().iter() {
        writer.write_record([format!("{:.6}", p.x), format!("{:.6}", p.y)])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| FormatError::Flush(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

fn parse_pair(line: &str) -> Option<Point2<f64>> {
    let mut parts = line.split_whitespace();
    let x = parts.next()?.parse::<f64>().ok()?;
    let y = parts.next()?.parse::<f64>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Point2::new(x, y))
}

/// Reads a Selig `.dat` file. A first line that is not a coordinate pair is taken as the name.
pub fn read_selig(text: &str) -> Result<Coordinates, FormatError> {
    let mut name = None;
    let mut points = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_pair(line) {
            Some(p) => points.push(p),
            None if points.is_empty() && name.is_none() => name = Some(line.to_string()),
            None => {
                return Err(FormatError::MalformedLine {
                    line: i + 1,
                    content: line.to_string(),
                })
            }
        }
    }

    if points.is_empty() {
        return Err(FormatError::Empty);
    }

    Ok(Coordinates { name, points })
}

pub fn read_csv(text: &str) -> Result<Coordinates, FormatError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut points = Vec::new();
    for record in reader.deserialize::<(f64, f64)>() {
        let (x, y) = record?;
        points.push(Point2::new(x, y));
    }

    if points.is_empty() {
        return Err(FormatError::Empty);
    }

    Ok(Coordinates { name: None, points })
}

pub fn read(text: &str, format: ExportFormat) -> Result<Coordinates, FormatError> {
    match format {
        ExportFormat::Dat => read_selig(text),
        ExportFormat::Csv => read_csv(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::generate::generate;
    use crate::code::{parse, AirfoilFamily};
    use approx::assert_relative_eq;
    use test_case::test_case;

    fn geometry(family: AirfoilFamily, text: &str) -> AirfoilGeometry {
        generate(&parse(family, text).unwrap(), 1.0, 60).unwrap()
    }

    #[test]
    fn test_selig_layout() {
        let g = geometry(AirfoilFamily::FourDigit, "0012");
        let text = to_selig(&g);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!("NACA 0012", lines[0]);
        assert_eq!(1 + 2 * 60 - 1, lines.len());
        assert_eq!("1.000000 0.000000", lines[1]);
        assert_eq!("0.000000 0.000000", lines[60]);
        assert_eq!("1.000000 0.000000", lines[lines.len() - 1]);
    }

    #[test]
    fn test_csv_layout() {
        let g = geometry(AirfoilFamily::FourDigit, "0012");
        let text = to_csv(&g).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!("x,y", lines[0]);
        assert_eq!(2 * 60, lines.len());
        assert_eq!("1.000000,0.000000", lines[1]);
        assert!(lines[2].starts_with("0.99"));
    }

    #[test_case(AirfoilFamily::FourDigit, "2412", ExportFormat::Dat)]
    #[test_case(AirfoilFamily::FourDigit, "2412", ExportFormat::Csv)]
    #[test_case(AirfoilFamily::FiveDigit, "23112", ExportFormat::Dat)]
    #[test_case(AirfoilFamily::SixSeries, "65-415", ExportFormat::Csv)]
    #[test_case(AirfoilFamily::EightSeries, "835A216", ExportFormat::Dat)]
    fn test_round_trip(family: AirfoilFamily, text: &str, format: ExportFormat) {
        let g = geometry(family, text);
        let exported = export(&g, format).unwrap();
        let coordinates = read(&exported, format).unwrap();
        let expected = g.selig_loop();

        assert_eq!(expected.len(), coordinates.points.len());
        for (a, b) in expected.iter().zip(coordinates.points.iter()) {
            assert_relative_eq!(a.x, b.x, epsilon = 1e-6);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-6);
        }

        match format {
            ExportFormat::Dat => assert_eq!(Some(g.name.clone()), coordinates.name),
            ExportFormat::Csv => assert_eq!(None, coordinates.name),
        }
    }

    #[test]
    fn test_read_selig_without_name() {
        let coordinates = read_selig("1.0 0.0\n\n  0.5 0.1\n0.0 0.0\n").unwrap();
        assert_eq!(None, coordinates.name);
        assert_eq!(3, coordinates.points.len());
        assert_eq!(Point2::new(0.5, 0.1), coordinates.points[1]);
    }

    #[test]
    fn test_read_selig_malformed() {
        let result = read_selig("NACA 0012\n1.0 0.0\n0.5 abc\n");
        assert!(matches!(
            result,
            Err(FormatError::MalformedLine { line: 3, .. })
        ));
    }

    #[test_case("")]
    #[test_case("NACA 0012\n")]
    fn test_read_selig_empty(text: &str) {
        assert!(matches!(read_selig(text), Err(FormatError::Empty)));
    }

    #[test]
    fn test_read_csv_errors() {
        assert!(matches!(read_csv("x,y\n"), Err(FormatError::Empty)));
        assert!(matches!(read_csv("x,y\n1.0,zz\n"), Err(FormatError::Csv(_))));
    }

    #[test_case("dat", Some(ExportFormat::Dat))]
    #[test_case("CSV", Some(ExportFormat::Csv))]
    #[test_case("selig", Some(ExportFormat::Dat))]
    #[test_case("svg", None)]
    fn test_format_from_str(text: &str, expected: Option<ExportFormat>) {
        assert_eq!(expected, text.parse::<ExportFormat>().ok());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            Some(ExportFormat::Csv),
            ExportFormat::from_path(Path::new("out/naca2412.csv"))
        );
        assert_eq!(None, ExportFormat::from_path(Path::new("naca2412")));
    }
}
