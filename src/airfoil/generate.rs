use crate::airfoil::camber::MeanLine;
use crate::airfoil::thickness::ThicknessForm;
use crate::airfoil::{AirfoilGeometry, CamberStation};
use crate::code::AirfoilCode;
use crate::errors::GeometryError;
use crate::stations::{SampleCount, Spacing, StationSequence};
use ncollide2d::na::{Point2, Vector2};
use rayon::prelude::*;

/// An AirfoilGenerator is an entity which can compute the position and slope of the mean camber
/// line and the half thickness at fractions of the chord. This provides the information necessary
/// for a generator to compute the airfoil surfaces.
pub trait AirfoilGenerator {
    /// Height of the camber line at a chord fraction from 0.0 to 1.0
    fn camber(&self, x: f64) -> f64;

    /// Analytic slope of the camber line at a chord fraction from 0.0 to 1.0
    fn camber_slope(&self, x: f64) -> f64;

    /// Half of the airfoil thickness, measured normal to the camber line
    fn half_thickness(&self, x: f64) -> f64;

    /// Offsets the half thickness along the camber line normal on both sides. An infinite slope
    /// resolves to a vertical normal, so the zero thickness edges stay on the camber line.
    fn station_at(&self, x: f64) -> CamberStation {
        let camber = Point2::new(x, self.camber(x));
        let theta = self.camber_slope(x).atan();
        let t = self.half_thickness(x);
        let offset = Vector2::new(-t * theta.sin(), t * theta.cos());

        CamberStation::new(camber, camber + offset, camber - offset)
    }

    /// Evaluates a station at every chord fraction, in order
    fn generate(&self, stations: &StationSequence) -> Vec<CamberStation> {
        stations.iter().map(|x| self.station_at(*x)).collect()
    }
}

/// A mean line paired with a thickness distribution, the full definition of a section at unit
/// chord
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub mean_line: MeanLine,
    pub thickness: ThicknessForm,
}

impl Section {
    pub fn new(mean_line: MeanLine, thickness: ThicknessForm) -> Section {
        Section {
            mean_line,
            thickness,
        }
    }

    pub fn from_code(code: &AirfoilCode) -> Section {
        Section::new(MeanLine::for_code(code), ThicknessForm::for_code(code))
    }

    /// Generates the section at the given chord. The name is used as the display name of the
    /// resulting geometry.
    pub fn build(
        &self,
        name: &str,
        options: &GenerateOptions,
    ) -> Result<AirfoilGeometry, GeometryError> {
        check_chord(options.chord)?;
        let stations = StationSequence::new(options.samples, options.spacing);
        let camber_stations = self.generate(&stations);

        Ok(AirfoilGeometry::from_stations(
            name,
            options.chord,
            stations,
            &camber_stations,
        ))
    }
}

impl AirfoilGenerator for Section {
    fn camber(&self, x: f64) -> f64 {
        self.mean_line.camber(x)
    }

    fn camber_slope(&self, x: f64) -> f64 {
        self.mean_line.slope(x)
    }

    fn half_thickness(&self, x: f64) -> f64 {
        self.thickness.half_thickness(x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateOptions {
    pub chord: f64,
    pub samples: SampleCount,
    pub spacing: Spacing,
}

impl GenerateOptions {
    pub fn new(chord: f64, samples: SampleCount, spacing: Spacing) -> Self {
        GenerateOptions {
            chord,
            samples,
            spacing,
        }
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions::new(1.0, SampleCount::default(), Spacing::Cosine)
    }
}

fn check_chord(chord: f64) -> Result<(), GeometryError> {
    if chord.is_finite() && chord > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::DegenerateInput {
            field: "chord",
            value: chord,
        })
    }
}

/// Generates the upper and lower surfaces of a NACA section with cosine spaced stations.
///
/// # Arguments
///
/// * `code` - a validated section designation
/// * `chord` - the actual length of the airfoil chord, must be positive and finite
/// * `sample_count` - stations per surface, clamped to the supported range
pub fn generate(
    code: &AirfoilCode,
    chord: f64,
    sample_count: usize,
) -> Result<AirfoilGeometry, GeometryError> {
    let options = GenerateOptions::new(chord, SampleCount::new(sample_count), Spacing::Cosine);
    generate_with(code, &options)
}

pub fn generate_with(
    code: &AirfoilCode,
    options: &GenerateOptions,
) -> Result<AirfoilGeometry, GeometryError> {
    Section::from_code(code).build(&code.to_string(), options)
}

/// Generates a set of sections in parallel. Results are returned in the order of `codes`.
pub fn generate_batch(
    codes: &[AirfoilCode],
    options: &GenerateOptions,
) -> Vec<Result<AirfoilGeometry, GeometryError>> {
    codes
        .par_iter()
        .map(|code| generate_with(code, options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{parse, AirfoilFamily};
    use approx::assert_relative_eq;
    use test_case::test_case;

    fn code(family: AirfoilFamily, text: &str) -> AirfoilCode {
        parse(family, text).unwrap()
    }

    fn max_by_y(points: &[Point2<f64>]) -> Point2<f64> {
        points
            .iter()
            .cloned()
            .fold(Point2::new(0.0, f64::MIN), |a, b| if b.y > a.y { b } else { a })
    }

    #[test]
    fn test_naca_0012_symmetric() {
        let geometry = generate(&code(AirfoilFamily::FourDigit, "0012"), 1.0, 200).unwrap();

        assert_eq!(200, geometry.upper.len());
        assert_eq!(200, geometry.lower.len());
        for (u, l) in geometry.upper.iter().zip(geometry.lower.iter()) {
            assert_eq!(u.x, l.x);
            assert_eq!(u.y, -l.y);
        }
        assert!(geometry.camber.iter().all(|p| p.y == 0.0));

        let top = max_by_y(&geometry.upper);
        assert_relative_eq!(0.06, top.y, epsilon = 1e-4);
        assert_relative_eq!(0.30, top.x, epsilon = 1e-2);
    }

    #[test]
    fn test_naca_2412_camber() {
        let geometry = generate(&code(AirfoilFamily::FourDigit, "2412"), 1.0, 200).unwrap();
        let peak = max_by_y(&geometry.camber);

        assert_relative_eq!(0.02, peak.y, epsilon = 1e-4);
        assert_relative_eq!(0.40, peak.x, epsilon = 1e-2);
    }

    #[test_case(AirfoilFamily::FourDigit, "2412")]
    #[test_case(AirfoilFamily::FiveDigit, "23012")]
    #[test_case(AirfoilFamily::FiveDigit, "24112")]
    #[test_case(AirfoilFamily::SixSeries, "65-415")]
    #[test_case(AirfoilFamily::SevenSeries, "747A315")]
    #[test_case(AirfoilFamily::EightSeries, "835A216")]
    fn test_chord_scaling(family: AirfoilFamily, text: &str) {
        let c = code(family, text);
        let unit = generate(&c, 1.0, 120).unwrap();
        let double = generate(&c, 2.0, 120).unwrap();

        for (a, b) in unit.upper.iter().zip(double.upper.iter()) {
            assert_relative_eq!(a.x * 2.0, b.x, epsilon = 1e-12);
            assert_relative_eq!(a.y * 2.0, b.y, epsilon = 1e-12);
        }
        for (a, b) in unit.lower.iter().zip(double.lower.iter()) {
            assert_relative_eq!(a.x * 2.0, b.x, epsilon = 1e-12);
            assert_relative_eq!(a.y * 2.0, b.y, epsilon = 1e-12);
        }
    }

    #[test_case(AirfoilFamily::FourDigit, "4415")]
    #[test_case(AirfoilFamily::FiveDigit, "23012")]
    #[test_case(AirfoilFamily::SixSeries, "65-415")]
    #[test_case(AirfoilFamily::SevenSeries, "747A315")]
    #[test_case(AirfoilFamily::EightSeries, "835A216")]
    fn test_edges_are_closed(family: AirfoilFamily, text: &str) {
        let geometry = generate(&code(family, text), 3.0, 200).unwrap();

        assert_relative_eq!(0.0, geometry.upper[0].x, epsilon = 1e-12);
        assert_eq!(geometry.upper[0], geometry.lower[0]);
        assert_eq!(geometry.upper[199], geometry.lower[199]);
        assert_relative_eq!(3.0, geometry.upper[199].x, epsilon = 1e-12);
        assert!(geometry
            .upper
            .iter()
            .chain(geometry.lower.iter())
            .all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test_case(0, 50)]
    #[test_case(10, 50)]
    #[test_case(5000, 2000)]
    fn test_sample_count_is_clamped(requested: usize, expected: usize) {
        let geometry = generate(&code(AirfoilFamily::FourDigit, "0012"), 1.0, requested).unwrap();
        assert_eq!(expected, geometry.len());
        assert_eq!(expected, geometry.upper.len());
    }

    #[test_case(0.0)]
    #[test_case(-1.0)]
    #[test_case(f64::NAN)]
    #[test_case(f64::INFINITY)]
    fn test_degenerate_chord(chord: f64) {
        let result = generate(&code(AirfoilFamily::FourDigit, "2412"), chord, 200);
        assert!(matches!(
            result,
            Err(GeometryError::DegenerateInput { field: "chord", .. })
        ));
    }

    #[test]
    fn test_upper_above_lower() {
        let geometry = generate(&code(AirfoilFamily::SixSeries, "63-218"), 1.0, 200).unwrap();
        for i in 1..geometry.len() - 1 {
            assert!(geometry.upper[i].y > geometry.lower[i].y);
        }
    }

    #[test]
    fn test_linear_spacing() {
        let options = GenerateOptions::new(1.0, SampleCount::new(101), Spacing::Linear);
        let geometry = generate_with(&code(AirfoilFamily::FourDigit, "0012"), &options).unwrap();
        assert_relative_eq!(0.5, geometry.upper[50].x, epsilon = 1e-12);
    }

    #[test]
    fn test_batch_preserves_order() {
        let codes: Vec<AirfoilCode> = ["0012", "2412", "23012", "63-018", "747A315"]
            .iter()
            .map(|c| c.parse().unwrap())
            .collect();
        let results = generate_batch(&codes, &GenerateOptions::default());

        assert_eq!(codes.len(), results.len());
        for (c, r) in codes.iter().zip(results.iter()) {
            let geometry = r.as_ref().unwrap();
            assert_eq!(c.to_string(), geometry.name);
            assert_eq!(*geometry, generate(c, 1.0, 200).unwrap());
        }
    }

    #[test]
    fn test_batch_reports_each_failure() {
        let codes = vec![code(AirfoilFamily::FourDigit, "0012")];
        let options = GenerateOptions::new(-2.0, SampleCount::default(), Spacing::Cosine);
        let results = generate_batch(&codes, &options);
        assert!(results[0].is_err());
    }

    #[test]
    fn test_zero_thickness_section() {
        let section = Section::new(MeanLine::Flat, ThicknessForm::FourDigit { t: 0.0 });
        let geometry = section.build("flat plate", &GenerateOptions::default()).unwrap();
        assert!(geometry.upper.iter().all(|p| p.y == 0.0));
        assert_eq!(geometry.upper, geometry.lower);
    }
}
