use super::thickness::ThicknessForm;
use super::AirfoilGeometry;
use crate::algorithms::arg_max;
use crate::code::AirfoilCode;
use crate::geometry::polygon::{closed_length, shoelace_area};
use serde::Serialize;

/// Summary measurements of a generated section. Lengths and the area are in absolute units,
/// locations are fractions of the chord.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeometryProperties {
    pub chord: f64,
    pub thickness_ratio: f64,
    pub max_camber: f64,
    pub camber_position: f64,
    pub max_thickness: f64,
    pub max_thickness_location: f64,
    pub approx_area: f64,
    pub perimeter: f64,
    pub leading_edge_radius: f64,
}

/// Measures a finished geometry. Max camber and thickness are taken at the generated stations,
/// so they converge on the nominal values as the sample count grows. The leading edge radius is
/// the closed form of the code's thickness family. A section without thickness reports zero
/// thickness, area and radius.
pub fn properties(geometry: &AirfoilGeometry, code: &AirfoilCode) -> GeometryProperties {
    let chord = geometry.chord;
    let at_station = |i: usize| geometry.stations[i];

    let camber: Vec<f64> = geometry.camber.iter().map(|p| p.y).collect();
    let (max_camber, camber_position) = arg_max(&camber)
        .map(|i| (camber[i], at_station(i)))
        .unwrap_or((0.0, 0.0));

    let thickness: Vec<f64> = geometry
        .upper
        .iter()
        .zip(geometry.lower.iter())
        .map(|(u, l)| u.y - l.y)
        .collect();
    let (max_thickness, max_thickness_location) = arg_max(&thickness)
        .filter(|i| thickness[*i] > 0.0)
        .map(|i| (thickness[i], at_station(i)))
        .unwrap_or((0.0, 0.0));

    let contour = geometry.selig_loop();
    let leading_edge_radius = if max_thickness > 0.0 {
        ThicknessForm::for_code(code).leading_edge_radius() * chord
    } else {
        0.0
    };

    GeometryProperties {
        chord,
        thickness_ratio: max_thickness / chord,
        max_camber,
        camber_position,
        max_thickness,
        max_thickness_location,
        approx_area: shoelace_area(&contour),
        perimeter: closed_length(&contour),
        leading_edge_radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::camber::MeanLine;
    use crate::airfoil::generate::{generate, GenerateOptions, Section};
    use crate::code::{parse, AirfoilFamily};
    use approx::assert_relative_eq;
    use test_case::test_case;

    fn measure(family: AirfoilFamily, text: &str, chord: f64, n: usize) -> GeometryProperties {
        let code = parse(family, text).unwrap();
        let geometry = generate(&code, chord, n).unwrap();
        properties(&geometry, &code)
    }

    #[test]
    fn test_naca_0012() {
        let p = measure(AirfoilFamily::FourDigit, "0012", 1.0, 200);

        assert_eq!(0.0, p.max_camber);
        assert_relative_eq!(0.12, p.max_thickness, epsilon = 1e-4);
        assert_relative_eq!(0.30, p.max_thickness_location, epsilon = 1e-2);
        assert_relative_eq!(0.081703, p.approx_area, epsilon = 1e-6);
        assert_relative_eq!(2.03954, p.perimeter, epsilon = 1e-5);
        assert_relative_eq!(1.1019 * 0.0144, p.leading_edge_radius, epsilon = 1e-12);
        assert_relative_eq!(0.12, p.thickness_ratio, epsilon = 1e-4);
    }

    #[test]
    fn test_naca_2412() {
        let p = measure(AirfoilFamily::FourDigit, "2412", 1.0, 200);

        assert_relative_eq!(0.02, p.max_camber, epsilon = 1e-5);
        assert_relative_eq!(0.40, p.camber_position, epsilon = 1e-2);
        assert_relative_eq!(0.12, p.max_thickness, epsilon = 1e-4);
        assert_relative_eq!(0.30, p.max_thickness_location, epsilon = 1e-2);
        assert_relative_eq!(0.081774, p.approx_area, epsilon = 1e-6);
        assert_relative_eq!(2.04167, p.perimeter, epsilon = 1e-5);
    }

    #[test_case(AirfoilFamily::FiveDigit, "23012", 0.018385, 0.15)]
    #[test_case(AirfoilFamily::SixSeries, "65-415", 0.02206, 0.50)]
    #[test_case(AirfoilFamily::SevenSeries, "747A315", 0.02232, 0.40)]
    #[test_case(AirfoilFamily::EightSeries, "835A216", 0.01435, 0.35)]
    fn test_series_camber(family: AirfoilFamily, text: &str, max: f64, at: f64) {
        let p = measure(family, text, 1.0, 200);
        assert_relative_eq!(max, p.max_camber, epsilon = 1e-4);
        assert_relative_eq!(at, p.camber_position, epsilon = 5e-2);
    }

    #[test_case(AirfoilFamily::SixSeries, "63-018", 0.18)]
    #[test_case(AirfoilFamily::SixSeries, "65-415", 0.15)]
    #[test_case(AirfoilFamily::SevenSeries, "747A315", 0.15)]
    #[test_case(AirfoilFamily::EightSeries, "835A216", 0.16)]
    fn test_series_thickness(family: AirfoilFamily, text: &str, t: f64) {
        let p = measure(family, text, 1.0, 200);
        assert_relative_eq!(t, p.max_thickness, epsilon = 2e-4);
    }

    #[test]
    fn test_naca_23012_chord_scaling() {
        let unit = measure(AirfoilFamily::FiveDigit, "23012", 1.0, 200);
        let double = measure(AirfoilFamily::FiveDigit, "23012", 2.0, 200);

        assert_relative_eq!(unit.max_camber * 2.0, double.max_camber, epsilon = 1e-12);
        assert_relative_eq!(unit.max_thickness * 2.0, double.max_thickness, epsilon = 1e-12);
        assert_relative_eq!(unit.approx_area * 4.0, double.approx_area, epsilon = 1e-12);
        assert_relative_eq!(unit.perimeter * 2.0, double.perimeter, epsilon = 1e-12);
        assert_relative_eq!(unit.leading_edge_radius * 2.0, double.leading_edge_radius);
        assert_eq!(unit.camber_position, double.camber_position);
        assert_relative_eq!(unit.thickness_ratio, double.thickness_ratio, epsilon = 1e-12);
    }

    #[test]
    fn test_converges_with_sample_count() {
        let reference = measure(AirfoilFamily::FourDigit, "2412", 1.0, 2000);
        let errors: Vec<f64> = [50, 100, 200, 1000]
            .iter()
            .map(|n| {
                let p = measure(AirfoilFamily::FourDigit, "2412", 1.0, *n);
                assert!((p.max_thickness - reference.max_thickness).abs() < 1e-4);
                (p.max_camber - reference.max_camber).abs()
            })
            .collect();

        assert!(errors.windows(2).all(|w| w[1] <= w[0]));
        assert!(errors[3] < 1e-6);
    }

    #[test]
    fn test_zero_thickness_is_all_zero() {
        let code = parse(AirfoilFamily::FourDigit, "0012").unwrap();
        let section = Section::new(MeanLine::Flat, ThicknessForm::FourDigit { t: 0.0 });
        let geometry = section.build("flat", &GenerateOptions::default()).unwrap();
        let p = properties(&geometry, &code);

        assert_eq!(0.0, p.max_thickness);
        assert_eq!(0.0, p.max_thickness_location);
        assert_eq!(0.0, p.approx_area);
        assert_eq!(0.0, p.leading_edge_radius);
        assert_eq!(0.0, p.thickness_ratio);
        assert_eq!(0.0, p.max_camber);
        assert!(p.perimeter.is_finite());
    }
}
