pub mod airfoil;
pub mod algorithms;
pub mod closed_polyline;
pub mod code;
pub mod errors;
pub mod export;
pub mod geometry;
pub mod serialize;
pub mod stations;

pub use airfoil::analyze::{analyze_contour, ContourSummary};
pub use airfoil::camber::camber_line;
pub use airfoil::generate::{generate, generate_batch, generate_with, GenerateOptions, Section};
pub use airfoil::properties::{properties, GeometryProperties};
pub use airfoil::thickness::thickness_distribution;
pub use airfoil::AirfoilGeometry;
pub use code::{parse, AirfoilCode, AirfoilFamily};
pub use errors::{FormatError, GeometryError, ParseError};
pub use export::{export, read_csv, read_selig, ExportFormat};
pub use stations::{SampleCount, Spacing, StationSequence};
