use crate::code::AirfoilFamily;
use thiserror::Error;

/// Failure to turn a raw code string into a validated `AirfoilCode`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The code does not have the character layout of the selected family
    #[error("'{code}' is not a valid {family} code, expected the layout {expected}")]
    InvalidFormat {
        family: AirfoilFamily,
        code: String,
        expected: &'static str,
    },

    /// A decoded field lies outside its physically valid range
    #[error("{field} = {value} is outside the valid range {valid}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        valid: &'static str,
    },

    /// A field used as a key into a fixed coefficient table has no entry
    #[error("{field} = {value} has no entry in the {table} table")]
    NotInTable {
        field: &'static str,
        value: u8,
        table: &'static str,
    },

    /// The family name itself could not be recognized
    #[error("unknown airfoil family '{0}'")]
    UnknownFamily(String),

    /// No family layout matches the code (family auto-detection)
    #[error("'{0}' does not match the layout of any supported family")]
    UnrecognizedCode(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Inputs which would collapse or corrupt the generated geometry, rejected before generation
    #[error("degenerate input: {field} = {value}")]
    DegenerateInput { field: &'static str, value: f64 },

    #[error("not enough distinct points (needed {needed}, found {found})")]
    NotEnoughPoints { needed: usize, found: usize },
}

/// Errors while writing or reading back coordinate text
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("unknown coordinate format '{0}', expected 'dat' or 'csv'")]
    UnknownFormat(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output was not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("CSV writer could not be flushed: {0}")]
    Flush(String),

    #[error("line {line} is not an 'x y' coordinate pair: '{content}'")]
    MalformedLine { line: usize, content: String },

    #[error("no coordinates found")]
    Empty,
}
