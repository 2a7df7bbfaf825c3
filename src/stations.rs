use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::str::FromStr;

pub const MIN_SAMPLES: usize = 50;
pub const MAX_SAMPLES: usize = 2000;
pub const DEFAULT_SAMPLES: usize = 200;

/// Number of stations generated per surface. Requests outside of [`MIN_SAMPLES`, `MAX_SAMPLES`]
/// are clamped to the nearest bound rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "usize")]
pub struct SampleCount(usize);

impl SampleCount {
    pub fn new(requested: usize) -> SampleCount {
        SampleCount(requested.clamp(MIN_SAMPLES, MAX_SAMPLES))
    }

    pub fn get(&self) -> usize {
        self.0
    }

    /// True if a request for `requested` samples would be clamped
    pub fn is_clamped(requested: usize) -> bool {
        !(MIN_SAMPLES..=MAX_SAMPLES).contains(&requested)
    }
}

impl Default for SampleCount {
    fn default() -> Self {
        SampleCount(DEFAULT_SAMPLES)
    }
}

impl From<usize> for SampleCount {
    fn from(value: usize) -> Self {
        SampleCount::new(value)
    }
}

/// Distribution of the stations along the chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    /// x/c = (1 - cos θ) / 2 with θ uniform over [0, π], concentrating stations at both edges
    #[default]
    Cosine,
    Linear,
}

impl FromStr for Spacing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cosine" | "cos" => Ok(Spacing::Cosine),
            "linear" | "uniform" => Ok(Spacing::Linear),
            other => Err(format!(
                "unknown spacing '{}', expected 'cosine' or 'linear'",
                other
            )),
        }
    }
}

/// Strictly increasing chordwise positions as fractions of the chord, starting at exactly 0.0
/// and ending at exactly 1.0
#[derive(Debug, Clone, PartialEq)]
pub struct StationSequence {
    values: Vec<f64>,
}

impl StationSequence {
    pub fn new(count: SampleCount, spacing: Spacing) -> StationSequence {
        let n = count.get();
        let last = (n - 1) as f64;
        let mut values: Vec<f64> = (0..n)
            .map(|i| match spacing {
                Spacing::Cosine => (1.0 - (PI * i as f64 / last).cos()) / 2.0,
                Spacing::Linear => i as f64 / last,
            })
            .collect();

        values[0] = 0.0;
        values[n - 1] = 1.0;
        StationSequence { values }
    }

    pub fn cosine(count: SampleCount) -> StationSequence {
        StationSequence::new(count, Spacing::Cosine)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::ops::Index<usize> for StationSequence {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}
