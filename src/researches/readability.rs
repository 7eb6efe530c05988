//! Flesch reading ease
//!
//! `ease = 206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`
//!
//! The ease is graded against a band table checked top-down. Each band
//! covers `[boundary, ceiling)`, where the ceiling is the boundary of the
//! band above it (101 for the first band, so 100 itself is included).

use crate::error::{ConfigError, ConfigResult};
use crate::models::{default_readability_bands, ReadabilityBand};
use crate::text::{sentence_count, strip_numbers, total_syllables, words};

/// Ceiling of the top band
const TOP_CEILING: f64 = 101.0;

/// Check a readability band table
///
/// Bands must be non-empty, carry labels, sit inside 0..=100 and have
/// strictly descending boundaries.
pub fn validate_bands(bands: &[ReadabilityBand]) -> ConfigResult<()> {
    if bands.is_empty() {
        return Err(ConfigError::MalformedReadabilityTable(
            "table has no bands".to_string(),
        ));
    }

    for band in bands {
        if !band.boundary.is_finite() || !(0.0..=100.0).contains(&band.boundary) {
            return Err(ConfigError::MalformedReadabilityTable(format!(
                "boundary {} is outside 0..=100",
                band.boundary
            )));
        }
        if !band.score.is_finite() {
            return Err(ConfigError::MalformedReadabilityTable(format!(
                "band '{}' has a non-finite score",
                band.label
            )));
        }
        if band.label.trim().is_empty() {
            return Err(ConfigError::MalformedReadabilityTable(format!(
                "band at {} has an empty label",
                band.boundary
            )));
        }
    }

    if let Some(pair) = bands.windows(2).find(|w| w[0].boundary <= w[1].boundary) {
        return Err(ConfigError::MalformedReadabilityTable(format!(
            "boundaries must be strictly descending ({} then {})",
            pair[0].boundary, pair[1].boundary
        )));
    }

    Ok(())
}

/// Round to two decimals
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The readability research
#[derive(Debug, Clone, PartialEq)]
pub struct FleschReading {
    bands: Vec<ReadabilityBand>,
}

impl Default for FleschReading {
    fn default() -> Self {
        Self {
            bands: default_readability_bands(),
        }
    }
}

impl FleschReading {
    /// Use a whole replacement band table
    pub fn new(bands: Vec<ReadabilityBand>) -> ConfigResult<Self> {
        validate_bands(&bands)?;
        Ok(Self { bands })
    }

    pub fn bands(&self) -> &[ReadabilityBand] {
        &self.bands
    }

    /// Reading ease of the text, rounded to two decimals
    ///
    /// `None` when the text has no words or no sentences.
    pub fn ease(&self, text: &str) -> Option<f64> {
        if text.is_empty() {
            return None;
        }

        let text = strip_numbers(text);
        let words = words(&text)?;
        let sentences = sentence_count(&text);
        if sentences == 0 || words.is_empty() {
            return None;
        }

        let word_count = words.len() as f64;
        let syllables = total_syllables(&words) as f64;
        let ease = 206.835
            - 1.015 * (word_count / sentences as f64)
            - 84.6 * (syllables / word_count);

        Some(round2(ease))
    }

    /// Band for an ease value
    ///
    /// Values outside 0..=100 (and NaN) land in the lowest band.
    pub fn classify(&self, ease: f64) -> &ReadabilityBand {
        let lowest = self.lowest();
        if !(0.0..=100.0).contains(&ease) {
            return lowest;
        }

        let mut ceiling = TOP_CEILING;
        for band in &self.bands {
            if ease >= band.boundary && ease < ceiling {
                return band;
            }
            ceiling = band.boundary;
        }
        lowest
    }

    /// Highest score any text can get
    pub fn max_score(&self) -> f64 {
        self.bands.first().map_or(0.0, |band| band.score)
    }

    fn lowest(&self) -> &ReadabilityBand {
        // Construction guarantees at least one band
        &self.bands[self.bands.len() - 1]
    }
}
