//! Core data models shared by the researches, the paper and the engine
//!
//! These are plain values: link statistics, paragraphs and the band tables
//! used to grade readability and keyword density.

use serde::{Deserialize, Serialize};

/// Where a hyperlink points relative to the site being analyzed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Internal,
    External,
    /// Non-http schemes (`mailto:`, `tel:`, ...) and fragment links
    Other,
}

impl std::fmt::Display for LinkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkType::Internal => write!(f, "internal"),
            LinkType::External => write!(f, "external"),
            LinkType::Other => write!(f, "other"),
        }
    }
}

/// Whether a hyperlink passes ranking signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FollowState {
    Dofollow,
    Nofollow,
}

impl std::fmt::Display for FollowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FollowState::Dofollow => write!(f, "Dofollow"),
            FollowState::Nofollow => write!(f, "Nofollow"),
        }
    }
}

/// Anchor counts by link type and follow state, derived fresh per call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStatistics {
    pub total: usize,
    pub internal_total: usize,
    pub internal_dofollow: usize,
    pub internal_nofollow: usize,
    pub external_total: usize,
    pub external_dofollow: usize,
    pub external_nofollow: usize,
    pub other_total: usize,
    pub other_dofollow: usize,
    pub other_nofollow: usize,
    /// Raw anchor tags; `None` when the text has no anchors at all
    pub anchors: Option<Vec<String>>,
}

impl LinkStatistics {
    /// Record one classified anchor
    pub fn add(&mut self, link_type: LinkType, follow: FollowState) {
        let (total, dofollow, nofollow) = match link_type {
            LinkType::Internal => (
                &mut self.internal_total,
                &mut self.internal_dofollow,
                &mut self.internal_nofollow,
            ),
            LinkType::External => (
                &mut self.external_total,
                &mut self.external_dofollow,
                &mut self.external_nofollow,
            ),
            LinkType::Other => (
                &mut self.other_total,
                &mut self.other_dofollow,
                &mut self.other_nofollow,
            ),
        };
        *total += 1;
        match follow {
            FollowState::Dofollow => *dofollow += 1,
            FollowState::Nofollow => *nofollow += 1,
        }
    }

    /// Whether any anchor was found
    pub fn has_anchors(&self) -> bool {
        self.anchors.is_some()
    }
}

/// A paragraph of the subject text with its word count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
    pub word_count: usize,
}

/// One band of the readability table
///
/// A band covers `[boundary, ceiling)` where the ceiling is the previous
/// band's boundary (or 101 for the first band).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityBand {
    pub boundary: f64,
    pub score: f64,
    pub label: String,
}

impl ReadabilityBand {
    pub fn new(boundary: f64, score: f64, label: impl Into<String>) -> Self {
        Self {
            boundary,
            score,
            label: label.into(),
        }
    }
}

/// Default Flesch reading ease bands, highest first
pub fn default_readability_bands() -> Vec<ReadabilityBand> {
    vec![
        ReadabilityBand::new(90.0, 6.0, "very easy"),
        ReadabilityBand::new(80.0, 5.0, "easy"),
        ReadabilityBand::new(70.0, 5.0, "fairly easy"),
        ReadabilityBand::new(60.0, 4.0, "okay"),
        ReadabilityBand::new(50.0, 3.0, "fairly difficult"),
        ReadabilityBand::new(30.0, 2.0, "difficult"),
        ReadabilityBand::new(0.0, 1.0, "very difficult"),
    ]
}

/// Keyword density thresholds, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityBoundaries {
    /// Below this the density fails
    pub min: f64,
    /// Below this (and at or above `min`) the density is fair
    pub fair: f64,
    /// Below this (and at or above `fair`) the density is good
    pub good: f64,
    /// Above this the density fails (keyword stuffing)
    pub max: f64,
}

impl Default for DensityBoundaries {
    fn default() -> Self {
        Self {
            min: 0.5,
            fair: 0.75,
            good: 1.0,
            max: 2.5,
        }
    }
}

/// Scores awarded per keyword density grade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityScores {
    pub fail: f64,
    pub fair: f64,
    pub good: f64,
    pub best: f64,
}

impl Default for DensityScores {
    fn default() -> Self {
        Self {
            fail: 0.0,
            fair: 2.0,
            good: 3.0,
            best: 6.0,
        }
    }
}
