use serde::Serialize;
use std::fmt;

pub type Score = f64;

/// One signal as seen by a single evaluation: the raw value the caller
/// supplied, the weight that was applied (after any premium damping), and
/// the derived normalization/contribution terms.
#[derive(Debug, Clone, Serialize)]
pub struct SignalReading {
    pub name: String,
    pub value: f64,
    pub weight: f64,
    pub normalized: f64,
    pub contribution: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreCard {
    pub signals: Vec<SignalReading>,
    pub total_weight: f64,
    pub output_max: f64,
    pub score: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrustLabel {
    High,
    Medium,
    Low,
}

impl TrustLabel {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.5 {
            TrustLabel::High
        } else if score >= 0.2 {
            TrustLabel::Medium
        } else {
            TrustLabel::Low
        }
    }
}

impl fmt::Display for TrustLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TrustLabel::High => "High",
            TrustLabel::Medium => "Medium",
            TrustLabel::Low => "Low",
        };
        write!(f, "{label}")
    }
}
