use crate::types::scoring::{ScoreCard, TrustLabel};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TrustReading {
    pub name: String,
    pub count: u32,
    pub contribution: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrustReport {
    pub label: TrustLabel,
    pub score: f64,
    pub sources: Vec<TrustReading>,
}

/// The full result of one evaluation. `trust` is only present when the
/// caller supplied rating counts.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub generated_at: DateTime<Utc>,
    pub card: ScoreCard,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust: Option<TrustReport>,
}
