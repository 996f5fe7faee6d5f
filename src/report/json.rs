use crate::types::report::{ScoreReport, TrustReport};

pub fn to_json(report: &ScoreReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn trust_to_json(trust: &TrustReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(trust)
}
