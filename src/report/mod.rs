pub mod chart;
pub mod json;
pub mod md;

use crate::error::NicenessError;
use crate::types::report::{ScoreReport, TrustReport};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Chart,
    Json,
    Md,
}

pub fn render(report: &ScoreReport, format: OutputFormat) -> Result<String, NicenessError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(NicenessError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Chart => Ok(chart::to_chart(report)),
    }
}

pub fn render_trust(trust: &TrustReport, format: OutputFormat) -> Result<String, NicenessError> {
    match format {
        OutputFormat::Json => json::trust_to_json(trust).map_err(NicenessError::Json),
        OutputFormat::Md => Ok(md::trust_to_markdown(trust)),
        OutputFormat::Chart => Ok(chart::trust_to_chart(trust)),
    }
}
