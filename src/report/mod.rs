pub mod json;
pub mod md;

use crate::error::RiskError;
use crate::types::report::AggregateSummary;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(summary: &AggregateSummary, format: OutputFormat) -> Result<String, RiskError> {
    match format {
        OutputFormat::Json => json::to_json(summary).map_err(RiskError::Json),
        OutputFormat::Md => Ok(md::to_markdown(summary)),
    }
}
