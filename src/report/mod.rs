pub mod json;
pub mod md;
pub mod sarif;
pub mod text;

use crate::error::PromptCheckError;
use crate::types::report::PromptReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Md,
    Sarif,
}

pub fn render(report: &PromptReport, format: OutputFormat) -> Result<String, PromptCheckError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(report)),
        OutputFormat::Json => json::to_json(report).map_err(PromptCheckError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Sarif => sarif::to_sarif(report).map_err(PromptCheckError::Json),
    }
}
