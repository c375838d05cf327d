pub mod json;
pub mod md;

use crate::error::MergeError;
use crate::types::report::{HistoryReport, MergeSummary};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render_merge(summary: &MergeSummary, format: OutputFormat) -> Result<String, MergeError> {
    match format {
        OutputFormat::Json => json::to_json(summary).map_err(MergeError::Json),
        OutputFormat::Md => Ok(md::merge_to_markdown(summary)),
    }
}

pub fn render_history(
    history: &HistoryReport<'_>,
    format: OutputFormat,
) -> Result<String, MergeError> {
    match format {
        OutputFormat::Json => json::to_json(history).map_err(MergeError::Json),
        OutputFormat::Md => Ok(md::history_to_markdown(history)),
    }
}
