pub mod json;
pub mod md;

use crate::error::ScoreError;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// Serializes `value` as JSON or hands it to the markdown renderer.
pub fn render<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
    markdown: impl FnOnce(&T) -> String,
) -> Result<String, ScoreError> {
    match format {
        OutputFormat::Json => json::to_json(value).map_err(ScoreError::Json),
        OutputFormat::Md => Ok(markdown(value)),
    }
}
