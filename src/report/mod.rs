pub mod json;
pub mod writer;

use crate::error::{ConverterError, Result};
use crate::sarif::SarifLog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Compact,
    Pretty,
}

impl OutputFormat {
    pub fn from_pretty(pretty: bool) -> Self {
        if pretty {
            Self::Pretty
        } else {
            Self::Compact
        }
    }
}

pub fn render(log: &SarifLog, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Compact => json::to_json(log).map_err(ConverterError::Json),
        OutputFormat::Pretty => json::to_json_pretty(log).map_err(ConverterError::Json),
    }
}
