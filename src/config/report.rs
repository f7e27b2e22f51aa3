//! Report configuration module.

use super::{ConfigResult, Validate};
use crate::analysis::OutputFormat;
use serde::{Deserialize, Serialize};

/// Report configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format of the report
    pub format: OutputFormat,

    /// Whether the text report carries the extra distribution metrics line
    pub extended: bool,
}

impl Validate for ReportConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}
