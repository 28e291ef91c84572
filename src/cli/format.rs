//! Reformat programs

use std::path::PathBuf;

use super::{CliError, parse_source};
use crate::{StyleConfig, format_program};

/// Options for the format command
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Program text
    pub source: String,
    /// Style config file; built-in defaults when absent
    pub config: Option<PathBuf>,
}

pub fn execute_format(options: &FormatOptions) -> Result<String, CliError> {
    let config = match &options.config {
        Some(path) => StyleConfig::from_path(path)?,
        None => StyleConfig::default(),
    };
    let program = parse_source(&options.source)?;
    Ok(format_program(&program, &config))
}
