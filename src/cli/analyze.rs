//! Lint programs against a style config

use std::path::PathBuf;

use super::{CliError, parse_source};
use crate::{Diagnostic, StyleConfig, Version, analyze_program};

/// Options for the analyze command
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Program text
    pub source: String,
    /// Rule config file; no rules when absent
    pub config: Option<PathBuf>,
    /// Language version the rules apply to
    pub lang_version: Option<String>,
}

pub fn execute_analyze(options: &AnalyzeOptions) -> Result<Vec<Diagnostic>, CliError> {
    let version = match &options.lang_version {
        Some(text) => text.parse::<Version>()?,
        None => Version::default(),
    };
    let config = match &options.config {
        Some(path) => StyleConfig::from_path(path)?,
        None => StyleConfig::default(),
    };
    let program = parse_source(&options.source)?;
    Ok(analyze_program(&program, &config, version))
}
