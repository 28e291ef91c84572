//! Style configuration shared by the formatter and the static analyzer.
//!
//! The file is a JSON object mapping rule names to their parameters:
//!
//! ```json
//! { "spacesInAssignSymbol": 1, "ifBlockIndent": 2, "mandatory-variable-or-literal-in-println": true }
//! ```
//!
//! Formatting rules get typed fields; any other rule is kept verbatim in
//! [`StyleConfig::rules`].

use std::{collections::BTreeMap, fs, io, path::Path};

use serde::Deserialize;

#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read
    Io { path: String, source: io::Error },
    /// The file is not a valid style config object
    Json(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "Cannot read config file '{}': {}", path, source)
            }
            ConfigError::Json(e) => write!(f, "Invalid config JSON: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Json(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    /// `let x : number` instead of `let x: number`
    pub space_before_colon: bool,
    pub space_after_colon: bool,
    /// Spaces on each side of `=`
    pub spaces_in_assign_symbol: usize,
    /// Blank lines before each `println(...)` statement
    pub line_breaks_before_println: usize,
    /// Indentation per nesting level inside `if`/`else` blocks
    pub if_block_indent: usize,
    /// Rules the formatter does not know about, e.g. analyzer settings
    #[serde(flatten)]
    pub rules: BTreeMap<String, serde_json::Value>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            space_before_colon: false,
            space_after_colon: true,
            spaces_in_assign_symbol: 0,
            line_breaks_before_println: 0,
            if_block_indent: 4,
            rules: BTreeMap::new(),
        }
    }
}

impl StyleConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), extra_rules = config.rules.len(), "loaded style config");
        Ok(config)
    }

    /// Parameter of a rule the formatter does not model.
    pub fn rule(&self, name: &str) -> Option<&serde_json::Value> {
        self.rules.get(name)
    }
}
