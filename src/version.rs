//! Language versions and the features they gate.

use std::str::FromStr;

/// A `major.minor.patch` language version, ordered field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    Empty,
    InvalidComponent { version: String, component: String },
    TooManyComponents(String),
}

impl std::fmt::Display for VersionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionError::Empty => write!(f, "Version string is empty"),
            VersionError::InvalidComponent { version, component } => write!(
                f,
                "Invalid version '{}': '{}' is not a number",
                version, component
            ),
            VersionError::TooManyComponents(version) => write!(
                f,
                "Invalid version '{}': expected at most major.minor.patch",
                version
            ),
        }
    }
}

impl std::error::Error for VersionError {}

/// Language capabilities that only exist from some version on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    /// The `boolean` type, `true`/`false` literals and boolean values
    Boolean,
    /// The `readInput(prompt)` built-in
    ReadInput,
    /// The `readEnv(name)` built-in
    ReadEnv,
}

impl Feature {
    pub fn introduced_in(&self) -> Version {
        match self {
            Feature::Boolean | Feature::ReadInput | Feature::ReadEnv => Version::new(1, 1, 0),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Feature::Boolean => "bool",
            Feature::ReadInput => "readInput",
            Feature::ReadEnv => "readEnv",
        }
    }
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version { major, minor, patch }
    }

    /// Whether this (active) version is at least `threshold`.
    pub fn is_at_least(&self, threshold: Version) -> bool {
        *self >= threshold
    }

    pub fn supports(&self, feature: Feature) -> bool {
        self.is_at_least(feature.introduced_in())
    }
}

impl Default for Version {
    /// The newest language version.
    fn default() -> Self {
        Version::new(1, 1, 0)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    /// Accepts `M`, `M.m` or `M.m.p`; missing components are zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(VersionError::Empty);
        }

        let mut components = [0u64; 3];
        let parts: Vec<&str> = trimmed.split('.').collect();
        if parts.len() > components.len() {
            return Err(VersionError::TooManyComponents(trimmed.to_string()));
        }
        for (slot, part) in components.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| VersionError::InvalidComponent {
                version: trimmed.to_string(),
                component: part.to_string(),
            })?;
        }

        Ok(Version::new(components[0], components[1], components[2]))
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// True iff `actual >= threshold`.
pub fn version_is_same_or_older_than_current_version(
    threshold: &str,
    actual: &str,
) -> Result<bool, VersionError> {
    let threshold: Version = threshold.parse()?;
    let actual: Version = actual.parse()?;
    Ok(actual.is_at_least(threshold))
}
