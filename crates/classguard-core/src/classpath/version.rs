use std::fmt;
use std::str::FromStr;
use semver::Version; // Strict semver is tried before the lenient split
use thiserror::Error;

/// Error type for version parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Empty version string")]
    Empty,
    #[error("Version '{0}' has no numeric major component")]
    InvalidMajor(String),
    #[error("Version '{0}' has a non-numeric minor component")]
    InvalidMinor(String),
}

/// Structured form of a bundled artifact's version string.
///
/// Only `major` and `minor` take part in collision decisions. The patch
/// level is kept for display and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParsedVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: Option<u64>,
}

impl ParsedVersion {
    /// Creates a new parsed version
    pub fn new(major: u64, minor: u64, patch: Option<u64>) -> Self {
        Self { major, minor, patch }
    }

    /// Parses a version string like "3.1.2", "4.1.0.Final" or "2.9".
    ///
    /// Well-formed semver is accepted as-is. Anything else is split on `.`
    /// and the leading digits of the first three components are used; an
    /// absent minor counts as `0`.
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        let version = version.trim();
        if version.is_empty() {
            return Err(VersionError::Empty);
        }

        if let Ok(v) = Version::parse(version) {
            return Ok(Self::new(v.major, v.minor, Some(v.patch)));
        }

        let mut parts = version.split('.');

        let major = parts
            .next()
            .and_then(leading_number)
            .ok_or_else(|| VersionError::InvalidMajor(version.to_string()))?;

        let minor = match parts.next() {
            None => 0,
            Some(part) => leading_number(part)
                .ok_or_else(|| VersionError::InvalidMinor(version.to_string()))?,
        };

        let patch = parts.next().and_then(leading_number);

        Ok(Self::new(major, minor, patch))
    }

    /// Whether two versions belong to the same major line
    pub fn same_major(&self, other: &ParsedVersion) -> bool {
        self.major == other.major
    }
}

/// Parses the run of ASCII digits a component starts with ("2-beta" -> 2).
fn leading_number(part: &str) -> Option<u64> {
    let end = part
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(part.len());
    if end == 0 {
        return None;
    }
    part[..end].parse().ok()
}

impl FromStr for ParsedVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParsedVersion::parse(s)
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}
