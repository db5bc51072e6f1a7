use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use serde::Serialize;
use crate::classpath::inventory::VersionMap;
use crate::classpath::version::ParsedVersion;

/// Why a collision was, or was not, accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// Every observed major is pre-approved and no major line drifts
    Whitelisted,
    /// Only one version observed, nothing to decide
    SingleVersion,
    /// A version string could not be parsed
    MalformedVersion { version: String },
    /// Two or more minors of the same major line are bundled
    MinorDrift { major: u64, minors: Vec<u64> },
    /// The artifact has no whitelist entry at all
    NotListed,
    /// Observed majors outside the permitted set
    MajorNotPermitted { majors: Vec<u64> },
}

impl Verdict {
    pub fn is_whitelisted(&self) -> bool {
        matches!(self, Verdict::Whitelisted | Verdict::SingleVersion)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Whitelisted => write!(f, "whitelisted"),
            Verdict::SingleVersion => write!(f, "single version"),
            Verdict::MalformedVersion { version } => write!(f, "malformed version '{}'", version),
            Verdict::MinorDrift { major, minors } => {
                let minors: Vec<String> = minors.iter().map(|m| format!("{}.{}", major, m)).collect();
                write!(f, "minor versions drift within major {}: {}", major, minors.join(", "))
            }
            Verdict::NotListed => write!(f, "artifact is not whitelisted"),
            Verdict::MajorNotPermitted { majors } => {
                let majors: Vec<String> = majors.iter().map(ToString::to_string).collect();
                write!(f, "major versions not whitelisted: {}", majors.join(", "))
            }
        }
    }
}

/// Read-only set of major versions allowed to coexist, per artifact.
///
/// An artifact absent from the whitelist has no approved majors, so any
/// collision on it is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Whitelist {
    entries: BTreeMap<String, BTreeSet<u64>>,
}

impl Whitelist {
    /// Whitelist approving nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Policy shipped with the runtime
    pub fn builtin() -> Self {
        WhitelistBuilder::new().allow("netty", [3, 4]).build()
    }

    pub fn builder() -> WhitelistBuilder {
        WhitelistBuilder::new()
    }

    /// Permitted majors for an artifact, if it is listed
    pub fn permitted_majors(&self, artifact: &str) -> Option<&BTreeSet<u64>> {
        self.entries.get(artifact)
    }

    pub fn entries(&self) -> &BTreeMap<String, BTreeSet<u64>> {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the observed version set of `artifact` may coexist
    pub fn is_whitelisted(&self, artifact: &str, versions: &VersionMap) -> bool {
        self.evaluate(artifact, versions).is_whitelisted()
    }

    /// Classify the observed version set of `artifact`.
    ///
    /// Minor drift inside a major line is rejected before the whitelist is
    /// consulted. Unparseable versions fail closed.
    pub fn evaluate(&self, artifact: &str, versions: &VersionMap) -> Verdict {
        if versions.len() <= 1 {
            return Verdict::SingleVersion;
        }

        let mut minors_by_major: BTreeMap<u64, BTreeSet<u64>> = BTreeMap::new();
        for version in versions.keys() {
            match ParsedVersion::parse(version) {
                Ok(parsed) => {
                    minors_by_major.entry(parsed.major).or_default().insert(parsed.minor);
                }
                Err(e) => {
                    log::debug!("Cannot parse version '{}' of '{}': {}", version, artifact, e);
                    return Verdict::MalformedVersion { version: version.clone() };
                }
            }
        }

        if let Some((major, minors)) = minors_by_major.iter().find(|(_, minors)| minors.len() > 1) {
            return Verdict::MinorDrift {
                major: *major,
                minors: minors.iter().copied().collect(),
            };
        }

        let Some(permitted) = self.entries.get(artifact) else {
            return Verdict::NotListed;
        };

        let rejected: Vec<u64> = minors_by_major
            .keys()
            .filter(|major| !permitted.contains(*major))
            .copied()
            .collect();
        if !rejected.is_empty() {
            return Verdict::MajorNotPermitted { majors: rejected };
        }

        Verdict::Whitelisted
    }
}

/// Builder for [`Whitelist`]
#[derive(Debug, Clone, Default)]
pub struct WhitelistBuilder {
    entries: BTreeMap<String, BTreeSet<u64>>,
}

impl WhitelistBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Approve `majors` of `artifact`; repeated calls accumulate
    pub fn allow(mut self, artifact: impl Into<String>, majors: impl IntoIterator<Item = u64>) -> Self {
        self.entries.entry(artifact.into()).or_default().extend(majors);
        self
    }

    /// Fold every entry of an existing whitelist into this one
    pub fn merge(mut self, other: &Whitelist) -> Self {
        for (artifact, majors) in other.entries() {
            self.entries
                .entry(artifact.clone())
                .or_default()
                .extend(majors.iter().copied());
        }
        self
    }

    pub fn build(self) -> Whitelist {
        Whitelist { entries: self.entries }
    }
}
