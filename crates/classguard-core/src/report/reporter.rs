use std::fmt;

use serde::Serialize;

use crate::classpath::collision::CollisionGroup;
use crate::classpath::dependency::BundledDependency;
use crate::classpath::error::ClasspathError;
use crate::classpath::whitelist::Verdict;
use crate::report::policy::CollisionPolicy;

/// Outcome of the policy evaluation for one colliding artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollisionFinding {
    pub artifact: String,
    pub verdict: Verdict,
    /// Every bundling library with the version it carries
    pub members: Vec<BundledDependency>,
}

impl CollisionFinding {
    pub fn new(group: &CollisionGroup, verdict: Verdict) -> Self {
        Self {
            artifact: group.artifact.clone(),
            verdict,
            members: group.members().cloned().collect(),
        }
    }

    pub fn is_whitelisted(&self) -> bool {
        self.verdict.is_whitelisted()
    }
}

impl fmt::Display for CollisionFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<String> = self.members.iter().map(ToString::to_string).collect();
        let outcome = if self.is_whitelisted() { "are whitelisted" } else { "are not whitelisted" };
        write!(
            f,
            "artifact {}: libraries {{{}}} collide and {} ({})",
            self.artifact,
            members.join(", "),
            outcome,
            self.verdict
        )
    }
}

/// Every collision found by one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollisionReport {
    pub libraries: usize,
    pub artifacts: usize,
    pub findings: Vec<CollisionFinding>,
}

impl CollisionReport {
    pub fn new(libraries: usize, artifacts: usize, findings: Vec<CollisionFinding>) -> Self {
        Self { libraries, artifacts, findings }
    }

    /// Collisions the whitelist did not approve
    pub fn violations(&self) -> Vec<&CollisionFinding> {
        self.findings.iter().filter(|f| !f.is_whitelisted()).collect()
    }

    pub fn has_violations(&self) -> bool {
        self.findings.iter().any(|f| !f.is_whitelisted())
    }

    /// Names of the artifacts behind each violation
    pub fn violating_artifacts(&self) -> Vec<String> {
        self.violations().into_iter().map(|f| f.artifact.clone()).collect()
    }
}

/// Turns a [`CollisionReport`] into log output and, under
/// [`CollisionPolicy::Fail`], into an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartupReporter {
    policy: CollisionPolicy,
}

impl StartupReporter {
    pub fn new(policy: CollisionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    pub fn report(&self, report: &CollisionReport) -> Result<(), ClasspathError> {
        for finding in &report.findings {
            if finding.is_whitelisted() {
                log::debug!("{}", finding);
            } else if self.policy.is_fatal() {
                log::error!("{}", finding);
            } else {
                log::warn!("{}", finding);
            }
        }

        let violations = report.violating_artifacts();
        if violations.is_empty() {
            log::info!(
                "No blocking dependency collisions across {} stage libraries ({} artifacts, {} collisions)",
                report.libraries,
                report.artifacts,
                report.findings.len()
            );
            return Ok(());
        }

        if self.policy.is_fatal() {
            return Err(ClasspathError::CollisionsDetected { artifacts: violations });
        }

        log::warn!(
            "{} dependency collisions are not whitelisted; continuing under the '{}' policy",
            violations.len(),
            self.policy
        );
        Ok(())
    }
}
