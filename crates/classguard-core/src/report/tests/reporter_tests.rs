// crates/classguard-core/src/report/tests/reporter_tests.rs
#![cfg(test)]

use std::str::FromStr;

use crate::classpath::collision::CollisionGroup;
use crate::classpath::dependency::{BundledDependency, Dependency};
use crate::classpath::error::ClasspathError;
use crate::classpath::inventory::VersionMap;
use crate::classpath::whitelist::Verdict;
use crate::report::{CollisionFinding, CollisionPolicy, CollisionReport, StartupReporter};

fn netty_group(pairs: &[(&str, &str)]) -> CollisionGroup {
    let mut versions = VersionMap::new();
    for (library, version) in pairs {
        versions
            .entry(version.to_string())
            .or_default()
            .push(BundledDependency::new(*library, Dependency::new("netty", *version)));
    }
    CollisionGroup::new("netty", versions)
}

fn sample_report() -> CollisionReport {
    let ok = CollisionFinding::new(&netty_group(&[("lib-a", "3.1.2"), ("lib-b", "4.8.0")]), Verdict::Whitelisted);
    let mut bad = CollisionFinding::new(
        &netty_group(&[("lib-a", "3.1.2"), ("lib-b", "3.5.3")]),
        Verdict::MinorDrift { major: 3, minors: vec![1, 5] },
    );
    bad.artifact = "netty-codec".to_string();
    CollisionReport::new(2, 3, vec![ok, bad])
}

#[test]
fn test_policy_chooser_values() {
    assert_eq!(CollisionPolicy::ALL.len(), 2);
    assert_eq!(CollisionPolicy::default(), CollisionPolicy::Fail);
    assert_eq!(CollisionPolicy::Fail.value(), "fail");
    assert_eq!(CollisionPolicy::Warn.to_string(), "warn");
    assert!(!CollisionPolicy::Warn.label().is_empty());
    assert!(CollisionPolicy::Fail.is_fatal());
    assert!(!CollisionPolicy::Warn.is_fatal());

    assert_eq!(CollisionPolicy::from_str("WARN").unwrap(), CollisionPolicy::Warn);
    assert_eq!(CollisionPolicy::from_str(" fail ").unwrap(), CollisionPolicy::Fail);
    assert!(CollisionPolicy::from_str("ignore").is_err());
}

#[test]
fn test_policy_serde() {
    let json = serde_json::to_string(&CollisionPolicy::Warn).unwrap();
    assert_eq!(json, "\"warn\"");
    let back: CollisionPolicy = serde_json::from_str("\"fail\"").unwrap();
    assert_eq!(back, CollisionPolicy::Fail);
}

#[test]
fn test_finding_display() {
    let finding = CollisionFinding::new(
        &netty_group(&[("lib-a", "3.1.2"), ("lib-b", "3.5.3")]),
        Verdict::MinorDrift { major: 3, minors: vec![1, 5] },
    );
    assert_eq!(
        finding.to_string(),
        "artifact netty: libraries {lib-a@3.1.2, lib-b@3.5.3} collide and are not whitelisted \
         (minor versions drift within major 3: 3.1, 3.5)"
    );
}

#[test]
fn test_report_violations() {
    let report = sample_report();
    assert!(report.has_violations());
    assert_eq!(report.violations().len(), 1);
    assert_eq!(report.violating_artifacts(), vec!["netty-codec".to_string()]);
    assert!(!CollisionReport::default().has_violations());
}

#[test]
fn test_reporter_fail_policy() {
    let reporter = StartupReporter::new(CollisionPolicy::Fail);
    match reporter.report(&sample_report()) {
        Err(ClasspathError::CollisionsDetected { artifacts }) => {
            assert_eq!(artifacts, vec!["netty-codec".to_string()]);
        }
        other => panic!("Expected CollisionsDetected, got {:?}", other),
    }
}

#[test]
fn test_reporter_warn_policy() {
    let reporter = StartupReporter::new(CollisionPolicy::Warn);
    assert_eq!(reporter.policy(), CollisionPolicy::Warn);
    assert!(reporter.report(&sample_report()).is_ok());
}

#[test]
fn test_reporter_clean_report() {
    let reporter = StartupReporter::default();
    assert!(reporter.report(&CollisionReport::default()).is_ok());
}

#[test]
fn test_report_serializes() {
    let value = serde_json::to_value(sample_report()).unwrap();
    assert_eq!(value["findings"][1]["verdict"]["kind"], "minor_drift");
    assert_eq!(value["findings"][0]["members"][0]["library"], "lib-a");
}
