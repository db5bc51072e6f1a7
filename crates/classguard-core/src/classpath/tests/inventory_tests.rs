// crates/classguard-core/src/classpath/tests/inventory_tests.rs
#![cfg(test)]

use crate::classpath::dependency::Dependency;
use crate::classpath::inventory::Inventory;

fn observations() -> Vec<(&'static str, Dependency)> {
    vec![
        ("lib-a", Dependency::new("netty", "3.1.2")),
        ("lib-b", Dependency::new("netty", "4.8.0")),
        ("lib-c", Dependency::new("netty", "3.1.2")),
        ("lib-a", Dependency::new("guava", "18.0")),
        ("lib-a", Dependency::new("guava", "18.0")), // duplicate kept
    ]
}

#[test]
fn test_aggregate_empty() {
    let inventory = Inventory::aggregate(Vec::<(String, Dependency)>::new());
    assert!(inventory.is_empty());
    assert_eq!(inventory.len(), 0);
    assert_eq!(inventory.observation_count(), 0);
    assert!(inventory.collision_groups().is_empty());
}

#[test]
fn test_aggregate_groups_by_name_and_version() {
    let inventory = Inventory::aggregate(observations());

    assert_eq!(inventory.len(), 2);
    assert_eq!(inventory.observation_count(), 5);

    let netty = inventory.versions_of("netty").unwrap();
    assert_eq!(netty.len(), 2);
    let libs: Vec<&str> = netty["3.1.2"].iter().map(|b| b.library.as_str()).collect();
    assert_eq!(libs, vec!["lib-a", "lib-c"]); // insertion order preserved
    assert_eq!(netty["4.8.0"].len(), 1);

    let guava = inventory.versions_of("guava").unwrap();
    assert_eq!(guava.len(), 1);
    assert_eq!(guava["18.0"].len(), 2);

    assert!(inventory.versions_of("missing").is_none());
}

#[test]
fn test_libraries() {
    let inventory = Inventory::aggregate(observations());
    let libs: Vec<&str> = inventory.libraries().into_iter().collect();
    assert_eq!(libs, vec!["lib-a", "lib-b", "lib-c"]);
}

#[test]
fn test_record_incrementally() {
    let mut inventory = Inventory::new();
    inventory.record("lib-a", Dependency::new("netty", "3.1.2"));
    inventory.record(String::from("lib-b"), Dependency::new("netty", "3.5.3"));
    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory.versions_of("netty").unwrap().len(), 2);
}

#[test]
fn test_collision_groups_only_multi_version() {
    let inventory = Inventory::aggregate(observations());
    let groups = inventory.collision_groups();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].artifact, "netty");
}
