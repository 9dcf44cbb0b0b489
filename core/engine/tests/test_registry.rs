//! FILENAME: tests/test_registry.rs
//! PURPOSE: Tests for catalog cross-referencing over a registry of tables.

use num_bigint::BigInt;
use tabl_engine::families::{demo_registry, naturals, ones};
use tabl_engine::{Table, TableRegistry};

#[test]
fn test_demo_registry_anum_list() {
    let registry = demo_registry();
    let list: Vec<String> = registry.anum_list().into_iter().collect();
    assert_eq!(
        list,
        vec!["A000012", "A000027", "A001477", "A007318", "A097807"]
    );
}

#[test]
fn test_anum_in_list() {
    let registry = demo_registry();
    assert!(registry.anum_in_list("A001477"));
    assert!(!registry.anum_in_list("A021009"));
    assert!(!registry.anum_in_list(""));
}

#[test]
fn test_lookup_by_id() {
    let registry = demo_registry();
    let naturals = registry.get("Naturals").unwrap();
    assert_eq!(naturals.val(3, 0).unwrap(), BigInt::from(7));
    assert!(registry.get("Catalan").is_none());
}

#[test]
fn test_iteration_in_registration_order() {
    let registry = demo_registry();
    let ids: Vec<&str> = registry.iter().map(|t| t.id()).collect();
    assert_eq!(ids, vec!["Naturals", "Ones", "Binomial", "Alternating"]);
}

#[test]
fn test_registry_from_iterator() {
    let registry: TableRegistry = vec![
        Table::new(naturals, "A", ["A000027"], false),
        Table::new(ones, "B", ["A000012", "A000027"], true),
    ]
    .into_iter()
    .collect();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.anum_list().len(), 2);
}

#[test]
fn test_tables_in_different_registries_do_not_share_caches() {
    let first = demo_registry();
    let second = demo_registry();

    first.get("Ones").unwrap().tab(10).unwrap();
    assert_eq!(first.get("Ones").unwrap().cache().len(), 10);
    assert!(second.get("Ones").unwrap().cache().is_empty());
}
