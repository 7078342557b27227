// tests/table_tests.rs
mod common;

use common::*;
use ramus::{BranchCandidate, BranchTable, NodeId, RamusError};

#[test]
fn well_formed_table_validates() {
  let table = table(&[("a == 1", 10), ("b == 2", 20)], 99);
  assert!(table.validate().is_ok());
}

#[test]
fn missing_default_is_a_configuration_error() {
  let table = table_without_default(&[("a == 1", 10)]);
  let err = table.validate().expect_err("validation should fail");

  assert!(matches!(err, RamusError::Configuration { .. }));
  assert!(err.to_string().contains("missing default branch"));
  assert!(err.to_string().contains("please check the switch task configuration"));
}

#[test]
fn empty_condition_is_a_configuration_error() {
  let table = table(&[("a == 1", 10), ("   ", 20)], 99);
  let err = table.validate().expect_err("validation should fail");

  assert!(matches!(err, RamusError::Configuration { .. }));
  assert!(err.to_string().contains("candidate 1"));
}

#[test]
fn candidate_order_is_preserved() {
  let table = table(&[("first", 1), ("second", 2), ("third", 3)], 99);
  let conditions: Vec<&str> = table
    .candidates()
    .iter()
    .map(|candidate| candidate.condition.as_str())
    .collect();

  assert_eq!(conditions, vec!["first", "second", "third"]);
}

#[test]
fn parses_camel_case_payload() {
  let raw = r#"{"candidates": [{"condition": "true", "nextNode": 123}], "defaultNode": 999}"#;
  let table: BranchTable = serde_json::from_str(raw).expect("payload should parse");

  assert_eq!(table.candidates().len(), 1);
  assert_eq!(table.candidates()[0].condition, "true");
  assert_eq!(table.candidates()[0].next_node, NodeId::new(123));
  assert_eq!(table.default_node(), Some(NodeId::new(999)));
}

#[test]
fn absent_default_parses_to_none_and_fails_validation() {
  // Absent default is a parseable-but-ill-formed state, not a parse error:
  // it must reach validate() so the defect is reported uniformly.
  let raw = r#"{"candidates": [{"condition": "true", "nextNode": 123}]}"#;
  let table: BranchTable = serde_json::from_str(raw).expect("payload should parse");

  assert_eq!(table.default_node(), None);
  assert!(table.validate().is_err());
}

#[test]
fn payload_round_trips() {
  let original = BranchTable::new(
    vec![BranchCandidate::new("count > 2", NodeId::new(10))],
    NodeId::new(99),
  );
  let encoded = serde_json::to_string(&original).expect("table should serialize");
  let decoded: BranchTable = serde_json::from_str(&encoded).expect("table should deserialize");

  assert_eq!(decoded, original);
}
