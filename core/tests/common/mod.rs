// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use ramus::{
  BranchCandidate, BranchTable, ConditionEvaluator, NodeId, ParamValue, ParameterContext,
  RamusError, RamusResult, StaticWorkflowGraph,
};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Scripted evaluator ---
// Answers each expression from a fixed table and records the order in
// which expressions were evaluated, so tests can assert which candidates
// the resolver visited, and which it never did.
pub struct ScriptedEvaluator {
  answers: HashMap<String, bool>,
  calls: Mutex<Vec<String>>,
  fail_on: Option<String>,
}

impl ScriptedEvaluator {
  pub fn new(answers: &[(&str, bool)]) -> Self {
    ScriptedEvaluator {
      answers: answers
        .iter()
        .map(|(expression, result)| (expression.to_string(), *result))
        .collect(),
      calls: Mutex::new(Vec::new()),
      fail_on: None,
    }
  }

  /// Makes evaluation of `expression` fail with an `Evaluation` error.
  pub fn failing_on(mut self, expression: &str) -> Self {
    self.fail_on = Some(expression.to_string());
    self
  }

  /// Expressions evaluated so far, in call order.
  pub fn calls(&self) -> Vec<String> {
    self.calls.lock().unwrap().clone()
  }

  pub fn call_count(&self) -> usize {
    self.calls.lock().unwrap().len()
  }
}

impl ConditionEvaluator for ScriptedEvaluator {
  fn evaluate(&self, expression: &str, _context: &ParameterContext) -> RamusResult<bool> {
    self.calls.lock().unwrap().push(expression.to_string());
    if self.fail_on.as_deref() == Some(expression) {
      return Err(RamusError::evaluation(
        expression,
        anyhow::anyhow!("scripted evaluator failure"),
      ));
    }
    Ok(*self.answers.get(expression).unwrap_or(&false))
  }
}

// --- Builders for tables, graphs and contexts ---

pub fn table(candidates: &[(&str, u64)], default_node: u64) -> BranchTable {
  BranchTable::new(
    candidates
      .iter()
      .map(|(condition, next_node)| BranchCandidate::new(*condition, *next_node))
      .collect(),
    default_node,
  )
}

pub fn table_without_default(candidates: &[(&str, u64)]) -> BranchTable {
  BranchTable::without_default(
    candidates
      .iter()
      .map(|(condition, next_node)| BranchCandidate::new(*condition, *next_node))
      .collect(),
  )
}

pub fn graph_of(nodes: &[u64]) -> StaticWorkflowGraph {
  nodes.iter().map(|&node| NodeId::new(node)).collect()
}

pub fn params(entries: &[(&str, ParamValue)]) -> ParameterContext {
  entries
    .iter()
    .map(|(name, value)| (*name, value.clone()))
    .collect()
}
