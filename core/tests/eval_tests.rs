// tests/eval_tests.rs
mod common;

use common::*;
use ramus::{ConditionEvaluator, ParameterContext, ScriptEvaluator};

#[test]
fn literal_true_and_false() {
  setup_tracing();
  let evaluator = ScriptEvaluator::new();
  let context = ParameterContext::empty();

  assert!(evaluator.evaluate("true", &context).unwrap());
  assert!(!evaluator.evaluate("false", &context).unwrap());
}

#[test]
fn comparisons_against_context_params() {
  setup_tracing();
  let evaluator = ScriptEvaluator::new();
  let context = params(&[("count", 3i64.into()), ("status", "ready".into())]);

  assert!(evaluator
    .evaluate("count > 2 && status == \"ready\"", &context)
    .unwrap());
  assert!(!evaluator.evaluate("count > 5", &context).unwrap());
  assert!(!evaluator.evaluate("status == \"failed\"", &context).unwrap());
}

#[test]
fn bool_params_are_usable_directly() {
  setup_tracing();
  let evaluator = ScriptEvaluator::new();
  let context = params(&[("enabled", true.into())]);

  assert!(evaluator.evaluate("enabled", &context).unwrap());
  assert!(!evaluator.evaluate("!enabled", &context).unwrap());
}

#[test]
fn float_params_compare() {
  setup_tracing();
  let evaluator = ScriptEvaluator::new();
  let context = params(&[("ratio", 0.75f64.into())]);

  assert!(evaluator.evaluate("ratio < 1.0", &context).unwrap());
}

#[test]
fn hyphenated_param_names_are_normalized() {
  setup_tracing();
  let evaluator = ScriptEvaluator::new();
  let context = params(&[("retry-count", 2i64.into())]);

  assert!(evaluator.evaluate("retry_count == 2", &context).unwrap());
}

#[test]
fn malformed_expression_is_an_evaluation_error() {
  setup_tracing();
  let evaluator = ScriptEvaluator::new();
  let err = evaluator
    .evaluate("&&&&", &ParameterContext::empty())
    .expect_err("evaluation should fail");

  assert!(err.is_evaluation(), "expected Evaluation, got {:?}", err);
  assert!(err.to_string().contains("&&&&"));
}

#[test]
fn unknown_variable_is_an_evaluation_error() {
  setup_tracing();
  let evaluator = ScriptEvaluator::new();
  let err = evaluator
    .evaluate("missing_param == 1", &ParameterContext::empty())
    .expect_err("evaluation should fail");

  assert!(err.is_evaluation(), "expected Evaluation, got {:?}", err);
}

#[test]
fn non_boolean_result_is_an_evaluation_error() {
  setup_tracing();
  // The contract is bool-or-error; an integer result is not quietly coerced.
  let evaluator = ScriptEvaluator::new();
  let err = evaluator
    .evaluate("1 + 1", &ParameterContext::empty())
    .expect_err("evaluation should fail");

  assert!(err.is_evaluation(), "expected Evaluation, got {:?}", err);
}

#[test]
fn evaluation_is_deterministic() {
  setup_tracing();
  let evaluator = ScriptEvaluator::new();
  let context = params(&[("count", 3i64.into())]);

  let first = evaluator.evaluate("count > 2", &context).unwrap();
  let second = evaluator.evaluate("count > 2", &context).unwrap();
  assert_eq!(first, second);
}
