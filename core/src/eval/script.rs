// ramus/src/eval/script.rs

//! Default `ConditionEvaluator` backed by the rhai scripting engine.

use crate::context::{ParamValue, ParameterContext};
use crate::error::{RamusError, RamusResult};
use crate::eval::ConditionEvaluator;
use tracing::{event, Level};

/// Evaluates conditions as rhai boolean expressions.
///
/// Every parameter in the context is pushed into the script scope as a
/// typed variable before evaluation, with `-` in names rewritten to `_` so
/// the parameter stays referenceable as an identifier. `"true"` and
/// `"false"` literal conditions therefore work out of the box, as do
/// comparisons such as `status == "ready" && retries < 3`.
///
/// A condition that fails to parse, references an unknown variable, or
/// produces a non-boolean result is classified as an `Evaluation` error.
///
/// The engine is rebuilt per evaluation. Conditions are short and the
/// resolver calls this at most once per candidate, which also keeps the
/// evaluator trivially `Send + Sync`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptEvaluator;

impl ScriptEvaluator {
  pub fn new() -> Self {
    ScriptEvaluator
  }
}

impl ConditionEvaluator for ScriptEvaluator {
  fn evaluate(&self, expression: &str, context: &ParameterContext) -> RamusResult<bool> {
    let engine = rhai::Engine::new();
    let mut scope = rhai::Scope::new();

    for (name, value) in context.iter() {
      let name = name.replace('-', "_");
      match value {
        ParamValue::Bool(v) => {
          scope.push(name, *v);
        }
        ParamValue::Integer(v) => {
          scope.push(name, *v);
        }
        ParamValue::Float(v) => {
          scope.push(name, *v);
        }
        ParamValue::String(v) => {
          scope.push(name, v.clone());
        }
      }
    }

    engine
      .eval_with_scope::<bool>(&mut scope, expression)
      .map_err(|e| {
        event!(Level::DEBUG, error = %e, "Condition script failed to evaluate.");
        // rhai's error type is not Send + Sync without its `sync` feature,
        // so carry the rendered message.
        RamusError::evaluation(expression, anyhow::anyhow!(e.to_string()))
      })
  }
}
