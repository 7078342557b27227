// ramus/src/eval/mod.rs

//! Condition evaluation: the seam between branch resolution and the
//! expression language of the surrounding runtime.
//!
//! The resolver only depends on the [`ConditionEvaluator`] contract.
//! [`ScriptEvaluator`] is the default script-backed implementation;
//! runtimes with their own expression language implement the trait and
//! inject it into `BranchResolver::new`.

pub mod script;

pub use script::ScriptEvaluator;

use crate::context::ParameterContext;
use crate::error::RamusResult;

/// Evaluates one condition expression against the run's parameter context.
///
/// Implementations must be deterministic and free of observable side
/// effects: the context is read-only and repeated evaluation of the same
/// expression against the same context yields the same result. A malformed
/// expression is an `Evaluation` error, never a silent `false`: the
/// resolver treats such an error as a configuration defect, not a
/// non-match.
pub trait ConditionEvaluator: Send + Sync {
  fn evaluate(&self, expression: &str, context: &ParameterContext) -> RamusResult<bool>;
}
