// ramus/src/branch/resolver.rs

//! The core resolution state machine: walk the branch table in order and
//! select exactly one successor node.

use crate::branch::outcome::ResolutionOutcome;
use crate::branch::table::BranchTable;
use crate::context::ParameterContext;
use crate::error::{RamusError, RamusResult};
use crate::eval::{ConditionEvaluator, ScriptEvaluator};
use crate::graph::WorkflowGraph;
use std::sync::Arc;
use tracing::{event, instrument, span, Level};

/// Resolves a switch node's branch table to a single successor node.
///
/// The evaluator is injected so runtimes can bring their own expression
/// language; [`BranchResolver::default`] wires in [`ScriptEvaluator`].
///
/// Resolution is synchronous and performs no I/O or waiting: it runs to
/// completion on the worker thread handling the owning task's execution.
/// The resolver holds no per-resolution state, so one instance may serve
/// concurrent resolutions across worker threads.
pub struct BranchResolver {
  evaluator: Arc<dyn ConditionEvaluator>,
}

impl BranchResolver {
  pub fn new(evaluator: Arc<dyn ConditionEvaluator>) -> Self {
    BranchResolver { evaluator }
  }

  /// Selects the successor node for one switch-node execution.
  ///
  /// In order:
  /// 1. Reject ill-formed tables before evaluating anything (missing
  ///    default branch, empty condition).
  /// 2. Evaluate candidates in stored order. An evaluator error aborts the
  ///    whole resolution (it is a configuration defect, not a non-match),
  ///    so later candidates are not tried and the default is not taken. A
  ///    true condition selects that candidate and stops the walk.
  /// 3. Fall back to the default successor when every condition was false.
  /// 4. Reject the selection if the chosen node is not part of the
  ///    workflow graph, whether it came from a candidate or the default.
  ///
  /// All failures are terminal for this resolution; retry policy belongs
  /// to the enclosing task-execution lifecycle.
  #[instrument(
        name = "BranchResolver::resolve",
        skip_all,
        fields(
            num_candidates = table.candidates().len(),
            num_params = context.len(),
        ),
        err(Display)
    )]
  pub fn resolve(
    &self,
    table: &BranchTable,
    context: &ParameterContext,
    graph: &dyn WorkflowGraph,
  ) -> RamusResult<ResolutionOutcome> {
    table.validate()?;
    // validate() guarantees the default is present; re-check instead of
    // unwrapping so the invariant stays local.
    let default_node = table
      .default_node()
      .ok_or_else(|| RamusError::configuration("missing default branch"))?;

    let mut selected = None;
    for (index, candidate) in table.candidates().iter().enumerate() {
      let candidate_span = span!(
        Level::DEBUG,
        "candidate_evaluation",
        candidate_index = index,
        next_node = %candidate.next_node
      );
      let _candidate_span_guard = candidate_span.enter();

      if self.evaluator.evaluate(&candidate.condition, context)? {
        event!(Level::DEBUG, "Condition evaluated true; stopping the walk.");
        selected = Some(ResolutionOutcome::matched(index, candidate.next_node));
        break;
      }
      event!(Level::TRACE, "Condition evaluated false.");
    }

    let outcome = selected.unwrap_or_else(|| {
      event!(
        Level::DEBUG,
        default_node = %default_node,
        "No condition matched; taking the default branch."
      );
      ResolutionOutcome::default_branch(default_node)
    });

    if !graph.node_exists(outcome.next_node()) {
      event!(
        Level::ERROR,
        next_node = %outcome.next_node(),
        "Selected successor is absent from the workflow graph."
      );
      return Err(RamusError::configuration(format!(
        "selected node {} not found in workflow graph",
        outcome.next_node()
      )));
    }

    event!(
      Level::INFO,
      next_node = %outcome.next_node(),
      took_default = outcome.is_default(),
      "Branch resolved."
    );
    Ok(outcome)
  }
}

impl Default for BranchResolver {
  fn default() -> Self {
    BranchResolver::new(Arc::new(ScriptEvaluator::new()))
  }
}

// Arc<dyn ConditionEvaluator> doesn't implement Debug; provide a placeholder.
impl std::fmt::Debug for BranchResolver {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("BranchResolver").finish_non_exhaustive()
  }
}
