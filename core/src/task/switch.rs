// ramus/src/task/switch.rs

//! The switch task: one conditional-branch node of the workflow DAG.

use crate::branch::outcome::ResolutionOutcome;
use crate::branch::resolver::BranchResolver;
use crate::branch::table::BranchTable;
use crate::context::ParameterContext;
use crate::error::{RamusError, RamusResult};
use crate::graph::WorkflowGraph;
use crate::task::sink::ResultSink;
use tracing::{event, instrument, Level};

/// A switch node's execution wrapper: a branch table plus the resolver
/// that walks it.
///
/// [`SwitchTask::handle`] is the single operation the surrounding task
/// runtime invokes: it resolves the branch, records the result in the
/// sink, and hands the outcome (or classified error) back unchanged so the
/// runtime can drive its own lifecycle (retry, escalation) on top.
pub struct SwitchTask {
  table: BranchTable,
  resolver: BranchResolver,
}

impl std::fmt::Debug for SwitchTask {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SwitchTask")
      .field("table", &self.table)
      .finish_non_exhaustive()
  }
}

impl SwitchTask {
  /// Wraps a deserialized branch table with the default resolver.
  pub fn new(table: BranchTable) -> Self {
    SwitchTask {
      table,
      resolver: BranchResolver::default(),
    }
  }

  /// Wraps a branch table with a resolver carrying a custom evaluator.
  pub fn with_resolver(table: BranchTable, resolver: BranchResolver) -> Self {
    SwitchTask { table, resolver }
  }

  /// Parses the raw task-parameter payload into a switch task.
  ///
  /// The payload is the camelCase JSON object the upstream configuration
  /// layer ships, e.g.
  /// `{"candidates": [{"condition": "true", "nextNode": 123}], "defaultNode": 999}`.
  ///
  /// A payload that does not parse is a configuration defect. An absent
  /// `defaultNode` parses fine; the ill-formed table is rejected later by
  /// well-formedness validation, so both defects surface through the same
  /// classified error.
  pub fn from_task_params(raw: &str) -> RamusResult<Self> {
    let table: BranchTable = serde_json::from_str(raw)
      .map_err(|e| RamusError::configuration(format!("invalid switch task parameters: {}", e)))?;
    Ok(SwitchTask::new(table))
  }

  pub fn table(&self) -> &BranchTable {
    &self.table
  }

  /// Runs one branch resolution and records the result in the sink.
  #[instrument(name = "SwitchTask::handle", skip_all, err(Display))]
  pub fn handle(
    &self,
    context: &ParameterContext,
    graph: &dyn WorkflowGraph,
    sink: &dyn ResultSink,
  ) -> RamusResult<ResolutionOutcome> {
    match self.resolver.resolve(&self.table, context, graph) {
      Ok(outcome) => {
        event!(Level::INFO, next_node = %outcome.next_node(), "Switch task completed.");
        sink.record_success(&outcome);
        Ok(outcome)
      }
      Err(error) => {
        event!(Level::ERROR, error = %error, "Switch task failed.");
        sink.record_failure(&error);
        Err(error)
      }
    }
  }
}
