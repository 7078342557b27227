// ramus/src/task/sink.rs

//! Boundary through which the surrounding runtime observes a resolution.

use crate::branch::outcome::ResolutionOutcome;
use crate::error::RamusError;
use crate::graph::NodeId;
use parking_lot::RwLock;

/// Final execution status of one switch-task execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStatus {
  Success,
  Failure,
}

/// Receives the outcome of one resolution.
///
/// On success the owning task is marked successfully completed and the
/// selected successor is recorded where DAG dispatch can read it to
/// activate exactly one outgoing edge of the switch node. On failure the
/// task is marked failed with the classified error, never successfully
/// completed with a default the resolver did not actually produce.
pub trait ResultSink: Send + Sync {
  fn record_success(&self, outcome: &ResolutionOutcome);
  fn record_failure(&self, error: &RamusError);
}

#[derive(Debug, Default)]
struct SinkState {
  status: Option<ExecutionStatus>,
  next_branch: Option<NodeId>,
  failure: Option<String>,
}

/// In-memory [`ResultSink`].
///
/// State sits behind a `parking_lot::RwLock` so the runtime can poll the
/// status from another thread while the worker records the outcome. Guards
/// are blocking and held only for the duration of one read or write.
#[derive(Debug, Default)]
pub struct MemoryResultSink {
  state: RwLock<SinkState>,
}

impl MemoryResultSink {
  pub fn new() -> Self {
    Self::default()
  }

  /// Recorded execution status; `None` until a resolution has finished.
  pub fn status(&self) -> Option<ExecutionStatus> {
    self.state.read().status
  }

  /// Successor chosen by the last successful resolution.
  pub fn next_branch(&self) -> Option<NodeId> {
    self.state.read().next_branch
  }

  /// Message of the classified error recorded on failure.
  pub fn failure_message(&self) -> Option<String> {
    self.state.read().failure.clone()
  }
}

impl ResultSink for MemoryResultSink {
  fn record_success(&self, outcome: &ResolutionOutcome) {
    let mut state = self.state.write();
    state.status = Some(ExecutionStatus::Success);
    state.next_branch = Some(outcome.next_node());
    state.failure = None;
  }

  fn record_failure(&self, error: &RamusError) {
    let mut state = self.state.write();
    state.status = Some(ExecutionStatus::Failure);
    state.next_branch = None;
    state.failure = Some(error.to_string());
  }
}
