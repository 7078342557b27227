// ramus/src/graph.rs

//! Read-only access to the workflow DAG published for the current run.
//!
//! The resolver only needs to answer one question about the graph: does the
//! node it selected exist? Injecting this narrow accessor keeps branch
//! resolution decoupled from the runtime's full execution object graph and
//! independently testable with a stub graph.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Identifier of a node in the workflow graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
  pub const fn new(code: u64) -> Self {
    NodeId(code)
  }

  pub const fn value(self) -> u64 {
    self.0
  }
}

impl From<u64> for NodeId {
  fn from(code: u64) -> Self {
    NodeId(code)
  }
}

impl fmt::Display for NodeId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Read-only lookup over the current run's DAG.
///
/// Implementations must be safe for concurrent read-only access: switch
/// resolutions for different task instances may consult the same graph
/// from independent worker threads once the graph is published for the
/// run, and no writer contends with resolution after that point.
pub trait WorkflowGraph: Send + Sync {
  /// Whether `node` is present in the workflow graph.
  fn node_exists(&self, node: NodeId) -> bool;
}

/// A fixed, set-backed graph view.
///
/// Suitable for runtimes that publish an immutable node set per run, and
/// as a stub graph in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticWorkflowGraph {
  nodes: HashSet<NodeId>,
}

impl StaticWorkflowGraph {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_node(mut self, node: impl Into<NodeId>) -> Self {
    self.nodes.insert(node.into());
    self
  }

  pub fn insert(&mut self, node: impl Into<NodeId>) {
    self.nodes.insert(node.into());
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }
}

impl<N: Into<NodeId>> FromIterator<N> for StaticWorkflowGraph {
  fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
    StaticWorkflowGraph {
      nodes: iter.into_iter().map(Into::into).collect(),
    }
  }
}

impl WorkflowGraph for StaticWorkflowGraph {
  fn node_exists(&self, node: NodeId) -> bool {
    self.nodes.contains(&node)
  }
}
