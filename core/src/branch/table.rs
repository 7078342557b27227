// ramus/src/branch/table.rs

//! The switch node's configuration: ordered conditional arms plus the
//! designated default successor.

use crate::error::{RamusError, RamusResult};
use crate::graph::NodeId;
use serde::{Deserialize, Serialize};

/// One conditional arm of a switch node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchCandidate {
  /// Condition expression; never empty for a non-default candidate.
  pub condition: String,
  /// Node the workflow continues to if `condition` evaluates true.
  pub next_node: NodeId,
}

impl BranchCandidate {
  pub fn new(condition: impl Into<String>, next_node: impl Into<NodeId>) -> Self {
    BranchCandidate {
      condition: condition.into(),
      next_node: next_node.into(),
    }
  }
}

/// The switch node's full branch configuration.
///
/// Candidate order is significant and preserved from configuration order:
/// the resolver walks candidates from index 0 and the first true condition
/// wins.
///
/// A table is well-formed only if a default successor is set. An absent
/// default is representable because malformed configuration legitimately
/// reaches this crate: it is a detectable invariant violation reported by
/// [`BranchTable::validate`], not a valid "no default" state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchTable {
  #[serde(default)]
  candidates: Vec<BranchCandidate>,
  #[serde(default)]
  default_node: Option<NodeId>,
}

impl BranchTable {
  /// Builds a well-formed table from candidates (in configuration order)
  /// and the designated default successor.
  pub fn new(candidates: Vec<BranchCandidate>, default_node: impl Into<NodeId>) -> Self {
    BranchTable {
      candidates,
      default_node: Some(default_node.into()),
    }
  }

  /// Builds a table without a default successor.
  ///
  /// The result is ill-formed and will be rejected by
  /// [`BranchTable::validate`] before any condition is evaluated.
  pub fn without_default(candidates: Vec<BranchCandidate>) -> Self {
    BranchTable {
      candidates,
      default_node: None,
    }
  }

  /// Candidates in configuration order (index 0 is evaluated first).
  pub fn candidates(&self) -> &[BranchCandidate] {
    &self.candidates
  }

  /// The designated default successor, if the configuration carries one.
  pub fn default_node(&self) -> Option<NodeId> {
    self.default_node
  }

  /// Checks well-formedness: the default successor is present and no
  /// candidate carries an empty condition.
  ///
  /// This runs once, up front, before any condition is evaluated, so
  /// structural defects are reported uniformly regardless of whether a
  /// candidate would have matched.
  pub fn validate(&self) -> RamusResult<()> {
    if self.default_node.is_none() {
      return Err(RamusError::configuration("missing default branch"));
    }
    for (index, candidate) in self.candidates.iter().enumerate() {
      if candidate.condition.trim().is_empty() {
        return Err(RamusError::configuration(format!(
          "candidate {} has an empty condition",
          index
        )));
      }
    }
    Ok(())
  }
}
