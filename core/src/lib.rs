// src/lib.rs

//! Ramus: deterministic switch-branch resolution for workflow DAG executors.
//!
//! A switch node has multiple possible successors, exactly one of which is
//! activated per run. Ramus decides which one:
//!  - Ordered, first-match-wins evaluation of condition expressions against
//!    the run's parameter snapshot.
//!  - A mandatory default branch, validated up front before any condition runs.
//!  - Fail-fast classification of configuration and evaluation defects;
//!    an evaluator error is never silently downgraded to "take the default".
//!  - Validation of the chosen successor against the published workflow graph.
//!  - Pluggable condition evaluation behind a trait, with a script-backed default.
//!  - An execution-result sink boundary through which the surrounding task
//!    runtime observes success or failure.

// Declare modules according to the planned structure
pub mod branch;
pub mod context;
pub mod error;
pub mod eval;
pub mod graph;
pub mod task;

// --- Re-exports for the Public API ---

// Data model the caller hands to a resolution
pub use crate::branch::table::{BranchCandidate, BranchTable};
pub use crate::context::{ParamValue, ParameterContext};
pub use crate::graph::{NodeId, StaticWorkflowGraph, WorkflowGraph};

// The core resolver and its outcome values
pub use crate::branch::outcome::{MatchSource, ResolutionOutcome};
pub use crate::branch::resolver::BranchResolver;

// Condition evaluation seam
pub use crate::eval::{ConditionEvaluator, ScriptEvaluator};

// Task-facing surface
pub use crate::task::sink::{ExecutionStatus, MemoryResultSink, ResultSink};
pub use crate::task::switch::SwitchTask;

pub use crate::error::{RamusError, RamusResult};

/*
    Core Workflow:
    1. Deserialize the switch node's configuration into a `BranchTable`
       (or let `SwitchTask::from_task_params` parse the raw JSON payload).
    2. Snapshot the run's parameters into a `ParameterContext`.
    3. Expose the run's DAG through a `WorkflowGraph` accessor
       (`StaticWorkflowGraph` covers the common fixed-node-set case).
    4. Call `BranchResolver::resolve(&table, &context, &graph)`, or wrap
       the table in a `SwitchTask` and call `handle(...)` with a
       `ResultSink` to also record the execution status.
    5. Dispatch the run along `ResolutionOutcome::next_node()`; all other
       outgoing edges of the switch node are not taken.
*/
