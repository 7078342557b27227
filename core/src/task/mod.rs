// ramus/src/task/mod.rs

//! The task-facing surface: the switch task wrapper and the execution
//! result sink boundary the surrounding runtime plugs into.

pub mod sink;
pub mod switch;

pub use sink::{ExecutionStatus, MemoryResultSink, ResultSink};
pub use switch::SwitchTask;
