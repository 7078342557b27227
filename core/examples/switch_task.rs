// ramus_core/examples/switch_task.rs

use ramus::{MemoryResultSink, NodeId, ParamValue, ParameterContext, RamusError, StaticWorkflowGraph, SwitchTask};
use tracing::info;

fn main() -> Result<(), RamusError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Switch Task Example ---");

  // The raw payload as the upstream configuration layer ships it.
  let raw = r#"{
    "candidates": [
      {"condition": "tier == \"premium\"", "nextNode": 301},
      {"condition": "tier == \"trial\"", "nextNode": 302}
    ],
    "defaultNode": 300
  }"#;
  let task = SwitchTask::from_task_params(raw)?;

  let graph: StaticWorkflowGraph = [300u64, 301, 302].into_iter().map(NodeId::new).collect();
  let context: ParameterContext = [("tier", ParamValue::from("premium"))].into_iter().collect();
  let sink = MemoryResultSink::new();

  let outcome = task.handle(&context, &graph, &sink)?;

  info!(
    "Task status: {:?}, dispatch continues to node {}",
    sink.status(),
    outcome.next_node()
  );
  Ok(())
}
