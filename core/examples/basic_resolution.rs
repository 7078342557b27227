// ramus_core/examples/basic_resolution.rs

use ramus::{
  BranchCandidate, BranchResolver, BranchTable, NodeId, ParamValue, ParameterContext,
  RamusError, StaticWorkflowGraph,
};
use tracing::info;

fn main() -> Result<(), RamusError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Basic Branch Resolution Example ---");

  // The switch node's configuration: route failed runs to a cleanup node,
  // retries to a backoff node, everything else to the default.
  let table = BranchTable::new(
    vec![
      BranchCandidate::new("status == \"failed\"", NodeId::new(201)),
      BranchCandidate::new("retries > 0", NodeId::new(202)),
    ],
    NodeId::new(200),
  );

  // The graph published for this run; the resolver validates the chosen
  // successor against it.
  let graph: StaticWorkflowGraph = [200u64, 201, 202].into_iter().map(NodeId::new).collect();

  // The run's parameter snapshot.
  let context: ParameterContext = [
    ("status", ParamValue::from("failed")),
    ("retries", ParamValue::from(0i64)),
  ]
  .into_iter()
  .collect();

  let resolver = BranchResolver::default();
  let outcome = resolver.resolve(&table, &context, &graph)?;

  info!(
    "Selected node {} (matched candidate: {:?})",
    outcome.next_node(),
    outcome.matched_index()
  );
  Ok(())
}
