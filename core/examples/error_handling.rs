// ramus_core/examples/error_handling.rs

use ramus::{
  BranchCandidate, BranchResolver, BranchTable, NodeId, ParameterContext, StaticWorkflowGraph,
};
use tracing::info;

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Classified Failure Example ---");

  let resolver = BranchResolver::default();
  let context = ParameterContext::empty();
  let graph: StaticWorkflowGraph = [100u64].into_iter().map(NodeId::new).collect();

  // 1. Missing default branch: rejected before any condition is evaluated.
  let no_default = BranchTable::without_default(vec![BranchCandidate::new("true", NodeId::new(100))]);
  match resolver.resolve(&no_default, &context, &graph) {
    Err(error) => info!("Missing default rejected: {}", error),
    Ok(_) => unreachable!("ill-formed table must not resolve"),
  }

  // 2. Selected node absent from the workflow graph.
  let dangling = BranchTable::new(vec![BranchCandidate::new("true", NodeId::new(555))], NodeId::new(100));
  match resolver.resolve(&dangling, &context, &graph) {
    Err(error) => info!("Dangling successor rejected: {}", error),
    Ok(_) => unreachable!("dangling successor must not resolve"),
  }

  // 3. Malformed condition: an evaluation error, never a silent false.
  let malformed = BranchTable::new(vec![BranchCandidate::new("not ) valid", NodeId::new(100))], NodeId::new(100));
  match resolver.resolve(&malformed, &context, &graph) {
    Err(error) => info!("Malformed condition rejected: {}", error),
    Ok(_) => unreachable!("malformed condition must not resolve"),
  }
}
