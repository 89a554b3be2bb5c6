// flowscan/examples/filter_run_nodes.rs
//
// Shows consuming matchers through the `NodePredicate` seam, the way an
// external traversal utility would: the filter below only knows it holds
// boolean tests over nodes, not which concrete predicates they are.

use flowscan::{FlowEndNode, FlowNode, FlowStartNode, FlowScanError, NodePredicate, StepDescriptor, StepNameMatcher, StepNode};
use tracing::info;

/// Collects the ids of the nodes any of the given predicates match.
fn collect_matching_ids<'a>(run: &'a [FlowNode], predicates: &[Box<dyn NodePredicate>]) -> Vec<&'a str> {
  run
    .iter()
    .filter(|node| predicates.iter().any(|p| p.matches(Some(*node))))
    .map(|node| node.id())
    .collect()
}

fn main() -> Result<(), FlowScanError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Filter Run Nodes Example ---");

  // A run mixing shell and echo steps with the boundary sentinels.
  let run = vec![
    FlowNode::FlowStart(FlowStartNode::new("2")),
    FlowNode::Step(StepNode::new("3", StepDescriptor::new("sh"))),
    FlowNode::Step(StepNode::new("4", StepDescriptor::new("echo"))),
    FlowNode::Step(StepNode::new("5", StepDescriptor::new("sh"))),
    FlowNode::Step(StepNode::new("6", StepDescriptor::new("junit"))),
    FlowNode::FlowEnd(FlowEndNode::new("7")),
  ];

  // Matchers for the step types of interest, boxed behind the seam.
  let predicates: Vec<Box<dyn NodePredicate>> = vec![
    Box::new(StepNameMatcher::new("sh")?),
    Box::new(StepNameMatcher::new("junit")?),
  ];

  let matched = collect_matching_ids(&run, &predicates);
  info!("shell/junit invocations at nodes: {:?}", matched);
  assert_eq!(matched, vec!["3", "5", "6"]);

  Ok(())
}
