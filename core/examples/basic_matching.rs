// flowscan/examples/basic_matching.rs

use flowscan::{FlowEndNode, FlowNode, FlowStartNode, FlowScanError, NodePredicate, StepDescriptor, StepNameMatcher, StepNode};
use tracing::info;

fn main() -> Result<(), FlowScanError> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Matching Example ---");

  // 1. Build a small recorded run: start sentinel, three steps, end sentinel.
  //    In a real deployment these nodes come from the external graph model.
  let run = vec![
    FlowNode::FlowStart(FlowStartNode::new("2")),
    FlowNode::Step(StepNode::new("3", StepDescriptor::new("echo"))),
    FlowNode::Step(StepNode::new(
      "4",
      StepDescriptor::new("sh").with_display_name("Shell Script"),
    )),
    FlowNode::Step(StepNode::without_descriptor("5")),
    FlowNode::FlowEnd(FlowEndNode::new("6")),
  ];

  // 2. Create a matcher for the step type we are looking for.
  //    Construction fails fast on an empty identifier.
  let matcher = StepNameMatcher::new("sh")?;
  info!("Matching nodes against step type '{}'", matcher.descriptor_id());

  // 3. Evaluate each node the way a graph scanner would.
  for node in &run {
    info!(
      "node {} -> {}",
      node.id(),
      if matcher.matches(Some(node)) { "match" } else { "no match" }
    );
  }

  // 4. Absent nodes are a normal negative result, never an error.
  assert!(!matcher.matches(None));

  Ok(())
}
