// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use flowscan::{FlowEndNode, FlowNode, FlowStartNode, StepDescriptor, StepNode};
use tracing::Level;

// --- Common Node Fixtures ---

pub fn step_node(node_id: &str, descriptor_id: &str) -> FlowNode {
  FlowNode::Step(StepNode::new(node_id, StepDescriptor::new(descriptor_id)))
}

pub fn step_node_named(node_id: &str, descriptor_id: &str, display_name: &str) -> FlowNode {
  FlowNode::Step(StepNode::new(
    node_id,
    StepDescriptor::new(descriptor_id).with_display_name(display_name),
  ))
}

pub fn descriptorless_step_node(node_id: &str) -> FlowNode {
  FlowNode::Step(StepNode::without_descriptor(node_id))
}

pub fn start_node(node_id: &str) -> FlowNode {
  FlowNode::FlowStart(FlowStartNode::new(node_id))
}

pub fn end_node(node_id: &str) -> FlowNode {
  FlowNode::FlowEnd(FlowEndNode::new(node_id))
}

/// A small linear run: start sentinel, a few shell-ish steps, end sentinel.
pub fn sample_run() -> Vec<FlowNode> {
  vec![
    start_node("2"),
    step_node("3", "echo"),
    step_node("4", "sh"),
    step_node("5", "echo"),
    descriptorless_step_node("6"),
    end_node("7"),
  ]
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::TRACE)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
