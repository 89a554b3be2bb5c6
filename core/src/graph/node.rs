// src/graph/node.rs

//! Node variants of a pipeline-run flow graph.
//!
//! The variant set is closed: a run consists of step-invocation nodes
//! bracketed by exactly one start and one end sentinel. Variants that can
//! carry step-type metadata implement `DescribesStep`; the sentinels
//! structurally cannot, so boundary handling needs no runtime discovery.

use crate::graph::descriptor::StepDescriptor;

/// Optional capability: a node variant that conceptually represents a step
/// invocation and may expose the descriptor of its step type.
///
/// `None` means the node is a step invocation whose step type could not be
/// resolved (e.g. the defining plugin was unloaded after the run was
/// recorded), not a malformed graph.
pub trait DescribesStep {
  fn step_descriptor(&self) -> Option<&StepDescriptor>;
}

/// A node recording one step invocation within a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepNode {
  id: String,
  descriptor: Option<StepDescriptor>,
}

impl StepNode {
  pub fn new(id: impl Into<String>, descriptor: StepDescriptor) -> Self {
    Self {
      id: id.into(),
      descriptor: Some(descriptor),
    }
  }

  /// A step node whose step type is unresolvable. Matching against it is
  /// always negative.
  pub fn without_descriptor(id: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      descriptor: None,
    }
  }

  pub fn id(&self) -> &str {
    &self.id
  }
}

impl DescribesStep for StepNode {
  fn step_descriptor(&self) -> Option<&StepDescriptor> {
    self.descriptor.as_ref()
  }
}

/// Sentinel node marking the start of the whole flow graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowStartNode {
  id: String,
}

impl FlowStartNode {
  pub fn new(id: impl Into<String>) -> Self {
    Self { id: id.into() }
  }

  pub fn id(&self) -> &str {
    &self.id
  }
}

/// Sentinel node marking the end of the whole flow graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowEndNode {
  id: String,
}

impl FlowEndNode {
  pub fn new(id: impl Into<String>) -> Self {
    Self { id: id.into() }
  }

  pub fn id(&self) -> &str {
    &self.id
  }
}

/// A single vertex in a pipeline-run flow graph.
///
/// The enum is deliberately closed: every variant a run can produce is listed
/// here, so predicates dispatch statically instead of probing nodes for
/// capabilities at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowNode {
  /// One executed step.
  Step(StepNode),
  /// Start-of-run sentinel; never a step invocation.
  FlowStart(FlowStartNode),
  /// End-of-run sentinel; never a step invocation.
  FlowEnd(FlowEndNode),
}

impl FlowNode {
  pub fn id(&self) -> &str {
    match self {
      FlowNode::Step(n) => n.id(),
      FlowNode::FlowStart(n) => n.id(),
      FlowNode::FlowEnd(n) => n.id(),
    }
  }

  /// The step-type descriptor, for variants that carry one.
  pub fn step_descriptor(&self) -> Option<&StepDescriptor> {
    match self {
      FlowNode::Step(n) => n.step_descriptor(),
      FlowNode::FlowStart(_) | FlowNode::FlowEnd(_) => None,
    }
  }

  /// True for the two sentinel variants bracketing the run.
  pub fn is_flow_boundary(&self) -> bool {
    matches!(self, FlowNode::FlowStart(_) | FlowNode::FlowEnd(_))
  }
}

impl From<StepNode> for FlowNode {
  fn from(node: StepNode) -> Self {
    FlowNode::Step(node)
  }
}

impl From<FlowStartNode> for FlowNode {
  fn from(node: FlowStartNode) -> Self {
    FlowNode::FlowStart(node)
  }
}

impl From<FlowEndNode> for FlowNode {
  fn from(node: FlowEndNode) -> Self {
    FlowNode::FlowEnd(node)
  }
}
