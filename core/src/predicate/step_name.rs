// src/predicate/step_name.rs

//! Matching step-invocation nodes by their step-type identifier.

use tracing::{event, Level};

use crate::error::{FlowScanError, FlowScanResult};
use crate::graph::node::FlowNode;
use crate::predicate::NodePredicate;

/// Predicate matching flow-graph nodes that invoke a particular step type.
///
/// The step type is named by its descriptor id (e.g. `"sh"`, `"echo"`),
/// compared by exact string equality against the descriptor of each step
/// node. Nodes without a descriptor, the start/end sentinels, and absent
/// nodes all report no match.
///
/// The matcher holds only the identifier captured at construction; evaluation
/// reads it and the externally owned node, so a single instance is safe to
/// share across threads without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepNameMatcher {
  descriptor_id: String,
}

impl StepNameMatcher {
  /// Creates a matcher for the given step-type identifier.
  ///
  /// Fails with [`FlowScanError::EmptyDescriptorId`] if the identifier is
  /// empty.
  pub fn new(descriptor_id: impl Into<String>) -> FlowScanResult<Self> {
    let descriptor_id = descriptor_id.into();
    if descriptor_id.is_empty() {
      return Err(FlowScanError::EmptyDescriptorId);
    }
    Ok(Self { descriptor_id })
  }

  /// The step-type identifier this matcher was constructed with, verbatim.
  pub fn descriptor_id(&self) -> &str {
    &self.descriptor_id
  }
}

impl NodePredicate for StepNameMatcher {
  fn matches(&self, node: Option<&FlowNode>) -> bool {
    let Some(node) = node else {
      return false;
    };

    // Sentinels never carry a descriptor; short-circuit before any lookup.
    if node.is_flow_boundary() {
      event!(
        Level::TRACE,
        node_id = %node.id(),
        descriptor_id = %self.descriptor_id,
        "flow boundary node, no match"
      );
      return false;
    }

    match node.step_descriptor() {
      Some(descriptor) => {
        let matched = descriptor.id() == self.descriptor_id;
        event!(
          Level::TRACE,
          node_id = %node.id(),
          node_descriptor_id = %descriptor.id(),
          descriptor_id = %self.descriptor_id,
          matched,
          "compared step descriptor"
        );
        matched
      }
      None => {
        event!(
          Level::TRACE,
          node_id = %node.id(),
          descriptor_id = %self.descriptor_id,
          "node carries no step descriptor, no match"
        );
        false
      }
    }
  }
}
