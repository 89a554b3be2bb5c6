// src/predicate/mod.rs

//! The predicate seam consumed by graph traversal utilities.
//!
//! A scanner walking the flow graph hands nodes to a predicate one at a time
//! and collects the nodes for which it reports a match. Predicates are
//! read-only and hold no per-call state, so one instance can be shared by any
//! number of concurrent traversals.

pub mod step_name;

use crate::graph::node::FlowNode;

/// A boolean test over flow-graph nodes.
///
/// `node` is `Option` because traversal utilities surface "no node here"
/// (e.g. walking past the graph boundary) as `None`; that is a normal
/// negative result, never an error.
pub trait NodePredicate: Send + Sync {
  fn matches(&self, node: Option<&FlowNode>) -> bool;
}

pub use crate::predicate::step_name::StepNameMatcher;
