// src/graph/mod.rs

//! The node model of a pipeline-run flow graph.
//!
//! Only the shapes graph analysis consumes are defined here: step-type
//! metadata (`StepDescriptor`) and the closed set of node variants
//! (`FlowNode`). The graph structure itself (edges, traversal order) is
//! owned by the external graph model and never appears in this crate.

pub mod descriptor;
pub mod node;

pub use crate::graph::descriptor::StepDescriptor;
pub use crate::graph::node::{DescribesStep, FlowEndNode, FlowNode, FlowStartNode, StepNode};
