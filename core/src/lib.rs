// src/lib.rs

//! Flowscan: type-safe predicates over pipeline-run flow graphs.
//!
//! A flow graph is a directed acyclic record of a pipeline run: one node per
//! executed step, plus two sentinel nodes bracketing the whole run. Flowscan
//! provides:
//!  - A small, closed node model (`FlowNode` and its variants) expressing the
//!    capabilities graph analysis consumes.
//!  - An optional-capability trait (`DescribesStep`) for node variants that
//!    can carry step-type metadata.
//!  - The `NodePredicate` seam that graph traversal utilities evaluate
//!    against nodes, one node at a time.
//!  - `StepNameMatcher`, a predicate matching step invocations by their
//!    step-type identifier.
//!
//! Graph traversal itself, the step-type registry, and pipeline execution
//! live elsewhere; this crate only inspects nodes it is handed.

// Declare modules according to the planned structure
pub mod error;
pub mod graph;
pub mod predicate;

// --- Re-exports for the Public API ---

// The node model users will hand to predicates
pub use crate::graph::descriptor::StepDescriptor;
pub use crate::graph::node::{DescribesStep, FlowEndNode, FlowNode, FlowStartNode, StepNode};

// The predicate seam and its concrete matcher
pub use crate::predicate::step_name::StepNameMatcher;
pub use crate::predicate::NodePredicate;

pub use crate::error::{FlowScanError, FlowScanResult};
