// src/error.rs
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlowScanError {
  /// A matcher was constructed with an empty step-type identifier.
  /// Matching against the empty id could never succeed, so this is rejected
  /// at construction rather than silently accepted.
  #[error("Step descriptor id must not be empty")]
  EmptyDescriptorId,
}

pub type FlowScanResult<T, E = FlowScanError> = std::result::Result<T, E>;
