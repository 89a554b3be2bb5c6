// src/graph/descriptor.rs

//! Step-type metadata carried by step-invocation nodes.

/// Identifies the type of step a node invokes.
///
/// Descriptors are owned by the external step-type registry; this crate only
/// holds copies for comparison. Both fields are set at construction and never
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StepDescriptor {
  id: String,
  display_name: Option<String>,
}

impl StepDescriptor {
  pub fn new(id: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      display_name: None,
    }
  }

  pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
    self.display_name = Some(display_name.into());
    self
  }

  /// The unique step-type identifier, e.g. `"sh"` or `"echo"`.
  pub fn id(&self) -> &str {
    &self.id
  }

  /// Human-readable step-type name, when the registry provides one.
  pub fn display_name(&self) -> Option<&str> {
    self.display_name.as_deref()
  }
}
