use thiserror::Error;

/// Failure of a request against the collection API.
#[derive(Debug, Error)]
pub enum SyncError {
  #[error("request failed: {0}")]
  Transport(String),

  #[error("HTTP error! status: {status}")]
  Status { status: u16, body: String },

  #[error("failed to decode response body: {0}")]
  Decode(#[source] serde_json::Error),

  #[error("failed to encode request body: {0}")]
  Encode(#[source] serde_json::Error)
}

impl SyncError {
  pub fn status(&self) -> Option<u16> {
    match self {
      | SyncError::Status {
        status,
        ..
      } => Some(*status),
      | _ => None
    }
  }
}

/// Local form check that failed before any request was built.
#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum ValidationError {
  #[error("task text is empty")]
  EmptyTask,

  #[error("no category selected")]
  MissingCategory
}
