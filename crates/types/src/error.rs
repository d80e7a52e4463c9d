use thiserror::Error;

/// A top-level field was requested that the response does not contain
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Field not found: {name}")]
pub struct FieldNotFound {
    /// The normalized field name that was requested
    pub name: String,
}

/// The response body was JSON but its root was not an object
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unexpected response body (HTTP {status}): expected an object, got {kind}")]
pub struct UnexpectedBody {
    pub status: u16,
    pub kind: &'static str,
}
