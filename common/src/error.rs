//! Error taxonomy shared by the dispatcher and the component.
//!
//! Nothing here is fatal: every error leaves the draft, the mode and both
//! collections exactly as they were before the failed operation.

use std::fmt;

use thiserror::Error;

use crate::form::DraftField;

/// Failure of a single remote call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, bad URL).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The addressed record does not exist (HTTP 404).
    #[error("not found: {url}")]
    NotFound { url: String },

    /// Any other non-2xx response.
    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not have the expected JSON shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The request was aborted because its component went away.
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    /// Cancelled requests belong to a component that no longer exists; they are
    /// neither logged nor shown.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }

    /// Maps a non-2xx response onto the taxonomy.
    pub fn from_status(status: u16, url: &str, body: String) -> Self {
        if status == 404 {
            ApiError::NotFound {
                url: url.to_string(),
            }
        } else {
            ApiError::Status { status, body }
        }
    }
}

/// Why a draft could not be turned into a request payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{0} is required")]
    Missing(DraftField),

    #[error("{field} has an invalid value: {value:?}")]
    Invalid { field: DraftField, value: String },
}

/// The remote operations the component performs.
///
/// `Display` yields the fixed string logged when the operation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchProducts,
    FetchSuppliers,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::FetchProducts => "Error fetching products:",
            Operation::FetchSuppliers => "Error fetching suppliers:",
            Operation::Create => "Error creating product:",
            Operation::Update => "Error updating product:",
            Operation::Delete => "Error deleting product:",
        })
    }
}

/// An `ApiError` tagged with the operation that produced it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{operation} {source}")]
pub struct OperationError {
    pub operation: Operation,
    #[source]
    pub source: ApiError,
}

impl OperationError {
    pub fn new(operation: Operation, source: ApiError) -> Self {
        Self { operation, source }
    }

    pub fn is_cancelled(&self) -> bool {
        self.source.is_cancelled()
    }
}
