//! Error types carrying an operation status.
//!
//! [`OpError`] pairs a [`Status`] with an optional underlying cause. Higher
//! layers recover the status with [`status_from_chain`] (or
//! [`status_from_anyhow`]) no matter how many layers of wrapping occurred.
//!
//! # Example
//!
//! ```rust
//! use op_status::{status_from_chain, Code, OpError};
//! use std::error::Error;
//!
//! let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
//! let err = Code::NotFound
//!     .to_status()
//!     .with_description("config.toml is missing")
//!     .into_error_with_cause(io);
//!
//! let status = status_from_chain(Some(&err as &(dyn Error + 'static))).unwrap();
//! assert_eq!(status.code(), Code::NotFound);
//! ```

use std::error::Error as StdError;

use thiserror::Error;

use crate::code::Code;
use crate::logging::{log_debug, log_error};
use crate::status::Status;

/// Convenient result type for operations failing with an [`OpError`].
pub type OpResult<T> = std::result::Result<T, OpError>;

/// An error describing a failed operation by its [`Status`].
///
/// Displays as the status' [error condition](Status::to_error_condition) and
/// exposes the cause, if any, as its [`source`](StdError::source).
#[derive(Error, Debug)]
#[error("{status}")]
pub struct OpError {
    status: Status,
    #[source]
    cause: Option<Box<dyn StdError + Send + Sync>>,
}

impl OpError {
    /// Create an error with `status` and no cause.
    ///
    /// Server-side codes (unknown, internal, data loss) are logged at ERROR
    /// level, everything else at DEBUG.
    pub fn new(status: Status) -> Self {
        log_created(&status, false);
        Self {
            status,
            cause: None,
        }
    }

    /// Create an error with `status` wrapping `cause`.
    pub fn with_cause(status: Status, cause: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        log_created(&status, true);
        Self {
            status,
            cause: Some(cause.into()),
        }
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    pub fn into_status(self) -> Status {
        self.status
    }
}

impl From<Status> for OpError {
    fn from(status: Status) -> Self {
        Self::new(status)
    }
}

fn log_created(status: &Status, has_cause: bool) {
    match status.code() {
        Code::Unknown | Code::Internal | Code::DataLoss => log_error!(
            code = %status.code(),
            description = status.description(),
            has_cause = has_cause,
            "Operation failed with server-side status"
        ),
        code => log_debug!(
            code = %code,
            description = status.description(),
            has_cause = has_cause,
            "Operation failed"
        ),
    }
}

/// A raw value that is not a recognised [`WireStatus`](crate::WireStatus).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("wire status for code {0} is not defined")]
pub struct UndefinedWireStatus(pub i32);

// ============================================================================
// Chain walking
// ============================================================================

/// Find the status of the first [`OpError`] in the causal chain of `err`.
///
/// Walks `err`, then its source, then that source's source, until an
/// `OpError` is found or the chain ends. Returns `None` for `None` input.
pub fn status_from_chain<'a>(err: Option<&'a (dyn StdError + 'static)>) -> Option<&'a Status> {
    as_op_error(err?).map(OpError::status)
}

/// Find the first [`OpError`] anywhere in the causal chain of `err`,
/// including `err` itself.
pub fn as_op_error<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a OpError> {
    std::iter::successors(Some(err), |&current| current.source())
        .find_map(|current| current.downcast_ref::<OpError>())
}

/// Find the status of the first [`OpError`] in the chain of an
/// [`anyhow::Error`], looking through any context layers.
pub fn status_from_anyhow(err: &anyhow::Error) -> Option<&Status> {
    err.chain()
        .find_map(|current| current.downcast_ref::<OpError>())
        .map(OpError::status)
}
