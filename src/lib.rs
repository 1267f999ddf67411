//! # op-status
//!
//! Canonical, transport-agnostic status model for describing the outcome of
//! an operation.
//!
//! ## Key Features
//!
//! - **Canonical Codes**: 17 status codes with stable values and names
//! - **Wire Mapping**: Total mapping from codes to HTTP-style wire statuses and back
//! - **Status Values**: Code plus optional case, description and structured details
//! - **Retry Advice**: Caller-facing retry recommendation derived from the code
//! - **Causal Errors**: Wrap a status with a cause and recover it from any error chain
//!
//! ## Wire round trip
//!
//! Several codes share a wire status, so mapping back from the wire picks one
//! representative code and is lossy by design:
//!
//! | Codes | Wire | Maps back to |
//! |-------|------|--------------|
//! | InvalidArgument, FailedPrecondition, OutOfRange | 400 | InvalidArgument |
//! | AlreadyExists, Aborted | 409 | AlreadyExists |
//! | Internal, Unknown, DataLoss | 500 | Internal |
//!
//! Every other code round-trips to itself.
//!
//! ## Example
//!
//! ```rust
//! use op_status::{status_from_anyhow, Code, RetryAdvice, Status};
//!
//! fn load_cart() -> anyhow::Result<()> {
//!     let status = Status::new(Code::Unavailable).with_description("inventory service down");
//!     Err(anyhow::Error::new(status.into_error()).context("loading cart"))
//! }
//!
//! let err = load_cart().unwrap_err();
//! let status = status_from_anyhow(&err).unwrap();
//! assert_eq!(status.code(), Code::Unavailable);
//! assert_eq!(status.retry_advice(), RetryAdvice::JustRetryFailingCall);
//! assert_eq!(status.wire_status().value(), 503);
//! ```

pub(crate) mod logging;

pub mod case;
pub mod code;
pub mod error;
mod registry;
pub mod retry_advice;
pub mod status;
pub mod wire;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use case::Case;
pub use code::Code;
pub use error::{
    as_op_error, status_from_anyhow, status_from_chain, OpError, OpResult, UndefinedWireStatus,
};
pub use retry_advice::RetryAdvice;
pub use status::{Details, Status};
pub use wire::WireStatus;
