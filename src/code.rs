//! Canonical operation status codes.
//!
//! Sometimes multiple codes may apply. Services should return the most
//! specific one: prefer [`Code::OutOfRange`] over [`Code::FailedPrecondition`]
//! when both apply, and likewise prefer [`Code::NotFound`] or
//! [`Code::AlreadyExists`] over [`Code::FailedPrecondition`].
//!
//! Values follow the canonical RPC numbering. They are unique and contiguous
//! over `0..Code::COUNT`, so `Code::ALL[v]` is always the code whose value is
//! `v`.

use std::fmt;

use crate::registry;
use crate::status::Status;
use crate::wire::WireStatus;

/// The status code of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum Code {
    /// Not an error; returned on success.
    ///
    /// Wire mapping: 200 OK
    Ok = 0,

    /// The operation was cancelled, typically by the caller.
    ///
    /// Wire mapping: 499 Client Closed Request
    Cancelled = 1,

    /// Unknown error. Returned when a status received from another address
    /// space belongs to an error space unknown here, or when an API does not
    /// return enough error information.
    ///
    /// Wire mapping: 500 Internal Server Error
    Unknown = 2,

    /// The client specified an invalid argument, problematic regardless of
    /// the state of the system (e.g. a malformed file name).
    ///
    /// Wire mapping: 400 Bad Request
    InvalidArgument = 3,

    /// The deadline expired before the operation could complete. May be
    /// returned even if a state-changing operation completed.
    ///
    /// Wire mapping: 504 Gateway Timeout
    DeadlineExceeded = 4,

    /// Some requested entity (e.g. file or directory) was not found.
    ///
    /// Wire mapping: 404 Not Found
    NotFound = 5,

    /// The entity a client attempted to create already exists.
    ///
    /// Wire mapping: 409 Conflict
    AlreadyExists = 6,

    /// The caller does not have permission to execute the operation. Not for
    /// exhausted resources ([`Code::ResourceExhausted`]) or unidentified
    /// callers ([`Code::Unauthenticated`]).
    ///
    /// Wire mapping: 403 Forbidden
    PermissionDenied = 7,

    /// Some resource has been exhausted, perhaps a per-user quota.
    ///
    /// Wire mapping: 429 Too Many Requests
    ResourceExhausted = 8,

    /// The system is not in a state required for the operation's execution.
    ///
    /// Choosing between this, [`Code::Aborted`] and [`Code::Unavailable`]:
    ///  (a) `Unavailable` if the client can retry just the failing call.
    ///  (b) `Aborted` if the client should retry at a higher level.
    ///  (c) `FailedPrecondition` if the client should not retry until the
    ///      system state has been explicitly fixed.
    ///
    /// Wire mapping: 400 Bad Request
    FailedPrecondition = 9,

    /// The operation was aborted, typically due to a concurrency issue such
    /// as a sequencer check failure or transaction abort.
    ///
    /// Wire mapping: 409 Conflict
    Aborted = 10,

    /// The operation was attempted past the valid range, e.g. reading past
    /// end-of-file. Unlike [`Code::InvalidArgument`] this may be fixed if the
    /// system state changes.
    ///
    /// Wire mapping: 400 Bad Request
    OutOfRange = 11,

    /// The operation is not implemented or not enabled in this service.
    ///
    /// Wire mapping: 501 Not Implemented
    Unimplemented = 12,

    /// Some invariant expected by the underlying system has been broken.
    /// Reserved for serious errors.
    ///
    /// Wire mapping: 500 Internal Server Error
    Internal = 13,

    /// The service is currently unavailable. Most likely transient and
    /// corrected by retrying with a backoff.
    ///
    /// Wire mapping: 503 Service Unavailable
    Unavailable = 14,

    /// Unrecoverable data loss or corruption.
    ///
    /// Wire mapping: 500 Internal Server Error
    DataLoss = 15,

    /// The request does not have valid authentication credentials.
    ///
    /// Wire mapping: 401 Unauthorized
    Unauthenticated = 16,
}

impl Code {
    /// Number of canonical codes.
    pub const COUNT: usize = 17;

    /// Every code, indexed by value.
    pub const ALL: [Code; Code::COUNT] = [
        Code::Ok,
        Code::Cancelled,
        Code::Unknown,
        Code::InvalidArgument,
        Code::DeadlineExceeded,
        Code::NotFound,
        Code::AlreadyExists,
        Code::PermissionDenied,
        Code::ResourceExhausted,
        Code::FailedPrecondition,
        Code::Aborted,
        Code::OutOfRange,
        Code::Unimplemented,
        Code::Internal,
        Code::Unavailable,
        Code::DataLoss,
        Code::Unauthenticated,
    ];

    /// Look up a code by its numeric value.
    ///
    /// Returns `None` for values outside `0..Code::COUNT`.
    pub fn from_value(value: i32) -> Option<Code> {
        usize::try_from(value)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// The numeric value of this code.
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// Stable name of this code.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Cancelled => "OperationCancelled",
            Self::Unknown => "UnknownError",
            Self::InvalidArgument => "InvalidArgument",
            Self::DeadlineExceeded => "DeadlineExceeded",
            Self::NotFound => "NotFound",
            Self::AlreadyExists => "AlreadyExists",
            Self::PermissionDenied => "PermissionDenied",
            Self::ResourceExhausted => "ResourceExhausted",
            Self::FailedPrecondition => "FailedPrecondition",
            Self::Aborted => "OperationAborted",
            Self::OutOfRange => "OutOfRange",
            Self::Unimplemented => "OperationUnimplemented",
            Self::Internal => "InternalError",
            Self::Unavailable => "ServiceUnavailable",
            Self::DataLoss => "DataLoss",
            Self::Unauthenticated => "Unauthenticated",
        }
    }

    /// A fresh copy of the prototype status for this code.
    pub fn to_status(self) -> Status {
        registry::prototype(self).clone()
    }

    /// The wire status this code is represented as.
    pub fn to_wire_status(self) -> WireStatus {
        registry::code_to_wire(self)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.value())
    }
}
