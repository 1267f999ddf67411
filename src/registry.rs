//! Process-wide status tables.
//!
//! Built once on first use and read-only afterwards, so concurrent readers
//! need no synchronisation beyond the one-time initialisation.
//!
//! The code→wire mapping is total. The wire→code mapping picks one
//! representative code per wire status.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::code::Code;
use crate::status::Status;
use crate::wire::WireStatus;

/// Prototype statuses indexed by code value.
static PROTOTYPES: Lazy<Vec<Status>> =
    Lazy::new(|| Code::ALL.iter().map(|&code| Status::prototype(code)).collect());

static WIRE_TO_CODE: Lazy<HashMap<WireStatus, Code>> = Lazy::new(|| {
    HashMap::from([
        (WireStatus::Ok, Code::Ok),
        (WireStatus::BadRequest, Code::InvalidArgument),
        (WireStatus::Unauthorized, Code::Unauthenticated),
        (WireStatus::Forbidden, Code::PermissionDenied),
        (WireStatus::NotFound, Code::NotFound),
        (WireStatus::Conflict, Code::AlreadyExists),
        (WireStatus::TooManyRequests, Code::ResourceExhausted),
        (WireStatus::ClientClosedRequest, Code::Cancelled),
        (WireStatus::InternalServerError, Code::Internal),
        (WireStatus::NotImplemented, Code::Unimplemented),
        (WireStatus::ServiceUnavailable, Code::Unavailable),
        (WireStatus::Timeout, Code::DeadlineExceeded),
    ])
});

/// The shared prototype for `code`. Callers must clone before handing it out.
pub(crate) fn prototype(code: Code) -> &'static Status {
    // `Code::ALL` is indexed by value, so every code has a slot.
    &PROTOTYPES[code as usize]
}

pub(crate) fn code_to_wire(code: Code) -> WireStatus {
    match code {
        Code::Ok => WireStatus::Ok,
        Code::InvalidArgument | Code::FailedPrecondition | Code::OutOfRange => {
            WireStatus::BadRequest
        }
        Code::Unauthenticated => WireStatus::Unauthorized,
        Code::PermissionDenied => WireStatus::Forbidden,
        Code::NotFound => WireStatus::NotFound,
        Code::Aborted | Code::AlreadyExists => WireStatus::Conflict,
        Code::ResourceExhausted => WireStatus::TooManyRequests,
        Code::Cancelled => WireStatus::ClientClosedRequest,
        Code::DataLoss | Code::Unknown | Code::Internal => WireStatus::InternalServerError,
        Code::Unimplemented => WireStatus::NotImplemented,
        Code::Unavailable => WireStatus::ServiceUnavailable,
        Code::DeadlineExceeded => WireStatus::Timeout,
    }
}

/// The representative code for a recognised wire status, if one is registered.
pub(crate) fn wire_to_code(wire: WireStatus) -> Option<Code> {
    WIRE_TO_CODE.get(&wire).copied()
}
