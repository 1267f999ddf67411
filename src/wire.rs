//! Externally visible wire statuses (HTTP-style).
//!
//! Only the statuses listed here are recognised; [`WireStatus::is_defined`]
//! is the sole admission test for a raw integer.

use std::fmt;

use crate::error::UndefinedWireStatus;

/// A recognised wire status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum WireStatus {
    Ok = 200,
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    Conflict = 409,
    TooManyRequests = 429,
    ClientClosedRequest = 499,
    InternalServerError = 500,
    NotImplemented = 501,
    ServiceUnavailable = 503,
    Timeout = 504,
}

impl WireStatus {
    /// Every recognised wire status in ascending order.
    pub const ALL: [WireStatus; 12] = [
        WireStatus::Ok,
        WireStatus::BadRequest,
        WireStatus::Unauthorized,
        WireStatus::Forbidden,
        WireStatus::NotFound,
        WireStatus::Conflict,
        WireStatus::TooManyRequests,
        WireStatus::ClientClosedRequest,
        WireStatus::InternalServerError,
        WireStatus::NotImplemented,
        WireStatus::ServiceUnavailable,
        WireStatus::Timeout,
    ];

    /// Whether `value` is a recognised wire status.
    pub fn is_defined(value: i32) -> bool {
        Self::from_value(value).is_some()
    }

    /// Look up a wire status by its numeric value.
    pub fn from_value(value: i32) -> Option<WireStatus> {
        let status = match value {
            200 => Self::Ok,
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            429 => Self::TooManyRequests,
            499 => Self::ClientClosedRequest,
            500 => Self::InternalServerError,
            501 => Self::NotImplemented,
            503 => Self::ServiceUnavailable,
            504 => Self::Timeout,
            _ => return None,
        };
        Some(status)
    }

    /// The numeric value of this wire status.
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// Stable name of this wire status.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::BadRequest => "BadRequest",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "NotFound",
            Self::Conflict => "Conflict",
            Self::TooManyRequests => "TooManyRequests",
            Self::ClientClosedRequest => "ClientClosedRequest",
            Self::InternalServerError => "InternalServerError",
            Self::NotImplemented => "NotImplemented",
            Self::ServiceUnavailable => "ServiceUnavailable",
            Self::Timeout => "Timeout",
        }
    }
}

impl TryFrom<i32> for WireStatus {
    type Error = UndefinedWireStatus;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(UndefinedWireStatus(value))
    }
}

impl fmt::Display for WireStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.value())
    }
}
