//! Retry guidance derived from a status code.
//!
//! The advice only recommends a policy to the caller; nothing here executes
//! retries.

use std::fmt;

use crate::code::Code;

/// Advice on whether and how to retry an operation that produced a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryAdvice {
    /// For [`Code::Unavailable`]: retry just the failing call with
    /// exponential backoff. The minimum delay should be 1s unless documented
    /// otherwise.
    JustRetryFailingCall,

    /// For [`Code::Aborted`]: retry at a higher level, e.g. restart a
    /// read-modify-write sequence after a failed test-and-set. For
    /// [`Code::ResourceExhausted`]: the client may retry at the higher level
    /// with a delay of its choosing.
    RetryAtHigherLevel,

    /// For [`Code::FailedPrecondition`]: do not retry until the system state
    /// has been explicitly fixed.
    NotRetryUntilStateFixed,

    /// Retry may not be applicable. First ensure the request is idempotent.
    NoAdvice,
}

impl RetryAdvice {
    /// The advice for `code`.
    pub const fn for_code(code: Code) -> Self {
        match code {
            Code::Unavailable => Self::JustRetryFailingCall,
            Code::FailedPrecondition => Self::NotRetryUntilStateFixed,
            Code::Aborted | Code::ResourceExhausted => Self::RetryAtHigherLevel,
            _ => Self::NoAdvice,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::JustRetryFailingCall => "just_retry_failing_call",
            Self::RetryAtHigherLevel => "retry_at_higher_level",
            Self::NotRetryUntilStateFixed => "not_retry_until_state_fixed",
            Self::NoAdvice => "no_advice",
        }
    }
}

impl fmt::Display for RetryAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
