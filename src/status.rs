//! The operation status value.
//!
//! A [`Status`] is a [`Code`] in conjunction with an optional [`Case`], an
//! optional description and a bag of details. Instances start from the
//! prototype for the appropriate code and are refined from there:
//!
//! ```rust
//! use op_status::{Code, Status};
//!
//! let status = Status::new(Code::NotFound)
//!     .with_description("Could not find 'important_file.txt'")
//!     .with_detail("resource", "important_file.txt");
//!
//! assert_eq!(
//!     status.to_error_condition(),
//!     "NotFound(5): Could not find 'important_file.txt'"
//! );
//! ```
//!
//! Every factory hands out an independently owned value. Details added to one
//! status are never visible through another, even when both were obtained
//! for the same code.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::case::Case;
use crate::code::Code;
use crate::error::OpError;
use crate::logging::{log_debug, log_warn};
use crate::registry;
use crate::retry_advice::RetryAdvice;
use crate::wire::WireStatus;

/// Structured details about a failure, keyed by trimmed non-empty names.
pub type Details = BTreeMap<String, serde_json::Value>;

/// The status of an operation.
///
/// Derivation methods (`with_*`, [`augment_description`](Self::augment_description))
/// borrow the receiver and return a new value carrying a copy of its details.
/// Only [`add_detail`](Self::add_detail) and friends mutate in place.
#[derive(Debug, Clone)]
pub struct Status {
    code: Code,
    case: Option<Arc<dyn Case>>,
    description: String,
    details: Details,
}

impl Status {
    pub(crate) fn prototype(code: Code) -> Self {
        Self {
            code,
            case: None,
            description: String::new(),
            details: Details::new(),
        }
    }

    // =========================================================================
    // Factories
    // =========================================================================

    /// A fresh copy of the prototype for `code`.
    pub fn new(code: Code) -> Self {
        code.to_status()
    }

    /// The prototype for the code whose value is `value`.
    ///
    /// Out-of-range values never fail: they yield [`Code::Unknown`] with a
    /// description naming the offending value.
    pub fn from_code_value(value: i32) -> Self {
        match Code::from_value(value) {
            Some(code) => code.to_status(),
            None => {
                log_debug!(code_value = value, "Unknown op status code requested");
                Code::Unknown
                    .to_status()
                    .with_description_fmt(format_args!("Unknown op status code: {value}"))
            }
        }
    }

    /// The representative status for a raw wire status value.
    ///
    /// Unrecognised values yield the unmodified [`Code::Unknown`] prototype.
    /// A wire status shared by several codes yields one representative code
    /// (see the crate docs).
    pub fn from_wire_value(value: i32) -> Self {
        match WireStatus::from_value(value) {
            Some(wire) => Self::from_wire_status(wire),
            None => Code::Unknown.to_status(),
        }
    }

    /// The representative status for a recognised wire status.
    pub fn from_wire_status(wire: WireStatus) -> Self {
        match registry::wire_to_code(wire) {
            Some(code) => code.to_status(),
            None => {
                log_warn!(
                    wire_status = wire.value(),
                    "No op status mapped to defined wire status, falling back to unknown"
                );
                Code::Unknown.to_status()
            }
        }
    }

    // =========================================================================
    // Derivations
    // =========================================================================

    /// Derive a status with `description`, trimmed of surrounding whitespace.
    pub fn with_description(&self, description: impl AsRef<str>) -> Self {
        let mut derived = self.clone();
        derived.description = description.as_ref().trim().to_owned();
        derived
    }

    /// Derive a status with a formatted description.
    ///
    /// ```rust
    /// use op_status::{Code, Status};
    ///
    /// let status = Status::new(Code::OutOfRange)
    ///     .with_description_fmt(format_args!("offset {} past end", 4096));
    /// assert_eq!(status.description(), "offset 4096 past end");
    /// ```
    pub fn with_description_fmt(&self, args: fmt::Arguments<'_>) -> Self {
        self.with_description(fmt::format(args))
    }

    /// Derive a status whose description is the current one followed by
    /// `additional_detail` on a new line, or just `additional_detail` when
    /// there is no description yet. An empty argument yields a plain copy.
    pub fn augment_description(&self, additional_detail: &str) -> Self {
        if additional_detail.is_empty() {
            return self.clone();
        }
        if self.description.is_empty() {
            self.with_description(additional_detail)
        } else {
            self.with_description(format!("{}\n{}", self.description, additional_detail))
        }
    }

    /// Derive a status with `case`.
    pub fn with_case<C: Case + 'static>(&self, case: C) -> Self {
        let mut derived = self.clone();
        derived.case = Some(Arc::new(case));
        derived
    }

    pub fn with_case_and_description<C: Case + 'static>(
        &self,
        case: C,
        description: impl AsRef<str>,
    ) -> Self {
        let mut derived = self.with_description(description);
        derived.case = Some(Arc::new(case));
        derived
    }

    pub fn with_case_and_description_fmt<C: Case + 'static>(
        &self,
        case: C,
        args: fmt::Arguments<'_>,
    ) -> Self {
        self.with_case_and_description(case, fmt::format(args))
    }

    /// Whether `other` has the same code, case and description.
    ///
    /// Details are not considered.
    pub fn is_equivalent(&self, other: &Status) -> bool {
        self.code == other.code
            && self.case_identifier() == other.case_identifier()
            && self.description == other.description
    }

    // =========================================================================
    // Details
    // =========================================================================

    /// Add a detail about the failure.
    ///
    /// The key is trimmed and empty keys are ignored. Values that cannot be
    /// represented as JSON are skipped.
    pub fn add_detail(&mut self, key: &str, value: impl Serialize) {
        let key = key.trim();
        if key.is_empty() {
            return;
        }
        match serde_json::to_value(value) {
            Ok(value) => {
                self.details.insert(key.to_owned(), value);
            }
            Err(err) => {
                log_debug!(
                    detail_key = key,
                    error = %err,
                    "Skipping op status detail that cannot be serialized"
                );
            }
        }
    }

    /// Add every entry of `details`, following the rules of
    /// [`add_detail`](Self::add_detail).
    pub fn add_details<K, V, I>(&mut self, details: I)
    where
        K: AsRef<str>,
        V: Serialize,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in details {
            self.add_detail(key.as_ref(), value);
        }
    }

    /// Builder form of [`add_detail`](Self::add_detail).
    pub fn with_detail(mut self, key: &str, value: impl Serialize) -> Self {
        self.add_detail(key, value);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn case(&self) -> Option<&dyn Case> {
        self.case.as_deref()
    }

    pub fn case_identifier(&self) -> Option<&str> {
        self.case.as_deref().map(|case| case.identifier())
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn details(&self) -> &Details {
        &self.details
    }

    /// Mutable access to the details bag. Keys inserted this way bypass the
    /// trimming done by [`add_detail`](Self::add_detail).
    pub fn details_mut(&mut self) -> &mut Details {
        &mut self.details
    }

    /// The wire status this status is represented as.
    pub fn wire_status(&self) -> WireStatus {
        self.code.to_wire_status()
    }

    /// Whether this status is OK, i.e. not an error.
    pub fn is_ok(&self) -> bool {
        self.code == Code::Ok
    }

    /// Render the current error condition: `"{code}: {description}"`, or just
    /// `"{code}"` without a description.
    pub fn to_error_condition(&self) -> String {
        if self.description.is_empty() {
            self.code.to_string()
        } else {
            format!("{}: {}", self.code, self.description)
        }
    }

    /// Advice on retrying the operation that produced this status.
    pub fn retry_advice(&self) -> RetryAdvice {
        RetryAdvice::for_code(self.code)
    }

    // =========================================================================
    // Conversion into errors
    // =========================================================================

    pub fn into_error(self) -> OpError {
        OpError::new(self)
    }

    pub fn into_error_with_cause(
        self,
        cause: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> OpError {
        OpError::with_cause(self, cause)
    }
}

impl From<Code> for Status {
    fn from(code: Code) -> Self {
        code.to_status()
    }
}

impl PartialEq for Status {
    fn eq(&self, other: &Self) -> bool {
        self.is_equivalent(other) && self.details == other.details
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_error_condition())
    }
}
