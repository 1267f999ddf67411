// Unit Tests for the Causal Error and Chain Walking
//
// UNIT UNDER TEST: OpError, status_from_chain, as_op_error, status_from_anyhow
//
// BUSINESS RESPONSIBILITY:
//   - Pairs a status with an optional underlying cause
//   - Exposes the cause through the standard source() chain
//   - Recovers the first status found anywhere in a chain of wrapped errors
//
// TEST COVERAGE:
//   - Construction, accessors and display
//   - Absent input and chains without an OpError
//   - Innermost, outermost and first-of-many OpError discovery
//   - anyhow context layers

use std::error::Error;
use std::fmt;
use std::io;

use crate::code::Code;
use crate::error::{as_op_error, status_from_anyhow, status_from_chain, OpError, OpResult};
use crate::status::Status;

/// Plain wrapper error used to build multi-level chains.
#[derive(Debug)]
struct Layer {
    name: &'static str,
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl Layer {
    fn wrapping(name: &'static str, source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self {
            name,
            source: Some(source.into()),
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Error for Layer {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|err| err.as_ref() as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod op_error_tests {
    use super::*;

    #[test]
    fn test_new_has_status_and_no_cause() {
        // Act
        let err = OpError::new(Status::new(Code::AlreadyExists).with_description("user exists"));

        // Assert
        assert_eq!(err.status().code(), Code::AlreadyExists);
        assert!(err.cause().is_none());
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "AlreadyExists(6): user exists");
    }

    #[test]
    fn test_with_cause_exposes_cause_as_source() {
        // Arrange
        let io = io::Error::new(io::ErrorKind::PermissionDenied, "read-only filesystem");

        // Act
        let err = Status::new(Code::PermissionDenied).into_error_with_cause(io);

        // Assert
        assert_eq!(err.cause().map(|c| c.to_string()).as_deref(), Some("read-only filesystem"));
        assert_eq!(
            err.source().map(|c| c.to_string()).as_deref(),
            Some("read-only filesystem")
        );
    }

    #[test]
    fn test_into_status_and_from_status() {
        let status = Status::new(Code::Unimplemented).with_detail("method", "Export");
        let err: OpError = status.clone().into();
        assert_eq!(err.into_status(), status);
    }

    #[test]
    fn test_op_result_propagates_with_question_mark() {
        fn lookup(found: bool) -> OpResult<u32> {
            if !found {
                return Err(Status::new(Code::NotFound).into_error());
            }
            Ok(7)
        }

        fn caller() -> OpResult<u32> {
            let value = lookup(false)?;
            Ok(value + 1)
        }

        let err = caller().unwrap_err();
        assert_eq!(err.status().code(), Code::NotFound);
    }
}

#[cfg(test)]
mod chain_walk_tests {
    use super::*;

    #[test]
    fn test_absent_error_yields_nothing() {
        assert!(status_from_chain(None).is_none());
    }

    #[test]
    fn test_innermost_op_error_of_three_levels_is_found() {
        // Arrange
        let inner = Status::new(Code::DeadlineExceeded)
            .with_description("db query")
            .into_error();
        let middle = Layer::wrapping("repository", inner);
        let outer = Layer::wrapping("service", middle);

        // Act
        let status = status_from_chain(Some(&outer as &(dyn Error + 'static)));

        // Assert
        let status = status.expect("innermost status should be found");
        assert_eq!(status.code(), Code::DeadlineExceeded);
        assert_eq!(status.description(), "db query");
    }

    #[test]
    fn test_chain_without_op_error_yields_nothing() {
        // Arrange
        let io = io::Error::new(io::ErrorKind::Other, "disk");
        let outer = Layer::wrapping("service", Layer::wrapping("repository", io));

        // Act & Assert
        assert!(status_from_chain(Some(&outer as &(dyn Error + 'static))).is_none());
        assert!(as_op_error(&outer).is_none());
    }

    #[test]
    fn test_outermost_op_error_wins() {
        // Arrange
        let inner = Status::new(Code::Internal).into_error();
        let outer = Status::new(Code::Unavailable).into_error_with_cause(inner);

        // Act
        let found = as_op_error(&outer).expect("op error");

        // Assert
        assert_eq!(found.status().code(), Code::Unavailable);
    }

    #[test]
    fn test_op_error_below_a_plain_layer_is_found_by_as_op_error() {
        let layered = Layer::wrapping(
            "handler",
            Status::new(Code::Aborted).into_error_with_cause("version mismatch"),
        );

        let found = as_op_error(&layered).expect("op error");
        assert_eq!(found.status().code(), Code::Aborted);
        assert_eq!(
            found.cause().map(|c| c.to_string()).as_deref(),
            Some("version mismatch")
        );
    }
}

#[cfg(test)]
mod anyhow_chain_tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_status_found_through_context_layers() {
        // Arrange
        let result: anyhow::Result<()> = Err(Status::new(Code::NotFound)
            .with_description("order 42")
            .into_error())
        .context("loading order")
        .context("rendering invoice");

        // Act
        let err = result.unwrap_err();
        let status = status_from_anyhow(&err);

        // Assert
        assert_eq!(status.map(Status::code), Some(Code::NotFound));
    }

    #[test]
    fn test_anyhow_without_op_error_yields_nothing() {
        let err = anyhow::anyhow!("plain failure").context("outer");
        assert!(status_from_anyhow(&err).is_none());
    }

    #[test]
    fn test_anyhow_cause_keeps_its_chain() {
        // Arrange
        let cause = anyhow::Error::new(Status::new(Code::DataLoss).into_error())
            .context("reading segment");

        // Act
        let outer = Status::new(Code::Unavailable).into_error_with_cause(cause);

        // Assert
        let inner = outer.source().and_then(|cause| status_from_chain(Some(cause)));
        assert_eq!(inner.map(Status::code), Some(Code::DataLoss));
    }
}
