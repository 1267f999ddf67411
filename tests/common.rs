//! Test helper utilities for op-status integration tests
//!
//! Builds layered error chains the way application code typically wraps
//! failures from lower layers.

// Allow dead code in test utilities - helpers are used across different test files
#![allow(dead_code)]

use std::error::Error;
use std::fmt;

/// A layer of application error wrapping a lower-level cause.
#[derive(Debug)]
pub struct LayerError {
    pub layer: &'static str,
    pub cause: Option<Box<dyn Error + Send + Sync>>,
}

impl fmt::Display for LayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed", self.layer)
    }
}

impl Error for LayerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause.as_ref() as &(dyn Error + 'static))
    }
}

/// Wrap `root` in one `LayerError` per name, innermost first.
pub fn wrap_in_layers(
    root: impl Into<Box<dyn Error + Send + Sync>>,
    layers: &[&'static str],
) -> Box<dyn Error + Send + Sync> {
    layers.iter().fold(root.into(), |cause, &layer| {
        Box::new(LayerError {
            layer,
            cause: Some(cause),
        })
    })
}

/// Number of errors in the chain starting at `err`, including `err`.
pub fn chain_len(err: &(dyn Error + 'static)) -> usize {
    std::iter::successors(Some(err), |&current| current.source()).count()
}
