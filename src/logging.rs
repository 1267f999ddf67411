//! Logging facade for op-status
//!
//! Re-exports the tracing macros the crate emits with log_* naming. The crate
//! never installs a subscriber; callers decide where diagnostics go.

pub(crate) use tracing::{debug as log_debug, error as log_error, warn as log_warn};
