// Test modules for op-status crate
//
// Each source module has a corresponding test file that focuses on the
// behaviour callers rely on.

pub mod error;
