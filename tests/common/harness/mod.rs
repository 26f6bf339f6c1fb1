//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments and CLI assertion helpers using
//! `assert_cmd`.

mod command;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::BlobCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
