//! Shared utilities for integration tests.

pub mod harness;

/// A fully populated note as the encoder writes it.
#[allow(dead_code)]
pub const FULL_NOTE: &str =
    "Check security issues\n\nCritical:\nBlocking release\n\nRelated:\nABC123, DEF456";

/// Hand-written text predating the convention, with loose spacing.
#[allow(dead_code)]
pub const LEGACY_NOTE: &str = "Call Sam back\nRe: invoice 10:30\n\nRelated:\n ABC ,DEF,,\nleft over line\n";
