//! Response formatting helpers
//!
//! Pure functions shared by the tool handlers: date canonicalization,
//! HTML preview decoding, and diff rendering. No I/O.

pub mod date;
pub mod diff;
pub mod html;

/// Placeholder for an absent author name
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// Placeholder for other absent leaf fields
pub const UNKNOWN: &str = "unknown";
