//! Sourcegraph GraphQL transport module
//!
//! This module provides the async client for issuing GraphQL queries
//! against a Sourcegraph instance, the error taxonomy for everything that
//! can go wrong doing so, and the query documents themselves.

pub mod client;
pub mod error;
pub mod queries;

pub use client::SgClient;
pub use error::{NotFound, SgError, SgResult};
