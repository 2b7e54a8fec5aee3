//! Core components of the `esg-dashboard` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`EsgClient`] and its builder.
//! - The primary [`EsgError`] type and the status-to-message mapping.
//! - Boundary helpers that default missing payload fields.

/// The main client (`EsgClient`), builder, and retry configuration.
pub mod client;
/// The primary error type (`EsgError`) for the crate.
pub mod error;
pub(crate) mod net;
/// Lenient deserializers and null-coalescing helpers for backend payloads.
pub mod wire;

// convenient re-exports so most code can just `use crate::core::EsgClient`
pub use client::{Backoff, EsgClient, EsgClientBuilder, RetryConfig};
pub use error::{EsgError, status_message};
