//! Core components of the `tickerdesk-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The shared [`DeskClient`] and its builder.
//! - The primary [`DeskError`] type.
//! - Internal networking and fixture-recording helpers.

/// The main client (`DeskClient`), builder, and cache configuration.
pub mod client;
/// The primary error type (`DeskError`) for the crate.
pub mod error;

#[cfg(feature = "dataframe")]
pub mod dataframe;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::DeskClient`
pub use client::{CacheMode, DeskClient, DeskClientBuilder};
pub use error::DeskError;
