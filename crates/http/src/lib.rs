//! Morpion HTTP client
//!
//! Typed client for the remote morpion API, usable from both wasm32 and
//! native targets. The frontend crate drives it from the browser; the
//! native build exists for integration tests.

pub mod client;
pub mod types;

pub use client::error::{extract_errors, ClientError, DEFAULT_ERROR_MESSAGE};
pub use client::{AuthenticatedMorpionClient, PublicMorpionClient, TypedClientBuilder};
