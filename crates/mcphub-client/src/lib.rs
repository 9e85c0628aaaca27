//! HTTP client for the mcphub admin API.
//!
//! Implements [`mcphub_core::AdminApiPort`] over reqwest. Consumers should
//! hold the client as `Arc<dyn AdminApiPort>`; the generic backend is an
//! implementation detail used to swap in a fake for tests.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultAdminClient exposes a generic struct whose backend parameter is
// crate-private; it is meant to be used through AdminApiPort.
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultAdminClient;

// Configuration
pub use config::{AdminClientConfig, DEFAULT_ADMIN_URL};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
