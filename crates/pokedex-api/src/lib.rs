#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
// DefaultPokeApiClient is meant to be used through the PokeApiPort trait,
// not its internal generic structure
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
pub use client::DefaultPokeApiClient;

// Configuration
pub use config::{DEFAULT_BASE_URL, PokeApiClientConfig};
