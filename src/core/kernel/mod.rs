//! Kernel - transport layer for the exchange client
//!
//! Exchange-agnostic REST transport. The kernel contains only transport
//! logic and generic interfaces; everything Kalshi-specific (header names,
//! canonical message layout, endpoint paths) lives in the exchange module.
//!
//! # Architecture
//!
//! ## Transport
//! - `RestClient`: unified HTTP client interface
//! - `ReqwestRest`: production implementation, classifies every outcome
//!   into a typed `ExchangeError` variant
//!
//! ## Authentication
//! - `Signer`: pluggable authentication interface, invoked once per request
//! - `Clock`: millisecond timestamp source, injectable for deterministic
//!   tests (`FixedClock`)
//!
//! # Key Principles
//!
//! 1. **Transport Only**: the kernel contains NO exchange-specific logic
//! 2. **Pluggable**: signer and clock are trait-based and injected at
//!    construction
//! 3. **Type Safe**: strong typing throughout with proper error handling
//! 4. **Observable**: request paths are traced with structured fields

pub mod clock;
pub mod rest;
pub mod signer;

// Re-export key types for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use rest::{ReqwestRest, RequestMethod, RestClient, RestClientBuilder, RestClientConfig};
pub use signer::{SignatureResult, Signer};
