//! Logging infrastructure for the Naela storefront tools.
//!
//! This crate provides:
//! - `LoggingConfig` / `init` - `tracing` subscriber setup (human or JSON)
//! - `SessionId` - correlation id and span for one storefront session
//!
//! Libraries only emit `tracing` events; binaries call [`init`] once.

mod logging;
mod session;

pub use logging::*;
pub use session::*;
