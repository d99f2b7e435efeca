//! Observability infrastructure
//!
//! Process-wide `tracing` subscriber setup. The core crates only emit
//! events; deciding where they go is an infrastructure concern.

pub mod logging;

pub use logging::{build_filter, init_logging};
