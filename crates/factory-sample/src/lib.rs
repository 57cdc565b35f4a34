//! # Factory Patterns Sample
//!
//! The runnable demonstrations for the `factory-patterns` crate.
//!
//! ## 📚 Quick Start
//!
//! The application entry point is in `main`, which:
//! 1. Sets up tracing.
//! 2. Runs the Abstract Factory scenario with both factory variants.
//! 3. Runs the Factory Method scenario with both creator variants.
//!
//! The scripts live in [`scenario`] as explicit entry points rather than
//! running at import time, so tests can run them against an in-memory sink
//! and assert the transcript byte for byte.

pub mod scenario;
