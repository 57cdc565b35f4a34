//! # Demo Errors
//!
//! This module defines the common error type used by the client procedures
//! and scenario runners. By centralizing the definition, both pattern modules
//! and the sample binary share one failure vocabulary.
//!
//! The pattern operations themselves are total: every product and factory
//! method returns a `String` and cannot fail. The only fallible step is
//! writing the transcript to the injected sink, so the type is deliberately
//! small.

/// Errors that can occur while running a pattern demonstration.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("failed to write demo output: {0}")]
    Io(#[from] std::io::Error),
}
