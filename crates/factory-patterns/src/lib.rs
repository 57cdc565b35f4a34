//! # Factory Patterns Recipe
//!
//! > **A Recipe for Object Creation Patterns in Rust.**
//!
//! This crate demonstrates two classic creational design patterns, **Abstract
//! Factory** and **Factory Method**, rendered with traits and trait objects
//! instead of class inheritance. Each pattern ships with the three layers the
//! pattern literature describes:
//!
//! - **Products**: stateless types implementing a small capability trait.
//! - **Factories / Creators**: types whose sole job is constructing products
//!   of a consistent variant.
//! - **Client procedures**: functions written against the abstractions only,
//!   never against concrete types.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why traits instead of base classes?
//!
//! The canonical renditions of these patterns lean on class inheritance: an
//! abstract `Creator` base class with a shared `someOperation` and a virtual
//! `factoryMethod` that subclasses override. Rust has no inheritance, and that
//! turns out to be a feature here:
//!
//! - The **capability sets** (what a product can do, what a factory can build)
//!   become plain traits. Concrete variants are unit structs implementing them.
//! - The **shared creator logic** becomes a blanket extension trait
//!   ([`Creator`](factory_method::Creator)), so no concrete variant can
//!   accidentally replace it. This sidesteps the fragile-base-class problem
//!   entirely while keeping the external behavior identical.
//!
//! ### Why an output sink?
//!
//! Pattern demos usually print straight to stdout. Here every client
//! procedure writes to an injected `io::Write` sink instead, so importing the
//! crate has no side effects and tests can assert the transcript byte for
//! byte. The runnable script lives in the companion `factory-sample` crate.
//!
//! ## 🗺️ Module Tour
//!
//! - [`abstract_factory`]: families of paired products (A1+B1, A2+B2) built
//!   through [`AbstractFactory`](abstract_factory::AbstractFactory).
//! - [`factory_method`]: a single-product constructor hook
//!   ([`FactoryMethod`](factory_method::FactoryMethod)) plus the shared
//!   [`Creator`](factory_method::Creator) operation built on top of it.
//! - [`mock`]: recording wrappers for asserting the client call contract in
//!   tests.
//! - [`error`] / [`trace`]: the ambient plumbing: the crate error type and
//!   the `tracing` subscriber setup.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use factory_patterns::abstract_factory::{client_code, ConcreteFactory1};
//!
//! let mut out = Vec::new();
//! client_code(&ConcreteFactory1, &mut out).unwrap();
//! let transcript = String::from_utf8(out).unwrap();
//! assert!(transcript.starts_with("The result of the product b1."));
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! # Run with info logs
//! RUST_LOG=info cargo run -p factory-sample
//! ```

pub mod abstract_factory;
pub mod error;
pub mod factory_method;
pub mod mock;
pub mod trace;

// Re-export core types for convenience
pub use error::DemoError;
pub use trace::setup_tracing;
