//! # Abstract Factory
//!
//! Families of related products created through a single factory interface.
//!
//! ## Key Types
//!
//! - [`ProductA`] / [`ProductB`]: the capability traits all products implement.
//! - [`AbstractFactory`]: the trait that builds one matched pair of products.
//! - [`ConcreteFactory1`] / [`ConcreteFactory2`]: the two families.
//! - [`client_code`]: the client procedure, written against the traits only.
//!
//! ## Architecture Note
//!
//! The whole point of the pattern is the **family invariant**: a factory
//! variant always pairs its ProductA and ProductB variants consistently
//! (1-with-1, 2-with-2). There is no runtime selection logic anywhere;
//! selection happens entirely by which concrete factory the caller
//! constructed. Once a factory value exists, the compiler guarantees the
//! client can only ever see a compatible pair.

pub mod client;
pub mod factory;
pub mod product;

pub use client::client_code;
pub use factory::{AbstractFactory, ConcreteFactory1, ConcreteFactory2};
pub use product::{
    ConcreteProductA1, ConcreteProductA2, ConcreteProductB1, ConcreteProductB2, ProductA, ProductB,
};
