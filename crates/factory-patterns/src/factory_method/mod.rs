//! # Factory Method
//!
//! A single-product constructor hook plus shared business logic built on top
//! of it.
//!
//! ## Key Types
//!
//! - [`Product`]: the capability trait all products implement.
//! - [`FactoryMethod`]: the one hook a concrete creator must provide.
//! - [`Creator`]: the shared operation, implemented exactly once for every
//!   `FactoryMethod`.
//! - [`client_code`]: the client procedure, oblivious to the concrete creator.
//!
//! ## Architecture Note
//!
//! The classical rendition puts `someOperation` on an abstract base class and
//! lets subclasses override the virtual `factoryMethod`. We invert that into
//! composition: concrete creators implement **only** the construction hook,
//! and the shared operation is attached through a blanket impl they cannot
//! override. Same observable behavior, no fragile base class.

pub mod client;
pub mod creator;
pub mod product;

pub use client::client_code;
pub use creator::{ConcreteCreator1, ConcreteCreator2, Creator, FactoryMethod};
pub use product::{ConcreteProduct1, ConcreteProduct2, Product};
