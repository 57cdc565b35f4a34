//! # Recording Doubles & Testing Guide
//!
//! The client procedures promise to call each creation method **exactly
//! once** per run. That contract is invisible in the transcript (a client
//! that cached a product would print the same lines), so the tests need a
//! seam to observe it. The wrappers here implement the pattern capabilities
//! by delegating to an inner implementation while counting every call.
//!
//! ## When to use Recordings vs Plain Factories
//!
//! | Feature | Recording wrapper | Plain factory |
//! |---------|-------------------|---------------|
//! | **Transcript checks** | Works (delegates faithfully) | Works |
//! | **Call-count checks** | Yes | No |
//! | **Substitutability checks** | Yes (it *is* an indirection) | — |
//!
//! Because the wrapper satisfies the same trait as the wrapped value, passing
//! one to a client procedure also doubles as a substitutability test: the
//! output must not change just because the factory arrived through an extra
//! layer.
//!
//! # Example
//!
//! ```rust
//! use factory_patterns::abstract_factory::{client_code, ConcreteFactory1};
//! use factory_patterns::mock::RecordingFactory;
//!
//! let factory = RecordingFactory::new(ConcreteFactory1);
//! let mut out = Vec::new();
//! client_code(&factory, &mut out).unwrap();
//! assert_eq!(factory.product_a_calls(), 1);
//! assert_eq!(factory.product_b_calls(), 1);
//! ```

use std::cell::Cell;

use crate::abstract_factory::{AbstractFactory, ProductA, ProductB};
use crate::factory_method::{FactoryMethod, Product};

/// Wraps any [`AbstractFactory`] and counts its creation calls.
pub struct RecordingFactory<F> {
    inner: F,
    product_a_calls: Cell<u32>,
    product_b_calls: Cell<u32>,
}

impl<F: AbstractFactory> RecordingFactory<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            product_a_calls: Cell::new(0),
            product_b_calls: Cell::new(0),
        }
    }

    /// How many times `create_product_a` has been invoked.
    pub fn product_a_calls(&self) -> u32 {
        self.product_a_calls.get()
    }

    /// How many times `create_product_b` has been invoked.
    pub fn product_b_calls(&self) -> u32 {
        self.product_b_calls.get()
    }
}

impl<F: AbstractFactory> AbstractFactory for RecordingFactory<F> {
    fn create_product_a(&self) -> Box<dyn ProductA> {
        self.product_a_calls.set(self.product_a_calls.get() + 1);
        self.inner.create_product_a()
    }

    fn create_product_b(&self) -> Box<dyn ProductB> {
        self.product_b_calls.set(self.product_b_calls.get() + 1);
        self.inner.create_product_b()
    }
}

/// Wraps any [`FactoryMethod`] and counts invocations of the hook.
pub struct RecordingCreator<C> {
    inner: C,
    factory_calls: Cell<u32>,
}

impl<C: FactoryMethod> RecordingCreator<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            factory_calls: Cell::new(0),
        }
    }

    /// How many times `factory_method` has been invoked.
    pub fn factory_calls(&self) -> u32 {
        self.factory_calls.get()
    }
}

impl<C: FactoryMethod> FactoryMethod for RecordingCreator<C> {
    fn factory_method(&self) -> Box<dyn Product> {
        self.factory_calls.set(self.factory_calls.get() + 1);
        self.inner.factory_method()
    }
}
