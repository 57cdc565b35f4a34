//! # FactoryMethod & Creator Traits
//!
//! The contract every concrete creator must satisfy, and the shared operation
//! layered on top of it.
//!
//! # Architecture Note
//! Why two traits?
//! [`FactoryMethod`] is the *variation point*: the one thing that differs
//! between creators is which product they construct. [`Creator`] is the
//! *fixed point*: business logic that must behave identically for every
//! creator. A blanket impl ties the two together, so implementing the hook is
//! all a new creator ever does; the shared logic cannot be overridden, only
//! reused. This is the composition-based answer to the inheritance shape the
//! pattern is usually drawn with.

use tracing::debug;

use super::product::{ConcreteProduct1, ConcreteProduct2, Product};

/// The constructor hook: the single capability a concrete creator provides.
///
/// Note that the signature uses the abstract product type even though a
/// concrete product is what actually comes back. That keeps every consumer of
/// the hook independent of the concrete product variants.
pub trait FactoryMethod {
    fn factory_method(&self) -> Box<dyn Product>;
}

/// The shared creator operation, available on every [`FactoryMethod`].
///
/// Despite its name, a creator's primary responsibility is not creating
/// products. It contains core business logic that relies on product objects
/// returned by the factory method; swapping the hook indirectly changes what
/// that logic works with.
pub trait Creator: FactoryMethod {
    /// Obtains a product through the hook, runs it, and reports the result.
    fn some_operation(&self) -> String;
}

// Implemented once for every FactoryMethod (sized or dyn), so concrete
// creators cannot shadow the shared body.
impl<T: FactoryMethod + ?Sized> Creator for T {
    fn some_operation(&self) -> String {
        debug!("Obtaining a product through the factory method");
        let product = self.factory_method();
        format!(
            "Creator: The same creator's code has just worked with {}",
            product.operation()
        )
    }
}

/// Creator variant bound to [`ConcreteProduct1`].
pub struct ConcreteCreator1;

impl FactoryMethod for ConcreteCreator1 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct1)
    }
}

/// Creator variant bound to [`ConcreteProduct2`].
pub struct ConcreteCreator2;

impl FactoryMethod for ConcreteCreator2 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn some_operation_reports_the_first_product() {
        assert_eq!(
            ConcreteCreator1.some_operation(),
            "Creator: The same creator's code has just worked with {Result of the ConcreteProduct1}",
        );
    }

    #[test]
    fn some_operation_reports_the_second_product() {
        assert_eq!(
            ConcreteCreator2.some_operation(),
            "Creator: The same creator's code has just worked with {Result of the ConcreteProduct2}",
        );
    }

    #[test]
    fn some_operation_is_reachable_through_a_trait_object() {
        let creator: &dyn FactoryMethod = &ConcreteCreator1;
        assert_eq!(creator.some_operation(), ConcreteCreator1.some_operation());
    }

    #[test]
    fn repeated_factory_calls_yield_equal_behavior() {
        let first = ConcreteCreator2.factory_method();
        let second = ConcreteCreator2.factory_method();
        assert_eq!(first.operation(), second.operation());
    }
}
