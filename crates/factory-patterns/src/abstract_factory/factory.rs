//! # The Abstract Factory Trait
//!
//! The factory interface declares one creation method per distinct product of
//! a family. Concrete factories are statically bound to exactly one family:
//! [`ConcreteFactory1`] only ever builds A1+B1, [`ConcreteFactory2`] only
//! ever builds A2+B2.
//!
//! # Architecture Note
//! The creation methods return boxed trait objects. Each concrete factory
//! returns a concrete product, but its signature stays abstract so callers
//! can hold any factory behind `&dyn AbstractFactory` and remain oblivious to
//! which family they are working with.

use super::product::{
    ConcreteProductA1, ConcreteProductA2, ConcreteProductB1, ConcreteProductB2, ProductA, ProductB,
};

/// The capability of building one matched pair of products.
///
/// Invariant: for a given implementation, the products returned by
/// [`create_product_a`](AbstractFactory::create_product_a) and
/// [`create_product_b`](AbstractFactory::create_product_b) always belong to
/// the same family. Every call constructs a fresh instance; factories hold no
/// state and never cache products.
pub trait AbstractFactory {
    fn create_product_a(&self) -> Box<dyn ProductA>;
    fn create_product_b(&self) -> Box<dyn ProductB>;
}

/// Factory for the first family: A1 paired with B1.
pub struct ConcreteFactory1;

impl AbstractFactory for ConcreteFactory1 {
    fn create_product_a(&self) -> Box<dyn ProductA> {
        Box::new(ConcreteProductA1)
    }

    fn create_product_b(&self) -> Box<dyn ProductB> {
        Box::new(ConcreteProductB1)
    }
}

/// Factory for the second family: A2 paired with B2.
pub struct ConcreteFactory2;

impl AbstractFactory for ConcreteFactory2 {
    fn create_product_a(&self) -> Box<dyn ProductA> {
        Box::new(ConcreteProductA2)
    }

    fn create_product_b(&self) -> Box<dyn ProductB> {
        Box::new(ConcreteProductB2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Extracts the family digit a product reports in its output.
    fn family_of(text: &str) -> char {
        text.chars()
            .rev()
            .find(|c| c.is_ascii_digit())
            .expect("product output names its variant")
    }

    #[test]
    fn factories_pair_products_from_the_same_family() {
        let factories: [&dyn AbstractFactory; 2] = [&ConcreteFactory1, &ConcreteFactory2];
        for factory in factories {
            let a = factory.create_product_a();
            let b = factory.create_product_b();
            assert_eq!(
                family_of(&a.useful_function_a()),
                family_of(&b.useful_function_b()),
            );
        }
    }

    #[test]
    fn repeated_creation_yields_equal_behavior() {
        let first = ConcreteFactory1.create_product_a();
        let second = ConcreteFactory1.create_product_a();
        assert_eq!(first.useful_function_a(), second.useful_function_a());
    }
}
